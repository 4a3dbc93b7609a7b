//! Built-in demo shelf (4 rows × 3 columns).

use bevstock_beverages::BeverageRecord;
use bevstock_inventory::InventoryGrid;

use crate::layout::{BeverageFields, LayoutError, ShelfLayout, SlotEntry};

fn sugared(
    id: &str,
    name: &str,
    price: f64,
    brand: &str,
    sugar_percent: f64,
    has_promotion: bool,
) -> SlotEntry {
    SlotEntry::Sugared {
        fields: BeverageFields {
            id: id.to_string(),
            name: name.to_string(),
            volume_liters: 0.7,
            price,
            brand: brand.to_string(),
        },
        sugar_percent,
        has_promotion,
    }
}

fn water(
    id: &str,
    name: &str,
    volume_liters: f64,
    price: f64,
    brand: &str,
    origin: &str,
) -> SlotEntry {
    SlotEntry::Water {
        fields: BeverageFields {
            id: id.to_string(),
            name: name.to_string(),
            volume_liters,
            price,
            brand: brand.to_string(),
        },
        origin: origin.to_string(),
    }
}

/// Demo shelf layout: sodas in the first columns, waters on the right.
pub fn sample_layout() -> ShelfLayout {
    use SlotEntry::Empty;

    ShelfLayout {
        rows: vec![
            vec![
                sugared("GC001", "CocaCola", 1000.0, "CocaCola", 0.10, false),
                Empty,
                water("AM001", "Manantial", 1.0, 2000.0, "AguaClara", "Manantial"),
            ],
            vec![
                sugared("GC002", "Sprite", 2000.0, "CocaCola", 0.5, true),
                sugared("GP002", "Colombiana", 2000.0, "Postobon", 0.30, false),
                Empty,
            ],
            vec![
                sugared("GC003", "Fanta", 3000.0, "CocaCola", 0.8, true),
                Empty,
                water("AR003", "Brisa", 1500.0, 2500.0, "Agua&Agua", "Reserva"),
            ],
            vec![
                Empty,
                sugared("GP004", "Uva", 4000.0, "Postobon", 0.25, false),
                water("AO004", "Oasis", 1200.0, 3000.0, "Oasis", "Oasis"),
            ],
        ],
        insertion_scope: Default::default(),
    }
}

pub fn sample_shelf() -> Result<InventoryGrid, LayoutError> {
    sample_layout().into_grid()
}

/// Stock offered to the shelf after the initial queries.
///
/// `AR003` is already on the shelf and gets rejected.
pub fn restock_entries() -> Vec<SlotEntry> {
    vec![
        water("AR003", "Brisa", 1500.0, 2500.0, "Agua&Agua", "Reserva"),
        water("AR002", "Cristal", 2500.0, 2000.0, "AguaClara", "Reserva"),
    ]
}

/// Records for [`restock_entries`].
pub fn restock_records() -> Result<Vec<BeverageRecord>, LayoutError> {
    restock_entries()
        .into_iter()
        .enumerate()
        .map(|(column, entry)| {
            entry
                .into_record()
                .map_err(|source| LayoutError::Beverage { row: 0, column, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_shelf_totals() {
        let grid = sample_shelf().unwrap();
        assert_eq!((grid.rows(), grid.columns()), (4, 3));
        assert_eq!(grid.occupied_count(), 8);
        // Sprite and Fanta carry the promotion: 1800 + 2700.
        assert_eq!(grid.total_value(), 19000.0);
        assert_eq!(grid.total_value_by_brand("CocaCola"), 5500.0);
        assert_eq!(grid.total_value_by_column(1).unwrap(), 6000.0);
    }

    #[test]
    fn restock_records_are_valid() {
        let records = restock_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "AR003");
    }
}
