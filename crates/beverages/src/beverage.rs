use serde::Serialize;

use bevstock_core::{BeverageId, DomainError, DomainResult, EMPTY_SLOT_ID};

/// Fraction taken off a sugared beverage's price when it is created with an
/// active promotion.
pub const PROMOTION_DISCOUNT: f64 = 0.10;

/// Fields shared by every stocked beverage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeverageInfo {
    id: BeverageId,
    name: String,
    volume_liters: f64,
    price: f64,
    brand: String,
}

impl BeverageInfo {
    pub fn new(
        id: BeverageId,
        name: impl Into<String>,
        volume_liters: f64,
        price: f64,
        brand: impl Into<String>,
    ) -> DomainResult<Self> {
        ensure_non_negative("volume_liters", volume_liters)?;
        ensure_non_negative("price", price)?;
        Ok(Self {
            id,
            name: name.into(),
            volume_liters,
            price,
            brand: brand.into(),
        })
    }

    pub fn id(&self) -> &BeverageId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn volume_liters(&self) -> f64 {
        self.volume_liters
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn set_volume_liters(&mut self, volume_liters: f64) -> DomainResult<()> {
        ensure_non_negative("volume_liters", volume_liters)?;
        self.volume_liters = volume_liters;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        ensure_non_negative("price", price)?;
        self.price = price;
        Ok(())
    }
}

/// Soft drink with sugar content and an optional launch promotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SugaredBeverage {
    #[serde(flatten)]
    info: BeverageInfo,
    sugar_percent: f64,
    has_promotion: bool,
}

impl SugaredBeverage {
    /// Create a sugared beverage.
    ///
    /// With `has_promotion`, the stored price is reduced by
    /// [`PROMOTION_DISCOUNT`] here and only here.
    pub fn new(
        mut info: BeverageInfo,
        sugar_percent: f64,
        has_promotion: bool,
    ) -> DomainResult<Self> {
        ensure_percent(sugar_percent)?;
        if has_promotion {
            info.price -= info.price * PROMOTION_DISCOUNT;
        }
        Ok(Self {
            info,
            sugar_percent,
            has_promotion,
        })
    }

    pub fn info(&self) -> &BeverageInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut BeverageInfo {
        &mut self.info
    }

    pub fn sugar_percent(&self) -> f64 {
        self.sugar_percent
    }

    pub fn has_promotion(&self) -> bool {
        self.has_promotion
    }

    pub fn set_sugar_percent(&mut self, sugar_percent: f64) -> DomainResult<()> {
        ensure_percent(sugar_percent)?;
        self.sugar_percent = sugar_percent;
        Ok(())
    }

    /// Flip the promotion flag. The stored price is left as is.
    pub fn set_has_promotion(&mut self, has_promotion: bool) {
        self.has_promotion = has_promotion;
    }
}

/// Bottled mineral water.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MineralWater {
    #[serde(flatten)]
    info: BeverageInfo,
    origin: String,
}

impl MineralWater {
    pub fn new(info: BeverageInfo, origin: impl Into<String>) -> Self {
        Self {
            info,
            origin: origin.into(),
        }
    }

    pub fn info(&self) -> &BeverageInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut BeverageInfo {
        &mut self.info
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }
}

/// Variant tag of a [`BeverageRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageKind {
    Sugared,
    Water,
    Empty,
}

impl core::fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            BeverageKind::Sugared => "sugared",
            BeverageKind::Water => "water",
            BeverageKind::Empty => "empty",
        };
        f.write_str(s)
    }
}

/// Content of one shelf slot.
///
/// `Empty` is the only way to represent an unoccupied slot. A cleared slot and
/// a slot that was never filled look the same.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BeverageRecord {
    Sugared(SugaredBeverage),
    Water(MineralWater),
    #[default]
    Empty,
}

impl BeverageRecord {
    pub fn kind(&self) -> BeverageKind {
        match self {
            BeverageRecord::Sugared(_) => BeverageKind::Sugared,
            BeverageRecord::Water(_) => BeverageKind::Water,
            BeverageRecord::Empty => BeverageKind::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BeverageRecord::Empty)
    }

    /// Common fields, or `None` for an empty slot.
    pub fn info(&self) -> Option<&BeverageInfo> {
        match self {
            BeverageRecord::Sugared(b) => Some(b.info()),
            BeverageRecord::Water(w) => Some(w.info()),
            BeverageRecord::Empty => None,
        }
    }

    pub fn info_mut(&mut self) -> Option<&mut BeverageInfo> {
        match self {
            BeverageRecord::Sugared(b) => Some(b.info_mut()),
            BeverageRecord::Water(w) => Some(w.info_mut()),
            BeverageRecord::Empty => None,
        }
    }

    /// Slot identifier; [`EMPTY_SLOT_ID`] for an empty slot.
    pub fn id(&self) -> &str {
        self.info()
            .map(|info| info.id().as_str())
            .unwrap_or(EMPTY_SLOT_ID)
    }

    /// Price of the slot content; empty slots are worth nothing.
    pub fn price(&self) -> f64 {
        self.info().map(BeverageInfo::price).unwrap_or(0.0)
    }

    pub fn volume_liters(&self) -> f64 {
        self.info().map(BeverageInfo::volume_liters).unwrap_or(0.0)
    }

    pub fn name(&self) -> Option<&str> {
        self.info().map(BeverageInfo::name)
    }

    pub fn brand(&self) -> Option<&str> {
        self.info().map(BeverageInfo::brand)
    }
}

impl From<SugaredBeverage> for BeverageRecord {
    fn from(value: SugaredBeverage) -> Self {
        BeverageRecord::Sugared(value)
    }
}

impl From<MineralWater> for BeverageRecord {
    fn from(value: MineralWater) -> Self {
        BeverageRecord::Water(value)
    }
}

fn ensure_non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(())
}

fn ensure_percent(value: f64) -> DomainResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::validation(format!(
            "sugar_percent must be within [0, 100] (got {value})"
        )));
    }
    Ok(())
}
