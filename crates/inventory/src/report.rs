//! Plain-text stock report.
//!
//! Water lines come first, then sugared lines. Each line ends with CRLF.
//! Records are bucketed by variant; empty slots are skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;

use bevstock_beverages::{BeverageInfo, BeverageRecord, MineralWater, SugaredBeverage};

use crate::error::InventoryError;
use crate::grid::InventoryGrid;

const LINE_END: &str = "\r\n";

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub water_lines: usize,
    pub sugared_lines: usize,
    pub bytes_written: usize,
}

struct RenderedReport {
    contents: String,
    water_lines: usize,
    sugared_lines: usize,
}

impl InventoryGrid {
    /// Render the report without touching the file system.
    pub fn render_report(&self) -> String {
        self.build_report().contents
    }

    /// Render the report and overwrite `path` with it.
    ///
    /// The file is created if missing and truncated otherwise. Parent
    /// directories are not created.
    pub fn export_report(&self, path: impl AsRef<Path>) -> Result<ExportSummary, InventoryError> {
        let path = path.as_ref();
        let report = self.build_report();

        if let Err(source) = std::fs::write(path, report.contents.as_bytes()) {
            tracing::error!(path = %path.display(), "failed to write report: {source}");
            return Err(InventoryError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        let summary = ExportSummary {
            path: path.to_path_buf(),
            water_lines: report.water_lines,
            sugared_lines: report.sugared_lines,
            bytes_written: report.contents.len(),
        };
        tracing::info!(
            path = %path.display(),
            water_lines = summary.water_lines,
            sugared_lines = summary.sugared_lines,
            "report exported"
        );
        Ok(summary)
    }

    fn build_report(&self) -> RenderedReport {
        let mut waters = String::new();
        let mut sugared = String::new();
        let mut water_lines = 0;
        let mut sugared_lines = 0;

        for (_, record) in self.slots() {
            match record {
                BeverageRecord::Water(w) => {
                    waters.push_str(&water_line(w));
                    water_lines += 1;
                }
                BeverageRecord::Sugared(s) => {
                    sugared.push_str(&sugared_line(s));
                    sugared_lines += 1;
                }
                BeverageRecord::Empty => {}
            }
        }

        waters.push_str(&sugared);
        RenderedReport {
            contents: waters,
            water_lines,
            sugared_lines,
        }
    }
}

fn common_fields(info: &BeverageInfo) -> String {
    format!(
        "ID: {}, Nombre: {}, Marca: {}, Precio: $ {}, Litros: {}",
        info.id(),
        info.name(),
        info.brand(),
        format_decimal(info.price()),
        format_decimal(info.volume_liters()),
    )
}

fn water_line(water: &MineralWater) -> String {
    format!(
        "{}, Origen : {}{LINE_END}",
        common_fields(water.info()),
        water.origin()
    )
}

fn sugared_line(drink: &SugaredBeverage) -> String {
    format!(
        "{}, Azúcar(%) : {}, Promoción: {}{LINE_END}",
        common_fields(drink.info()),
        format_decimal(drink.sugar_percent()),
        drink.has_promotion()
    )
}

/// Plain notation in `[1e-3, 1e7)`, `<mantissa>E<exp>` outside it. The
/// mantissa always carries a fractional digit (`900.0`, `1.0E7`).
fn format_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        if value.fract() == 0.0 {
            return format!("{value:.1}");
        }
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
