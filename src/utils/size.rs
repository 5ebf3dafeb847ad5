use serde::{Deserialize, Serialize};

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Unit for expressing a size limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizeUnit {
    #[default]
    Bytes,
    KB,
    MB,
    GB,
    TB,
}

impl SizeUnit {
    fn multiplier(self) -> u64 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::KB => 1024,
            SizeUnit::MB => 1024 * 1024,
            SizeUnit::GB => 1024 * 1024 * 1024,
            SizeUnit::TB => 1024 * 1024 * 1024 * 1024,
        }
    }
}

/// Convert a size expressed in `unit` to bytes (base 1024)
pub fn convert_to_bytes(size: u64, unit: SizeUnit) -> u64 {
    size.saturating_mul(unit.multiplier())
}

/// Format a byte count for display, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are scaled by 1024 up to TB and rounded to two decimals, with
/// trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
