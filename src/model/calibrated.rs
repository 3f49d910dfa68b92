use super::standard::StandardModel;
use super::tables::CalibrationTables;
use super::CostMatrixModel;
use crate::consts::MAX_CALIBRATED_FINGER_DISTANCE;
use crate::core_types::CostMatrix;
use crate::error::FfResult;
use crate::pitch::is_sharp;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::trace;

/// Interval class used to select a calibration table.
///
/// Renders as `"0"` for a repeated pitch and `"+<distance>[h]"` otherwise,
/// where `h` marks an interval with exactly one sharp endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKey {
    Unison,
    Step { finger_distance: u8, half: bool },
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unison => write!(f, "0"),
            Self::Step {
                finger_distance,
                half,
            } => write!(f, "+{}{}", finger_distance, if *half { "h" } else { "" }),
        }
    }
}

impl FromStr for TableKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Self::Unison);
        }
        let body = s
            .strip_prefix('+')
            .ok_or_else(|| format!("Table key '{}' must be '0' or start with '+'", s))?;
        let (digits, half) = match body.strip_suffix('h') {
            Some(d) => (d, true),
            None => (body, false),
        };
        if digits.len() != 1 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Table key '{}' needs a single-digit finger distance", s));
        }
        let finger_distance = digits.as_bytes()[0] - b'0';
        if finger_distance >= MAX_CALIBRATED_FINGER_DISTANCE {
            return Err(format!("Table key '{}' is beyond the calibrated range", s));
        }
        // Only the adjacent semitone lives in bucket 0.
        if finger_distance == 0 && !half {
            return Err(format!("Table key '{}' is not a valid interval", s));
        }
        Ok(Self::Step {
            finger_distance,
            half,
        })
    }
}

/// Derives the table key for an ascending pitch pair.
///
/// Returns `None` when the interval is too wide to have calibration data.
///
/// # Panics
/// Panics if `now > next`; callers canonicalize the order first.
pub fn table_name_for(now: u8, next: u8) -> Option<TableKey> {
    assert!(
        now <= next,
        "table_name_for requires an ascending pair, got {} > {}",
        now,
        next
    );

    if now == next {
        return Some(TableKey::Unison);
    }

    let distance = next - now;
    if distance == 1 {
        return Some(TableKey::Step {
            finger_distance: 0,
            half: true,
        });
    }

    // ceil((distance - 1) / 2)
    let finger_distance = distance / 2;
    if finger_distance >= MAX_CALIBRATED_FINGER_DISTANCE {
        return None;
    }

    let sharp_count = is_sharp(now) as u8 + is_sharp(next) as u8;
    Some(TableKey::Step {
        finger_distance,
        half: sharp_count % 2 == 1,
    })
}

/// Table-lookup model keyed by interval class, falling back to
/// [`StandardModel`] when no table covers the interval.
#[derive(Debug, Clone)]
pub struct CalibratedModel {
    tables: CalibrationTables,
    standard: StandardModel,
}

impl CalibratedModel {
    pub fn new(tables: CalibrationTables) -> Self {
        Self {
            tables,
            standard: StandardModel::new(),
        }
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> FfResult<Self> {
        Ok(Self::new(CalibrationTables::load_dir(dir)?))
    }

    pub fn tables(&self) -> &CalibrationTables {
        &self.tables
    }

    fn get_ascending(&self, now: u8, next: u8, delta_time: f32) -> CostMatrix {
        let key = match table_name_for(now, next) {
            Some(key) => key.to_string(),
            None => return self.standard.get(now, next, delta_time),
        };
        match self.tables.get(&key) {
            Some(table) => *table,
            None => {
                trace!("No calibration table '{}', falling back to standard", key);
                self.standard.get(now, next, delta_time)
            }
        }
    }
}

impl CostMatrixModel for CalibratedModel {
    fn get(&self, current: u8, next: u8, delta_time: f32) -> CostMatrix {
        if next < current {
            self.get_ascending(next, current, delta_time).transpose()
        } else {
            self.get_ascending(current, next, delta_time)
        }
    }

    fn name(&self) -> &str {
        "calibrated"
    }
}
