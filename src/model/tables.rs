use super::calibrated::TableKey;
use crate::consts::FINGER_COUNT;
use crate::core_types::CostMatrix;
use crate::error::{FfResult, FingerForgeError};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Immutable store of calibration tables, keyed by table name (`"0"`, `"+0h"`, `"+3h"`, ...).
#[derive(Debug, Clone, Default)]
pub struct CalibrationTables {
    tables: HashMap<String, CostMatrix>,
}

impl CalibrationTables {
    pub fn new(tables: HashMap<String, CostMatrix>) -> Self {
        Self { tables }
    }

    /// Loads every regular file in `dir`. The file stem is the table key.
    ///
    /// Fails on the first unreadable or malformed file; a partially loaded
    /// store is never returned.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> FfResult<Self> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut tables = HashMap::new();
        for path in paths {
            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| {
                    FingerForgeError::Validation(format!("Unusable table file name: {:?}", path))
                })?
                .to_string();

            if key.parse::<TableKey>().is_err() {
                warn!("Table '{}' does not match any interval key and will never be selected", key);
            }

            let matrix = load_table(&key, File::open(&path)?)?;
            debug!("Loaded calibration table '{}' from {:?}", key, path);

            if tables.insert(key.clone(), matrix).is_some() {
                return Err(FingerForgeError::Validation(format!(
                    "Duplicate calibration table '{}' in {:?}",
                    key, dir
                )));
            }
        }

        info!("📚 Loaded {} calibration tables from {:?}", tables.len(), dir);
        Ok(Self { tables })
    }

    pub fn get(&self, key: &str) -> Option<&CostMatrix> {
        self.tables.get(key)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl FromIterator<(String, CostMatrix)> for CalibrationTables {
    fn from_iter<I: IntoIterator<Item = (String, CostMatrix)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// Parses one headerless `FINGER_COUNT × FINGER_COUNT` grid.
pub fn load_table<R: Read>(key: &str, reader: R) -> FfResult<CostMatrix> {
    let malformed = |reason: String| FingerForgeError::MalformedTable {
        key: key.to_string(),
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut grid = [[0.0f32; FINGER_COUNT]; FINGER_COUNT];
    let mut row_count = 0;

    for result in rdr.records() {
        let rec = result?;
        if row_count >= FINGER_COUNT {
            return Err(malformed(format!("more than {} rows", FINGER_COUNT)));
        }
        if rec.len() != FINGER_COUNT {
            return Err(malformed(format!(
                "row {} has {} columns, expected {}",
                row_count + 1,
                rec.len(),
                FINGER_COUNT
            )));
        }
        for (col, field) in rec.iter().enumerate() {
            let val: f32 = field.parse().map_err(|_| {
                malformed(format!(
                    "row {} column {}: '{}' is not a number",
                    row_count + 1,
                    col + 1,
                    field
                ))
            })?;
            if !val.is_finite() {
                return Err(malformed(format!(
                    "row {} column {}: non-finite value",
                    row_count + 1,
                    col + 1
                )));
            }
            grid[row_count][col] = val;
        }
        row_count += 1;
    }

    if row_count != FINGER_COUNT {
        return Err(malformed(format!(
            "{} rows, expected {}",
            row_count, FINGER_COUNT
        )));
    }

    Ok(CostMatrix(grid))
}
