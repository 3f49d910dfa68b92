#![allow(dead_code)]

use fingerforge::core_types::{CostMatrix, Note};
use fingerforge::model::CalibrationTables;
use std::fs;
use std::path::Path;

/// Every key the calibration grammar can produce.
pub const ALL_KEYS: [&str; 10] = ["0", "+0h", "+1", "+1h", "+2", "+2h", "+3", "+3h", "+4", "+4h"];

/// Asymmetric grid unique to `seed`, so a lookup can be traced back to its table.
pub fn marked_matrix(seed: usize) -> CostMatrix {
    CostMatrix::from_fn(|i, j| (seed * 100 + i * 10 + j) as f32)
}

pub fn synthetic_tables() -> CalibrationTables {
    ALL_KEYS
        .iter()
        .enumerate()
        .map(|(seed, key)| (key.to_string(), marked_matrix(seed + 1)))
        .collect()
}

pub fn matrix_csv(m: &CostMatrix) -> String {
    m.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `synthetic_tables()` into `dir`, one `<key>.csv` per table.
pub fn write_table_dir(dir: &Path) {
    for (seed, key) in ALL_KEYS.iter().enumerate() {
        let path = dir.join(format!("{}.csv", key));
        fs::write(path, matrix_csv(&marked_matrix(seed + 1))).unwrap();
    }
}

pub fn notes(pitches: &[u8]) -> Vec<Note> {
    pitches
        .iter()
        .enumerate()
        .map(|(i, &p)| Note::new(p, i as f32 * 0.5))
        .collect()
}
