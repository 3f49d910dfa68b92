use crate::consts::{FINGER_COUNT, MAX_PITCH};
use crate::core_types::Note;
use crate::error::{FfResult, FingerForgeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads `pitch,onset` rows. A first row with no numeric field is taken as a header.
pub fn load_notes<R: Read>(reader: R) -> FfResult<Vec<Note>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut notes = Vec::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 {
            return Err(FingerForgeError::Validation(format!(
                "Note row {} needs 'pitch,onset'",
                row_idx + 1
            )));
        }

        // A header row has no numeric field at all.
        if row_idx == 0 && rec[0].parse::<f64>().is_err() && rec[1].parse::<f64>().is_err() {
            continue;
        }

        let pitch = rec[0].parse::<u8>();
        let onset = rec[1].parse::<f32>();
        let (pitch, onset) = match (pitch, onset) {
            (Ok(p), Ok(o)) => (p, o),
            _ => {
                return Err(FingerForgeError::Validation(format!(
                    "Note row {}: cannot parse '{},{}'",
                    row_idx + 1,
                    &rec[0],
                    &rec[1]
                )))
            }
        };

        if pitch > MAX_PITCH {
            return Err(FingerForgeError::Validation(format!(
                "Note row {}: pitch {} is outside 0..={}",
                row_idx + 1,
                pitch,
                MAX_PITCH
            )));
        }
        if !onset.is_finite() {
            return Err(FingerForgeError::Validation(format!(
                "Note row {}: onset is not finite",
                row_idx + 1
            )));
        }

        notes.push(Note::new(pitch, onset));
    }

    debug!("Loaded {} notes", notes.len());
    Ok(notes)
}

pub fn load_notes_from_file<P: AsRef<Path>>(path: P) -> FfResult<Vec<Note>> {
    load_notes(File::open(path)?)
}

/// Parses `"0,2,4"` into finger indices, rejecting anything outside `0..FINGER_COUNT`.
pub fn parse_fingering(s: &str) -> FfResult<Vec<usize>> {
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            let finger: usize = tok.parse().map_err(|_| {
                FingerForgeError::Validation(format!("'{}' is not a finger index", tok))
            })?;
            if finger >= FINGER_COUNT {
                return Err(FingerForgeError::Validation(format!(
                    "Finger {} is outside 0..{}",
                    finger, FINGER_COUNT
                )));
            }
            Ok(finger)
        })
        .collect()
}
