/// Number of fingers modeled per hand. Cost matrices are `FINGER_COUNT × FINGER_COUNT`.
pub const FINGER_COUNT: usize = 5;

/// Highest pitch accepted from note files (MIDI numbering).
pub const MAX_PITCH: u8 = 127;

/// Pitch classes whose conventional name carries a sharp (C#, D#, F#, G#, A#).
pub const SHARP_PITCH_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// Finger distances at or beyond this bucket have no calibration data.
pub const MAX_CALIBRATED_FINGER_DISTANCE: u8 = 5;
