use crate::consts::SHARP_PITCH_CLASSES;

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Conventional note name with octave, e.g. 60 -> "C4", 61 -> "C#4", 21 -> "A0".
pub fn note_name(pitch: u8) -> String {
    let class = (pitch % 12) as usize;
    let octave = pitch as i32 / 12 - 1;
    format!("{}{}", PITCH_NAMES[class], octave)
}

/// True when the conventional name of `pitch` is spelled with a sharp.
#[inline]
pub fn is_sharp(pitch: u8) -> bool {
    SHARP_PITCH_CLASSES.contains(&(pitch % 12))
}
