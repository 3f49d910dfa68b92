use serde::Serialize;

/// One term of a total cost: transition `index` goes from note `index` to note `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionCost {
    pub index: usize,
    pub from_pitch: u8,
    pub to_pitch: u8,
    pub from_finger: usize,
    pub to_finger: usize,
    pub cost: f32,
}
