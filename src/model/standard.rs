use super::CostMatrixModel;
use crate::core_types::CostMatrix;

/// Closed-form model: cost is the mismatch between the interval (in whole-tone
/// steps, rounded away from zero) and the span between the two fingers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardModel;

impl StandardModel {
    pub fn new() -> Self {
        Self
    }

    /// Half the semitone interval, rounded away from zero. 64 - 60 -> 2, 67 - 64 -> 2, 60 - 67 -> -4.
    pub fn note_distance(current: u8, next: u8) -> i32 {
        let diff = next as i32 - current as i32;
        if diff > 0 {
            (diff + 1) / 2
        } else {
            -((1 - diff) / 2)
        }
    }
}

impl CostMatrixModel for StandardModel {
    fn get(&self, current: u8, next: u8, _delta_time: f32) -> CostMatrix {
        let note_distance = Self::note_distance(current, next);
        CostMatrix::from_fn(|start, end| {
            let finger_distance = end as i32 - start as i32;
            (note_distance - finger_distance).abs() as f32
        })
    }

    fn name(&self) -> &str {
        "standard"
    }
}
