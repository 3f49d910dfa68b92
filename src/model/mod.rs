pub mod calibrated;
pub mod standard;
pub mod tables;

pub use self::calibrated::{table_name_for, CalibratedModel, TableKey};
pub use self::standard::StandardModel;
pub use self::tables::CalibrationTables;

use crate::core_types::CostMatrix;

/// Maps a pair of consecutive notes to a finger-pair cost matrix.
///
/// Implementations must be deterministic in their inputs so that callers can
/// precompute or cache results keyed by `(current, next, delta_time)`. There is
/// no ordering precondition on the two pitches.
///
/// `delta_time` (onset of `next` minus onset of `current`) is part of the
/// contract for models that weigh tempo. Neither bundled model reads it.
pub trait CostMatrixModel: Send + Sync {
    fn get(&self, current: u8, next: u8, delta_time: f32) -> CostMatrix;

    fn name(&self) -> &str;
}

impl<M: CostMatrixModel + ?Sized> CostMatrixModel for Box<M> {
    fn get(&self, current: u8, next: u8, delta_time: f32) -> CostMatrix {
        (**self).get(current, next, delta_time)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
