use crate::config::{ModelConfig, ModelKind};
use crate::core_types::Note;
use crate::error::{FfResult, FingerForgeError};
use crate::model::{CalibratedModel, CostMatrixModel, StandardModel};
use crate::scorer::CostAccumulator;
use tracing::info;

/// Builds the model selected by `config`. Calibration tables are loaded eagerly.
pub fn build_model(config: &ModelConfig) -> FfResult<Box<dyn CostMatrixModel>> {
    match config.model {
        ModelKind::Standard => Ok(Box::new(StandardModel::new())),
        ModelKind::Calibrated => {
            let dir = config.tables.as_deref().ok_or_else(|| {
                FingerForgeError::Config(
                    "The calibrated model needs a calibration table directory (--tables)"
                        .to_string(),
                )
            })?;
            info!("📂 Loading calibration tables: {}", dir);
            Ok(Box::new(CalibratedModel::from_dir(dir)?))
        }
    }
}

/// One-shot scoring of a single fingering. Searches should build a
/// [`CostAccumulator`] once and reuse it instead.
pub fn score_fingering(
    model: &dyn CostMatrixModel,
    notes: &[Note],
    fingering: &[usize],
) -> FfResult<f64> {
    CostAccumulator::new(model, notes)?.total_cost(fingering)
}
