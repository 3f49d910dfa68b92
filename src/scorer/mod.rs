pub mod loader;
pub mod types;

pub use self::types::TransitionCost;
use crate::core_types::{CostMatrix, Note};
use crate::error::{FfResult, FingerForgeError};
use crate::model::CostMatrixModel;
use rayon::prelude::*;
use tracing::debug;

/// Precomputed transition matrices for a fixed note sequence.
///
/// Built once per sequence; `total_cost` is then called from the inner loop
/// of a fingering search without touching the model again.
#[derive(Debug, Clone)]
pub struct CostAccumulator {
    matrices: Vec<CostMatrix>,
    pitches: Vec<u8>,
    note_count: usize,
}

impl CostAccumulator {
    pub fn new<M: CostMatrixModel + ?Sized>(model: &M, notes: &[Note]) -> FfResult<Self> {
        if notes.len() < 2 {
            return Err(FingerForgeError::InsufficientNotes { count: notes.len() });
        }

        let matrices: Vec<CostMatrix> = notes
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                model.get(a.pitch, b.pitch, b.onset - a.onset)
            })
            .collect();

        debug!(
            "Precomputed {} transitions for {} notes using '{}' model",
            matrices.len(),
            notes.len(),
            model.name()
        );

        Ok(Self {
            matrices,
            pitches: notes.iter().map(|n| n.pitch).collect(),
            note_count: notes.len(),
        })
    }

    /// Sum of the transition costs of `fingering`, one finger index per note.
    ///
    /// Terms are summed in `f64` so long pieces do not drift.
    /// Finger indices are not range-checked; an index outside
    /// `0..FINGER_COUNT` panics.
    pub fn total_cost(&self, fingering: &[usize]) -> FfResult<f64> {
        self.check_len(fingering)?;
        Ok(self
            .matrices
            .iter()
            .zip(fingering.windows(2))
            .map(|(m, f)| m.cost(f[0], f[1]) as f64)
            .sum())
    }

    /// Evaluates many candidates in parallel. Results are in candidate order.
    pub fn total_costs<F: AsRef<[usize]> + Sync>(&self, candidates: &[F]) -> FfResult<Vec<f64>> {
        candidates
            .par_iter()
            .map(|c| self.total_cost(c.as_ref()))
            .collect()
    }

    /// Per-transition breakdown of `total_cost`.
    pub fn transition_costs(&self, fingering: &[usize]) -> FfResult<Vec<TransitionCost>> {
        self.check_len(fingering)?;
        Ok(self
            .matrices
            .iter()
            .enumerate()
            .map(|(i, m)| TransitionCost {
                index: i,
                from_pitch: self.pitches[i],
                to_pitch: self.pitches[i + 1],
                from_finger: fingering[i],
                to_finger: fingering[i + 1],
                cost: m.cost(fingering[i], fingering[i + 1]),
            })
            .collect())
    }

    pub fn matrices(&self) -> &[CostMatrix] {
        &self.matrices
    }

    pub fn note_count(&self) -> usize {
        self.note_count
    }

    pub fn transition_count(&self) -> usize {
        self.matrices.len()
    }

    fn check_len(&self, fingering: &[usize]) -> FfResult<()> {
        if fingering.len() != self.note_count {
            return Err(FingerForgeError::LengthMismatch {
                expected: self.note_count,
                actual: fingering.len(),
            });
        }
        Ok(())
    }
}
