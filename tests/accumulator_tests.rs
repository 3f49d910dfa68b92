mod common;

use common::{notes, synthetic_tables};
use fingerforge::core_types::{CostMatrix, Note};
use fingerforge::model::CalibrationTables;
use fingerforge::error::FingerForgeError;
use fingerforge::model::{CalibratedModel, CostMatrixModel, StandardModel};
use fingerforge::scorer::CostAccumulator;

fn scale_notes() -> Vec<Note> {
    vec![
        Note::new(60, 0.0),
        Note::new(64, 0.5),
        Note::new(67, 1.0),
    ]
}

#[test]
fn test_c_major_arpeggio_costs_nothing_with_spread_fingers() {
    let acc = CostAccumulator::new(&StandardModel::new(), &scale_notes()).unwrap();
    assert_eq!(acc.transition_count(), 2);
    assert_eq!(acc.note_count(), 3);
    assert_eq!(acc.total_cost(&[0, 2, 4]).unwrap(), 0.0);
}

#[test]
fn test_total_cost_is_sum_of_transitions() {
    let model = CalibratedModel::new(synthetic_tables());
    let seq = notes(&[60, 63, 63]);
    let acc = CostAccumulator::new(&model, &seq).unwrap();

    let m0 = model.get(60, 63, 0.5);
    let m1 = model.get(63, 63, 0.5);
    for (a, b, c) in [(0, 1, 2), (4, 0, 3), (2, 2, 2)] {
        let expected = m0[(a, b)] as f64 + m1[(b, c)] as f64;
        assert_eq!(acc.total_cost(&[a, b, c]).unwrap(), expected);
    }
}

#[test]
fn test_matrices_are_precomputed_in_note_order() {
    let model = StandardModel::new();
    let seq = notes(&[60, 72, 48, 50]);
    let acc = CostAccumulator::new(&model, &seq).unwrap();

    let expected: Vec<_> = seq
        .windows(2)
        .map(|w| model.get(w[0].pitch, w[1].pitch, w[1].onset - w[0].onset))
        .collect();
    assert_eq!(acc.matrices(), expected.as_slice());
}

#[test]
fn test_rejects_fewer_than_two_notes() {
    let model = StandardModel::new();
    for seq in [vec![], vec![Note::new(60, 0.0)]] {
        match CostAccumulator::new(&model, &seq) {
            Err(FingerForgeError::InsufficientNotes { count }) => assert_eq!(count, seq.len()),
            other => panic!("expected InsufficientNotes, got {:?}", other),
        }
    }
}

#[test]
fn test_rejects_fingering_length_mismatch() {
    let acc = CostAccumulator::new(&StandardModel::new(), &scale_notes()).unwrap();

    for bad in [vec![0, 2], vec![0, 2, 4, 1], vec![]] {
        match acc.total_cost(&bad) {
            Err(FingerForgeError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, bad.len());
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }
    assert!(acc.transition_costs(&[1]).is_err());
}

#[test]
fn test_repeated_calls_are_stable() {
    let acc = CostAccumulator::new(&StandardModel::new(), &notes(&[60, 62, 64, 65, 67])).unwrap();
    let first = acc.total_cost(&[0, 1, 2, 3, 4]).unwrap();
    for _ in 0..10 {
        assert_eq!(acc.total_cost(&[0, 1, 2, 3, 4]).unwrap(), first);
    }
}

#[test]
fn test_transition_breakdown_matches_total() {
    let acc = CostAccumulator::new(&StandardModel::new(), &notes(&[60, 67, 62, 62])).unwrap();
    let fingering = [0, 4, 1, 3];
    let breakdown = acc.transition_costs(&fingering).unwrap();

    assert_eq!(breakdown.len(), 3);
    assert_eq!(breakdown[1].from_pitch, 67);
    assert_eq!(breakdown[1].to_pitch, 62);
    assert_eq!(breakdown[1].from_finger, 4);
    assert_eq!(breakdown[1].to_finger, 1);

    let sum: f64 = breakdown.iter().map(|t| t.cost as f64).sum();
    assert_eq!(sum, acc.total_cost(&fingering).unwrap());
}

#[test]
fn test_batch_matches_sequential() {
    let acc = CostAccumulator::new(&StandardModel::new(), &notes(&[60, 64, 67, 72])).unwrap();
    let candidates = vec![
        vec![0, 1, 2, 3],
        vec![0, 2, 3, 4],
        vec![4, 3, 2, 1],
        vec![1, 1, 1, 1],
    ];
    let batch = acc.total_costs(&candidates).unwrap();
    let sequential: Vec<f64> = candidates
        .iter()
        .map(|c| acc.total_cost(c).unwrap())
        .collect();
    assert_eq!(batch, sequential);

    let with_bad = vec![vec![0, 1, 2, 3], vec![0, 1]];
    assert!(acc.total_costs(&with_bad).is_err());
}

#[test]
fn test_boxed_model_is_accepted() {
    let model: Box<dyn CostMatrixModel> = Box::new(CalibratedModel::new(synthetic_tables()));
    let acc = CostAccumulator::new(&model, &notes(&[60, 62])).unwrap();
    assert_eq!(acc.matrices()[0], model.get(60, 62, 0.5));
}

#[test]
fn test_accumulator_is_shareable_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let acc = Arc::new(
        CostAccumulator::new(&StandardModel::new(), &notes(&[60, 64, 67])).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let acc = Arc::clone(&acc);
            thread::spawn(move || acc.total_cost(&[0, 2, 4]).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 0.0);
    }
}

#[test]
fn test_long_sequence_total_does_not_drift() {
    let tables: CalibrationTables = [("0".to_string(), CostMatrix::from_fn(|_, _| 0.1))]
        .into_iter()
        .collect();
    let model = CalibratedModel::new(tables);
    let seq: Vec<Note> = (0..100_001).map(|i| Note::new(60, i as f32)).collect();
    let acc = CostAccumulator::new(&model, &seq).unwrap();

    let total = acc.total_cost(&vec![1; seq.len()]).unwrap();
    let exact = 100_000.0 * 0.1f32 as f64;
    assert!((total - exact).abs() < 1e-6, "total {} vs {}", total, exact);
}
