use crate::consts::FINGER_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use strum_macros::{Display, EnumIter, EnumString};

/// A single note as handed over by the note extractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: u8,
    pub onset: f32,
}

impl Note {
    pub fn new(pitch: u8, onset: f32) -> Self {
        Self { pitch, onset }
    }
}

/// Display names for finger indices `0..FINGER_COUNT`.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Self::Thumb),
            1 => Some(Self::Index),
            2 => Some(Self::Middle),
            3 => Some(Self::Ring),
            4 => Some(Self::Pinky),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// `m[i][j]` is the cost of finger `i` on the earlier note and finger `j` on the later one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostMatrix(pub [[f32; FINGER_COUNT]; FINGER_COUNT]);

impl CostMatrix {
    pub fn from_fn<F: Fn(usize, usize) -> f32>(f: F) -> Self {
        let mut m = [[0.0; FINGER_COUNT]; FINGER_COUNT];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = f(i, j);
            }
        }
        Self(m)
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|i, j| self.0[j][i])
    }

    #[inline(always)]
    pub fn cost(&self, from: usize, to: usize) -> f32 {
        self.0[from][to]
    }

    pub fn rows(&self) -> &[[f32; FINGER_COUNT]; FINGER_COUNT] {
        &self.0
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f32;

    fn index(&self, (from, to): (usize, usize)) -> &f32 {
        &self.0[from][to]
    }
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            let cells: Vec<String> = row.iter().map(|c| format!("{:>6.2}", c)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
