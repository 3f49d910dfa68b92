pub mod score;
pub mod tables;
