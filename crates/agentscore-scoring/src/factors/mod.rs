//! Individual score factors. Each is a pure function of plain numbers.

pub mod base;
pub mod confidence;
pub mod momentum;
