//! Core domain types.

pub mod grouping;
pub mod matrix;
pub mod returns;

pub use grouping::Grouping;
pub use matrix::{CorrelationMatrix, DistanceMatrix};
pub use returns::ReturnSeries;
