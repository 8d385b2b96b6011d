//! Top-level wish map assembly

/// Composer, assembly result and progress hooks
pub mod assembler;

pub use assembler::{AssemblyProgress, CancelFlag, CellOutcome, Composer, WishMap};
