// core/src/core/mod.rs

pub(crate) mod erased;
pub mod operation;

pub use operation::{Operation, OperationKind};
