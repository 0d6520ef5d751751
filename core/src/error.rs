// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::core::operation::OperationKind;

/// Diagnostic description of why a pipeline run collapsed to an empty result.
///
/// These values are never returned from [`Pipeline::apply`](crate::Pipeline::apply):
/// data failures fold into an empty `Value` and the caller observes only
/// present/absent. The execution loop builds a `PipelineError` so it can log a
/// structured cause before discarding it.
#[derive(Debug, Error)]
pub enum PipelineError {
  /// A filter/validate step rejected the carried value.
  #[error("step {index} ({kind}) rejected the value")]
  Rejected { index: usize, kind: OperationKind },

  /// A fallible step reported an error while evaluating.
  #[error("step {index} ({kind}) failed: {source}")]
  StepFailure {
    index: usize,
    kind: OperationKind,
    #[source]
    source: AnyhowError,
  },

  /// A step panicked while evaluating. The panic is contained by `apply`.
  #[error("a step panicked while evaluating")]
  Panicked,

  /// The erased carried value did not hold the type a step declared.
  /// This indicates a bug in the builder's type discipline, not a data failure.
  #[error("type mismatch at step {index}: expected {expected_type}")]
  TypeMismatch {
    index: usize,
    expected_type: &'static str,
  },
}
