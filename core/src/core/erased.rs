// core/src/core/erased.rs

//! Type-erased step storage.
//!
//! The public builder methods on `Pipeline` guarantee at compile time that
//! consecutive step types line up; at runtime every step operates on a
//! `Box<dyn Any + Send>` and trusts that contract. A downcast miss is still
//! reported (as `StepResult::Mismatch`) rather than trusted blindly, since it
//! would indicate a bug in the builder's type discipline.

use std::any::{type_name, Any};

use anyhow::Error as AnyhowError;

use super::operation::{Operation, OperationKind};

/// The dynamically typed value carried between steps during execution.
pub(crate) type Erased = Box<dyn Any + Send>;

/// Outcome of evaluating one erased step.
pub(crate) enum StepResult {
  /// The step accepted the value and produced the next carried value.
  Accepted(Erased),
  /// A filter step rejected the value.
  Rejected,
  /// A fallible step reported an error.
  Failed(AnyhowError),
  /// The carried value did not hold the input type the step declared.
  Mismatch { expected_type: &'static str },
}

/// Object-safe face of a step, uniform over all input/output types, so a
/// pipeline can hold steps of differing types in one `Vec`.
pub(crate) trait AnyOperation: Send + Sync {
  fn kind(&self) -> OperationKind;

  fn apply_erased(&self, value: Erased) -> StepResult;
}

/// Adapter giving a typed `Operation<T, R>` the erased `AnyOperation` face.
pub(crate) struct ErasedOperation<T, R> {
  operation: Operation<T, R>,
}

impl<T, R> ErasedOperation<T, R> {
  pub(crate) fn new(operation: Operation<T, R>) -> Self {
    Self { operation }
  }
}

impl<T, R> AnyOperation for ErasedOperation<T, R>
where
  T: Send + 'static,
  R: Send + 'static,
{
  fn kind(&self) -> OperationKind {
    self.operation.kind
  }

  fn apply_erased(&self, value: Erased) -> StepResult {
    let input = match value.downcast::<T>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        return StepResult::Mismatch {
          expected_type: type_name::<T>(),
        }
      }
    };

    match self.operation.evaluate(input) {
      Ok(Some(output)) => StepResult::Accepted(Box::new(output)),
      Ok(None) => StepResult::Rejected,
      Err(source) => StepResult::Failed(source),
    }
  }
}
