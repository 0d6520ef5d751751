// core/src/pipeline/execution.rs

//! Contains `Pipeline::apply`, responsible for feeding one input through the
//! step list, plus the lazy batch and deferred single-shot adapters over it.

use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};

use tracing::{event, span, Level};

use crate::core::erased::{Erased, StepResult};
use crate::error::PipelineError;
use crate::pipeline::definition::Pipeline;
use crate::value::Value;

impl<I, O> Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  /// Runs `input` through the ordered step list and returns a present
  /// `Value<O>` if every step accepted, or an empty `Value<O>` if any step
  /// rejected the carried value, reported an error, or panicked.
  ///
  /// Evaluation is strictly sequential and short-circuits at the first
  /// failing step: no later step observes the value, side-effecting steps
  /// included. `apply` never panics or errors for caller-supplied functional
  /// failures; the swallowed causes are emitted as `tracing` events.
  ///
  /// No state is shared or mutated across calls: the pipeline itself is never
  /// touched by `apply`, so repeated and concurrent invocations are safe.
  pub fn apply(&self, input: I) -> Value<O> {
    let apply_span = span!(
      Level::DEBUG,
      "pipeline_apply",
      input_type = type_name::<I>(),
      output_type = type_name::<O>(),
      num_steps = self.steps.len(),
    );
    let _span_guard = apply_span.enter();

    // A panic escaping an infallible step is the moral equivalent of a
    // fallible step's Err: contain it and collapse the run to empty.
    match panic::catch_unwind(AssertUnwindSafe(|| self.apply_inner(input))) {
      Ok(result) => result,
      Err(_) => {
        event!(Level::DEBUG, cause = %PipelineError::Panicked, "Run collapsed to empty.");
        Value::empty()
      }
    }
  }

  fn apply_inner(&self, input: I) -> Value<O> {
    let mut carried: Erased = Box::new(input);

    for (index, step) in self.steps.iter().enumerate() {
      match step.apply_erased(carried) {
        StepResult::Accepted(next) => carried = next,
        StepResult::Rejected => {
          let cause = PipelineError::Rejected {
            index,
            kind: step.kind(),
          };
          event!(Level::DEBUG, %cause, "Short-circuiting run.");
          return Value::empty();
        }
        StepResult::Failed(source) => {
          let cause = PipelineError::StepFailure {
            index,
            kind: step.kind(),
            source,
          };
          event!(Level::DEBUG, %cause, "Short-circuiting run.");
          return Value::empty();
        }
        StepResult::Mismatch { expected_type } => {
          // Unreachable through the public builders; collapse rather than
          // panic so apply keeps its never-throws contract.
          let cause = PipelineError::TypeMismatch {
            index,
            expected_type,
          };
          event!(Level::ERROR, %cause, "Builder type discipline violated.");
          return Value::empty();
        }
      }
    }

    match carried.downcast::<O>() {
      Ok(output) => Value::of(*output),
      Err(_) => {
        event!(
          Level::ERROR,
          expected_type = type_name::<O>(),
          "Final carried value has the wrong type."
        );
        Value::empty()
      }
    }
  }

  /// Applies the pipeline to each input independently, yielding one
  /// `Value<O>` per input in the same order.
  ///
  /// The returned iterator is lazy — nothing runs until it is advanced — so
  /// it composes with unbounded input iterators.
  pub fn apply_iter<'a, It>(&'a self, inputs: It) -> impl Iterator<Item = Value<O>> + 'a
  where
    It: IntoIterator<Item = I>,
    It::IntoIter: 'a,
  {
    inputs.into_iter().map(move |input| self.apply(input))
  }

  /// Like [`apply_iter`](Self::apply_iter), but yields only the present
  /// results' payloads, order preserving. May yield fewer items than inputs.
  pub fn apply_iter_filtered<'a, It>(&'a self, inputs: It) -> impl Iterator<Item = O> + 'a
  where
    It: IntoIterator<Item = I>,
    It::IntoIter: 'a,
  {
    self.apply_iter(inputs).filter_map(Value::into_option)
  }

  /// Defers exactly one synchronous [`apply`](Self::apply) call onto the
  /// caller's executor and exposes its eventual result. No batching, and no
  /// cancellation or timeout beyond what the host runtime offers.
  pub async fn apply_async(&self, input: I) -> Value<O> {
    self.apply(input)
  }
}
