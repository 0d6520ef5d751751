// core/src/pipeline/definition.rs

//! Contains the `Pipeline<I, O>` struct definition and the builder methods
//! for its construction and extension.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use anyhow::Error as AnyhowError;

use crate::core::erased::{AnyOperation, ErasedOperation};
use crate::core::operation::Operation;

/// The core pipeline type: an ordered, type-heterogeneous sequence of unary
/// steps with declared overall input type `I` and output type `O`.
///
/// Step 1 consumes `I`, each step's output type equals the next step's input
/// type, and the final step's output type is `O`. That compatibility is
/// enforced entirely by the builder signatures below; internally the steps are
/// stored type-erased and the execution loop is intentionally untyped.
///
/// Pipelines are immutable and persistent: every extension method takes
/// `&self` and returns a NEW pipeline whose step list is the previous list
/// plus one entry (the unchanged prefix shares its step objects via `Arc`).
/// The receiver stays valid and independently reusable, so a base pipeline
/// can be branched into several extensions without re-specifying shared steps.
///
/// `I` and `O` must be `Send + 'static` so values can cross the erased
/// `Box<dyn Any + Send>` boundary during execution.
pub struct Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  /// Ordered, type-erased step list. Never empty: a freshly rooted pipeline
  /// holds exactly one identity step.
  pub(crate) steps: Vec<Arc<dyn AnyOperation>>,

  pub(crate) _types: PhantomData<fn(I) -> O>,
}

impl<I, O> Clone for Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  fn clone(&self) -> Self {
    Pipeline {
      steps: self.steps.clone(),
      _types: PhantomData,
    }
  }
}

impl<I, O> fmt::Debug for Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline")
      .field("input", &std::any::type_name::<I>())
      .field("output", &std::any::type_name::<O>())
      .field(
        "steps",
        &self.steps.iter().map(|step| step.kind()).collect::<Vec<_>>(),
      )
      .finish()
  }
}

impl<T> Pipeline<T, T>
where
  T: Send + 'static,
{
  /// Creates a one-step pipeline whose single step is the identity
  /// pass-through. Used as the root of a chain when the first real step will
  /// be appended.
  ///
  /// The input type is usually inferred from the first extension:
  /// `Pipeline::input().map(|s: String| ...)`.
  pub fn input() -> Self {
    Pipeline {
      steps: vec![Arc::new(ErasedOperation::new(Operation::<T, T>::identity()))],
      _types: PhantomData,
    }
  }
}

impl<I, O> Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  /// Creates a one-step pipeline from a caller-supplied operation — used to
  /// start a pipeline that already transforms on entry.
  pub fn input_with(operation: Operation<I, O>) -> Self {
    Pipeline {
      steps: vec![Arc::new(ErasedOperation::new(operation))],
      _types: PhantomData,
    }
  }

  /// Returns a new pipeline whose step list is this pipeline's steps plus the
  /// given operation. The new pipeline's declared output type becomes the
  /// operation's output type; the receiver is left untouched.
  pub fn chain<R>(&self, operation: Operation<O, R>) -> Pipeline<I, R>
  where
    R: Send + 'static,
  {
    let mut steps = self.steps.clone();
    steps.push(Arc::new(ErasedOperation::new(operation)));
    Pipeline {
      steps,
      _types: PhantomData,
    }
  }

  /// `chain` with a map step wrapping `mapper`.
  pub fn map<R>(&self, mapper: impl Fn(O) -> R + Send + Sync + 'static) -> Pipeline<I, R>
  where
    R: Send + 'static,
  {
    self.chain(Operation::map(mapper))
  }

  /// `chain` with a filter step wrapping `predicate`; the output type is
  /// unchanged. A rejected value short-circuits the run.
  pub fn validate(&self, predicate: impl Fn(&O) -> bool + Send + Sync + 'static) -> Pipeline<I, O> {
    self.chain(Operation::filter(predicate))
  }

  /// Fallible counterpart of [`map`](Self::map): an `Err` from `mapper` is
  /// swallowed and signals step failure instead of propagating out of
  /// `apply`.
  pub fn map_fallible<R, E>(
    &self,
    mapper: impl Fn(O) -> Result<R, E> + Send + Sync + 'static,
  ) -> Pipeline<I, R>
  where
    R: Send + 'static,
    E: Into<AnyhowError>,
  {
    self.chain(Operation::map_fallible(mapper))
  }

  /// Fallible counterpart of [`validate`](Self::validate): an `Err` from
  /// `predicate` is swallowed and signals step failure instead of
  /// propagating.
  pub fn validate_fallible<E>(
    &self,
    predicate: impl Fn(&O) -> Result<bool, E> + Send + Sync + 'static,
  ) -> Pipeline<I, O>
  where
    E: Into<AnyhowError>,
  {
    self.chain(Operation::filter_fallible(predicate))
  }

  /// Number of steps in this pipeline, the leading identity/entry step
  /// included. Always at least 1.
  pub fn step_count(&self) -> usize {
    self.steps.len()
  }
}

// --- Fixed-argument chain conveniences ---
//
// Builder sugar only: each closes the extra arguments over a unary map step at
// build time, so `chain2(f, a)` behaves exactly as `map(move |v| f(v, a))`.
// The arguments must be Clone because the resulting step may run many times.
impl<I, O> Pipeline<I, O>
where
  I: Send + 'static,
  O: Send + 'static,
{
  pub fn chain2<A2, R>(
    &self,
    mapper: impl Fn(O, A2) -> R + Send + Sync + 'static,
    arg2: A2,
  ) -> Pipeline<I, R>
  where
    A2: Clone + Send + Sync + 'static,
    R: Send + 'static,
  {
    self.map(move |value| mapper(value, arg2.clone()))
  }

  pub fn chain3<A2, A3, R>(
    &self,
    mapper: impl Fn(O, A2, A3) -> R + Send + Sync + 'static,
    arg2: A2,
    arg3: A3,
  ) -> Pipeline<I, R>
  where
    A2: Clone + Send + Sync + 'static,
    A3: Clone + Send + Sync + 'static,
    R: Send + 'static,
  {
    self.map(move |value| mapper(value, arg2.clone(), arg3.clone()))
  }

  pub fn chain4<A2, A3, A4, R>(
    &self,
    mapper: impl Fn(O, A2, A3, A4) -> R + Send + Sync + 'static,
    arg2: A2,
    arg3: A3,
    arg4: A4,
  ) -> Pipeline<I, R>
  where
    A2: Clone + Send + Sync + 'static,
    A3: Clone + Send + Sync + 'static,
    A4: Clone + Send + Sync + 'static,
    R: Send + 'static,
  {
    self.map(move |value| mapper(value, arg2.clone(), arg3.clone(), arg4.clone()))
  }

  pub fn chain5<A2, A3, A4, A5, R>(
    &self,
    mapper: impl Fn(O, A2, A3, A4, A5) -> R + Send + Sync + 'static,
    arg2: A2,
    arg3: A3,
    arg4: A4,
    arg5: A5,
  ) -> Pipeline<I, R>
  where
    A2: Clone + Send + Sync + 'static,
    A3: Clone + Send + Sync + 'static,
    A4: Clone + Send + Sync + 'static,
    A5: Clone + Send + Sync + 'static,
    R: Send + 'static,
  {
    self.map(move |value| mapper(value, arg2.clone(), arg3.clone(), arg4.clone(), arg5.clone()))
  }

  pub fn chain6<A2, A3, A4, A5, A6, R>(
    &self,
    mapper: impl Fn(O, A2, A3, A4, A5, A6) -> R + Send + Sync + 'static,
    arg2: A2,
    arg3: A3,
    arg4: A4,
    arg5: A5,
    arg6: A6,
  ) -> Pipeline<I, R>
  where
    A2: Clone + Send + Sync + 'static,
    A3: Clone + Send + Sync + 'static,
    A4: Clone + Send + Sync + 'static,
    A5: Clone + Send + Sync + 'static,
    A6: Clone + Send + Sync + 'static,
    R: Send + 'static,
  {
    self.map(move |value| {
      mapper(
        value,
        arg2.clone(),
        arg3.clone(),
        arg4.clone(),
        arg5.clone(),
        arg6.clone(),
      )
    })
  }
}
