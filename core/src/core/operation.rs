// core/src/core/operation.rs

//! Defines `Operation<T, R>`, a single typed pipeline step.
//!
//! Every step, whatever its kind, evaluates to the same uniform form:
//! `Ok(Some(output))` for acceptance, `Ok(None)` for rejection, `Err(_)` for a
//! failure raised by a fallible underlying closure. The execution loop treats
//! rejection and failure identically (both short-circuit the run), so the
//! distinction exists only for diagnostics.

use std::fmt;
use std::sync::Arc;

use anyhow::Error as AnyhowError;

/// The kind of work a step performs.
///
/// The fallible/checked flag is orthogonal to the kind: `map_fallible` still
/// produces a `Map` step, `filter_fallible` a `Filter` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
  /// Pass the value through unchanged.
  Identity,
  /// Transform the value into a (possibly differently typed) output.
  Map,
  /// Accept or reject the value; the output type equals the input type.
  Filter,
}

impl fmt::Display for OperationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OperationKind::Identity => f.write_str("identity"),
      OperationKind::Map => f.write_str("map"),
      OperationKind::Filter => f.write_str("filter"),
    }
  }
}

// Uniform evaluation closure shared by every step constructor.
// Arc so operations clone cheaply into several pipelines.
pub(crate) type StepFn<T, R> = Arc<dyn Fn(T) -> Result<Option<R>, AnyhowError> + Send + Sync>;

/// A single immutable pipeline step over a declared input type `T` and output
/// type `R`.
///
/// Operations are built through the associated functions below and consumed by
/// [`Pipeline::chain`](crate::Pipeline::chain) or
/// [`Pipeline::input_with`](crate::Pipeline::input_with). An operation is owned
/// by the step lists that hold it and never references a pipeline back.
pub struct Operation<T, R> {
  pub(crate) kind: OperationKind,
  pub(crate) run: StepFn<T, R>,
}

impl<T, R> Clone for Operation<T, R> {
  fn clone(&self) -> Self {
    Operation {
      kind: self.kind,
      run: Arc::clone(&self.run),
    }
  }
}

impl<T, R> fmt::Debug for Operation<T, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Operation")
      .field("kind", &self.kind)
      .field("input", &std::any::type_name::<T>())
      .field("output", &std::any::type_name::<R>())
      .finish()
  }
}

impl<T: 'static> Operation<T, T> {
  /// The pass-through step; every freshly rooted pipeline starts with one.
  pub fn identity() -> Self {
    Operation {
      kind: OperationKind::Identity,
      run: Arc::new(|value| Ok(Some(value))),
    }
  }

  /// An accept-or-reject step. Rejection short-circuits the run.
  pub fn filter(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
    Operation {
      kind: OperationKind::Filter,
      run: Arc::new(move |value| Ok(predicate(&value).then_some(value))),
    }
  }

  /// An accept-or-reject step whose predicate may fail. An `Err` from the
  /// predicate signals step failure instead of propagating.
  pub fn filter_fallible<E>(predicate: impl Fn(&T) -> Result<bool, E> + Send + Sync + 'static) -> Self
  where
    E: Into<AnyhowError>,
  {
    Operation {
      kind: OperationKind::Filter,
      run: Arc::new(move |value| match predicate(&value) {
        Ok(true) => Ok(Some(value)),
        Ok(false) => Ok(None),
        Err(source) => Err(source.into()),
      }),
    }
  }
}

impl<T: 'static, R: 'static> Operation<T, R> {
  /// A transform step.
  pub fn map(mapper: impl Fn(T) -> R + Send + Sync + 'static) -> Self {
    Operation {
      kind: OperationKind::Map,
      run: Arc::new(move |value| Ok(Some(mapper(value)))),
    }
  }

  /// A transform step whose mapper may fail. An `Err` from the mapper signals
  /// step failure instead of propagating.
  pub fn map_fallible<E>(mapper: impl Fn(T) -> Result<R, E> + Send + Sync + 'static) -> Self
  where
    E: Into<AnyhowError>,
  {
    Operation {
      kind: OperationKind::Map,
      run: Arc::new(move |value| mapper(value).map(Some).map_err(Into::into)),
    }
  }

  pub fn kind(&self) -> OperationKind {
    self.kind
  }

  pub(crate) fn evaluate(&self, value: T) -> Result<Option<R>, AnyhowError> {
    (self.run)(value)
  }
}
