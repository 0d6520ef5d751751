// core/src/value/mod.rs

//! `Value<T>`: a possibly-empty single-value wrapper with validation and
//! mapping derivations.
//!
//! A `Value` is either present with exactly one payload or empty, and
//! emptiness is absorbing: once a derivation collapses a value to empty,
//! every further derivation stays empty. Each derivation consumes the
//! receiver and returns a fresh instance — nothing is mutated in place.

pub mod date;

use anyhow::Error as AnyhowError;
use tracing::{event, Level};

/// A generic value wrapper which provides basic validation and mapping
/// functionality. Used both as the result of
/// [`Pipeline::apply`](crate::Pipeline::apply) and standalone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T>(Option<T>);

impl<T> Value<T> {
  /// Wraps a present payload.
  pub fn of(value: T) -> Self {
    Value(Some(value))
  }

  /// The empty marker of type `T`.
  pub fn empty() -> Self {
    Value(None)
  }

  pub fn is_present(&self) -> bool {
    self.0.is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_none()
  }

  /// Borrows the payload, or `None` if empty.
  pub fn get(&self) -> Option<&T> {
    self.0.as_ref()
  }

  /// Unwraps into the payload, or `None` if empty.
  pub fn into_option(self) -> Option<T> {
    self.0
  }

  /// Applies a predicate to the payload; a present value whose payload the
  /// predicate rejects becomes empty. Empty stays empty.
  pub fn validate(self, predicate: impl FnOnce(&T) -> bool) -> Value<T> {
    match self.0 {
      Some(value) if predicate(&value) => Value::of(value),
      _ => Value::empty(),
    }
  }

  /// Like [`validate`](Self::validate), but the predicate may fail; an `Err`
  /// is treated as rejection (empty), never propagated.
  pub fn validate_fallible<E>(self, predicate: impl FnOnce(&T) -> Result<bool, E>) -> Value<T>
  where
    E: Into<AnyhowError>,
  {
    match self.0 {
      Some(value) => match predicate(&value) {
        Ok(true) => Value::of(value),
        Ok(false) => Value::empty(),
        Err(source) => {
          let source: AnyhowError = source.into();
          event!(Level::DEBUG, error = %source, "Predicate failed; collapsing to empty.");
          Value::empty()
        }
      },
      None => Value::empty(),
    }
  }

  /// Applies a mapper to the payload, producing a fresh `Value` of the target
  /// type. Empty maps to empty.
  pub fn map<R>(self, mapper: impl FnOnce(T) -> R) -> Value<R> {
    Value(self.0.map(mapper))
  }

  /// Like [`map`](Self::map), but the mapper may fail; an `Err` is converted
  /// to an empty result rather than propagated.
  pub fn map_fallible<R, E>(self, mapper: impl FnOnce(T) -> Result<R, E>) -> Value<R>
  where
    E: Into<AnyhowError>,
  {
    match self.0 {
      Some(value) => match mapper(value) {
        Ok(mapped) => Value::of(mapped),
        Err(source) => {
          let source: AnyhowError = source.into();
          event!(Level::DEBUG, error = %source, "Mapper failed; collapsing to empty.");
          Value::empty()
        }
      },
      None => Value::empty(),
    }
  }

  /// The value-stream equivalent of equality: `validate` with an equality
  /// predicate against the supplied reference.
  pub fn is_equal_to(self, reference: &T) -> Value<T>
  where
    T: PartialEq,
  {
    self.validate(|value| value == reference)
  }
}

// --- Fixed-argument map conveniences ---
//
// `map2(f, a)` behaves exactly as `map(|v| f(v, a))`; the extra arguments are
// consumed (each derivation runs at most once).
impl<T> Value<T> {
  pub fn map2<A2, R>(self, mapper: impl FnOnce(T, A2) -> R, arg2: A2) -> Value<R> {
    self.map(|value| mapper(value, arg2))
  }

  pub fn map3<A2, A3, R>(self, mapper: impl FnOnce(T, A2, A3) -> R, arg2: A2, arg3: A3) -> Value<R> {
    self.map(|value| mapper(value, arg2, arg3))
  }

  pub fn map4<A2, A3, A4, R>(
    self,
    mapper: impl FnOnce(T, A2, A3, A4) -> R,
    arg2: A2,
    arg3: A3,
    arg4: A4,
  ) -> Value<R> {
    self.map(|value| mapper(value, arg2, arg3, arg4))
  }

  pub fn map5<A2, A3, A4, A5, R>(
    self,
    mapper: impl FnOnce(T, A2, A3, A4, A5) -> R,
    arg2: A2,
    arg3: A3,
    arg4: A4,
    arg5: A5,
  ) -> Value<R> {
    self.map(|value| mapper(value, arg2, arg3, arg4, arg5))
  }

  pub fn map6<A2, A3, A4, A5, A6, R>(
    self,
    mapper: impl FnOnce(T, A2, A3, A4, A5, A6) -> R,
    arg2: A2,
    arg3: A3,
    arg4: A4,
    arg5: A5,
    arg6: A6,
  ) -> Value<R> {
    self.map(|value| mapper(value, arg2, arg3, arg4, arg5, arg6))
  }
}

impl<T> Default for Value<T> {
  fn default() -> Self {
    Value::empty()
  }
}

impl<T> From<Option<T>> for Value<T> {
  fn from(option: Option<T>) -> Self {
    Value(option)
  }
}

impl<T> From<Value<T>> for Option<T> {
  fn from(value: Value<T>) -> Self {
    value.0
  }
}
