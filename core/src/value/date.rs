// core/src/value/date.rs

//! `DateValue`: a date-specialized wrapper whose domain predicates are layered
//! purely on top of [`Value::validate`]. No new mechanism.

use chrono::{Datelike, Month, NaiveDate};

use super::Value;

/// A possibly-empty date wrapper with calendar predicates. Emptiness is
/// absorbing, exactly as for the generic [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateValue(Value<NaiveDate>);

impl DateValue {
  pub fn of(date: NaiveDate) -> Self {
    DateValue(Value::of(date))
  }

  pub fn empty() -> Self {
    DateValue(Value::empty())
  }

  pub fn is_present(&self) -> bool {
    self.0.is_present()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self) -> Option<&NaiveDate> {
    self.0.get()
  }

  pub fn into_option(self) -> Option<NaiveDate> {
    self.0.into_option()
  }

  /// Applies a predicate to the date; a present date the predicate rejects
  /// becomes empty.
  pub fn validate(self, predicate: impl FnOnce(&NaiveDate) -> bool) -> Self {
    DateValue(self.0.validate(predicate))
  }

  /// Applies a date-to-date mapper, staying inside the date wrapper.
  pub fn map(self, mapper: impl FnOnce(NaiveDate) -> NaiveDate) -> Self {
    DateValue(self.0.map(mapper))
  }

  /// Escapes into the generic wrapper with a mapper to an arbitrary type.
  pub fn map_cast<T>(self, mapper: impl FnOnce(NaiveDate) -> T) -> Value<T> {
    self.0.map(mapper)
  }

  pub fn is_before(self, target: NaiveDate) -> Self {
    self.validate(|date| *date < target)
  }

  pub fn is_after(self, target: NaiveDate) -> Self {
    self.validate(|date| *date > target)
  }

  pub fn in_year(self, year: i32) -> Self {
    self.validate(|date| date.year() == year)
  }

  pub fn in_month(self, month: Month) -> Self {
    self.validate(|date| date.month() == month.number_from_month())
  }

  pub fn on_day(self, day: u32) -> Self {
    self.validate(|date| date.day() == day)
  }
}

impl From<NaiveDate> for DateValue {
  fn from(date: NaiveDate) -> Self {
    DateValue::of(date)
  }
}

impl From<Option<NaiveDate>> for DateValue {
  fn from(option: Option<NaiveDate>) -> Self {
    DateValue(Value::from(option))
  }
}
