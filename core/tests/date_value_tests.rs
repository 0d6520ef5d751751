// tests/date_value_tests.rs
mod common;

use chrono::{Month, NaiveDate};
use common::setup_tracing;
use valuestream::DateValue;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn is_before_and_is_after_compare_against_the_reference() {
  setup_tracing();
  let reference = date(2024, 6, 1);

  assert!(DateValue::of(date(2024, 5, 17)).is_before(reference).is_present());
  assert!(DateValue::of(date(2024, 7, 2)).is_before(reference).is_empty());

  assert!(DateValue::of(date(2024, 7, 2)).is_after(reference).is_present());
  assert!(DateValue::of(date(2024, 5, 17)).is_after(reference).is_empty());

  // Equal dates are neither before nor after.
  assert!(DateValue::of(reference).is_before(reference).is_empty());
  assert!(DateValue::of(reference).is_after(reference).is_empty());
}

#[test]
fn calendar_component_predicates() {
  setup_tracing();
  let value = DateValue::of(date(2024, 5, 17));

  assert!(value.clone().in_year(2024).is_present());
  assert!(value.clone().in_year(2023).is_empty());

  assert!(value.clone().in_month(Month::May).is_present());
  assert!(value.clone().in_month(Month::June).is_empty());

  assert!(value.clone().on_day(17).is_present());
  assert!(value.on_day(18).is_empty());
}

#[test]
fn emptiness_absorbs_through_date_predicates() {
  setup_tracing();
  let value = DateValue::empty()
    .in_year(2024)
    .in_month(Month::May)
    .on_day(17)
    .map(|d| d.succ_opt().unwrap());

  assert!(value.is_empty());
}

#[test]
fn map_cast_bridges_into_the_generic_wrapper() {
  setup_tracing();
  let year = DateValue::of(date(2024, 5, 17))
    .in_month(Month::May)
    .map_cast(|d| d.format("%Y").to_string());

  assert_eq!(year.into_option(), Some("2024".to_string()));
}
