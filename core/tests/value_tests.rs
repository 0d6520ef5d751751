// tests/value_tests.rs
mod common;

use common::setup_tracing;
use valuestream::Value;

#[test]
fn validate_keeps_payload_when_predicate_accepts() {
  setup_tracing();
  let value = Value::of(42).validate(|n| *n > 10);

  assert!(value.is_present());
  assert_eq!(value.into_option(), Some(42));
}

#[test]
fn validate_collapses_to_empty_when_predicate_rejects() {
  setup_tracing();
  let value = Value::of(5).validate(|n| *n > 10);

  assert!(value.is_empty());
  assert_eq!(value.into_option(), None);
}

#[test]
fn map_transforms_present_payload() {
  setup_tracing();
  let value = Value::of(21).map(|n| n * 2);

  assert_eq!(value.get(), Some(&42));
}

#[test]
fn map_preserves_emptiness() {
  setup_tracing();
  let value = Value::<i32>::empty().map(|n| n * 2);

  assert!(value.is_empty());
}

#[test]
fn emptiness_absorbs_all_further_derivations() {
  setup_tracing();
  let value = Value::of("hello")
    .validate(|s| s.len() > 100) // collapses here
    .map(|s| s.to_uppercase())
    .validate(|_| true)
    .is_equal_to(&"HELLO".to_string());

  assert!(value.is_empty());
}

#[test]
fn map_fallible_swallows_errors_into_empty() {
  setup_tracing();
  let value = Value::of("not-a-number".to_string()).map_fallible(|raw| raw.parse::<i32>());
  assert!(value.is_empty());

  let value = Value::of("42".to_string()).map_fallible(|raw| raw.parse::<i32>());
  assert_eq!(value.into_option(), Some(42));
}

#[test]
fn validate_fallible_treats_errors_as_rejection() {
  setup_tracing();
  let value = Value::of(7).validate_fallible(|_| -> Result<bool, std::io::Error> {
    Err(std::io::Error::other("cannot judge this"))
  });
  assert!(value.is_empty());

  let value = Value::of(7).validate_fallible(|n| Ok::<_, std::io::Error>(*n == 7));
  assert!(value.is_present());
}

#[test]
fn is_equal_to_matches_only_the_reference() {
  setup_tracing();
  assert!(Value::of("abc").is_equal_to(&"abc").is_present());
  assert!(Value::of("abc").is_equal_to(&"xyz").is_empty());
  assert!(Value::<&str>::empty().is_equal_to(&"abc").is_empty());
}

#[test]
fn fixed_argument_map_matches_closure_capture() {
  setup_tracing();
  let via_map2 = Value::of(10).map2(|n, offset| n + offset, 5);
  let via_capture = Value::of(10).map(|n| n + 5);
  assert_eq!(via_map2, via_capture);

  let via_map3 = Value::of(2).map3(|n, a, b| n * a + b, 3, 4);
  assert_eq!(via_map3.into_option(), Some(10));

  let via_map6 = Value::of(1).map6(|n, a, b, c, d, e| n + a + b + c + d + e, 2, 3, 4, 5, 6);
  assert_eq!(via_map6.into_option(), Some(21));
}

#[test]
fn option_conversions_round_trip() {
  setup_tracing();
  let value: Value<i32> = Some(3).into();
  assert!(value.is_present());

  let option: Option<i32> = value.into();
  assert_eq!(option, Some(3));

  let value: Value<i32> = None.into();
  assert!(value.is_empty());
  assert_eq!(Value::<i32>::default(), Value::empty());
}
