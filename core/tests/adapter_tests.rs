// tests/adapter_tests.rs
mod common;

use common::{parse_pipeline, setup_tracing};
use valuestream::{Pipeline, Value};

#[test]
fn apply_iter_preserves_count_and_order() {
  setup_tracing();
  let pipeline = parse_pipeline();
  let inputs = vec!["12".to_string(), "b".to_string(), "20".to_string()];

  let results: Vec<Value<String>> = pipeline.apply_iter(inputs).collect();

  assert_eq!(results.len(), 3);
  assert_eq!(results[0].get(), Some(&"12".to_string()));
  assert!(results[1].is_empty());
  assert_eq!(results[2].get(), Some(&"20".to_string()));
}

#[test]
fn apply_iter_filtered_yields_only_present_payloads_in_order() {
  setup_tracing();
  let pipeline = parse_pipeline();
  let inputs = vec!["12".to_string(), "b".to_string(), "20".to_string()];

  let payloads: Vec<String> = pipeline.apply_iter_filtered(inputs).collect();

  assert_eq!(payloads, vec!["12".to_string(), "20".to_string()]);
}

#[test]
fn apply_iter_is_lazy_over_unbounded_inputs() {
  setup_tracing();
  let pipeline = Pipeline::input()
    .validate(|n: &u64| n % 2 == 0)
    .map(|n: u64| n.to_string());

  // An infinite input iterator: only laziness lets this terminate.
  let results: Vec<Value<String>> = pipeline.apply_iter(0u64..).take(10).collect();
  assert_eq!(results.len(), 10);

  let evens: Vec<String> = pipeline.apply_iter_filtered(0u64..).take(5).collect();
  assert_eq!(evens, vec!["0", "2", "4", "6", "8"]);
}

#[test]
fn cross_input_independence() {
  setup_tracing();
  let pipeline = parse_pipeline();

  // A failing input must not disturb its neighbors.
  let inputs = vec!["99".to_string(), "nope".to_string(), "99".to_string()];
  let results: Vec<Value<String>> = pipeline.apply_iter(inputs).collect();

  assert_eq!(results[0], results[2]);
  assert!(results[1].is_empty());
}

#[tokio::test]
async fn apply_async_resolves_to_the_synchronous_result() {
  setup_tracing();
  let pipeline = parse_pipeline();

  let deferred = pipeline.apply_async("12".to_string()).await;
  assert_eq!(deferred, pipeline.apply("12".to_string()));

  let deferred = pipeline.apply_async("a".to_string()).await;
  assert!(deferred.is_empty());
}
