// core/examples/branching.rs

use tracing::info;
use valuestream::Pipeline;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Pipeline Branching Example ---");

  // A shared base: parse and reject non-positive numbers.
  let base = Pipeline::input()
    .map_fallible(|raw: String| raw.parse::<i64>())
    .validate(|n| *n > 0);

  // Two independent extensions. Appending never mutates the base, so both
  // branches share its prefix and the base itself stays usable.
  let square = base.map(|n| n * n);
  let cube = base.map(|n| n * n * n);

  let input = "5".to_string();
  info!(base = ?base.apply(input.clone()).into_option(), "base alone");
  info!(square = ?square.apply(input.clone()).into_option(), "squared");
  info!(cube = ?cube.apply(input).into_option(), "cubed");
}
