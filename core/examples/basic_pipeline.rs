// core/examples/basic_pipeline.rs

use tracing::info;
use valuestream::Pipeline;

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Pipeline Example ---");

  // Parse a string, keep values above 10, render the survivor back out.
  // Each builder call returns a NEW pipeline; the final binding holds the
  // whole chain.
  let pipeline = Pipeline::input()
    .map_fallible(|raw: String| raw.parse::<i32>())
    .validate(|parsed| *parsed > 10)
    .map(|parsed| format!("accepted: {parsed}"));

  for input in ["12", "a", "5"] {
    let result = pipeline.apply(input.to_string());
    match result.into_option() {
      Some(output) => info!(input, %output, "present"),
      None => info!(input, "empty (parse or validation failure)"),
    }
  }

  // Batch form: lazy, order preserving, one result per input.
  let survivors: Vec<String> =
    pipeline.apply_iter_filtered(["30", "7", "nope", "99"].map(String::from)).collect();
  info!(?survivors, "filtered batch");
}
