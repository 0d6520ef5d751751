// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Once;

use tracing::Level;
use valuestream::Pipeline;

static TRACING_INIT: Once = Once::new();

pub fn setup_tracing() {
  TRACING_INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_max_level(Level::DEBUG)
      .with_test_writer()
      .try_init();
  });
}

/// The canonical fixture: parse a string, keep values above 10, render back.
pub fn parse_pipeline() -> Pipeline<String, String> {
  Pipeline::input()
    .map_fallible(|raw: String| raw.parse::<i32>())
    .validate(|parsed| *parsed > 10)
    .map(|parsed| parsed.to_string())
}
