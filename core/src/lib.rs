// src/lib.rs

//! valuestream: a typed, persistent value/pipeline composition library.
//!
//! valuestream lets you assemble a chain of heterogeneous operations
//! (pipelines) with features like:
//!  - A possibly-empty `Value<T>` wrapper with absence-absorbing
//!    validation and mapping derivations.
//!  - Strongly-typed `chain`/`map`/`validate` builders over a type-erased,
//!    structure-sharing step list.
//!  - Persistent extension: appending a step yields a new pipeline and
//!    leaves the original valid and reusable for branching.
//!  - Short-circuiting execution that collapses the first step failure
//!    (rejection, error, or panic) into an empty result.
//!  - Fallible step variants that swallow errors raised by the underlying
//!    closure instead of propagating them.
//!  - Lazy batch and deferred single-shot adapters over `apply`.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod value;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::operation::{Operation, OperationKind};

// The main Pipeline struct; builders live in definition, apply in execution.
pub use crate::pipeline::definition::Pipeline;

// The value wrappers produced by pipeline execution and usable standalone.
pub use crate::value::date::DateValue;
pub use crate::value::Value;

pub use crate::error::PipelineError;

/*
    Core Workflow:
    1. Root a chain with `Pipeline::input()` (identity first step) or
       `Pipeline::input_with(operation)` (transforming first step).
    2. Extend it with `.map()`, `.validate()`, their `_fallible`
       counterparts, `.chain()` for a prebuilt `Operation`, or the
       `.chain2()`..`.chain6()` fixed-argument conveniences.
       Every extension returns a NEW pipeline; the receiver stays usable.
    3. Evaluate one input with `.apply(input)`, which returns a
       `Value<O>`: present if every step accepted, empty if any step
       rejected, errored, or panicked.
    4. For many inputs, `.apply_iter()` maps the pipeline lazily over an
       iterator; `.apply_iter_filtered()` additionally unwraps the present
       results. `.apply_async()` defers one `apply` onto the caller's
       executor.
*/
