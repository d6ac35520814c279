//! Driver trait definitions for Raconteur model backends.
//!
//! Backends implement [`VisionDriver`] to expose text generation from a
//! prompt plus an image. The pipeline holds a driver behind `Arc<dyn
//! VisionDriver>`, so test doubles and alternative providers plug in without
//! touching the orchestration code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Vision, VisionDriver};
