//! De-identification core
//!
//! This module contains the span-resolution and text-rewriting engine:
//! the span model, the merger that resolves overlapping candidates from
//! the two producers, the renderer that rewrites text against the resolved
//! sequence, and the pipeline tying them together.
//!
//! # Architecture
//!
//! ```text
//! RuleDetector ──┐
//!                ├─> merge_spans ──> render ──> DeidResult
//! NerDetector ───┘
//! ```
//!
//! The merger and renderer are pure functions; the pipeline owns the
//! producers and exposes the single entry point consumed by presentation
//! layers.

pub mod merger;
pub mod pipeline;
pub mod renderer;
pub mod report;
pub mod span;

// Re-export main types
pub use merger::merge_spans;
pub use pipeline::{DeidPipeline, DeidResult};
pub use renderer::{render, Strategy};
pub use report::DetectionReport;
pub use span::{PhiSpan, SpanSource};
