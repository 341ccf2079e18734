//! Property tests for the outline engine.

mod engine;
