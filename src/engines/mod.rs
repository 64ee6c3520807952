//! Engine implementations.
//!
//! Each engine lives in its own module and implements the
//! [`TranscriptionEngine`](crate::TranscriptionEngine) trait. Benchmark code
//! only ever sees the trait; everything model-specific stays in here.

pub mod whisper_cpp;
