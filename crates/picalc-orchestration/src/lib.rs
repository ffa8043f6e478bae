//! # picalc-orchestration
//!
//! Worker pool execution, the single-shot `compute_pi` operation, and the
//! increasing-precision stream.

pub mod interfaces;
pub mod orchestrator;
pub mod pool;
pub mod stream;

pub use interfaces::{ComputationReport, NullPresenter, ResultPresenter};
pub use orchestrator::{compute_pi, run_computation};
pub use stream::PiStream;
