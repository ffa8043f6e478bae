//! Workspace-level integration tests for PiCalc-rs.
//!
//! See `tests/` for the golden-value and engine-integration suites.
