//! Simulation utilities, program loading, and state reporting.
//!
//! Provides the loader for textual program images, the final state
//! reporter, and the [`Simulator`] wrapper that ties them to the CPU.

/// Program image loader.
pub mod loader;

/// Final state reporter.
pub mod report;

/// Top-level simulator wrapper.
pub mod simulator;

pub use self::simulator::Simulator;
