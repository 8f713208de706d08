//! Timing harness for constant-time smoke tests
pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
