//! Liveness check module
//!
//! HTTP liveness checking and outcome classification

pub mod checker;
pub mod result;

// Re-export the main types
pub use checker::{HttpChecker, LivenessChecker};
pub use result::{CheckResult, CheckStatus};
