//! Provides Kubernetes helpers shared by the operator and its tooling.
#![deny(missing_docs)]
pub mod env;
pub mod hash;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod tls;
