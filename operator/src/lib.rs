//! Provides API for building the OVN controller workload and related tooling.
#![warn(missing_docs)]

/// Error module for the workload builders.
mod error;
/// Labels module for identifying workload resources.
pub mod labels;
/// OvnController module for the OVN controller custom resource and its DaemonSet.
pub mod ovn_controller;

pub use error::Error;
