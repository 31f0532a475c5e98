/// Errors produced while building workload specs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stack configuration is inconsistent, i.e. conflicting TLS fields.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// The content hash of the configuration could not be computed.
    #[error("Config hash error: {source}")]
    ConfigHash {
        /// Underlying serialization failure.
        #[from]
        source: anyhow::Error,
    },
}
