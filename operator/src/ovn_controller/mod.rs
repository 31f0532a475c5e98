//! OvnController is the k8s custom resource that deploys OVN and Open vSwitch on data plane
//! nodes.

// Export all spec types
mod spec;
pub use spec::*;

pub mod config;
pub mod daemon_set;
pub mod render;
pub mod volumes;

pub use config::{OvnControllerConfig, TlsConfig};
pub use daemon_set::daemon_set;
pub use render::render;

// A list of constants used in various K8s resources.
//
// Only values that span multiple resources, or that other tooling needs to agree on, get a
// constant. Paths used by a single container stay inline.

/// Name of the DaemonSet and the service id used for its TLS material.
pub const SERVICE_NAME_OVN_CONTROLLER: &str = "ovn-controller";

/// Location of the OVN database client certificate.
pub const OVN_DB_CERT_PATH: &str = "/etc/pki/tls/certs/ovndb.crt";
/// Location of the OVN database client private key.
pub const OVN_DB_KEY_PATH: &str = "/etc/pki/tls/private/ovndb.key";
/// Location of the CA that issued the OVN database certificates.
pub const OVN_DB_CA_CERT_PATH: &str = "/etc/pki/tls/certs/ovndbca.crt";

/// Environment variable carrying the content hash of dependent configuration.
pub const CONFIG_HASH_ENV: &str = "CONFIG_HASH";
