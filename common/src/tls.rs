//! Volumes and mounts that expose TLS material from secrets to containers.
use k8s_openapi::api::core::v1::{SecretVolumeSource, Volume, VolumeMount};

/// Name of the volume carrying the combined CA bundle.
pub const CA_BUNDLE_VOLUME_NAME: &str = "combined-ca-bundle";
/// Key of the CA bundle inside its secret.
pub const CA_BUNDLE_KEY: &str = "tls-ca-bundle.pem";
/// Default location of the CA bundle inside a container.
pub const DEFAULT_CA_BUNDLE_MOUNT: &str = "/etc/pki/ca-trust/extracted/pem/tls-ca-bundle.pem";

/// Key of the certificate inside a service TLS secret.
pub const CERT_KEY: &str = "tls.crt";
/// Key of the private key inside a service TLS secret.
pub const PRIVATE_KEY_KEY: &str = "tls.key";
/// Key of the issuing CA inside a service TLS secret.
pub const CA_CERT_KEY: &str = "ca.crt";

/// A secret holding a CA bundle to trust.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaBundle {
    /// Name of the secret.
    pub secret_name: String,
}

impl CaBundle {
    /// Create a CA bundle descriptor for the named secret.
    pub fn new(secret_name: impl Into<String>) -> Self {
        Self {
            secret_name: secret_name.into(),
        }
    }

    /// Volume projecting the CA bundle secret.
    pub fn volume(&self) -> Volume {
        Volume {
            name: CA_BUNDLE_VOLUME_NAME.to_owned(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(self.secret_name.to_owned()),
                default_mode: Some(0o444),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Mounts for the CA bundle, at `mount` or the default system trust location.
    pub fn volume_mounts(&self, mount: Option<&str>) -> Vec<VolumeMount> {
        vec![VolumeMount {
            name: CA_BUNDLE_VOLUME_NAME.to_owned(),
            mount_path: mount.unwrap_or(DEFAULT_CA_BUNDLE_MOUNT).to_owned(),
            sub_path: Some(CA_BUNDLE_KEY.to_owned()),
            read_only: Some(true),
            ..Default::default()
        }]
    }
}

/// A secret holding the certificate, key and CA of a single service.
///
/// Unset mount paths fall back to `/var/lib/config-data/tls/...` locations derived from the
/// service id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceTls {
    /// Name of the secret.
    pub secret_name: String,
    /// Where the certificate is mounted.
    pub cert_mount: Option<String>,
    /// Where the private key is mounted.
    pub key_mount: Option<String>,
    /// Where the CA certificate is mounted.
    pub ca_mount: Option<String>,
}

impl ServiceTls {
    /// Name of the volume for a service id.
    pub fn volume_name(service_id: &str) -> String {
        format!("{service_id}-tls-certs")
    }

    /// Volume projecting the service secret.
    pub fn volume(&self, service_id: &str) -> Volume {
        Volume {
            name: Self::volume_name(service_id),
            secret: Some(SecretVolumeSource {
                secret_name: Some(self.secret_name.to_owned()),
                default_mode: Some(0o400),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Read only mounts of the certificate, key and CA.
    pub fn volume_mounts(&self, service_id: &str) -> Vec<VolumeMount> {
        let cert_mount = self
            .cert_mount
            .to_owned()
            .unwrap_or_else(|| format!("/var/lib/config-data/tls/certs/{service_id}.crt"));
        let key_mount = self
            .key_mount
            .to_owned()
            .unwrap_or_else(|| format!("/var/lib/config-data/tls/private/{service_id}.key"));
        let ca_mount = self
            .ca_mount
            .to_owned()
            .unwrap_or_else(|| format!("/var/lib/config-data/tls/certs/{service_id}-ca.crt"));
        [
            (cert_mount, CERT_KEY),
            (key_mount, PRIVATE_KEY_KEY),
            (ca_mount, CA_CERT_KEY),
        ]
        .into_iter()
        .map(|(mount_path, key)| VolumeMount {
            name: Self::volume_name(service_id),
            mount_path,
            sub_path: Some(key.to_owned()),
            read_only: Some(true),
            ..Default::default()
        })
        .collect()
    }
}
