//! Resolved configuration of an OvnController, with defaults applied.
use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::ResourceExt;
use ovn_common::tls::{CaBundle, ServiceTls};

use crate::ovn_controller::{
    OvnController, TlsSpec, OVN_DB_CA_CERT_PATH, OVN_DB_CERT_PATH, OVN_DB_KEY_PATH,
};

/// Everything the DaemonSet builder needs to know about a single OvnController.
#[derive(Clone, Debug, PartialEq)]
pub struct OvnControllerConfig {
    /// Name of the OvnController resource
    pub name: String,
    /// Namespace the DaemonSet is deployed in
    pub namespace: String,
    /// Service account the pods run as.
    pub service_account: String,
    /// Image of the ovsdb-server and ovs-vswitchd containers
    pub ovs_container_image: String,
    /// Image of the ovn-controller container
    pub ovn_container_image: String,
    /// Resource requirements shared by all containers
    pub resources: Option<ResourceRequirements>,
    /// Node selector for the pods
    pub node_selector: Option<BTreeMap<String, String>>,
    /// TLS material
    pub tls: TlsConfig,
}

impl Default for OvnControllerConfig {
    fn default() -> Self {
        Self {
            name: "ovncontroller".to_owned(),
            namespace: "default".to_owned(),
            service_account: "ovncontroller-ovncontroller".to_owned(),
            ovs_container_image:
                "quay.io/podified-antelope-centos9/openstack-ovn-base:current-podified".to_owned(),
            ovn_container_image:
                "quay.io/podified-antelope-centos9/openstack-ovn-controller:current-podified"
                    .to_owned(),
            resources: None,
            node_selector: None,
            tls: TlsConfig::default(),
        }
    }
}

impl From<&OvnController> for OvnControllerConfig {
    fn from(value: &OvnController) -> Self {
        let default = Self::default();
        let spec = &value.spec;
        Self {
            name: value.name_any(),
            namespace: value.namespace().unwrap_or(default.namespace),
            service_account: value.rbac_resource_name(),
            ovs_container_image: spec
                .ovs_container_image
                .to_owned()
                .unwrap_or(default.ovs_container_image),
            ovn_container_image: spec
                .ovn_container_image
                .to_owned()
                .unwrap_or(default.ovn_container_image),
            resources: spec.resources.to_owned(),
            node_selector: spec.node_selector.to_owned(),
            tls: spec.tls.as_ref().map(TlsConfig::from).unwrap_or_default(),
        }
    }
}

/// Which TLS material to mount.
///
/// The CA bundle and the service certificate are independent: a CA bundle may be mounted while
/// TLS to the databases stays disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlsConfig {
    /// Secret holding the CA bundle, empty when there is none.
    pub ca_bundle_secret_name: String,
    /// Secret holding the database client certificate.
    pub secret_name: Option<String>,
}

impl TlsConfig {
    /// Reports if TLS to the OVN databases is enabled.
    pub fn enabled(&self) -> bool {
        self.secret_name
            .as_ref()
            .is_some_and(|secret_name| !secret_name.is_empty())
    }

    /// The CA bundle to mount, if any.
    pub fn ca_bundle(&self) -> Option<CaBundle> {
        if self.ca_bundle_secret_name.is_empty() {
            None
        } else {
            Some(CaBundle::new(self.ca_bundle_secret_name.to_owned()))
        }
    }

    /// The database client certificate to mount, if TLS is enabled.
    pub fn ovn_db_service(&self) -> Option<ServiceTls> {
        match &self.secret_name {
            Some(secret_name) if self.enabled() => Some(ServiceTls {
                secret_name: secret_name.to_owned(),
                cert_mount: Some(OVN_DB_CERT_PATH.to_owned()),
                key_mount: Some(OVN_DB_KEY_PATH.to_owned()),
                ca_mount: Some(OVN_DB_CA_CERT_PATH.to_owned()),
            }),
            _ => None,
        }
    }
}

impl From<&TlsSpec> for TlsConfig {
    fn from(value: &TlsSpec) -> Self {
        Self {
            ca_bundle_secret_name: value.ca_bundle_secret_name.to_owned().unwrap_or_default(),
            secret_name: value.secret_name.to_owned(),
        }
    }
}
