//! Place all spec types into a single module so they can be used as a lightweight dependency
use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Primary CRD for deploying OVN controller and Open vSwitch on every selected node.
#[derive(CustomResource, Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[kube(
    group = "ovn.openstack.org",
    version = "v1beta1",
    kind = "OVNController",
    root = "OvnController",
    plural = "ovncontrollers",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct OvnControllerSpec {
    /// Image used for the ovsdb-server and ovs-vswitchd containers.
    pub ovs_container_image: Option<String>,
    /// Image used for the ovn-controller container.
    pub ovn_container_image: Option<String>,
    /// Resource requirements applied to every container.
    pub resources: Option<ResourceRequirements>,
    /// Only nodes matching all labels of the selector run the workload.
    /// If unset or empty the workload runs on every eligible node.
    pub node_selector: Option<BTreeMap<String, String>>,
    /// Transport security for connections to the OVN databases.
    pub tls: Option<TlsSpec>,
}

/// Describes which secrets provide TLS material.
#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsSpec {
    /// Name of a secret with a `tls-ca-bundle.pem` key holding CA certificates to trust.
    /// Mounted into every container, even when TLS to the databases is disabled.
    pub ca_bundle_secret_name: Option<String>,
    /// Name of a secret with `tls.crt`, `tls.key` and `ca.crt` keys.
    /// TLS to the databases is enabled when this is set.
    pub secret_name: Option<String>,
}

impl OvnController {
    /// Name of the service account and related RBAC resources.
    pub fn rbac_resource_name(&self) -> String {
        format!("ovncontroller-{}", self.name_any())
    }
}
