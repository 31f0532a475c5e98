//! Renders the DaemonSet of an OvnController resource as the `ovn-operator` binary does.
use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::DaemonSet;
use ovn_common::hash::object_hash;
use tracing::info;

use crate::{
    labels::managed_service_labels,
    ovn_controller::{daemon_set, OvnController, OvnControllerConfig, SERVICE_NAME_OVN_CONTROLLER},
    Error,
};

/// Build the DaemonSet for `controller`.
///
/// Without an explicit `config_hash` the hash of the resource spec is used, so editing the
/// resource rolls the pods.
pub fn render(
    controller: &OvnController,
    config_hash: Option<String>,
    annotations: &BTreeMap<String, String>,
) -> Result<DaemonSet, Error> {
    let config = OvnControllerConfig::from(controller);
    let config_hash = match config_hash {
        Some(config_hash) => config_hash,
        None => object_hash(&controller.spec)?,
    };
    let labels = managed_service_labels(SERVICE_NAME_OVN_CONTROLLER);

    info!(
        name = %config.name,
        namespace = %config.namespace,
        %config_hash,
        "rendering daemon set"
    );
    daemon_set(&config, &config_hash, &labels, annotations)
}
