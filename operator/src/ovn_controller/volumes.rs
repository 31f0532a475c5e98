//! Base volumes of the OVN controller pods and the mounts of each container.
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, HostPathVolumeSource, Volume, VolumeMount,
};

/// Directory on the host under which per namespace state is kept.
const HOST_STATE_ROOT: &str = "/var/home/core";
/// Where the scripts config map is mounted.
pub const CONTAINER_SCRIPTS_PATH: &str = "/usr/local/bin/container-scripts";

fn host_path_volume(name: &str, namespace: &str, path: &str) -> Volume {
    Volume {
        name: name.to_owned(),
        host_path: Some(HostPathVolumeSource {
            path: format!("{HOST_STATE_ROOT}/{namespace}{path}"),
            type_: Some("DirectoryOrCreate".to_owned()),
        }),
        ..Default::default()
    }
}

fn volume_mount(name: &str, mount_path: &str) -> VolumeMount {
    VolumeMount {
        name: name.to_owned(),
        mount_path: mount_path.to_owned(),
        ..Default::default()
    }
}

fn scripts_volume_mount() -> VolumeMount {
    VolumeMount {
        name: "scripts".to_owned(),
        mount_path: CONTAINER_SCRIPTS_PATH.to_owned(),
        read_only: Some(true),
        ..Default::default()
    }
}

/// Base volumes shared by all containers of an OvnController named `name`.
pub fn volumes(name: &str, namespace: &str) -> Vec<Volume> {
    vec![
        host_path_volume("etc-ovs", namespace, "/etc/ovs"),
        host_path_volume("var-run", namespace, "/var/run/openvswitch"),
        host_path_volume("var-log", namespace, "/var/log/openvswitch"),
        host_path_volume("var-lib", namespace, "/var/lib/openvswitch"),
        host_path_volume("var-log-ovn", namespace, "/var/log/ovn"),
        Volume {
            name: "scripts".to_owned(),
            config_map: Some(ConfigMapVolumeSource {
                default_mode: Some(0o755),
                name: Some(format!("{name}-scripts")),
                ..Default::default()
            }),
            ..Default::default()
        },
    ]
}

/// Mounts of the ovsdb-server container.
pub fn ovsdb_volume_mounts() -> Vec<VolumeMount> {
    vec![
        volume_mount("etc-ovs", "/etc/openvswitch"),
        volume_mount("var-run", "/var/run/openvswitch"),
        volume_mount("var-log", "/var/log/openvswitch"),
        volume_mount("var-lib", "/var/lib/openvswitch"),
        scripts_volume_mount(),
    ]
}

/// Mounts of the ovs-vswitchd container.
pub fn vswitchd_volume_mounts() -> Vec<VolumeMount> {
    vec![
        volume_mount("var-run", "/var/run/openvswitch"),
        volume_mount("var-log", "/var/log/openvswitch"),
        volume_mount("var-lib", "/var/lib/openvswitch"),
        scripts_volume_mount(),
    ]
}

/// Mounts of the ovn-controller container.
pub fn ovn_controller_volume_mounts() -> Vec<VolumeMount> {
    vec![
        volume_mount("var-run", "/var/run/openvswitch"),
        volume_mount("var-log-ovn", "/var/log/ovn"),
        scripts_volume_mount(),
    ]
}
