//! Builds the DaemonSet that runs Open vSwitch and ovn-controller on data plane nodes.
use std::collections::BTreeMap;

use k8s_openapi::{
    api::{
        apps::v1::{DaemonSet, DaemonSetSpec},
        core::v1::{
            Capabilities, Container, EnvVar, ExecAction, Lifecycle, LifecycleHandler, PodSpec,
            PodTemplateSpec, Probe, SecurityContext, VolumeMount,
        },
    },
    apimachinery::pkg::apis::meta::v1::LabelSelector,
};
use kube::core::ObjectMeta;
use ovn_common::env::{merge_envs, EnvSetter};
use tracing::debug;

use crate::{
    ovn_controller::{
        volumes, OvnControllerConfig, CONFIG_HASH_ENV, OVN_DB_CA_CERT_PATH, OVN_DB_CERT_PATH,
        OVN_DB_KEY_PATH, SERVICE_NAME_OVN_CONTROLLER,
    },
    Error,
};

const OVSDB_SERVER_CONTAINER_NAME: &str = "ovsdb-server";
const OVS_VSWITCHD_CONTAINER_NAME: &str = "ovs-vswitchd";
const OVN_CONTROLLER_CONTAINER_NAME: &str = "ovn-controller";

const TERMINATION_MESSAGE_POLICY: &str = "FallbackToLogsOnError";

fn to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

// Open vSwitch and OVN manipulate the host network stack directly.
fn security_context() -> SecurityContext {
    SecurityContext {
        capabilities: Some(Capabilities {
            add: Some(to_strings(&["NET_ADMIN", "SYS_ADMIN", "SYS_NICE"])),
            drop: Some(vec![]),
        }),
        privileged: Some(true),
        run_as_user: Some(0),
        ..Default::default()
    }
}

fn liveness_probe(command: &[&str]) -> Probe {
    // TODO tune timings once startup times on loaded nodes have been measured
    Probe {
        exec: Some(ExecAction {
            command: Some(to_strings(command)),
        }),
        timeout_seconds: Some(5),
        period_seconds: Some(3),
        initial_delay_seconds: Some(3),
        ..Default::default()
    }
}

// The trailing sleep is required as a workaround for
// https://github.com/kubernetes/kubernetes/issues/39170
// and must run after the sub-service is stopped.
fn pre_stop(stop_command: &[&str]) -> Lifecycle {
    let mut command = to_strings(stop_command);
    command.extend(to_strings(&[";", "sleep", "2"]));
    Lifecycle {
        pre_stop: Some(LifecycleHandler {
            exec: Some(ExecAction {
                command: Some(command),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn ovsdb_server_container(
    config: &OvnControllerConfig,
    env: Vec<EnvVar>,
    volume_mounts: Vec<VolumeMount>,
) -> Container {
    Container {
        name: OVSDB_SERVER_CONTAINER_NAME.to_owned(),
        command: Some(to_strings(&["/usr/bin/dumb-init"])),
        args: Some(to_strings(&[
            "--single-child",
            "--",
            "/usr/local/bin/container-scripts/start-ovsdb-server.sh",
        ])),
        lifecycle: Some(pre_stop(&[
            "/usr/share/openvswitch/scripts/ovs-ctl",
            "stop",
            "--no-ovs-vswitchd",
        ])),
        image: Some(config.ovs_container_image.to_owned()),
        security_context: Some(security_context()),
        env: Some(env),
        volume_mounts: Some(volume_mounts),
        resources: config.resources.to_owned(),
        liveness_probe: Some(liveness_probe(&["/usr/bin/ovs-vsctl", "show"])),
        termination_message_policy: Some(TERMINATION_MESSAGE_POLICY.to_owned()),
        ..Default::default()
    }
}

fn ovs_vswitchd_container(
    config: &OvnControllerConfig,
    env: Vec<EnvVar>,
    volume_mounts: Vec<VolumeMount>,
) -> Container {
    Container {
        name: OVS_VSWITCHD_CONTAINER_NAME.to_owned(),
        command: Some(to_strings(&["/usr/sbin/ovs-vswitchd"])),
        args: Some(to_strings(&["--pidfile", "--mlockall"])),
        lifecycle: Some(pre_stop(&[
            "/usr/share/openvswitch/scripts/ovs-ctl",
            "stop",
            "--no-ovsdb-server",
        ])),
        image: Some(config.ovs_container_image.to_owned()),
        security_context: Some(security_context()),
        env: Some(env),
        volume_mounts: Some(volume_mounts),
        resources: config.resources.to_owned(),
        liveness_probe: Some(liveness_probe(&["/usr/bin/ovs-appctl", "bond/show"])),
        termination_message_policy: Some(TERMINATION_MESSAGE_POLICY.to_owned()),
        ..Default::default()
    }
}

// ovn-controller rejects `--pidfile` when started without a shell, so the whole command line is
// handed to bash as a single argument.
fn ovn_controller_container(
    config: &OvnControllerConfig,
    env: Vec<EnvVar>,
    volume_mounts: Vec<VolumeMount>,
    tls_args: &[String],
) -> Container {
    let command_line = std::iter::once(
        "/usr/local/bin/container-scripts/net_setup.sh && ovn-controller".to_owned(),
    )
    .chain(tls_args.iter().cloned())
    .chain(to_strings(&["--pidfile", "unix:/run/openvswitch/db.sock"]))
    .collect::<Vec<String>>()
    .join(" ");
    Container {
        name: OVN_CONTROLLER_CONTAINER_NAME.to_owned(),
        command: Some(to_strings(&["/bin/bash", "-c"])),
        args: Some(vec![command_line]),
        lifecycle: Some(pre_stop(&[
            "/usr/share/ovn/scripts/ovn-ctl",
            "stop_controller",
        ])),
        image: Some(config.ovn_container_image.to_owned()),
        security_context: Some(security_context()),
        env: Some(env),
        volume_mounts: Some(volume_mounts),
        resources: config.resources.to_owned(),
        termination_message_policy: Some(TERMINATION_MESSAGE_POLICY.to_owned()),
        ..Default::default()
    }
}

/// Build the DaemonSet running ovsdb-server, ovs-vswitchd and ovn-controller on every selected
/// node.
///
/// `config_hash` is exposed to every container as `CONFIG_HASH` so that any change to the
/// dependent configuration rolls the pods. Labels are used both for the pod template and the
/// selector, annotations only for the pod template.
pub fn daemon_set(
    config: &OvnControllerConfig,
    config_hash: &str,
    labels: &BTreeMap<String, String>,
    annotations: &BTreeMap<String, String>,
) -> Result<DaemonSet, Error> {
    debug!(
        name = %config.name,
        namespace = %config.namespace,
        tls_enabled = config.tls.enabled(),
        "building ovn-controller daemon set"
    );

    let mut pod_volumes = volumes::volumes(&config.name, &config.namespace);
    let mut common_volume_mounts = Vec::new();

    // The CA bundle is mounted whenever it is named, TLS to the databases need not be enabled.
    if let Some(ca_bundle) = config.tls.ca_bundle() {
        pod_volumes.push(ca_bundle.volume());
        common_volume_mounts.append(&mut ca_bundle.volume_mounts(None));
    }

    let mut ovn_controller_volume_mounts = volumes::ovn_controller_volume_mounts();
    ovn_controller_volume_mounts.extend(common_volume_mounts.iter().cloned());

    let mut ovn_controller_tls_args = Vec::new();
    if let Some(service) = config.tls.ovn_db_service() {
        pod_volumes.push(service.volume(SERVICE_NAME_OVN_CONTROLLER));
        ovn_controller_volume_mounts
            .append(&mut service.volume_mounts(SERVICE_NAME_OVN_CONTROLLER));
        ovn_controller_tls_args = vec![
            format!("--certificate={OVN_DB_CERT_PATH}"),
            format!("--private-key={OVN_DB_KEY_PATH}"),
            format!("--ca-cert={OVN_DB_CA_CERT_PATH}"),
        ];
    }

    let env = merge_envs(
        Vec::new(),
        &BTreeMap::from_iter([(
            CONFIG_HASH_ENV.to_owned(),
            EnvSetter::Value(config_hash.to_owned()),
        )]),
    );

    let mut ovsdb_volume_mounts = volumes::ovsdb_volume_mounts();
    ovsdb_volume_mounts.extend(common_volume_mounts.iter().cloned());
    let mut vswitchd_volume_mounts = volumes::vswitchd_volume_mounts();
    vswitchd_volume_mounts.extend(common_volume_mounts.iter().cloned());

    let node_selector = config
        .node_selector
        .as_ref()
        .filter(|selector| !selector.is_empty())
        .cloned();

    Ok(DaemonSet {
        metadata: ObjectMeta {
            name: Some(SERVICE_NAME_OVN_CONTROLLER.to_owned()),
            namespace: Some(config.namespace.to_owned()),
            ..Default::default()
        },
        spec: Some(DaemonSetSpec {
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels.clone()),
                    annotations: Some(annotations.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    service_account_name: Some(config.service_account.to_owned()),
                    containers: vec![
                        ovsdb_server_container(config, env.clone(), ovsdb_volume_mounts),
                        ovs_vswitchd_container(config, env.clone(), vswitchd_volume_mounts),
                        ovn_controller_container(
                            config,
                            env,
                            ovn_controller_volume_mounts,
                            &ovn_controller_tls_args,
                        ),
                    ],
                    volumes: Some(pod_volumes),
                    node_selector,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use k8s_openapi::{
        api::core::v1::{ResourceRequirements, Volume},
        apimachinery::pkg::api::resource::Quantity,
    };
    use tracing_test::traced_test;

    use super::*;
    use crate::{labels::service_labels, ovn_controller::TlsConfig};

    fn build(config: &OvnControllerConfig, config_hash: &str) -> DaemonSet {
        daemon_set(
            config,
            config_hash,
            &service_labels(SERVICE_NAME_OVN_CONTROLLER),
            &BTreeMap::new(),
        )
        .expect("daemon set should build")
    }

    fn pod_spec(daemon_set: &DaemonSet) -> &PodSpec {
        daemon_set
            .spec
            .as_ref()
            .and_then(|spec| spec.template.spec.as_ref())
            .expect("pod spec")
    }

    fn container<'a>(daemon_set: &'a DaemonSet, name: &str) -> &'a Container {
        pod_spec(daemon_set)
            .containers
            .iter()
            .find(|container| container.name == name)
            .expect("container should exist")
    }

    fn pod_volumes(daemon_set: &DaemonSet) -> &Vec<Volume> {
        pod_spec(daemon_set).volumes.as_ref().expect("volumes")
    }

    fn mount_count(container: &Container) -> usize {
        container.volume_mounts.as_ref().map_or(0, Vec::len)
    }

    fn controller_args(daemon_set: &DaemonSet) -> String {
        container(daemon_set, OVN_CONTROLLER_CONTAINER_NAME)
            .args
            .as_ref()
            .expect("args")
            .join(" ")
    }

    fn ca_bundle_config() -> OvnControllerConfig {
        OvnControllerConfig {
            tls: TlsConfig {
                ca_bundle_secret_name: "ca-secret".to_owned(),
                secret_name: None,
            },
            ..Default::default()
        }
    }

    fn tls_config() -> OvnControllerConfig {
        OvnControllerConfig {
            tls: TlsConfig {
                ca_bundle_secret_name: "ca-secret".to_owned(),
                secret_name: Some("ovn-tls".to_owned()),
            },
            ..Default::default()
        }
    }

    const TLS_FLAGS: [&str; 3] = ["--certificate=", "--private-key=", "--ca-cert="];

    #[test]
    fn no_tls() {
        let config = OvnControllerConfig::default();
        let ds = build(&config, "abc123");

        let args = controller_args(&ds);
        for flag in TLS_FLAGS {
            assert!(!args.contains(flag), "unexpected {flag} in {args}");
        }
        assert_eq!(
            pod_volumes(&ds).len(),
            volumes::volumes(&config.name, &config.namespace).len()
        );
        for container in &pod_spec(&ds).containers {
            assert_eq!(
                container.env,
                Some(vec![EnvVar {
                    name: "CONFIG_HASH".to_owned(),
                    value: Some("abc123".to_owned()),
                    ..Default::default()
                }])
            );
        }
        expect![[r#"
            Some(
                [
                    "/usr/local/bin/container-scripts/net_setup.sh && ovn-controller --pidfile unix:/run/openvswitch/db.sock",
                ],
            )
        "#]]
        .assert_debug_eq(&container(&ds, OVN_CONTROLLER_CONTAINER_NAME).args);
    }

    #[test]
    fn ca_bundle_only() {
        let config = ca_bundle_config();
        let ds = build(&config, "abc123");

        let base = volumes::volumes(&config.name, &config.namespace).len();
        assert_eq!(pod_volumes(&ds).len(), base + 1);
        assert!(pod_volumes(&ds)
            .iter()
            .any(|volume| volume.name == "combined-ca-bundle"));
        assert_eq!(
            mount_count(container(&ds, OVSDB_SERVER_CONTAINER_NAME)),
            volumes::ovsdb_volume_mounts().len() + 1
        );
        assert_eq!(
            mount_count(container(&ds, OVS_VSWITCHD_CONTAINER_NAME)),
            volumes::vswitchd_volume_mounts().len() + 1
        );
        assert_eq!(
            mount_count(container(&ds, OVN_CONTROLLER_CONTAINER_NAME)),
            volumes::ovn_controller_volume_mounts().len() + 1
        );
        let args = controller_args(&ds);
        for flag in TLS_FLAGS {
            assert!(!args.contains(flag), "unexpected {flag} in {args}");
        }
    }

    #[test]
    fn tls_enabled() {
        let config = tls_config();
        let ds = build(&config, "abc123");

        let base = volumes::volumes(&config.name, &config.namespace).len();
        let names: Vec<&str> = pod_volumes(&ds)[base..]
            .iter()
            .map(|volume| volume.name.as_str())
            .collect();
        assert_eq!(names, vec!["combined-ca-bundle", "ovn-controller-tls-certs"]);

        // Only ovn-controller gets the database certificates.
        assert_eq!(
            mount_count(container(&ds, OVSDB_SERVER_CONTAINER_NAME)),
            volumes::ovsdb_volume_mounts().len() + 1
        );
        assert_eq!(
            mount_count(container(&ds, OVN_CONTROLLER_CONTAINER_NAME)),
            volumes::ovn_controller_volume_mounts().len() + 1 + 3
        );
        expect![[r#"
            Some(
                [
                    "/usr/local/bin/container-scripts/net_setup.sh && ovn-controller --certificate=/etc/pki/tls/certs/ovndb.crt --private-key=/etc/pki/tls/private/ovndb.key --ca-cert=/etc/pki/tls/certs/ovndbca.crt --pidfile unix:/run/openvswitch/db.sock",
                ],
            )
        "#]]
        .assert_debug_eq(&container(&ds, OVN_CONTROLLER_CONTAINER_NAME).args);
    }

    #[test]
    fn tls_without_ca_bundle() {
        let config = OvnControllerConfig {
            tls: TlsConfig {
                ca_bundle_secret_name: String::new(),
                secret_name: Some("ovn-tls".to_owned()),
            },
            ..Default::default()
        };
        let ds = build(&config, "abc123");

        let base = volumes::volumes(&config.name, &config.namespace).len();
        assert_eq!(pod_volumes(&ds).len(), base + 1);
        assert_eq!(
            mount_count(container(&ds, OVS_VSWITCHD_CONTAINER_NAME)),
            volumes::vswitchd_volume_mounts().len()
        );
        let args = controller_args(&ds);
        for flag in TLS_FLAGS {
            assert!(args.contains(flag), "missing {flag} in {args}");
        }
    }

    #[test]
    fn security_context_on_all_containers() {
        let ds = build(&tls_config(), "");
        let containers = &pod_spec(&ds).containers;
        assert_eq!(containers.len(), 3);
        for container in containers {
            let context = container.security_context.as_ref().expect("security context");
            assert_eq!(context.privileged, Some(true));
            assert_eq!(context.run_as_user, Some(0));
            let capabilities = context.capabilities.as_ref().expect("capabilities");
            assert_eq!(
                capabilities.add,
                Some(vec![
                    "NET_ADMIN".to_owned(),
                    "SYS_ADMIN".to_owned(),
                    "SYS_NICE".to_owned()
                ])
            );
            assert_eq!(capabilities.drop, Some(vec![]));
            assert_eq!(
                container.termination_message_policy.as_deref(),
                Some("FallbackToLogsOnError")
            );
        }
    }

    #[test]
    fn empty_config_hash() {
        let ds = build(&OvnControllerConfig::default(), "");
        for container in &pod_spec(&ds).containers {
            let env = container.env.as_ref().expect("env");
            assert_eq!(env.len(), 1);
            assert_eq!(env[0].name, "CONFIG_HASH");
            assert_eq!(env[0].value.as_deref(), Some(""));
        }
    }

    #[test]
    fn containers_and_images() {
        let config = OvnControllerConfig {
            ovs_container_image: "ovs:test".to_owned(),
            ovn_container_image: "ovn:test".to_owned(),
            ..Default::default()
        };
        let ds = build(&config, "abc123");
        let containers: Vec<(&str, Option<&str>)> = pod_spec(&ds)
            .containers
            .iter()
            .map(|c| (c.name.as_str(), c.image.as_deref()))
            .collect();
        assert_eq!(
            containers,
            vec![
                ("ovsdb-server", Some("ovs:test")),
                ("ovs-vswitchd", Some("ovs:test")),
                ("ovn-controller", Some("ovn:test")),
            ]
        );
    }

    #[test]
    fn probes() {
        let ds = build(&OvnControllerConfig::default(), "abc123");
        let probe_command = |name: &str| {
            container(&ds, name)
                .liveness_probe
                .as_ref()
                .and_then(|probe| probe.exec.as_ref())
                .and_then(|exec| exec.command.clone())
        };
        assert_eq!(
            probe_command(OVSDB_SERVER_CONTAINER_NAME),
            Some(vec!["/usr/bin/ovs-vsctl".to_owned(), "show".to_owned()])
        );
        assert_eq!(
            probe_command(OVS_VSWITCHD_CONTAINER_NAME),
            Some(vec!["/usr/bin/ovs-appctl".to_owned(), "bond/show".to_owned()])
        );
        assert!(container(&ds, OVN_CONTROLLER_CONTAINER_NAME)
            .liveness_probe
            .is_none());
        let probe = container(&ds, OVSDB_SERVER_CONTAINER_NAME)
            .liveness_probe
            .as_ref()
            .expect("probe");
        assert_eq!(probe.timeout_seconds, Some(5));
        assert_eq!(probe.period_seconds, Some(3));
        assert_eq!(probe.initial_delay_seconds, Some(3));
    }

    #[test]
    fn pre_stop_hooks_stop_then_sleep() {
        let ds = build(&OvnControllerConfig::default(), "abc123");
        let pre_stop = |name: &str| {
            container(&ds, name)
                .lifecycle
                .as_ref()
                .and_then(|lifecycle| lifecycle.pre_stop.as_ref())
                .and_then(|handler| handler.exec.as_ref())
                .and_then(|exec| exec.command.clone())
        };
        expect![[r#"
            Some(
                [
                    "/usr/share/openvswitch/scripts/ovs-ctl",
                    "stop",
                    "--no-ovs-vswitchd",
                    ";",
                    "sleep",
                    "2",
                ],
            )
        "#]]
        .assert_debug_eq(&pre_stop(OVSDB_SERVER_CONTAINER_NAME));
        expect![[r#"
            Some(
                [
                    "/usr/share/openvswitch/scripts/ovs-ctl",
                    "stop",
                    "--no-ovsdb-server",
                    ";",
                    "sleep",
                    "2",
                ],
            )
        "#]]
        .assert_debug_eq(&pre_stop(OVS_VSWITCHD_CONTAINER_NAME));
        expect![[r#"
            Some(
                [
                    "/usr/share/ovn/scripts/ovn-ctl",
                    "stop_controller",
                    ";",
                    "sleep",
                    "2",
                ],
            )
        "#]]
        .assert_debug_eq(&pre_stop(OVN_CONTROLLER_CONTAINER_NAME));
    }

    #[test]
    fn launch_commands() {
        let ds = build(&OvnControllerConfig::default(), "abc123");
        let ovsdb = container(&ds, OVSDB_SERVER_CONTAINER_NAME);
        assert_eq!(ovsdb.command, Some(vec!["/usr/bin/dumb-init".to_owned()]));
        assert_eq!(
            ovsdb.args,
            Some(vec![
                "--single-child".to_owned(),
                "--".to_owned(),
                "/usr/local/bin/container-scripts/start-ovsdb-server.sh".to_owned(),
            ])
        );
        let vswitchd = container(&ds, OVS_VSWITCHD_CONTAINER_NAME);
        assert_eq!(
            vswitchd.command,
            Some(vec!["/usr/sbin/ovs-vswitchd".to_owned()])
        );
        assert_eq!(
            vswitchd.args,
            Some(vec!["--pidfile".to_owned(), "--mlockall".to_owned()])
        );
        assert_eq!(
            container(&ds, OVN_CONTROLLER_CONTAINER_NAME).command,
            Some(vec!["/bin/bash".to_owned(), "-c".to_owned()])
        );
    }

    #[test]
    fn resources_shared_by_all_containers() {
        let resources = ResourceRequirements {
            requests: Some(BTreeMap::from_iter([(
                "cpu".to_owned(),
                Quantity("100m".to_owned()),
            )])),
            ..Default::default()
        };
        let config = OvnControllerConfig {
            resources: Some(resources.clone()),
            ..Default::default()
        };
        let ds = build(&config, "abc123");
        for container in &pod_spec(&ds).containers {
            assert_eq!(container.resources.as_ref(), Some(&resources));
        }
    }

    #[test]
    fn node_selector() {
        let ds = build(&OvnControllerConfig::default(), "abc123");
        assert_eq!(pod_spec(&ds).node_selector, None);

        let config = OvnControllerConfig {
            node_selector: Some(BTreeMap::new()),
            ..Default::default()
        };
        let ds = build(&config, "abc123");
        assert_eq!(pod_spec(&ds).node_selector, None);

        let selector = BTreeMap::from_iter([(
            "node-role.kubernetes.io/worker".to_owned(),
            "".to_owned(),
        )]);
        let config = OvnControllerConfig {
            node_selector: Some(selector.clone()),
            ..Default::default()
        };
        let ds = build(&config, "abc123");
        assert_eq!(pod_spec(&ds).node_selector, Some(selector));
    }

    #[test]
    fn metadata_labels_and_annotations() {
        let config = OvnControllerConfig {
            namespace: "openstack".to_owned(),
            service_account: "ovncontroller-edpm".to_owned(),
            ..Default::default()
        };
        let labels = service_labels(SERVICE_NAME_OVN_CONTROLLER);
        let annotations = BTreeMap::from_iter([(
            "k8s.v1.cni.cncf.io/networks".to_owned(),
            "[]".to_owned(),
        )]);
        let ds = daemon_set(&config, "abc123", &labels, &annotations).unwrap();

        assert_eq!(ds.metadata.name.as_deref(), Some("ovn-controller"));
        assert_eq!(ds.metadata.namespace.as_deref(), Some("openstack"));
        let spec = ds.spec.as_ref().expect("spec");
        assert_eq!(spec.selector.match_labels.as_ref(), Some(&labels));
        let template_meta = spec.template.metadata.as_ref().expect("metadata");
        assert_eq!(template_meta.labels.as_ref(), Some(&labels));
        assert_eq!(template_meta.annotations.as_ref(), Some(&annotations));
        assert_eq!(
            pod_spec(&ds).service_account_name.as_deref(),
            Some("ovncontroller-edpm")
        );
    }

    #[test]
    fn empty_labels_and_annotations() {
        let ds = daemon_set(
            &OvnControllerConfig::default(),
            "abc123",
            &BTreeMap::new(),
            &BTreeMap::new(),
        )
        .unwrap();
        let spec = ds.spec.expect("spec");
        assert_eq!(spec.selector.match_labels, Some(BTreeMap::new()));
    }

    #[test]
    fn deterministic() {
        let config = tls_config();
        assert_eq!(build(&config, "abc123"), build(&config, "abc123"));
        assert_ne!(build(&config, "abc123"), build(&config, "def456"));
    }

    #[test]
    #[traced_test]
    fn logs_build() {
        build(&ca_bundle_config(), "abc123");
        assert!(logs_contain("building ovn-controller daemon set"));
    }
}
