use std::collections::BTreeMap;

/// Label key used to select all pods belonging to a service.
pub const APP_SELECTOR: &str = "service";

/// Create labels that can be used as a unique selector for a given service name.
pub fn service_labels(service: &str) -> BTreeMap<String, String> {
    BTreeMap::from_iter(vec![(APP_SELECTOR.to_owned(), service.to_owned())])
}

/// Labels that indicate the resource is managed by the ovn operator.
pub fn managed_labels() -> BTreeMap<String, String> {
    BTreeMap::from_iter(vec![(
        "app.kubernetes.io/managed-by".to_owned(),
        "ovn-operator".to_owned(),
    )])
}

/// Extend service labels with the managed labels.
pub fn managed_service_labels(service: &str) -> BTreeMap<String, String> {
    let mut labels = service_labels(service);
    labels.append(&mut managed_labels());
    labels
}
