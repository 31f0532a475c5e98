//! Helpers for building container environment variable lists.
use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, ObjectFieldSelector};

/// Describes how a single environment variable gets its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvSetter {
    /// A literal value.
    Value(String),
    /// A downward API field reference, i.e. `status.hostIP`.
    FieldRef(String),
}

impl EnvSetter {
    /// Apply the setter to an env var, replacing any previous value source.
    pub fn apply(&self, var: &mut EnvVar) {
        match self {
            EnvSetter::Value(value) => {
                var.value = Some(value.to_owned());
                var.value_from = None;
            }
            EnvSetter::FieldRef(field_path) => {
                var.value = None;
                var.value_from = Some(EnvVarSource {
                    field_ref: Some(ObjectFieldSelector {
                        field_path: field_path.to_owned(),
                        ..Default::default()
                    }),
                    ..Default::default()
                });
            }
        }
    }
}

/// Merge named setters into an existing env var list.
///
/// Setters are applied in key order. A variable that already exists is updated in place,
/// otherwise it is appended to the end of the list.
pub fn merge_envs(mut envs: Vec<EnvVar>, setters: &BTreeMap<String, EnvSetter>) -> Vec<EnvVar> {
    for (name, setter) in setters {
        if let Some(var) = envs.iter_mut().find(|var| &var.name == name) {
            setter.apply(var);
        } else {
            let mut var = EnvVar {
                name: name.to_owned(),
                ..Default::default()
            };
            setter.apply(&mut var);
            envs.push(var);
        }
    }
    envs
}
