//! Resource identity and composite keys

use serde::Serialize;
use std::fmt;

use super::loader::{ObjectMeta, TypeDescriptor};

/// Placeholder used in keys for an absent group or namespace
pub const ABSENT: &str = "-";

/// Separator between the five key fields
const KEY_SEPARATOR: &str = "/";

/// Composite key: `group/version/kind/namespace/name`.
///
/// Two documents describe the same resource iff their keys are equal. Keys
/// are compared and sorted as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub fn from_raw(key: &str) -> Self {
        ResourceKey(key.to_string())
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type and placement of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdentity {
    /// API group, `None` for the core group
    pub group: Option<String>,
    pub version: String,
    pub kind: String,
    /// `None` for cluster-scoped resources
    pub namespace: Option<String>,
    /// Proper name, or the `generateName` prefix when the name is empty
    pub name: String,
}

impl ResourceIdentity {
    /// Derive the identity of a decoded document
    pub fn resolve(type_descriptor: &TypeDescriptor, meta: &ObjectMeta) -> Self {
        let name = if meta.name.is_empty() {
            meta.generate_name.clone()
        } else {
            meta.name.clone()
        };

        Self {
            group: non_empty(&type_descriptor.group),
            version: type_descriptor.version.clone(),
            kind: type_descriptor.kind.clone(),
            namespace: non_empty(&meta.namespace),
            name,
        }
    }

    /// Build the composite key for this identity
    pub fn key(&self) -> ResourceKey {
        let fields = [
            self.group.as_deref().unwrap_or(ABSENT),
            self.version.as_str(),
            self.kind.as_str(),
            self.namespace.as_deref().unwrap_or(ABSENT),
            self.name.as_str(),
        ];
        ResourceKey(fields.join(KEY_SEPARATOR))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::loader;

    fn resolve(segment: &str) -> ResourceIdentity {
        let doc = loader::decode(segment).unwrap().unwrap();
        ResourceIdentity::resolve(&doc.type_descriptor, &doc.meta)
    }

    #[test]
    fn test_key_uses_placeholders_for_core_group_and_cluster_scope() {
        let identity = resolve("apiVersion: v1\nkind: Namespace\nmetadata:\n  name: ops\n");
        assert_eq!(identity.group, None);
        assert_eq!(identity.namespace, None);
        assert_eq!(identity.key().as_str(), "-/v1/Namespace/-/ops");
    }

    #[test]
    fn test_key_with_group_and_namespace() {
        let identity = resolve(
            "apiVersion: networking.k8s.io/v1\nkind: Ingress\nmetadata:\n  name: web\n  namespace: prod\n",
        );
        assert_eq!(identity.group.as_deref(), Some("networking.k8s.io"));
        assert_eq!(
            identity.key().as_str(),
            "networking.k8s.io/v1/Ingress/prod/web"
        );
    }

    #[test]
    fn test_name_falls_back_to_generate_name() {
        let identity = resolve(
            "apiVersion: batch/v1\nkind: Job\nmetadata:\n  generateName: migrate-\n  namespace: ops\n",
        );
        assert_eq!(identity.name, "migrate-");
        assert_eq!(identity.key().as_str(), "batch/v1/Job/ops/migrate-");
    }

    #[test]
    fn test_proper_name_wins_over_generate_name() {
        let identity = resolve(
            "apiVersion: batch/v1\nkind: Job\nmetadata:\n  name: migrate-42\n  generateName: migrate-\n",
        );
        assert_eq!(identity.name, "migrate-42");
    }

    #[test]
    fn test_key_is_stable_across_decodes() {
        let segment = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: app-config\n  namespace: ops\n";
        assert_eq!(resolve(segment).key(), resolve(segment).key());
    }

    #[test]
    fn test_key_ignores_document_body() {
        let a = resolve("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: c\ndata:\n  x: '1'\n");
        let b = resolve("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: c\ndata:\n  x: '2'\n");
        assert_eq!(a.key(), b.key());
    }
}
