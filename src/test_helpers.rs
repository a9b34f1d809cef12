//! Test helpers for building manifest documents

#![cfg(test)]

/// Builder for a single Kubernetes-style YAML document
pub struct ManifestBuilder {
    api_version: String,
    kind: String,
    name: String,
    namespace: Option<String>,
    generate_name: Option<String>,
    data: Vec<(String, String)>,
}

impl ManifestBuilder {
    /// Create a new builder; an empty `name` leaves the attribute out
    pub fn new(api_version: &str, kind: &str, name: &str) -> Self {
        Self {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: None,
            generate_name: None,
            data: Vec::new(),
        }
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    /// Set the generateName prefix
    pub fn generate_name(mut self, prefix: &str) -> Self {
        self.generate_name = Some(prefix.to_string());
        self
    }

    /// Add a `data` entry
    pub fn data(mut self, key: &str, value: &str) -> Self {
        self.data.push((key.to_string(), value.to_string()));
        self
    }

    /// Render the document as YAML text ending with a newline
    pub fn build(&self) -> String {
        let mut yaml = format!(
            "apiVersion: {}\nkind: {}\nmetadata:\n",
            self.api_version, self.kind
        );

        if !self.name.is_empty() {
            yaml.push_str(&format!("  name: {}\n", self.name));
        }
        if let Some(prefix) = &self.generate_name {
            yaml.push_str(&format!("  generateName: {}\n", prefix));
        }
        if let Some(namespace) = &self.namespace {
            yaml.push_str(&format!("  namespace: {}\n", namespace));
        }

        if !self.data.is_empty() {
            yaml.push_str("data:\n");
            for (key, value) in &self.data {
                yaml.push_str(&format!("  {}: {}\n", key, value));
            }
        }

        yaml
    }
}

#[test]
fn test_manifest_builder_output() {
    let yaml = ManifestBuilder::new("v1", "ConfigMap", "a")
        .namespace("ops")
        .data("k", "v")
        .build();
    assert_eq!(
        yaml,
        "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: a\n  namespace: ops\ndata:\n  k: v\n"
    );
}
