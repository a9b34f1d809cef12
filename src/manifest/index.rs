//! Per-input index of documents by composite key

use std::collections::HashMap;
use tracing::{debug, warn};

use super::identity::{ResourceIdentity, ResourceKey};
use super::loader;
use crate::error::ManifestResult;

/// Documents of one input collection, keyed by composite key
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    texts: HashMap<ResourceKey, String>,
    identities: HashMap<ResourceKey, ResourceIdentity>,
}

impl CollectionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every document of a raw multi-document input.
    ///
    /// With `normalize` set, the stored text is the canonical re-serialization
    /// of each document instead of its original text. The first document that
    /// fails to decode aborts the whole build.
    pub fn build(raw: &str, normalize: bool) -> ManifestResult<Self> {
        let mut index = Self::new();

        for (position, segment) in loader::split_documents(raw).into_iter().enumerate() {
            let segment = format!("{}\n", segment);
            let document = match loader::decode(&segment) {
                Ok(Some(document)) => document,
                Ok(None) => continue,
                Err(err) => return Err(err.at_document(position + 1)),
            };

            let text = if normalize {
                loader::normalize(&document.object).map_err(|err| err.at_document(position + 1))?
            } else {
                segment
            };

            let identity = ResourceIdentity::resolve(&document.type_descriptor, &document.meta);
            index.insert(identity, text);
        }

        debug!(documents = index.len(), normalize, "Indexed collection");
        Ok(index)
    }

    /// Insert a document, replacing any earlier document with the same key.
    ///
    /// Returns the replaced text, if any.
    pub fn insert(&mut self, identity: ResourceIdentity, text: String) -> Option<String> {
        let key = identity.key();
        let previous = self.texts.insert(key.clone(), text);
        if previous.is_some() {
            warn!(key = %key, "Duplicate resource identity, keeping the later document");
        }
        self.identities.insert(key, identity);
        previous
    }

    pub fn text(&self, key: &ResourceKey) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn identity(&self, key: &ResourceKey) -> Option<&ResourceIdentity> {
        self.identities.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.identities.keys()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
