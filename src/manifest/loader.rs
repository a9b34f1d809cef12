//! Multi-document YAML loading
//!
//! Splits a raw manifest stream into documents, decodes each one into a
//! generic value plus its type descriptor and object metadata, and produces
//! the canonical text used when normalization is requested.

use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::error::{ManifestError, ManifestResult};

lazy_static! {
    // A line made of `---` only; trailing blanks (and `\r`) are tolerated
    static ref DOCUMENT_SEPARATOR: Regex =
        Regex::new(r"(?m)^---[ \t\r]*$").expect("Invalid document separator regex");
}

/// Group, version and kind of a decoded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// API group, empty for the core group
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl TypeDescriptor {
    /// Parse an `apiVersion` value (`v1`, `apps/v1`) together with a kind
    pub fn parse(api_version: &str, kind: &str) -> ManifestResult<Self> {
        let (group, version) = match api_version.split_once('/') {
            Some((_, rest)) if rest.contains('/') => {
                return Err(ManifestError::InvalidApiVersion(api_version.to_string()));
            }
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };

        if version.is_empty() {
            return Err(ManifestError::MissingField("apiVersion"));
        }
        if kind.is_empty() {
            return Err(ManifestError::MissingField("kind"));
        }

        Ok(Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        })
    }
}

/// The `metadata` attributes that take part in identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    pub generate_name: String,
}

/// A single decoded document
#[derive(Debug, Clone)]
pub struct DecodedDocument {
    pub object: Value,
    pub type_descriptor: TypeDescriptor,
    pub meta: ObjectMeta,
}

/// Split a raw multi-document input into trimmed, non-empty segments
pub fn split_documents(raw: &str) -> Vec<&str> {
    DOCUMENT_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Decode one segment.
///
/// Returns `Ok(None)` for segments holding no document at all (for example
/// a segment made only of comments).
pub fn decode(segment: &str) -> ManifestResult<Option<DecodedDocument>> {
    let object: Value = serde_yaml::from_str(segment)?;

    let root = match &object {
        Value::Null => return Ok(None),
        Value::Mapping(map) => map,
        _ => return Err(ManifestError::NotAnObject),
    };

    let api_version = string_field(root, "apiVersion")?
        .ok_or(ManifestError::MissingField("apiVersion"))?;
    let kind = string_field(root, "kind")?.ok_or(ManifestError::MissingField("kind"))?;
    let type_descriptor = TypeDescriptor::parse(&api_version, &kind)?;
    let meta = object_meta(root)?;

    Ok(Some(DecodedDocument {
        object,
        type_descriptor,
        meta,
    }))
}

/// Re-serialize a decoded object into its canonical text.
///
/// Mapping keys come out sorted and scalars use a single quoting style, so two
/// documents that only differ in formatting normalize to the same text.
pub fn normalize(object: &Value) -> ManifestResult<String> {
    let canonical: serde_json::Value = serde_json::to_value(object)?;
    serde_yaml::to_string(&canonical).map_err(|err| ManifestError::Normalize(err.to_string()))
}

fn object_meta(root: &Mapping) -> ManifestResult<ObjectMeta> {
    let metadata = match root.get("metadata") {
        None | Some(Value::Null) => return Ok(ObjectMeta::default()),
        Some(Value::Mapping(map)) => map,
        Some(_) => {
            return Err(ManifestError::TypeMismatch {
                field: "metadata",
                expected: "a mapping",
            });
        }
    };

    Ok(ObjectMeta {
        name: string_field(metadata, "name")?.unwrap_or_default(),
        namespace: string_field(metadata, "namespace")?.unwrap_or_default(),
        generate_name: string_field(metadata, "generateName")?.unwrap_or_default(),
    })
}

fn string_field(map: &Mapping, field: &'static str) -> ManifestResult<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ManifestError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}
