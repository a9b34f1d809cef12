//! Manifest loading and resource identity
//!
//! Turns a raw multi-document YAML input into a [`CollectionIndex`]: every
//! document is decoded, given a [`ResourceIdentity`] and stored under its
//! composite [`ResourceKey`].

mod identity;
mod index;
pub mod loader;

pub use identity::{ResourceIdentity, ResourceKey};
pub use index::CollectionIndex;
