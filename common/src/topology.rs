//! # Topology Model
//!
//! * [`endpoint::Endpoint`]: one physical connector, `(device, interface)`.
//! * [`adjacency::DirectedAdjacency`]: "local is cabled to remote", as seen from local.
//! * [`adjacency::CanonicalLink`]: the same cable, independent of the side it was seen from.
//! * [`mapping::AdjacencyMapping`]: insertion-ordered `local -> remote` accumulation.
//! * [`Topology`]: the deduplicated mapping handed to renderers.

pub mod adjacency;
pub mod endpoint;
pub mod mapping;

use std::collections::BTreeSet;

pub use adjacency::{CanonicalLink, DirectedAdjacency};
pub use endpoint::{Endpoint, UNNAMED_DEVICE};
pub use mapping::AdjacencyMapping;

/// Deduplicated adjacency set. Holds at most one directed entry per [`CanonicalLink`].
///
/// Only the registry's canonicalization pass builds one; after that it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    links: AdjacencyMapping,
}

impl Topology {
    /// Wraps a mapping that is already free of symmetric duplicates.
    pub fn from_canonical(links: AdjacencyMapping) -> Self {
        Self { links }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Endpoint, &Endpoint)> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, local: &Endpoint) -> Option<&Endpoint> {
        self.links.get(local)
    }

    /// Every device name seen on either end of a surviving entry.
    ///
    /// `None` stands for captures without a device-name marker.
    pub fn nodes(&self) -> BTreeSet<Option<&str>> {
        self.links
            .iter()
            .flat_map(|(local, remote)| [local.device(), remote.device()])
            .collect()
    }

    pub fn as_mapping(&self) -> &AdjacencyMapping {
        &self.links
    }

    pub fn into_mapping(self) -> AdjacencyMapping {
        self.links
    }
}

impl<'a> IntoIterator for &'a Topology {
    type Item = (&'a Endpoint, &'a Endpoint);
    type IntoIter = mapping::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
