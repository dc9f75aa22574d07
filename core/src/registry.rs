//! # Link Registry
//!
//! Accumulates directed adjacencies from every capture and collapses the two
//! observations of each cable into one.
//!
//! Both rules depend on order:
//! * **merge** is last-write-wins per local endpoint;
//! * **canonicalize** keeps whichever direction of a link comes first in the
//!   mapping's iteration order.
//!
//! Captures must therefore be merged one at a time, in a fixed order.

use std::collections::HashSet;

use cdpmap_common::topology::{AdjacencyMapping, CanonicalLink, DirectedAdjacency, Endpoint, Topology};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    mapping: AdjacencyMapping,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records each adjacency in order, overwriting any earlier remote for the same local endpoint.
    pub fn merge<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = DirectedAdjacency>,
    {
        for DirectedAdjacency { local, remote } in records {
            if let Some(previous) = self.mapping.insert(local.clone(), remote) {
                debug!(%local, %previous, "overwriting earlier observation");
            }
        }
    }

    /// Drops every entry whose link was already seen earlier in iteration order.
    ///
    /// The registry keeps the deduplicated mapping, so running it again is a no-op.
    pub fn canonicalize(&mut self) -> Topology {
        let mut seen: HashSet<CanonicalLink> = HashSet::with_capacity(self.mapping.len());
        let mut unique = AdjacencyMapping::new();

        for (local, remote) in &self.mapping {
            if seen.insert(CanonicalLink::new(local, remote)) {
                unique.insert(local.clone(), remote.clone());
            } else {
                trace!(%local, %remote, "dropping reverse observation");
            }
        }

        debug!(
            before = self.mapping.len(),
            after = unique.len(),
            "canonicalized links"
        );
        self.mapping = unique;
        Topology::from_canonical(self.mapping.clone())
    }

    /// Independent copy of the current mapping.
    pub fn snapshot(&self) -> AdjacencyMapping {
        self.mapping.clone()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Endpoint, &Endpoint)> {
        self.mapping.iter()
    }

    pub fn get(&self, local: &Endpoint) -> Option<&Endpoint> {
        self.mapping.get(local)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adj(local: (&str, &str), remote: (&str, &str)) -> DirectedAdjacency {
        DirectedAdjacency::new(
            Endpoint::new(local.0, local.1),
            Endpoint::new(remote.0, remote.1),
        )
    }

    fn sw1_sw2() -> DirectedAdjacency {
        adj(("SW1", "Gig 0/1"), ("SW2", "Gig 0/24"))
    }

    #[test]
    fn last_write_wins() {
        let mut registry = LinkRegistry::new();
        registry.merge([adj(("X", "Gig 0/1"), ("Y", "Gig 0/1"))]);
        registry.merge([adj(("X", "Gig 0/1"), ("Z", "Gig 0/1"))]);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&Endpoint::new("X", "Gig 0/1")),
            Some(&Endpoint::new("Z", "Gig 0/1"))
        );
    }

    #[test]
    fn symmetric_pair_keeps_first_merged() {
        for first_forward in [true, false] {
            let (first, second) = if first_forward {
                (sw1_sw2(), sw1_sw2().reversed())
            } else {
                (sw1_sw2().reversed(), sw1_sw2())
            };

            let mut registry = LinkRegistry::new();
            registry.merge([first.clone()]);
            registry.merge([second]);
            let topology = registry.canonicalize();

            assert_eq!(topology.len(), 1);
            assert_eq!(topology.get(&first.local), Some(&first.remote));
        }
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let mut registry = LinkRegistry::new();
        registry.merge([
            sw1_sw2(),
            adj(("SW1", "Gig 0/2"), ("R1", "Fa 0/0")),
            sw1_sw2().reversed(),
            adj(("R1", "Fa 0/0"), ("SW1", "Gig 0/2")),
        ]);

        let first = registry.canonicalize();
        let second = registry.canonicalize();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn no_duplicate_links_survive() {
        let mut registry = LinkRegistry::new();
        registry.merge([
            sw1_sw2(),
            adj(("SW2", "Gig 0/1"), ("SW3", "Gig 0/1")),
            sw1_sw2().reversed(),
            adj(("SW3", "Gig 0/1"), ("SW2", "Gig 0/1")),
            adj(("SW3", "Gig 0/2"), ("SW1", "Gig 0/3")),
        ]);
        let topology = registry.canonicalize();

        let links: HashSet<CanonicalLink> = topology
            .iter()
            .map(|(local, remote)| CanonicalLink::new(local, remote))
            .collect();
        assert_eq!(links.len(), topology.len());
        assert_eq!(topology.len(), 3);
    }

    #[test]
    fn self_loop_kept_once() {
        let mut registry = LinkRegistry::new();
        registry.merge([adj(("SW1", "Gig 0/1"), ("SW1", "Gig 0/1"))]);
        let topology = registry.canonicalize();

        assert_eq!(topology.len(), 1);
        assert_eq!(topology.nodes().len(), 1);
    }

    #[test]
    fn asymmetric_observation_is_kept() {
        // SW2 reports a different port back, so the two records are separate links.
        let mut registry = LinkRegistry::new();
        registry.merge([sw1_sw2(), adj(("SW2", "Gig 0/24"), ("SW1", "Gig 0/9"))]);

        assert_eq!(registry.canonicalize().len(), 2);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut registry = LinkRegistry::new();
        registry.merge([sw1_sw2()]);
        let snapshot = registry.snapshot();
        registry.merge([adj(("SW1", "Gig 0/1"), ("SW9", "Gig 0/9"))]);

        assert_eq!(
            snapshot.get(&Endpoint::new("SW1", "Gig 0/1")),
            Some(&Endpoint::new("SW2", "Gig 0/24"))
        );
        assert_eq!(registry.entries().count(), 1);
    }

    #[test]
    fn empty_registry_yields_empty_topology() {
        let mut registry = LinkRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.canonicalize().is_empty());
    }
}
