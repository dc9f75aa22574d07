//! Insertion-ordered `local -> remote` map.
//!
//! Iteration order drives which capture direction survives deduplication, so
//! an unordered container is never an option here.

use std::collections::HashMap;

use super::adjacency::DirectedAdjacency;
use super::endpoint::Endpoint;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMapping {
    entries: Vec<(Endpoint, Endpoint)>,
    index: HashMap<Endpoint, usize>,
}

impl AdjacencyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `self[local] = remote`, returning the remote it replaced.
    ///
    /// An overwritten key keeps its first-seen position.
    pub fn insert(&mut self, local: Endpoint, remote: Endpoint) -> Option<Endpoint> {
        match self.index.get(&local) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, remote)),
            None => {
                self.index.insert(local.clone(), self.entries.len());
                self.entries.push((local, remote));
                None
            }
        }
    }

    pub fn get(&self, local: &Endpoint) -> Option<&Endpoint> {
        self.index.get(local).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, local: &Endpoint) -> bool {
        self.index.contains_key(local)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn adjacencies(&self) -> impl Iterator<Item = DirectedAdjacency> + '_ {
        self.iter()
            .map(|(local, remote)| DirectedAdjacency::new(local.clone(), remote.clone()))
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Endpoint, Endpoint)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Endpoint, &'a Endpoint);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(local, remote)| (local, remote))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a AdjacencyMapping {
    type Item = (&'a Endpoint, &'a Endpoint);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Endpoint, Endpoint)> for AdjacencyMapping {
    fn from_iter<T: IntoIterator<Item = (Endpoint, Endpoint)>>(iter: T) -> Self {
        let mut mapping = AdjacencyMapping::new();
        for (local, remote) in iter {
            mapping.insert(local, remote);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(device: &str, interface: &str) -> Endpoint {
        Endpoint::new(device, interface)
    }

    #[test]
    fn keeps_insertion_order() {
        let mapping: AdjacencyMapping = [
            (ep("C", "Gig 0/1"), ep("A", "Gig 0/1")),
            (ep("A", "Gig 0/2"), ep("B", "Gig 0/1")),
            (ep("B", "Gig 0/3"), ep("C", "Gig 0/9")),
        ]
        .into_iter()
        .collect();

        let locals: Vec<&str> = mapping.iter().map(|(l, _)| l.device_label()).collect();
        assert_eq!(locals, vec!["C", "A", "B"]);
    }

    #[test]
    fn overwrite_keeps_position_and_latest_value() {
        let mut mapping = AdjacencyMapping::new();
        mapping.insert(ep("X", "Gig 0/1"), ep("Y", "Gig 0/1"));
        mapping.insert(ep("A", "Gig 0/1"), ep("B", "Gig 0/1"));
        let old = mapping.insert(ep("X", "Gig 0/1"), ep("Z", "Gig 0/1"));

        assert_eq!(old, Some(ep("Y", "Gig 0/1")));
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(&ep("X", "Gig 0/1")), Some(&ep("Z", "Gig 0/1")));
        assert_eq!(mapping.iter().next().map(|(l, _)| l.clone()), Some(ep("X", "Gig 0/1")));
    }

    #[test]
    fn clones_are_independent() {
        let mut mapping = AdjacencyMapping::new();
        mapping.insert(ep("X", "Gig 0/1"), ep("Y", "Gig 0/1"));
        let copy = mapping.clone();
        mapping.insert(ep("X", "Gig 0/1"), ep("Z", "Gig 0/1"));

        assert_eq!(copy.get(&ep("X", "Gig 0/1")), Some(&ep("Y", "Gig 0/1")));
    }
}
