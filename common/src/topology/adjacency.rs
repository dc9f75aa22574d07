use std::fmt;

use super::endpoint::Endpoint;

/// `local` is cabled to `remote`, as observed in `local`'s own capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectedAdjacency {
    pub local: Endpoint,
    pub remote: Endpoint,
}

impl DirectedAdjacency {
    pub fn new(local: Endpoint, remote: Endpoint) -> Self {
        Self { local, remote }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.remote.clone(), self.local.clone())
    }

    pub fn link(&self) -> CanonicalLink {
        CanonicalLink::new(&self.local, &self.remote)
    }
}

impl fmt::Display for DirectedAdjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.local, self.remote)
    }
}

/// Unordered endpoint pair identifying one physical cable.
///
/// Stored as `(min, max)` so both capture directions produce the same key.
/// A self-loop collapses to `min == max`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalLink {
    low: Endpoint,
    high: Endpoint,
}

impl CanonicalLink {
    pub fn new(a: &Endpoint, b: &Endpoint) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.clone(),
            high: high.clone(),
        }
    }

    pub fn endpoints(&self) -> (&Endpoint, &Endpoint) {
        (&self.low, &self.high)
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_ignores_direction() {
        let forward = DirectedAdjacency::new(
            Endpoint::new("SW1", "Gig 0/1"),
            Endpoint::new("SW2", "Gig 0/24"),
        );
        assert_eq!(forward.link(), forward.reversed().link());
    }

    #[test]
    fn distinct_ports_are_distinct_links() {
        let a = CanonicalLink::new(&Endpoint::new("SW1", "Gig 0/1"), &Endpoint::new("SW2", "Gig 0/24"));
        let b = CanonicalLink::new(&Endpoint::new("SW1", "Gig 0/2"), &Endpoint::new("SW2", "Gig 0/24"));
        assert_ne!(a, b);
    }

    #[test]
    fn self_loop_is_singleton() {
        let e = Endpoint::new("SW1", "Gig 0/1");
        let link = CanonicalLink::new(&e, &e);
        assert!(link.is_self_loop());
        assert_eq!(link.endpoints(), (&e, &e));
    }
}
