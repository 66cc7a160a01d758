use std::{collections::HashSet, hash::Hash};

/// Permanent scroll-reveal marking.
///
/// An element is revealed the first time it is seen intersecting the viewport
/// at or above `threshold`. Later observations never undo it.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Feeds one intersection observation. Returns true only when this call
    /// revealed the element, so the caller can stop watching it.
    pub fn observe(&mut self, key: K, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed.insert(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_idempotent() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(tracker.observe("about", true, 0.5));
        assert!(!tracker.observe("about", true, 0.9));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_revealed(&"about"));
    }

    #[test]
    fn test_leaving_viewport_keeps_reveal() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("skills", true, 0.2);
        assert!(!tracker.observe("skills", false, 0.0));
        assert!(tracker.is_revealed(&"skills"));
    }

    #[test]
    fn test_threshold() {
        let mut tracker = RevealTracker::new(0.25);
        assert!(!tracker.observe("contact", true, 0.1));
        assert!(!tracker.is_revealed(&"contact"));
        assert!(tracker.observe("contact", true, 0.25));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTracker::<u32>::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTracker::<u32>::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut tracker = RevealTracker::new(0.0);
        assert!(tracker.observe(1, true, 0.0));
        assert!(tracker.observe(2, true, 0.0));
        assert!(!tracker.is_revealed(&3));
        assert_eq!(tracker.len(), 2);
    }
}
