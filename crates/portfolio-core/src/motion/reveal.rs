//! One-shot scroll reveal.
//!
//! [`RevealOnce`] watches registered elements and fires each one at most
//! once, when its top edge rises past a fraction of the viewport height.
//! Firing unregisters the element and starts its reveal timeline, so later
//! scroll passes never replay it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use super::presets;
use super::timeline::{Pose, Timeline};

/// Fraction of the viewport height the element's top must cross.
pub const REVEAL_THRESHOLD: f32 = 0.8;

#[derive(Debug)]
pub struct RevealOnce<K> {
    threshold: f32,
    pending: HashSet<K>,
    revealed: HashMap<K, Timeline>,
    hidden: Pose,
}

impl<K: Eq + Hash + Clone> Default for RevealOnce<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> RevealOnce<K> {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            pending: HashSet::new(),
            revealed: HashMap::new(),
            hidden: presets::reveal().pose(presets::ITEM),
        }
    }

    /// Start watching `key`. Returns false if it is already watched or was
    /// revealed earlier in this visit.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains_key(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Report an element's position. `top` is the distance from the top of
    /// the viewport to the element's top edge, in the same unit as
    /// `viewport_height`. Returns true if this report fired the reveal.
    pub fn report(&mut self, key: &K, top: f32, viewport_height: f32) -> bool {
        if top > viewport_height * self.threshold || !self.pending.remove(key) {
            return false;
        }
        self.revealed.insert(key.clone(), presets::reveal());
        true
    }

    /// Report a batch of positions; returns the keys that fired.
    pub fn report_all<'a, I>(&mut self, positions: I, viewport_height: f32) -> Vec<K>
    where
        I: IntoIterator<Item = (&'a K, f32)>,
        K: 'a,
    {
        positions
            .into_iter()
            .filter(|(key, top)| self.report(key, *top, viewport_height))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.revealed.values().any(Timeline::is_active)
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut moved = false;
        for timeline in self.revealed.values_mut() {
            moved |= timeline.advance(dt);
        }
        moved
    }

    /// Hidden while pending, animating once revealed, at rest if unknown.
    pub fn pose(&self, key: &K) -> Pose {
        if self.pending.contains(key) {
            return self.hidden;
        }
        self.revealed
            .get(key)
            .map(|t| t.pose(presets::ITEM))
            .unwrap_or_default()
    }

    /// Release every pending registration and stop running reveals.
    /// Returns how many registrations were still pending.
    pub fn disconnect(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        for timeline in self.revealed.values_mut() {
            timeline.kill();
        }
        count
    }
}
