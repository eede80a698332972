//! Hover/focus interaction bindings.
//!
//! Each bound element owns one paused [`Timeline`] built from the host's
//! preset. Enter events play it forward, leave events reverse it from the
//! current position. Events for elements that are not bound (never attached,
//! or already disposed) are ignored, which is what releasing a listener
//! means here.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use super::timeline::{Pose, Timeline};

/// Something that can pair an element with a listener and a reversible timeline.
pub trait InteractionBinding<E> {
    /// Bind `element`. An absent element is skipped silently.
    fn attach(&mut self, element: Option<E>) -> Option<Disposer<E>>;
}

/// Handle returned by [`InteractionBinding::attach`].
///
/// Disposing releases the element's listener and timeline together. Calling
/// it again, or after the element was re-attached, does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disposer<K> {
    key: K,
    generation: u64,
}

impl<K: Eq + Hash + Clone> Disposer<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns true if this call released the binding.
    pub fn dispose(&self, host: &mut BindingHost<K>) -> bool {
        host.release(self)
    }
}

#[derive(Debug)]
struct Binding {
    timeline: Timeline,
    generation: u64,
}

/// Owns every binding created for one page or component.
#[derive(Debug)]
pub struct BindingHost<K> {
    preset: fn() -> Timeline,
    bindings: HashMap<K, Binding>,
    next_generation: u64,
}

impl<K: Eq + Hash + Clone> BindingHost<K> {
    /// A host whose bindings all use timelines built by `preset`.
    pub fn new(preset: fn() -> Timeline) -> Self {
        Self {
            preset,
            bindings: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn is_bound(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    /// Pointer-enter or focus. Returns false if `key` is not bound.
    pub fn enter(&mut self, key: &K) -> bool {
        match self.bindings.get_mut(key) {
            Some(binding) => {
                binding.timeline.play();
                true
            }
            None => false,
        }
    }

    /// Pointer-leave or blur. Returns false if `key` is not bound.
    pub fn leave(&mut self, key: &K) -> bool {
        match self.bindings.get_mut(key) {
            Some(binding) => {
                binding.timeline.reverse();
                true
            }
            None => false,
        }
    }

    /// Whether any bound timeline would move on the next frame.
    pub fn is_animating(&self) -> bool {
        self.bindings.values().any(|b| b.timeline.is_active())
    }

    /// Advance every bound timeline. Returns true if any of them moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut moved = false;
        for binding in self.bindings.values_mut() {
            moved |= binding.timeline.advance(dt);
        }
        moved
    }

    /// Pose of `target` inside the timeline bound to `key`; rest pose if unbound.
    pub fn pose(&self, key: &K, target: &str) -> Pose {
        self.bindings
            .get(key)
            .map(|b| b.timeline.pose(target))
            .unwrap_or_default()
    }

    fn release(&mut self, disposer: &Disposer<K>) -> bool {
        let current = self
            .bindings
            .get(&disposer.key)
            .is_some_and(|b| b.generation == disposer.generation);
        if !current {
            return false;
        }
        if let Some(mut binding) = self.bindings.remove(&disposer.key) {
            binding.timeline.kill();
        }
        true
    }

    /// Release every binding. Returns how many were still attached.
    pub fn dispose_all(&mut self) -> usize {
        let count = self.bindings.len();
        for (_, mut binding) in self.bindings.drain() {
            binding.timeline.kill();
        }
        count
    }
}

impl<K: Eq + Hash + Clone> InteractionBinding<K> for BindingHost<K> {
    fn attach(&mut self, element: Option<K>) -> Option<Disposer<K>> {
        let key = element?;
        let generation = self.next_generation;
        self.next_generation += 1;

        let replaced = self.bindings.insert(
            key.clone(),
            Binding {
                timeline: (self.preset)(),
                generation,
            },
        );
        if let Some(mut old) = replaced {
            old.timeline.kill();
        }

        Some(Disposer { key, generation })
    }
}
