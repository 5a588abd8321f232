//! Immutable per-update snapshots and their subscribers.

use crate::pointer::PointerState;
use crate::scroll::ScrollState;
use crate::section::{SectionId, SectionProgress};

/// Everything the render surface needs for one pass, read as a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressSnapshot {
    /// Increments on every publish.
    pub revision: u64,
    pub scroll: ScrollState,
    pub pointer: PointerState,
    pub sections: SectionProgress,
}

impl ProgressSnapshot {
    #[inline]
    pub fn section(&self, id: SectionId) -> f32 {
        self.sections.get(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ProgressSnapshot)>;

/// Owns the section progress map and fans snapshots out to subscribers.
///
/// Only the section observer and the geometry tracker write the map, through
/// [`sections_mut`](ProgressPublisher::sections_mut).
#[derive(Default)]
pub struct ProgressPublisher {
    scroll: ScrollState,
    pointer: PointerState,
    sections: SectionProgress,
    revision: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl ProgressPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&ProgressSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let boxed: Subscriber = Box::new(f);
        self.subscribers.push((id, boxed));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn set_scroll(&mut self, scroll: ScrollState) {
        self.scroll = scroll;
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn sections_mut(&mut self) -> &mut SectionProgress {
        &mut self.sections
    }

    /// The current state, without publishing.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            revision: self.revision,
            scroll: self.scroll,
            pointer: self.pointer,
            sections: self.sections,
        }
    }

    /// Bump the revision and hand the same snapshot to every subscriber, in
    /// subscription order.
    pub fn publish(&mut self) -> ProgressSnapshot {
        self.revision += 1;
        let snap = self.snapshot();
        for (_, f) in self.subscribers.iter_mut() {
            f(&snap);
        }
        snap
    }
}
