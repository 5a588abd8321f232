//! Owned controller tying the trackers to the publisher.
//!
//! A host constructs one `Motion` on mount, forwards raw events to it and
//! calls [`unmount`](Motion::unmount) on teardown. Every handler that changes
//! state publishes a fresh snapshot before returning.

use crate::config::MotionConfig;
use crate::error::Result;
use crate::geometry::{ScrollGeometryTracker, SectionGeometry};
use crate::pointer::PointerTracker;
use crate::publisher::{ProgressPublisher, ProgressSnapshot, SubscriptionId};
use crate::scroll::{ScrollSmoother, Tick};
use crate::section::{IntersectionEntry, SectionId, SectionObserver, Tracking};

pub struct Motion {
    smoother: ScrollSmoother,
    pointer: PointerTracker,
    observer: SectionObserver,
    geometry: ScrollGeometryTracker,
    publisher: ProgressPublisher,
    mounted: bool,
}

impl Motion {
    pub fn new(config: MotionConfig, initial_scroll: f64) -> Result<Self> {
        config.validate()?;
        let mut observer = SectionObserver::new(&config);
        for id in SectionId::ALL {
            if id.tracking() == Tracking::Intersection {
                observer.observe(id);
            }
        }
        let mut publisher = ProgressPublisher::new();
        let smoother = ScrollSmoother::new(initial_scroll, &config);
        publisher.set_scroll(smoother.state());
        Ok(Self {
            smoother,
            pointer: PointerTracker::new(),
            observer,
            geometry: ScrollGeometryTracker::new(SectionId::Skills, &config),
            publisher,
            mounted: true,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn observer(&self) -> &SectionObserver {
        &self.observer
    }

    pub fn geometry_section(&self) -> SectionId {
        self.geometry.section()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&ProgressSnapshot) + 'static) -> SubscriptionId {
        self.publisher.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.publisher.unsubscribe(id)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.publisher.snapshot()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.smoother.is_pending()
    }

    /// Arm the smoothing loop. Returns `true` if the host must request a frame.
    pub fn start(&mut self) -> bool {
        self.mounted && self.smoother.start()
    }

    /// The host could not schedule the frame it was asked for. Clears the
    /// outstanding request so the next scroll event wakes the loop again.
    pub fn frame_dropped(&mut self) {
        if self.smoother.is_pending() {
            log::debug!("[motion] frame request dropped");
        }
        self.smoother.cancel();
    }

    /// Raw scroll event. `geometry` is the current read of the long section,
    /// if it is in the document. Returns `true` if the host must request a
    /// frame.
    pub fn on_scroll(&mut self, offset: f64, geometry: Option<SectionGeometry>) -> bool {
        if !self.mounted {
            return false;
        }
        let schedule = self.smoother.on_raw_scroll(offset);
        if let Some(g) = geometry {
            self.geometry.update(&g, self.publisher.sections_mut());
        }
        self.publisher.set_scroll(self.smoother.state());
        self.publisher.publish();
        schedule
    }

    /// Re-read the long section without a scroll event, e.g. on mount or
    /// resize.
    pub fn on_geometry(&mut self, geometry: SectionGeometry) {
        if !self.mounted {
            return;
        }
        self.geometry.update(&geometry, self.publisher.sections_mut());
        self.publisher.publish();
    }

    /// Animation frame callback. On [`Tick::Continue`] the host must request
    /// the next frame.
    pub fn on_frame(&mut self) -> Tick {
        if !self.mounted {
            return Tick::Settled;
        }
        let tick = self.smoother.tick();
        self.publisher.set_scroll(self.smoother.state());
        self.publisher.publish();
        tick
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> bool {
        if !self.mounted
            || !self
                .pointer
                .on_pointer_move(client_x, client_y, viewport_width, viewport_height)
        {
            return false;
        }
        self.publisher.set_pointer(self.pointer.state());
        self.publisher.publish();
        true
    }

    /// Apply one intersection callback batch, then publish once.
    pub fn on_intersections(&mut self, batch: &[IntersectionEntry]) -> usize {
        if !self.mounted {
            return 0;
        }
        let applied = self.observer.apply(batch, self.publisher.sections_mut());
        if applied > 0 {
            self.publisher.publish();
        }
        applied
    }

    /// Stop everything. Progress freezes at its last value and later events
    /// are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.observer.disconnect();
        self.smoother.cancel();
        self.publisher.clear();
        log::info!("[motion] unmounted");
    }
}
