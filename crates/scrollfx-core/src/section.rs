//! Tracked page sections and intersection-ratio progress.

use crate::config::MotionConfig;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// The fixed set of sections whose progress drives the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Intro,
    Skills,
    Projects,
    Contact,
}

/// How a section's progress is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracking {
    /// Visible-area ratio, bounded [0, 1].
    Intersection,
    /// Scroll geometry of a multi-viewport section, bounded [0, overshoot].
    Geometry,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Intro,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tracking(self) -> Tracking {
        match self {
            SectionId::Skills => Tracking::Geometry,
            _ => Tracking::Intersection,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Intro => "intro",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Last known progress of every section. Untouched sections read 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionProgress([f32; 5]);

impl SectionProgress {
    #[inline]
    pub fn get(&self, id: SectionId) -> f32 {
        self.0[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: SectionId, progress: f32) {
        self.0[id.index()] = progress;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, f32)> + '_ {
        SectionId::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}

/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Fraction of `rect`'s area inside a `viewport_width` x `viewport_height`
/// viewport anchored at the origin.
pub fn intersection_ratio(rect: &Rect, viewport_width: f32, viewport_height: f32) -> f32 {
    let area = rect.area();
    if area <= 0.0 {
        return 0.0;
    }
    let w = (rect.right().min(viewport_width) - rect.left.max(0.0)).max(0.0);
    let h = (rect.bottom().min(viewport_height) - rect.top.max(0.0)).max(0.0);
    ((w * h) / area).clamp(0.0, 1.0)
}

/// Evenly spaced thresholds `0, 1/n, .., 1`; a callback fires whenever a
/// ratio change crosses one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    steps: usize,
}

impl Thresholds {
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    /// The full list, as handed to a host intersection observer.
    pub fn values(&self) -> Vec<f64> {
        (0..=self.steps)
            .map(|i| i as f64 / self.steps as f64)
            .collect()
    }

    // Index of the band the ratio sits in; thresholds are inclusive below.
    fn band(&self, ratio: f32) -> usize {
        (ratio.clamp(0.0, 1.0) * self.steps as f32).floor() as usize
    }

    pub fn crossed(&self, previous: f32, current: f32) -> bool {
        self.band(previous) != self.band(current)
    }
}

/// One reported (section, visible ratio) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub section: SectionId,
    pub ratio: f32,
}

/// All entries delivered by one sampling callback. Applied as a unit.
pub type IntersectionBatch = SmallVec<[IntersectionEntry; 5]>;

/// Visibility-ratio progress for the intersection-tracked sections.
#[derive(Clone, Debug)]
pub struct SectionObserver {
    thresholds: Thresholds,
    // Last ratio seen per tracked section; `None` until first reported.
    tracked: FnvHashMap<SectionId, Option<f32>>,
    connected: bool,
}

impl SectionObserver {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            thresholds: Thresholds::new(config.threshold_steps),
            tracked: FnvHashMap::default(),
            connected: true,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn observe(&mut self, section: SectionId) {
        self.tracked.entry(section).or_insert(None);
    }

    pub fn is_tracked(&self, section: SectionId) -> bool {
        self.tracked.contains_key(&section)
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stop observing. Progress values freeze at their last state.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.tracked.clear();
    }

    /// Host-side sampling: report every tracked section whose ratio crossed a
    /// threshold since the last sample, and every section on its first
    /// sample. Used where no native observer exists.
    pub fn sample(
        &mut self,
        rects: &[(SectionId, Rect)],
        viewport_width: f32,
        viewport_height: f32,
    ) -> IntersectionBatch {
        let mut batch = IntersectionBatch::new();
        if !self.connected {
            return batch;
        }
        for (section, rect) in rects {
            let Some(last) = self.tracked.get_mut(section) else {
                continue;
            };
            let ratio = intersection_ratio(rect, viewport_width, viewport_height);
            let report = match *last {
                None => true,
                Some(previous) => self.thresholds.crossed(previous, ratio),
            };
            if report {
                *last = Some(ratio);
                batch.push(IntersectionEntry {
                    section: *section,
                    ratio,
                });
            }
        }
        batch
    }

    /// Write every reported ratio into `progress` before returning, so no
    /// reader sees half a batch. Unreported sections keep their value and
    /// geometry-tracked sections are never written here.
    pub fn apply(&mut self, batch: &[IntersectionEntry], progress: &mut SectionProgress) -> usize {
        if !self.connected {
            return 0;
        }
        let mut applied = 0;
        for entry in batch {
            if entry.section.tracking() != Tracking::Intersection {
                continue;
            }
            if let Some(last) = self.tracked.get_mut(&entry.section) {
                let ratio = entry.ratio.clamp(0.0, 1.0);
                *last = Some(ratio);
                progress.set(entry.section, ratio);
                applied += 1;
            }
        }
        applied
    }
}
