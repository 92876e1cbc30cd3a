// SPDX-License-Identifier: MPL-2.0
//! The view controller.
//!
//! [`ViewController`] owns the two pieces of view state (current section and
//! hovered icon) and turns pointer events into state changes. Every section
//! change spawns a bubble burst and defers the actual commit by
//! [`SECTION_COMMIT_DELAY`]; the burst is disposed on its own timer after
//! [`OVERLAY_LIFETIME`]. Both timers live in one [`Scheduler`] and only fire
//! from [`ViewController::tick`], so tests drive time through a
//! [`ManualClock`](crate::timing::ManualClock).
//!
//! The window backdrop is projected onto a [`RootStyle`] on every commit and
//! cleared by [`ViewController::teardown`] or when the controller is dropped.

use crate::config::{DEFAULT_BUBBLES_ENABLED, OVERLAY_LIFETIME, SECTION_COMMIT_DELAY};
use crate::domain::catalog;
use crate::domain::{BackdropClass, HoverTarget, Panel, Section};
use crate::timing::{Clock, Scheduler, SystemClock};
use crate::transition::{LiveOverlays, OverlayId, OverlayLayer};
use crate::ui::backdrop::RootStyle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Work scheduled for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    CommitSection { section: Section, reset_hover: bool },
    DisposeOverlay(OverlayId),
}

/// What a call to [`ViewController::tick`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Last section committed during this tick.
    pub committed: Option<Section>,
    /// Number of overlays removed during this tick.
    pub disposed: usize,
}

impl TickReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_none() && self.disposed == 0
    }
}

#[derive(Debug)]
pub struct ViewController<C: Clock = SystemClock> {
    clock: C,
    rng: StdRng,
    current_section: Section,
    hovered_icon: HoverTarget,
    timers: Scheduler<Deferred>,
    overlays: OverlayLayer,
    root: RootStyle,
    bubbles_enabled: bool,
}

impl ViewController<SystemClock> {
    /// Controller on the wall clock with an OS-seeded random generator.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ViewController<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_rng(clock, StdRng::from_os_rng())
    }

    /// Controller with an explicit random generator, for reproducible bursts.
    #[must_use]
    pub fn with_rng(clock: C, rng: StdRng) -> Self {
        let mut root = RootStyle::new();
        root.apply(Section::default().backdrop());
        Self {
            clock,
            rng,
            current_section: Section::default(),
            hovered_icon: HoverTarget::default(),
            timers: Scheduler::new(),
            overlays: OverlayLayer::new(),
            root,
            bubbles_enabled: DEFAULT_BUBBLES_ENABLED,
        }
    }

    /// Enables or disables the bubble burst. Commits are still deferred.
    pub fn set_bubbles_enabled(&mut self, enabled: bool) {
        self.bubbles_enabled = enabled;
    }

    #[must_use]
    pub fn bubbles_enabled(&self) -> bool {
        self.bubbles_enabled
    }

    // ----------------------------------------------------------------------
    // Operations
    // ----------------------------------------------------------------------

    pub fn hover_icon(&mut self, target: HoverTarget) {
        self.hovered_icon = target;
    }

    pub fn unhover_icon(&mut self) {
        self.hovered_icon = HoverTarget::Default;
    }

    /// Plays the transition and schedules the commit of `section`.
    ///
    /// Navigating home also resets the hovered icon when the commit fires.
    pub fn navigate_to(&mut self, section: Section) {
        let now = self.clock.now();
        if self.bubbles_enabled {
            let overlay = self.overlays.spawn(&mut self.rng, now);
            self.timers
                .schedule(now + OVERLAY_LIFETIME, Deferred::DisposeOverlay(overlay));
        }
        self.timers.schedule(
            now + SECTION_COMMIT_DELAY,
            Deferred::CommitSection {
                section,
                reset_hover: section == Section::Home,
            },
        );
        tracing::debug!(%section, pending = self.timers.len(), "navigation scheduled");
    }

    pub fn go_home(&mut self) {
        self.navigate_to(Section::Home);
    }

    /// Switches to `section` immediately, without a transition.
    pub fn start_at(&mut self, section: Section) {
        self.commit(section, section == Section::Home);
    }

    /// Fires every timer whose deadline has passed, in deadline order.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now();
        let mut report = TickReport::default();
        if self.timers.next_deadline().is_none_or(|deadline| deadline > now) {
            return report;
        }
        for deferred in self.timers.drain_due(now) {
            match deferred {
                Deferred::CommitSection {
                    section,
                    reset_hover,
                } => {
                    self.commit(section, reset_hover);
                    report.committed = Some(section);
                }
                Deferred::DisposeOverlay(id) => {
                    if self.overlays.dispose(id) {
                        report.disposed += 1;
                    }
                }
            }
        }
        report
    }

    /// Removes a live overlay ahead of its timer. Returns `false` if it was
    /// already gone; its timer then fires as a no-op.
    pub fn dispose_overlay(&mut self, id: OverlayId) -> bool {
        self.overlays.dispose(id)
    }

    /// Clears the backdrop and drops pending timers and overlays.
    pub fn teardown(&mut self) {
        self.root.revert();
        self.timers = Scheduler::new();
        self.overlays.clear();
        tracing::debug!("view controller torn down");
    }

    fn commit(&mut self, section: Section, reset_hover: bool) {
        self.current_section = section;
        if reset_hover {
            self.hovered_icon = HoverTarget::Default;
        }
        self.root.apply(section.backdrop());
        tracing::info!(%section, "section committed");
    }

    // ----------------------------------------------------------------------
    // Queries
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn current_section(&self) -> Section {
        self.current_section
    }

    #[must_use]
    pub fn hovered_icon(&self) -> HoverTarget {
        self.hovered_icon
    }

    /// Catalog path of the profile photo for the hovered icon.
    #[must_use]
    pub fn profile_photo(&self) -> &'static str {
        catalog::profile_photo(self.hovered_icon)
    }

    #[must_use]
    pub fn visible_panel(&self) -> Panel {
        self.current_section.panel()
    }

    /// Backdrop currently applied to the root, `None` after teardown.
    #[must_use]
    pub fn backdrop(&self) -> Option<BackdropClass> {
        self.root.active()
    }

    #[must_use]
    pub fn root_style(&self) -> &RootStyle {
        &self.root
    }

    /// Overlays within their lifetime at the clock's current instant. An
    /// overlay whose disposal timer is due but not yet fired is excluded.
    #[must_use]
    pub fn overlays(&self) -> LiveOverlays<'_> {
        self.overlays.live(self.clock.now())
    }

    /// True while a commit or disposal is scheduled or an overlay is live.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.timers.is_empty() || !self.overlays.is_empty()
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }
}

impl<C: Clock> Drop for ViewController<C> {
    fn drop(&mut self) {
        self.root.revert();
    }
}
