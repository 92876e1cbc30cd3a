// SPDX-License-Identifier: MPL-2.0
//! Decorative bubble burst shown on section changes.
//!
//! A [`TransitionEffect`] is a short-lived overlay of randomly sized bubbles.
//! It never reads or writes view state; the [`OverlayLayer`] only tracks which
//! overlays are still attached so the view can draw them.
//!
//! An overlay stops being live at [`OVERLAY_LIFETIME`] even if its disposal
//! timer has not fired yet; [`OverlayLayer::live`] hides it from then on.

use crate::config::{
    BUBBLE_RISE_SECS, OVERLAY_LIFETIME, PARTICLE_COUNT, PARTICLE_MAX_DELAY_SECS,
    PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE,
};
use rand::Rng;
use std::time::{Duration, Instant};

/// Identifier of an overlay within an [`OverlayLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

/// One bubble of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Diameter in logical pixels, within `[20, 80]`.
    pub size: f32,
    /// Horizontal position in percent of the overlay width, within `[0, 100]`.
    pub left_percent: f32,
    /// Seconds before the bubble starts rising, within `[0, 0.5]`.
    pub delay_secs: f32,
}

impl Particle {
    /// Draws a particle with each parameter uniform in its range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            left_percent: rng.random_range(0.0..=100.0),
            delay_secs: rng.random_range(0.0..=PARTICLE_MAX_DELAY_SECS),
        }
    }

    /// Rise progress in `[0, 1]` after `elapsed`, or `None` while still waiting
    /// for its delay.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let active = elapsed.as_secs_f32() - self.delay_secs;
        if active < 0.0 {
            return None;
        }
        Some((active / BUBBLE_RISE_SECS).min(1.0))
    }
}

/// A burst of particles created at a fixed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEffect {
    id: OverlayId,
    created_at: Instant,
    particles: Vec<Particle>,
}

impl TransitionEffect {
    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Time since creation, saturating at zero for instants before it.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= OVERLAY_LIFETIME
    }
}

/// Overlays currently attached to the window.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    live: Vec<TransitionEffect>,
    next_id: u64,
}

impl OverlayLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and attaches a new burst of [`PARTICLE_COUNT`] particles.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id += 1;
        let particles = (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect();
        self.live.push(TransitionEffect {
            id,
            created_at: now,
            particles,
        });
        id
    }

    /// Detaches an overlay. Returns `false` if it was already gone.
    pub fn dispose(&mut self, id: OverlayId) -> bool {
        match self.live.iter().position(|effect| effect.id == id) {
            Some(pos) => {
                self.live.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, id: OverlayId) -> bool {
        self.live.iter().any(|effect| effect.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionEffect> {
        self.live.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Overlays still within their lifetime at `now`.
    #[must_use]
    pub fn live(&self, now: Instant) -> LiveOverlays<'_> {
        LiveOverlays { layer: self, now }
    }
}

impl<'a> IntoIterator for &'a OverlayLayer {
    type Item = &'a TransitionEffect;
    type IntoIter = std::slice::Iter<'a, TransitionEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

/// The overlays of a layer that have not reached their lifetime.
#[derive(Debug, Clone, Copy)]
pub struct LiveOverlays<'a> {
    layer: &'a OverlayLayer,
    now: Instant,
}

impl<'a> LiveOverlays<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a TransitionEffect> + 'a {
        let now = self.now;
        self.layer
            .live
            .iter()
            .filter(move |effect| !effect.is_expired(now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn contains(&self, id: OverlayId) -> bool {
        self.iter().any(|effect| effect.id == id)
    }
}

impl<'a> IntoIterator for LiveOverlays<'a> {
    type Item = &'a TransitionEffect;
    type IntoIter = Box<dyn Iterator<Item = &'a TransitionEffect> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_creates_fixed_particle_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut layer = OverlayLayer::new();
        for _ in 0..50 {
            layer.spawn(&mut rng, Instant::now());
        }

        for effect in layer.iter() {
            assert_eq!(effect.particles().len(), PARTICLE_COUNT);
            for particle in effect.particles() {
                assert!((20.0..=80.0).contains(&particle.size));
                assert!((0.0..=100.0).contains(&particle.left_percent));
                assert!((0.0..=0.5).contains(&particle.delay_secs));
            }
        }
    }

    #[test]
    fn particles_are_independently_randomized() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut layer = OverlayLayer::new();
        let id = layer.spawn(&mut rng, Instant::now());
        let effect = layer.iter().find(|e| e.id() == id).unwrap();

        let first = effect.particles()[0];
        assert!(effect.particles().iter().skip(1).any(|p| *p != first));
    }

    #[test]
    fn dispose_twice_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut layer = OverlayLayer::new();
        let id = layer.spawn(&mut rng, Instant::now());

        assert!(layer.dispose(id));
        assert!(!layer.dispose(id));
        assert!(layer.is_empty());
    }

    #[test]
    fn overlays_get_distinct_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut layer = OverlayLayer::new();
        let a = layer.spawn(&mut rng, Instant::now());
        let b = layer.spawn(&mut rng, Instant::now());
        assert_ne!(a, b);
        assert_eq!(layer.len(), 2);

        layer.dispose(a);
        assert!(!layer.contains(a));
        assert!(layer.contains(b));
    }

    #[test]
    fn particle_progress_waits_for_delay_then_saturates() {
        let particle = Particle {
            size: 40.0,
            left_percent: 50.0,
            delay_secs: 0.5,
        };
        assert_eq!(particle.progress(Duration::from_millis(400)), None);
        assert_abs_diff_eq!(
            particle.progress(Duration::from_millis(500)).unwrap(),
            0.0,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            particle.progress(Duration::from_secs(10)).unwrap(),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn live_view_drops_overlays_at_lifetime_without_disposal() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut layer = OverlayLayer::new();
        let start = Instant::now();
        let early = layer.spawn(&mut rng, start);
        let late = layer.spawn(&mut rng, start + Duration::from_millis(500));

        let before = layer.live(start + OVERLAY_LIFETIME - Duration::from_millis(1));
        assert_eq!(before.len(), 2);

        let at_lifetime = layer.live(start + OVERLAY_LIFETIME);
        assert!(!at_lifetime.contains(early));
        assert!(at_lifetime.contains(late));
        assert_eq!(layer.len(), 2);

        assert!(layer.live(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn elapsed_saturates_before_creation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer = OverlayLayer::new();
        let now = Instant::now();
        layer.spawn(&mut rng, now + Duration::from_secs(1));
        let effect = layer.iter().next().unwrap();
        assert_eq!(effect.elapsed(now), Duration::ZERO);
    }
}
