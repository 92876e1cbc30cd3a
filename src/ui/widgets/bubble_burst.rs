// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the live transition overlays.
//!
//! Each particle waits for its delay, then rises from just below the bottom
//! edge to just above the top edge while fading out.

use crate::transition::TransitionEffect;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

/// A particle positioned for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Horizontal center as a fraction of the width.
    pub x_fraction: f32,
    pub diameter: f32,
    /// Rise progress in `[0, 1]`.
    pub progress: f32,
}

impl Sprite {
    /// Center of the bubble inside a frame of `width` x `height`.
    #[must_use]
    pub fn center(&self, width: f32, height: f32) -> Point {
        let radius = self.diameter / 2.0;
        let travel = height + self.diameter;
        Point::new(
            self.x_fraction * width,
            height + radius - travel * self.progress,
        )
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        opacity::BUBBLE * (1.0 - self.progress)
    }
}

/// Particles of `effect` that are visible at `now`. Particles still waiting
/// for their delay are skipped.
#[must_use]
pub fn sprites(effect: &TransitionEffect, now: Instant) -> Vec<Sprite> {
    let elapsed = effect.elapsed(now);
    effect
        .particles()
        .iter()
        .filter_map(|particle| {
            particle.progress(elapsed).map(|progress| Sprite {
                x_fraction: particle.left_percent / 100.0,
                diameter: particle.size,
                progress,
            })
        })
        .collect()
}

/// Snapshot of the overlays given to [`BubbleBurst::new`], ready to draw.
/// Overlays past their lifetime at the snapshot instant are left out.
#[derive(Debug, Default)]
pub struct BubbleBurst {
    sprites: Vec<Sprite>,
}

impl BubbleBurst {
    #[must_use]
    pub fn new<'a>(overlays: impl IntoIterator<Item = &'a TransitionEffect>, now: Instant) -> Self {
        Self {
            sprites: overlays
                .into_iter()
                .filter(|effect| !effect.is_expired(now))
                .flat_map(|effect| sprites(effect, now))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for BubbleBurst {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for sprite in &self.sprites {
            let alpha = sprite.alpha();
            if alpha <= 0.0 {
                continue;
            }
            let bubble = Path::circle(
                sprite.center(bounds.width, bounds.height),
                sprite.diameter / 2.0,
            );
            frame.fill(
                &bubble,
                Color {
                    a: alpha * 0.5,
                    ..palette::WHITE
                },
            );
            frame.stroke(
                &bubble,
                Stroke::default().with_width(2.0).with_color(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OVERLAY_LIFETIME;
    use crate::transition::OverlayLayer;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn sprite_starts_below_and_ends_above_frame() {
        let sprite = Sprite {
            x_fraction: 0.5,
            diameter: 40.0,
            progress: 0.0,
        };
        assert_relative_eq!(sprite.center(200.0, 100.0).y, 120.0);
        assert_relative_eq!(sprite.center(200.0, 100.0).x, 100.0);

        let done = Sprite {
            progress: 1.0,
            ..sprite
        };
        assert_relative_eq!(done.center(200.0, 100.0).y, -20.0);
        assert_relative_eq!(done.alpha(), 0.0);
    }

    #[test]
    fn particles_waiting_on_their_delay_are_hidden() {
        let mut rng = StdRng::seed_from_u64(11);
        let start = Instant::now();
        let mut layer = OverlayLayer::new();
        layer.spawn(&mut rng, start);

        let effect = layer.iter().next().unwrap();
        let at_start = sprites(effect, start);
        let waiting = effect
            .particles()
            .iter()
            .filter(|p| p.delay_secs > 0.0)
            .count();
        assert_eq!(at_start.len(), effect.particles().len() - waiting);
    }

    #[test]
    fn all_particles_visible_after_max_delay() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        let mut layer = OverlayLayer::new();
        layer.spawn(&mut rng, start);
        layer.spawn(&mut rng, start);

        let burst = BubbleBurst::new(&layer, start + Duration::from_millis(600));
        assert_eq!(burst.sprites.len(), 2 * crate::config::PARTICLE_COUNT);
    }

    #[test]
    fn expired_overlay_draws_nothing_before_disposal() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let mut layer = OverlayLayer::new();
        layer.spawn(&mut rng, start);

        assert!(!BubbleBurst::new(&layer, start + Duration::from_millis(600)).is_empty());
        assert!(BubbleBurst::new(&layer, start + OVERLAY_LIFETIME).is_empty());
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn empty_layer_draws_nothing() {
        assert!(BubbleBurst::new(&OverlayLayer::new(), Instant::now()).is_empty());
    }
}
