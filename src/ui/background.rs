/// Ambient animated backdrop
///
/// Sits below every screen: a night-sky gradient wash, three slowly
/// drifting glow orbs, a field of floating sparks, and a soft glow that
/// follows the cursor. Layered translucent discs stand in for the blur
/// a browser would apply.

use std::f32::consts::{PI, TAU};

use cgmath::Vector2;
use iced::mouse::Cursor;
use iced::time::Instant;
use iced::widget::canvas::{self, gradient, Gradient, Path};
use iced::{Color, Point, Rectangle};
use rand::Rng;

use crate::palette;
use crate::Message;

/// How many sparks float across the window
const SPARK_COUNT: usize = 20;

/// How far a spark rises before wrapping, in px
const SPARK_RISE: f32 = 140.0;

struct Orb {
    /// Anchor in window-relative coordinates (may sit off-screen)
    anchor: Vector2<f32>,
    radius: f32,
    color: Color,
    /// Drift amplitude in px
    sway: Vector2<f32>,
    /// Seconds per drift loop
    period: f32,
    phase: f32,
}

struct Spark {
    anchor: Vector2<f32>,
    size: f32,
    period: f32,
    phase: f32,
}

pub struct Backdrop {
    start: Instant,
    /// Updated from the tick clock every frame
    pub now: Instant,
    orbs: [Orb; 3],
    sparks: Vec<Spark>,
}

impl Backdrop {
    pub fn new(now: Instant, rng: &mut impl Rng) -> Self {
        let orbs = [
            Orb {
                anchor: Vector2::new(-0.05, -0.05),
                radius: 260.0,
                color: palette::ROSE_500,
                sway: Vector2::new(30.0, 50.0),
                period: 15.0,
                phase: 0.0,
            },
            Orb {
                anchor: Vector2::new(1.05, 1.05),
                radius: 310.0,
                color: palette::INDIGO_500,
                sway: Vector2::new(40.0, 60.0),
                period: 18.0,
                phase: 1.3,
            },
            Orb {
                anchor: Vector2::new(0.42, 0.55),
                radius: 160.0,
                color: palette::PURPLE_400,
                sway: Vector2::new(50.0, 30.0),
                period: 20.0,
                phase: 2.6,
            },
        ];

        let sparks = (0..SPARK_COUNT)
            .map(|_| Spark {
                anchor: Vector2::new(rng.gen::<f32>(), rng.gen::<f32>()),
                size: rng.gen_range(1.0..5.0),
                period: rng.gen_range(10.0..20.0),
                phase: rng.gen::<f32>(),
            })
            .collect();

        Self {
            start: now,
            now,
            orbs,
            sparks,
        }
    }

    fn elapsed(&self) -> f32 {
        self.now.duration_since(self.start).as_secs_f32()
    }
}

impl canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let t = self.elapsed();
        let (w, h) = (bounds.width, bounds.height);

        // Night-sky wash, corner to corner
        let wash = gradient::Linear::new(Point::ORIGIN, Point::new(w, h))
            .add_stop(0.0, palette::INDIGO_900)
            .add_stop(0.5, palette::mix(palette::PURPLE_900, palette::SLATE_900, 0.35))
            .add_stop(1.0, palette::SLATE_900);
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Gradient::Linear(wash));

        // Drifting glow orbs
        for orb in &self.orbs {
            let angle = t / orb.period * TAU + orb.phase;
            let center = Point::new(
                orb.anchor.x * w + angle.cos() * orb.sway.x,
                orb.anchor.y * h + angle.sin() * orb.sway.y,
            );

            for (scale, alpha) in [(1.0, 0.05), (0.7, 0.06), (0.45, 0.08), (0.22, 0.10)] {
                frame.fill(
                    &Path::circle(center, orb.radius * scale),
                    palette::with_alpha(orb.color, alpha),
                );
            }
        }

        // Floating sparks, rising and wrapping
        for spark in &self.sparks {
            let cycle = (t / spark.period + spark.phase).fract();
            let x = spark.anchor.x * w + (cycle * TAU).sin() * 12.0;
            let y = (spark.anchor.y * h - cycle * SPARK_RISE).rem_euclid(h.max(1.0));
            let alpha = 0.15 + 0.3 * (cycle * PI).sin();

            frame.fill(
                &Path::circle(Point::new(x, y), spark.size * 0.5),
                palette::with_alpha(Color::WHITE, alpha),
            );
        }

        // Cursor glow
        if let Some(position) = cursor.position_in(bounds) {
            for (radius, alpha) in [(190.0, 0.03), (120.0, 0.04), (60.0, 0.06)] {
                frame.fill(
                    &Path::circle(position, radius),
                    palette::with_alpha(palette::ROSE_400, alpha),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
