/// Confetti layer for the acceptance celebration
///
/// A repeating timer with a deadline: from launch, a pair of side bursts
/// fires every 250 ms until the 5 s run is over, each burst smaller than
/// the last. Particles live in window-relative coordinates and integrate
/// simple velocity/gravity/drag physics on the shared tick clock.

use std::f32::consts::TAU;

use cgmath::Vector2;
use iced::mouse::Cursor;
use iced::time::{Duration, Instant};
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size, Vector};
use rand::Rng;

use crate::palette;
use crate::Message;

/// Spacing between bursts
const BURST_INTERVAL: Duration = Duration::from_millis(250);

/// Total time bursts keep firing after launch
const RUN_DURATION: Duration = Duration::from_secs(5);

/// Particles per side at full strength; decays to zero over the run
const MAX_BURST: f32 = 50.0;

/// Seconds a single ribbon stays alive
const PARTICLE_LIFETIME: f32 = 1.8;

/// Downward pull, in window-heights per second squared
const GRAVITY: f32 = 0.9;

/// Velocity kept after one second of drag
const DRAG: f32 = 0.35;

struct Particle {
    /// Window-relative position (0..1 on both axes)
    position: Vector2<f32>,
    velocity: Vector2<f32>,
    color: Color,
    /// Ribbon width in px
    size: f32,
    rotation: f32,
    spin: f32,
    age: f32,
}

#[derive(Clone, Copy)]
struct Run {
    started: Instant,
    last_burst: Instant,
}

pub struct Confetti {
    particles: Vec<Particle>,
    run: Option<Run>,
    last_tick: Option<Instant>,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            run: None,
            last_tick: None,
        }
    }

    /// Begin a celebration run, firing the first bursts immediately
    pub fn launch(&mut self, now: Instant, rng: &mut impl Rng) {
        self.run = Some(Run {
            started: now,
            last_burst: now,
        });
        self.last_tick = Some(now);
        self.spawn_bursts(now, rng);
    }

    /// True while bursts are still due or ribbons are still falling
    pub fn is_active(&self) -> bool {
        self.run.is_some() || !self.particles.is_empty()
    }

    /// Advance physics and fire any burst that has come due
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        let dt = match self.last_tick {
            Some(previous) => now.duration_since(previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);

        if dt > 0.0 {
            let drag = DRAG.powf(dt);
            for particle in &mut self.particles {
                particle.velocity.y += GRAVITY * dt;
                particle.velocity *= drag;
                particle.position += particle.velocity * dt;
                particle.rotation += particle.spin * dt;
                particle.age += dt;
            }
            self.particles
                .retain(|p| p.age < PARTICLE_LIFETIME && p.position.y < 1.3);
        }

        if let Some(run) = self.run {
            if now.duration_since(run.started) >= RUN_DURATION {
                // Past the deadline: no more bursts, let the rest fall
                self.run = None;
            } else if now.duration_since(run.last_burst) >= BURST_INTERVAL {
                self.run = Some(Run {
                    started: run.started,
                    last_burst: now,
                });
                self.spawn_bursts(now, rng);
            }
        }
    }

    /// One burst from each side, sized by how much of the run is left
    fn spawn_bursts(&mut self, now: Instant, rng: &mut impl Rng) {
        let Some(run) = self.run else { return };

        let total = RUN_DURATION.as_secs_f32();
        let left = (total - now.duration_since(run.started).as_secs_f32()).max(0.0);
        let count = (MAX_BURST * left / total).ceil() as usize;

        for origin_x in [rng.gen_range(0.1..0.3), rng.gen_range(0.7..0.9)] {
            // Start a bit above a random height so ribbons rain down
            let origin = Vector2::new(origin_x, rng.gen::<f32>() - 0.2);

            for _ in 0..count {
                let angle = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(0.15..0.5);

                self.particles.push(Particle {
                    position: origin,
                    velocity: Vector2::new(angle.cos(), angle.sin()) * speed,
                    color: palette::CONFETTI[rng.gen_range(0..palette::CONFETTI.len())],
                    size: rng.gen_range(6.0..12.0),
                    rotation: rng.gen_range(0.0..TAU),
                    spin: rng.gen_range(-6.0..6.0),
                    age: 0.0,
                });
            }
        }
    }

    #[cfg(test)]
    fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

impl canvas::Program<Message> for Confetti {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for particle in &self.particles {
            let fade = (1.0 - particle.age / PARTICLE_LIFETIME).clamp(0.0, 1.0);
            let (width, height) = (particle.size, particle.size * 0.6);

            frame.with_save(|frame| {
                frame.translate(Vector::new(
                    particle.position.x * bounds.width,
                    particle.position.y * bounds.height,
                ));
                frame.rotate(particle.rotation);
                frame.fill_rectangle(
                    Point::new(-width / 2.0, -height / 2.0),
                    Size::new(width, height),
                    palette::with_alpha(particle.color, fade),
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_launch_fires_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::new();
        assert!(!confetti.is_active());

        confetti.launch(Instant::now(), &mut rng);

        assert!(confetti.is_active());
        // Full-strength opening: 50 ribbons per side
        assert_eq!(confetti.particle_count(), 100);
    }

    #[test]
    fn test_bursts_wait_for_the_interval() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut confetti = Confetti::new();
        let t0 = Instant::now();

        confetti.launch(t0, &mut rng);
        let opening = confetti.particle_count();

        confetti.tick(t0 + Duration::from_millis(100), &mut rng);
        assert_eq!(confetti.particle_count(), opening);

        confetti.tick(t0 + Duration::from_millis(300), &mut rng);
        assert!(confetti.particle_count() > opening);
    }

    #[test]
    fn test_late_bursts_are_smaller() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut confetti = Confetti::new();
        let t0 = Instant::now();

        confetti.launch(t0, &mut rng);

        // By 4.75 s the opening ribbons have expired; the fresh burst
        // carries only the decayed count
        confetti.tick(t0 + Duration::from_millis(4750), &mut rng);
        assert!(confetti.particle_count() > 0);
        assert!(confetti.particle_count() < 100);
    }

    #[test]
    fn test_run_stops_at_the_deadline() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut confetti = Confetti::new();
        let t0 = Instant::now();

        confetti.launch(t0, &mut rng);

        // Past the deadline and past every particle's lifetime
        confetti.tick(t0 + Duration::from_millis(5100), &mut rng);
        confetti.tick(t0 + Duration::from_millis(7000), &mut rng);

        assert!(!confetti.is_active());
        assert_eq!(confetti.particle_count(), 0);
    }
}
