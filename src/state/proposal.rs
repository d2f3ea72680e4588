/// The dodging "No" button
///
/// The "No" button lives inside a fixed play area on the proposal card.
/// Every time the pointer reaches it, it teleports to a fresh uniformly
/// random offset measured from the center of the area, the offset range
/// being the area minus the button so the button always stays inside.

use cgmath::Vector2;
use rand::Rng;

/// Logical size of the play area the button roams in
pub const AREA_WIDTH: f32 = 560.0;
pub const AREA_HEIGHT: f32 = 220.0;

/// Approximate rendered size of the "No" button
pub const NO_WIDTH: f32 = 120.0;
pub const NO_HEIGHT: f32 = 52.0;

#[derive(Debug)]
pub struct Proposal {
    /// Current offset of the "No" button from the area center
    offset: Vector2<f32>,
    /// How many times the button has fled
    dodges: u32,
}

impl Default for Proposal {
    fn default() -> Self {
        // Starts right of center, opposite the "YES!" button
        Self {
            offset: Vector2::new(110.0, 0.0),
            dodges: 0,
        }
    }
}

impl Proposal {
    /// Relocate the button to a fresh random offset within the play area
    pub fn dodge(&mut self, rng: &mut impl Rng) {
        let max_x = AREA_WIDTH - NO_WIDTH;
        let max_y = AREA_HEIGHT - NO_HEIGHT;

        self.offset = Vector2::new(
            rng.gen_range(-max_x / 2.0..=max_x / 2.0),
            rng.gen_range(-max_y / 2.0..=max_y / 2.0),
        );
        self.dodges += 1;
    }

    /// Top-left corner of the button within the play area, clamped so the
    /// button can never poke outside it
    pub fn anchor(&self) -> (f32, f32) {
        let x = ((AREA_WIDTH - NO_WIDTH) / 2.0 + self.offset.x).clamp(0.0, AREA_WIDTH - NO_WIDTH);
        let y =
            ((AREA_HEIGHT - NO_HEIGHT) / 2.0 + self.offset.y).clamp(0.0, AREA_HEIGHT - NO_HEIGHT);
        (x, y)
    }

    pub fn dodges(&self) -> u32 {
        self.dodges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(anchor: (f32, f32)) -> bool {
        let (x, y) = anchor;
        (0.0..=AREA_WIDTH - NO_WIDTH).contains(&x) && (0.0..=AREA_HEIGHT - NO_HEIGHT).contains(&y)
    }

    #[test]
    fn test_initial_anchor_is_in_bounds() {
        assert!(in_bounds(Proposal::default().anchor()));
    }

    #[test]
    fn test_every_dodge_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut proposal = Proposal::default();

        for _ in 0..500 {
            proposal.dodge(&mut rng);
            assert!(in_bounds(proposal.anchor()));
        }
        assert_eq!(proposal.dodges(), 500);
    }

    #[test]
    fn test_successive_dodges_move_the_button() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut proposal = Proposal::default();

        proposal.dodge(&mut rng);
        let first = proposal.anchor();
        proposal.dodge(&mut rng);
        let second = proposal.anchor();

        // Independent draws; equal positions are astronomically unlikely
        // and this seed is known to produce distinct ones
        assert_ne!(first, second);
    }
}
