//! A single thrown banknote
//!
//! Notes own their face value and peak-height tracking; motion itself
//! belongs to the physics capability, which the session reads positions
//! from once per frame.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::Rect;
use crate::consts::*;
use crate::currency::CurrencyDefinition;
use crate::physics::{BodyHandle, PhysicsWorld};

/// A live projectile note
#[derive(Debug, Clone)]
pub struct Note {
    pub id: u32,
    /// Body owned by the physics capability
    pub handle: BodyHandle,
    /// Face value, drawn uniformly from the active currency
    pub denomination: u32,
    /// Texture key aligned with the drawn denomination
    pub asset_key: &'static str,
    /// Spawn position (screen space, y grows downward)
    pub origin: Vec2,
    /// Last position read from physics
    pub pos: Vec2,
    /// Highest point reached so far; monotonically non-increasing
    pub peak_y: f32,
    pub alive: bool,
}

impl Note {
    /// Spawn a note at `origin`, drawing a denomination uniformly at
    /// random from `currency`.
    pub fn spawn(
        rng: &mut Pcg32,
        id: u32,
        handle: BodyHandle,
        origin: Vec2,
        currency: &'static CurrencyDefinition,
    ) -> Self {
        let index = rng.random_range(0..currency.note_count());
        Self {
            id,
            handle,
            denomination: currency.denominations[index],
            asset_key: currency.asset_keys[index],
            origin,
            pos: origin,
            peak_y: origin.y,
            alive: true,
        }
    }

    /// Fling the note: one-shot impulse with a random upward kick and spin.
    /// Gravity from here on is the physics capability's job.
    pub fn launch(&self, rng: &mut Pcg32, physics: &mut dyn PhysicsWorld) {
        let vx = rng.random_range(-LAUNCH_VX_MAX..=LAUNCH_VX_MAX);
        let vy = rng.random_range(LAUNCH_VY_MIN..=LAUNCH_VY_MAX);
        let spin = rng.random_range(-LAUNCH_SPIN_MAX..=LAUNCH_SPIN_MAX);
        physics.apply_impulse(self.handle, vx, vy, spin);
    }

    /// Per-frame update with the position read from physics. Marks the
    /// note dead once it leaves `bounds` inflated by the off-screen
    /// margin; death is terminal.
    pub fn tick(&mut self, current: Vec2, bounds: &Rect) {
        self.pos = current;
        self.peak_y = self.peak_y.min(current.y);
        if !bounds.inflate(OFFSCREEN_MARGIN).contains(current) {
            self.alive = false;
        }
    }

    /// Score contribution: height climbed from the bottom of the viewport
    /// plus the note's face value. Reads the tracked peak, so the result
    /// depends on when the caller takes it.
    pub fn score_value(&self, reference_height: f32) -> u32 {
        let height_reached = (reference_height - self.peak_y).max(0.0);
        (height_reached / HEIGHT_DIVISOR).floor() as u32 + self.denomination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{CurrencyCode, CurrencyDefinition};
    use crate::physics::ArcadePhysics;
    use rand::SeedableRng;

    fn spawn_note(rng: &mut Pcg32, world: &mut ArcadePhysics, x: f32, y: f32) -> Note {
        let handle = world.spawn(x, y);
        Note::spawn(
            rng,
            1,
            handle,
            Vec2::new(x, y),
            CurrencyDefinition::get(CurrencyCode::Bgn),
        )
    }

    #[test]
    fn test_spawn_draws_known_denomination() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut world = ArcadePhysics::new();
        let def = CurrencyDefinition::get(CurrencyCode::Bgn);
        for _ in 0..50 {
            let note = spawn_note(&mut rng, &mut world, 180.0, 600.0);
            let index = def
                .denominations
                .iter()
                .position(|&d| d == note.denomination)
                .expect("drawn denomination not in currency");
            assert_eq!(note.asset_key, def.asset_keys[index]);
        }
    }

    #[test]
    fn test_launch_impulse_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut world = ArcadePhysics::new();
        for _ in 0..50 {
            let note = spawn_note(&mut rng, &mut world, 180.0, 600.0);
            note.launch(&mut rng, &mut world);
            world.step(SIM_DT);
            let pos = world.position(note.handle).unwrap();
            // Strong upward kick: must have risen on the first step
            assert!(pos.y < 600.0);
            // Horizontal drift bounded by the impulse range
            assert!((pos.x - 180.0).abs() <= LAUNCH_VX_MAX * SIM_DT + 0.001);
        }
    }

    #[test]
    fn test_peak_is_monotonic() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut world = ArcadePhysics::new();
        let mut note = spawn_note(&mut rng, &mut world, 180.0, 600.0);
        let bounds = Rect::viewport();

        note.tick(Vec2::new(180.0, 400.0), &bounds);
        assert_eq!(note.peak_y, 400.0);
        // Falling back down must not raise the recorded peak
        note.tick(Vec2::new(180.0, 550.0), &bounds);
        assert_eq!(note.peak_y, 400.0);
        note.tick(Vec2::new(180.0, 140.0), &bounds);
        assert_eq!(note.peak_y, 140.0);
    }

    #[test]
    fn test_offscreen_removal_uses_inflated_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut world = ArcadePhysics::new();
        let bounds = Rect::viewport();

        let mut note = spawn_note(&mut rng, &mut world, 180.0, 600.0);
        // Inside the 100 px margin: still alive
        note.tick(Vec2::new(-99.0, 300.0), &bounds);
        assert!(note.alive);
        // Past the margin: dead, and death is terminal
        note.tick(Vec2::new(-101.0, 300.0), &bounds);
        assert!(!note.alive);
        note.tick(Vec2::new(180.0, 300.0), &bounds);
        assert!(!note.alive);

        // Straight up there is no ceiling concern either way
        let mut high = spawn_note(&mut rng, &mut world, 180.0, 600.0);
        high.tick(Vec2::new(180.0, -99.0), &bounds);
        assert!(high.alive);
        high.tick(Vec2::new(180.0, 741.0), &bounds);
        assert!(!high.alive);
    }

    #[test]
    fn test_score_value_height_plus_denomination() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut world = ArcadePhysics::new();
        let mut note = spawn_note(&mut rng, &mut world, 180.0, 600.0);

        // Peak of 140 on a 640-high viewport: floor(500 / 50) = 10
        note.tick(Vec2::new(180.0, 140.0), &Rect::viewport());
        assert_eq!(note.score_value(640.0), 10 + note.denomination);

        // At spawn time the peak equals the origin
        let fresh = spawn_note(&mut rng, &mut world, 180.0, 600.0);
        assert_eq!(fresh.score_value(640.0), 0 + fresh.denomination);
    }
}
