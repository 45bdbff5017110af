//! Projectile motion capability consumed by the session core
//!
//! The core spawns bodies, applies a one-shot launch impulse, and reads
//! positions each frame; it never integrates forces itself. `ArcadePhysics`
//! is the reference implementation: constant downward gravity at a fixed
//! timestep, enough for the headless shell and the session tests.

use glam::Vec2;

use crate::consts::GRAVITY_Y;

/// Opaque handle to a spawned body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Physics seam: spawn, impulse, per-frame position, destroy
pub trait PhysicsWorld {
    fn spawn(&mut self, x: f32, y: f32) -> BodyHandle;
    /// One-shot launch impulse; no further force is applied by the caller
    fn apply_impulse(&mut self, handle: BodyHandle, vx: f32, vy: f32, spin: f32);
    /// Current position, or None once the body is destroyed
    fn position(&self, handle: BodyHandle) -> Option<Vec2>;
    fn destroy(&mut self, handle: BodyHandle);
    /// Advance the simulation; a paused session simply stops calling this
    fn step(&mut self, dt: f32);
}

#[derive(Debug, Clone)]
struct Body {
    id: u32,
    pos: Vec2,
    vel: Vec2,
    angle: f32,
    angular_vel: f32,
}

/// Fixed-step integrator with constant gravity (0, +800) px/s²
#[derive(Debug, Default)]
pub struct ArcadePhysics {
    bodies: Vec<Body>,
    next_id: u32,
}

impl ArcadePhysics {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == handle.0)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == handle.0)
    }

    /// Current rotation of a body, radians
    pub fn angle(&self, handle: BodyHandle) -> Option<f32> {
        self.body(handle).map(|b| b.angle)
    }
}

impl PhysicsWorld for ArcadePhysics {
    fn spawn(&mut self, x: f32, y: f32) -> BodyHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
        });
        BodyHandle(id)
    }

    fn apply_impulse(&mut self, handle: BodyHandle, vx: f32, vy: f32, spin: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.vel = Vec2::new(vx, vy);
            body.angular_vel = spin.to_radians();
        }
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }

    fn destroy(&mut self, handle: BodyHandle) {
        self.bodies.retain(|b| b.id != handle.0);
    }

    fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            body.vel.y += GRAVITY_Y * dt;
            body.pos += body.vel * dt;
            body.angle += body.angular_vel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_impulse_then_gravity_arc() {
        let mut world = ArcadePhysics::new();
        let handle = world.spawn(180.0, 600.0);
        world.apply_impulse(handle, 0.0, -700.0, 0.0);

        // Rises first
        world.step(SIM_DT);
        let early = world.position(handle).unwrap();
        assert!(early.y < 600.0);

        // After enough time gravity wins and it falls past the start
        for _ in 0..240 {
            world.step(SIM_DT);
        }
        let late = world.position(handle).unwrap();
        assert!(late.y > 600.0);
    }

    #[test]
    fn test_spin_rotates_body() {
        let mut world = ArcadePhysics::new();
        let handle = world.spawn(180.0, 600.0);
        assert_eq!(world.angle(handle), Some(0.0));

        // 300 deg/s of spin over one second of steps
        world.apply_impulse(handle, 0.0, -700.0, 300.0);
        for _ in 0..60 {
            world.step(SIM_DT);
        }
        let angle = world.angle(handle).unwrap();
        assert!((angle - 300.0f32.to_radians()).abs() < 0.01);

        world.destroy(handle);
        assert_eq!(world.angle(handle), None);
    }

    #[test]
    fn test_destroy_removes_body() {
        let mut world = ArcadePhysics::new();
        let a = world.spawn(0.0, 0.0);
        let b = world.spawn(10.0, 10.0);
        assert_eq!(world.body_count(), 2);

        world.destroy(a);
        assert_eq!(world.body_count(), 1);
        assert!(world.position(a).is_none());
        assert!(world.position(b).is_some());

        // Destroy is terminal; repeated calls are harmless
        world.destroy(a);
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_handles_stay_distinct() {
        let mut world = ArcadePhysics::new();
        let a = world.spawn(0.0, 0.0);
        world.destroy(a);
        let b = world.spawn(5.0, 5.0);
        assert_ne!(a, b);
    }
}
