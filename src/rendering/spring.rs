//! Spring-mass-damper simulation for smooth cursor motion.
//!
//! Each animated channel (x, y, scale, rotation) is an independent
//! `SpringValue`. The host writes targets; the frame loop runs the
//! simulation forward. Once a channel is within its rest thresholds it snaps
//! onto the target, so a settled cursor sits exactly where it was sent.

use crate::config::SpringConfig;

/// Longest internal simulation step. Stiff or heavily damped springs on a
/// light mass run with a shorter one, see [`stable_step_ms`].
pub const SIMULATION_TICK_MS: f32 = 1.0;

/// Shortest internal simulation step.
pub const MIN_SIMULATION_TICK_MS: f32 = 0.001;

/// Step length that keeps semi-implicit Euler stable for `config`.
///
/// The integrator diverges once `c/m * dt` reaches 2 or `k/m * dt^2`
/// reaches 4. The step stays at a quarter of both limits.
pub fn stable_step_ms(config: &SpringConfig) -> f32 {
    let mass = config.mass.max(0.001);
    let by_damping = 0.5 * mass / config.damping.max(f32::EPSILON);
    let by_stiffness = 0.5 * (mass / config.stiffness.max(f32::EPSILON)).sqrt();
    (by_damping.min(by_stiffness) * 1000.0).clamp(MIN_SIMULATION_TICK_MS, SIMULATION_TICK_MS)
}

/// When a channel counts as arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestThreshold {
    /// Maximum distance from the target.
    pub delta: f32,
    /// Maximum speed (units per second).
    pub speed: f32,
}

impl RestThreshold {
    /// Pixel and degree channels.
    pub const POSITION: RestThreshold = RestThreshold {
        delta: 0.5,
        speed: 2.0,
    };

    /// Unit-scale channels (scale, opacity).
    pub const GRANULAR: RestThreshold = RestThreshold {
        delta: 0.005,
        speed: 0.01,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringValue {
    position: f32,
    velocity: f32,
    target: f32,
    rest: RestThreshold,
}

impl SpringValue {
    /// A channel at rest on `value`.
    pub fn new(value: f32, rest: RestThreshold) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            rest,
        }
    }

    pub fn value(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Teleport onto `value` with no motion.
    pub fn jump_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Run simulation for given duration.
    /// Uses fixed timestep internally for stability.
    pub fn run(&mut self, config: &SpringConfig, dt_ms: f32) -> f32 {
        if dt_ms <= 0.0 || self.is_settled() {
            return self.position;
        }

        // Sub-steps can be far below one f32 ulp of the position
        let mass = f64::from(config.mass.max(0.001));
        let stiffness = f64::from(config.stiffness);
        let damping = f64::from(config.damping);
        let target = f64::from(self.target);
        let max_step_ms = stable_step_ms(config);

        let mut position = f64::from(self.position);
        let mut velocity = f64::from(self.velocity);
        let mut remaining = dt_ms;

        while remaining > 0.0 {
            let step_ms = remaining.min(max_step_ms);
            let tick = f64::from(step_ms) / 1000.0;

            // Spring force: F = -k * (position - target)
            let spring_force = (target - position) * stiffness;

            // Damping force: F = -c * velocity
            let damping_force = -velocity * damping;

            // Semi-implicit Euler: velocity first, then position
            let accel = (spring_force + damping_force) / mass;
            velocity += accel * tick;
            position += velocity * tick;

            remaining -= step_ms;

            if self.within_rest(target - position, velocity) {
                self.jump_to(self.target);
                return self.position;
            }
        }

        self.position = position as f32;
        self.velocity = velocity as f32;
        self.position
    }

    fn within_rest(&self, offset: f64, velocity: f64) -> bool {
        offset.abs() < f64::from(self.rest.delta) && velocity.abs() < f64::from(self.rest.speed)
    }
}
