use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::action::Action;
use crate::environment::{Environment, ProblemSpace, Range};

/// Torque-limited pendulum swing-up. Observations are `[theta, velocity]`.
///
/// The up-time termination criterion is off unless enabled with
/// [`SwingPendulum::with_natural_termination`]; otherwise episodes run to the
/// driver's step cap.
pub struct SwingPendulum {
    space: ProblemSpace,
    step_time: f64,
    theta: f64,
    velocity: f64,
    action_range: Range,
    theta_range: Range,
    velocity_range: Range,
    mass: f64,
    length: f64,
    g: f64,
    required_up_time: f64,
    up_range: f64,
    up_time: usize,
    random: bool,
    initial_theta: f64,
    natural_termination: bool,
}

impl SwingPendulum {
    pub fn new(random: bool) -> Self {
        let u_max = 2.0;
        let step_time = 0.01;
        let max_velocity = FRAC_PI_4 / step_time;
        let action_range = Range::new(-u_max, u_max);

        let mut space = ProblemSpace::new(2, 3, 1).with_actions(
            &[action_range.min(), 0.0, action_range.max()],
            &[0.0],
        );
        space.set_resolution(10.0);

        Self {
            space,
            step_time,
            theta: 0.0,
            velocity: 0.0,
            action_range,
            theta_range: Range::new(-PI, PI),
            velocity_range: Range::new(-max_velocity, max_velocity),
            mass: 1.0,
            length: 1.0,
            g: 9.8,
            required_up_time: 10.0,
            up_range: FRAC_PI_4,
            up_time: 0,
            random,
            initial_theta: FRAC_PI_2,
            natural_termination: false,
        }
    }

    pub fn with_natural_termination(mut self, enabled: bool) -> Self {
        self.natural_termination = enabled;
        self
    }

    /// Start angle used by `initialize` when `random` is off. Defaults to pi/2.
    pub fn with_initial_theta(mut self, theta: f64) -> Self {
        self.initial_theta = theta;
        self
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn up_time(&self) -> usize {
        self.up_time
    }

    pub fn theta_range(&self) -> Range {
        self.theta_range
    }

    pub fn velocity_range(&self) -> Range {
        self.velocity_range
    }

    // wrap into [-pi, pi)
    fn adjust_theta(&mut self) {
        if self.theta >= PI {
            self.theta -= 2.0 * PI;
        }
        if self.theta < -PI {
            self.theta += 2.0 * PI;
        }
    }
}

impl Default for SwingPendulum {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Environment for SwingPendulum {
    fn initialize(&mut self) {
        self.up_time = 0;
        self.theta = if self.random {
            self.theta_range.choose_random()
        } else {
            self.initial_theta
        };
        self.velocity = 0.0;
        self.adjust_theta();
        self.update_transition();
    }

    fn step(&mut self, action: &Action) {
        let torque = self.action_range.bound(action.at(0));
        // 动力学方程
        let theta_acc = -self.step_time * self.velocity
            + self.mass * self.g * self.length * self.theta.sin()
            + torque;
        self.velocity = self.velocity_range.bound(self.velocity + theta_acc);
        self.theta += self.velocity * self.step_time;
        self.adjust_theta();
        self.up_time = if self.theta.abs() > self.up_range {
            0
        } else {
            self.up_time + 1
        };

        self.update_transition();
    }

    fn update_transition(&mut self) {
        let resolutions = self.space.resolutions();
        let scaled = [
            self.theta_range.scale(self.theta, resolutions[0]),
            self.velocity_range.scale(self.velocity, resolutions[1]),
        ];
        let (reward, z, done) = (self.r(), self.z(), self.end_of_episode());

        let observations = self.space.observations_mut();
        observations[0] = self.theta;
        observations[1] = self.velocity;

        let output = self.space.transition_mut();
        output.observations_mut().copy_from_slice(&scaled);
        output.update(reward, z, done);
    }

    fn end_of_episode(&self) -> bool {
        self.natural_termination
            && (self.up_time + 1) as f64 >= self.required_up_time / self.step_time
    }

    fn r(&self) -> f64 {
        self.theta.cos()
    }

    fn z(&self) -> f64 {
        0.0
    }

    fn space(&self) -> &ProblemSpace {
        &self.space
    }

    fn space_mut(&mut self) -> &mut ProblemSpace {
        &mut self.space
    }
}
