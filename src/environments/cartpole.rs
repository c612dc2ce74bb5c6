use rand::random_range;

use crate::action::Action;
use crate::environment::{Environment, ProblemSpace, Range};

/// 简化版 CartPole 环境，状态维度为 [x, x_dot, theta, theta_dot]
pub struct CartPole {
    space: ProblemSpace,
    state: [f64; 4],
    force_range: Range,
    ranges: [Range; 4],
}

impl CartPole {
    pub fn new() -> Self {
        let force_range = Range::new(-10.0, 10.0);
        let mut space = ProblemSpace::new(4, 2, 1)
            .with_actions(&[force_range.min(), force_range.max()], &[0.0]);
        space.set_resolution(10.0);

        let theta_limit = 12.0_f64.to_radians();
        Self {
            space,
            state: [0.0; 4],
            force_range,
            ranges: [
                Range::new(-2.4, 2.4),
                Range::new(-3.0, 3.0),
                Range::new(-theta_limit, theta_limit),
                Range::new(-3.5, 3.5),
            ],
        }
    }

    pub fn state(&self) -> [f64; 4] {
        self.state
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for CartPole {
    fn initialize(&mut self) {
        for s in self.state.iter_mut() {
            *s = random_range(-0.05..0.05);
        }
        self.update_transition();
    }

    fn step(&mut self, action: &Action) {
        // 动力学参数
        let g = 9.8; // 重力加速度
        let m_c = 1.0; // 小车质量
        let m_p = 0.1; // 杆质量
        let l = 0.5; // 杆长度
        let dt = 0.02; // 时间步长

        let [x, x_dot, theta, theta_dot] = self.state;
        let force = self.force_range.bound(action.at(0));

        // 动力学方程
        let costheta = theta.cos();
        let sintheta = theta.sin();
        let temp = (force + m_p * l * theta_dot.powi(2) * sintheta) / (m_c + m_p);
        let theta_acc = (g * sintheta - costheta * temp)
            / (l * (4.0 / 3.0 - m_p * costheta.powi(2) / (m_c + m_p)));
        let x_acc = temp - m_p * l * theta_acc * costheta / (m_c + m_p);

        self.state = [
            x + dt * x_dot,
            x_dot + dt * x_acc,
            theta + dt * theta_dot,
            theta_dot + dt * theta_acc,
        ];

        self.update_transition();
    }

    fn update_transition(&mut self) {
        let resolutions = self.space.resolutions();
        let mut scaled = [0.0; 4];
        for (i, range) in self.ranges.iter().enumerate() {
            scaled[i] = range.scale(range.bound(self.state[i]), resolutions[i]);
        }
        let (reward, z, done) = (self.r(), self.z(), self.end_of_episode());

        self.space.observations_mut().copy_from_slice(&self.state);
        let output = self.space.transition_mut();
        output.observations_mut().copy_from_slice(&scaled);
        output.update(reward, z, done);
    }

    fn end_of_episode(&self) -> bool {
        !self.ranges[0].in_range(self.state[0]) || !self.ranges[2].in_range(self.state[2])
    }

    fn r(&self) -> f64 {
        if self.end_of_episode() {
            return 0.0;
        }
        let x = self.state[0];
        let theta = self.state[2];
        1.0 - (x.abs() / self.ranges[0].max() + theta.abs() / self.ranges[2].max())
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
