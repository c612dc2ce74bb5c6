/// The record an environment hands to the agent after every step.
///
/// One instance lives inside each environment and is overwritten in place;
/// the observation buffer keeps the size it was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    observations: Vec<f64>,
    reward: f64,
    z: f64,
    end_of_episode: bool,
}

impl Transition {
    pub fn new(nb_vars: usize) -> Self {
        Self {
            observations: vec![0.0; nb_vars],
            reward: 0.0,
            z: 0.0,
            end_of_episode: false,
        }
    }

    /// 下一个观测 (o_tp1)
    pub fn observations(&self) -> &[f64] {
        &self.observations
    }

    /// Mutable view for the owning environment. A slice, so the length is fixed.
    pub fn observations_mut(&mut self) -> &mut [f64] {
        &mut self.observations
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Auxiliary signal, opaque to the driver.
    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn end_of_episode(&self) -> bool {
        self.end_of_episode
    }

    pub fn dimension(&self) -> usize {
        self.observations.len()
    }

    pub fn update(&mut self, reward: f64, z: f64, end_of_episode: bool) {
        self.reward = reward;
        self.z = z;
        self.end_of_episode = end_of_episode;
    }

    /// Overrides the termination flag only; used by the driver for step-budget truncation.
    pub fn set_forced_end_of_episode(&mut self, end_of_episode: bool) {
        self.end_of_episode = end_of_episode;
    }
}
