use rand::random_range;

use crate::action::{Action, ActionList};
use crate::transition::Transition;

/// Closed interval used to clamp and scale environment variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        self.min + self.length() / 2.0
    }

    pub fn in_range(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    pub fn bound(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Maps `x` into `[0, resolution)` relative to this range.
    pub fn scale(&self, x: f64, resolution: f64) -> f64 {
        (x - self.min) * resolution / self.length()
    }

    pub fn choose_random(&self) -> f64 {
        if self.length() <= 0.0 {
            return self.min;
        }
        random_range(self.min..self.max)
    }
}

/// State every environment owns: raw observations, display resolutions,
/// the single transition buffer and the two action catalogues.
#[derive(Debug, Clone)]
pub struct ProblemSpace {
    observations: Vec<f64>,
    resolutions: Vec<f64>,
    output: Transition,
    discrete_actions: ActionList,
    continuous_actions: ActionList,
}

impl ProblemSpace {
    pub fn new(nb_vars: usize, nb_discrete_actions: usize, nb_continuous_actions: usize) -> Self {
        Self {
            observations: vec![0.0; nb_vars],
            resolutions: vec![0.0; nb_vars],
            output: Transition::new(nb_vars),
            discrete_actions: ActionList::with_capacity(nb_discrete_actions),
            continuous_actions: ActionList::with_capacity(nb_continuous_actions),
        }
    }

    /// Fills the catalogues once. Only used from environment constructors.
    pub fn with_actions(mut self, discrete: &[f64], continuous: &[f64]) -> Self {
        for (id, value) in discrete.iter().enumerate() {
            self.discrete_actions.push(id, *value);
        }
        for (id, value) in continuous.iter().enumerate() {
            self.continuous_actions.push(id, *value);
        }
        self
    }

    pub fn observations(&self) -> &[f64] {
        &self.observations
    }

    pub fn observations_mut(&mut self) -> &mut [f64] {
        &mut self.observations
    }

    pub fn resolutions(&self) -> &[f64] {
        &self.resolutions
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolutions.iter_mut().for_each(|r| *r = resolution);
    }

    pub fn transition(&self) -> &Transition {
        &self.output
    }

    pub fn transition_mut(&mut self) -> &mut Transition {
        &mut self.output
    }

    pub fn discrete_actions(&self) -> &ActionList {
        &self.discrete_actions
    }

    pub fn continuous_actions(&self) -> &ActionList {
        &self.continuous_actions
    }
}

/// 环境 trait: the problem side of the simulation loop.
///
/// Implementors embed a [`ProblemSpace`] and mutate only that and their own
/// physical state. `update_transition` is the one place where raw observations
/// are scaled into `[0, resolution)` and written to the transition buffer.
pub trait Environment {
    /// Resets the episode and writes a fresh transition (no action taken yet).
    fn initialize(&mut self);

    /// Applies one action and advances one fixed timestep. Out-of-range
    /// continuous values are clamped, never rejected.
    fn step(&mut self, action: &Action);

    fn update_transition(&mut self);

    fn end_of_episode(&self) -> bool;

    fn r(&self) -> f64;

    fn z(&self) -> f64;

    /// Hook for diagnostic output.
    fn draw(&self) {}

    fn space(&self) -> &ProblemSpace;

    fn space_mut(&mut self) -> &mut ProblemSpace;

    fn observations(&self) -> &[f64] {
        self.space().observations()
    }

    fn resolutions(&self) -> &[f64] {
        self.space().resolutions()
    }

    fn transition(&self) -> &Transition {
        self.space().transition()
    }

    fn transition_mut(&mut self) -> &mut Transition {
        self.space_mut().transition_mut()
    }

    fn discrete_actions(&self) -> &ActionList {
        self.space().discrete_actions()
    }

    fn continuous_actions(&self) -> &ActionList {
        self.space().continuous_actions()
    }

    fn set_resolution(&mut self, resolution: f64) {
        self.space_mut().set_resolution(resolution);
    }

    fn dimension(&self) -> usize {
        self.space().observations().len()
    }
}
