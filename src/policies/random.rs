use rand::seq::IndexedRandom;
use rand::{Rng, rng};

use crate::action::{Action, ActionList};
use crate::environment::Range;
use crate::policy::Policy;

/// Uniform random behaviour over an action catalogue. Learns nothing.
///
/// With a continuous catalogue of a single action and a `value_range`, the
/// action value itself is drawn uniformly from that range.
pub struct RandomPolicy {
    actions: Vec<Action>,
    value_range: Option<Range>,
}

impl RandomPolicy {
    /// # Panics
    ///
    /// Panics if `actions` is empty.
    pub fn new(actions: &ActionList) -> Self {
        assert!(!actions.is_empty(), "RandomPolicy needs a non-empty action catalogue");
        Self {
            actions: actions.iter().cloned().collect(),
            value_range: None,
        }
    }

    /// # Panics
    ///
    /// Panics if `actions` is empty.
    pub fn continuous(actions: &ActionList, value_range: Range) -> Self {
        Self {
            value_range: Some(value_range),
            ..Self::new(actions)
        }
    }

    fn sample(&self) -> Action {
        let mut rng = rng();
        let chosen = self
            .actions
            .choose(&mut rng)
            .cloned()
            .expect("catalogue is non-empty");

        match self.value_range {
            Some(range) if self.actions.len() == 1 && range.length() > 0.0 => {
                chosen.with_value(rng.random_range(range.min()..=range.max()))
            }
            _ => chosen,
        }
    }
}

impl Policy for RandomPolicy {
    fn propose_action(&mut self, _x: &[f64]) -> Action {
        self.sample()
    }

    fn initialize(&mut self, _x: &[f64]) -> Action {
        self.sample()
    }

    fn step(
        &mut self,
        _x_t: &[f64],
        _a_t: &Action,
        _x_tp1: &[f64],
        _r_tp1: f64,
        _z_tp1: f64,
    ) -> Action {
        self.sample()
    }

    fn reset(&mut self) {}

    fn compute_value_function(&self, _x: &[f64]) -> f64 {
        0.0
    }
}
