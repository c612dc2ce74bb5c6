use crate::action::Action;
use crate::policy::Policy;
use crate::transition::Transition;

/// Adapts a [`Policy`] to the two calls the simulator makes per episode.
pub trait Agent {
    /// Start of an episode: the transition holds the initial observation.
    fn initialize(&mut self, step: &Transition) -> Action;

    /// Mid-episode: the transition holds the outcome of the previous action.
    /// Only valid after `initialize` has started the episode.
    fn next_action(&mut self, step: &Transition) -> Action;

    fn reset(&mut self);

    /// Concrete agent type, for the run banner.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn policy(&self) -> &dyn Policy;

    fn policy_mut(&mut self) -> &mut dyn Policy;

    fn compute_value_function(&self, x: &[f64]) -> f64 {
        self.policy().compute_value_function(x)
    }
}

/// Feeds every transition into the policy's learning entry point.
pub struct LearnerAgent<'a> {
    control: &'a mut dyn Policy,
    // set by `initialize`, replaced on every `next_action`
    a_t: Action,
    // terminal placeholder handed to the policy once an episode has ended
    absorbing_state: Vec<f64>,
    x_t: Vec<f64>,
}

impl<'a> LearnerAgent<'a> {
    pub fn new(control: &'a mut dyn Policy) -> Self {
        Self {
            control,
            a_t: Action::default(),
            absorbing_state: Vec::new(),
            x_t: Vec::new(),
        }
    }

    /// The observation buffered from the previous step.
    pub fn previous_observation(&self) -> &[f64] {
        &self.x_t
    }

    fn buffer_observation(&mut self, step: &Transition) {
        let o_tp1 = step.observations();
        if self.x_t.len() != o_tp1.len() {
            self.x_t = vec![0.0; o_tp1.len()];
            self.absorbing_state = vec![0.0; o_tp1.len()];
        }
        self.x_t.copy_from_slice(o_tp1);
    }
}

impl Agent for LearnerAgent<'_> {
    fn initialize(&mut self, step: &Transition) -> Action {
        let a_t = self.control.initialize(step.observations());
        self.buffer_observation(step);
        self.a_t = a_t.clone();
        a_t
    }

    fn next_action(&mut self, step: &Transition) -> Action {
        let x_tp1 = if step.end_of_episode() {
            self.absorbing_state.as_slice()
        } else {
            step.observations()
        };
        let a_tp1 = self
            .control
            .step(&self.x_t, &self.a_t, x_tp1, step.reward(), step.z());
        self.buffer_observation(step);
        self.a_t = a_tp1.clone();
        a_tp1
    }

    fn reset(&mut self) {
        self.control.reset();
    }

    fn policy(&self) -> &dyn Policy {
        &*self.control
    }

    fn policy_mut(&mut self) -> &mut dyn Policy {
        &mut *self.control
    }
}

/// Frozen agent: asks the policy for greedy actions and never learns.
pub struct ControlAgent<'a> {
    control: &'a mut dyn Policy,
}

impl<'a> ControlAgent<'a> {
    pub fn new(control: &'a mut dyn Policy) -> Self {
        Self { control }
    }
}

impl Agent for ControlAgent<'_> {
    fn initialize(&mut self, step: &Transition) -> Action {
        self.control.propose_action(step.observations())
    }

    fn next_action(&mut self, step: &Transition) -> Action {
        self.control.propose_action(step.observations())
    }

    // evaluation must not touch learned state
    fn reset(&mut self) {}

    fn policy(&self) -> &dyn Policy {
        &*self.control
    }

    fn policy_mut(&mut self) -> &mut dyn Policy {
        &mut *self.control
    }
}
