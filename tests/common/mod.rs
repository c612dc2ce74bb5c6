#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rlsim::{Action, Environment, Policy, ProblemSpace};

/// Deterministic environment: after `t` steps every observation equals `t + 1`,
/// the reward of step `t` is `t` and `z` is always 0.5.
pub struct ScriptedEnv {
    space: ProblemSpace,
    t: usize,
    terminate_at: Option<usize>,
    pub initializations: Rc<Cell<usize>>,
    pub draws: Rc<Cell<usize>>,
}

impl ScriptedEnv {
    pub fn new(dimension: usize, terminate_at: Option<usize>) -> Self {
        let mut space = ProblemSpace::new(dimension, 2, 1).with_actions(&[-1.0, 1.0], &[0.0]);
        space.set_resolution(10.0);
        Self {
            space,
            t: 0,
            terminate_at,
            initializations: Rc::new(Cell::new(0)),
            draws: Rc::new(Cell::new(0)),
        }
    }
}

impl Environment for ScriptedEnv {
    fn initialize(&mut self) {
        self.t = 0;
        self.initializations.set(self.initializations.get() + 1);
        self.update_transition();
    }

    fn step(&mut self, _action: &Action) {
        self.t += 1;
        self.update_transition();
    }

    fn update_transition(&mut self) {
        let value = self.t as f64 + 1.0;
        let (reward, z, done) = (self.r(), self.z(), self.end_of_episode());
        self.space.observations_mut().fill(value);
        let output = self.space.transition_mut();
        output.observations_mut().fill(value);
        output.update(reward, z, done);
    }

    fn end_of_episode(&self) -> bool {
        self.terminate_at.is_some_and(|t| self.t >= t)
    }

    fn r(&self) -> f64 {
        self.t as f64
    }

    fn z(&self) -> f64 {
        0.5
    }

    fn draw(&self) {
        self.draws.set(self.draws.get() + 1);
    }

    fn space(&self) -> &ProblemSpace {
        &self.space
    }

    fn space_mut(&mut self) -> &mut ProblemSpace {
        &mut self.space
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Initialize(Vec<f64>),
    Step {
        x_t: Vec<f64>,
        a_t: usize,
        x_tp1: Vec<f64>,
        r_tp1: f64,
        z_tp1: f64,
    },
    Propose(Vec<f64>),
    Reset,
}

/// Logs every call; learning adds each reward to `params[0]`.
pub struct RecordingPolicy {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub params: Rc<RefCell<Vec<f64>>>,
    next_id: usize,
}

impl RecordingPolicy {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            params: Rc::new(RefCell::new(vec![0.0])),
            next_id: 0,
        }
    }

    fn next_action(&mut self) -> Action {
        self.next_id += 1;
        Action::new(self.next_id, 1.0)
    }
}

impl Policy for RecordingPolicy {
    fn propose_action(&mut self, x: &[f64]) -> Action {
        self.calls.borrow_mut().push(Call::Propose(x.to_vec()));
        Action::new(0, 0.0)
    }

    fn initialize(&mut self, x: &[f64]) -> Action {
        self.calls.borrow_mut().push(Call::Initialize(x.to_vec()));
        self.next_action()
    }

    fn step(&mut self, x_t: &[f64], a_t: &Action, x_tp1: &[f64], r_tp1: f64, z_tp1: f64) -> Action {
        self.calls.borrow_mut().push(Call::Step {
            x_t: x_t.to_vec(),
            a_t: a_t.id,
            x_tp1: x_tp1.to_vec(),
            r_tp1,
            z_tp1,
        });
        self.params.borrow_mut()[0] += r_tp1;
        self.next_action()
    }

    fn reset(&mut self) {
        self.calls.borrow_mut().push(Call::Reset);
    }

    fn compute_value_function(&self, x: &[f64]) -> f64 {
        x.iter().sum()
    }
}

pub fn count(calls: &Rc<RefCell<Vec<Call>>>, pred: impl Fn(&Call) -> bool) -> usize {
    calls.borrow().iter().filter(|c| pred(c)).count()
}
