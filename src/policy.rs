use crate::action::Action;

/// The decision/learning algorithm plugged into an agent.
///
/// Observations are the scaled vectors found in a [`Transition`](crate::transition::Transition).
pub trait Policy {
    /// 根据状态选择动作 (greedy, no learning)
    fn propose_action(&mut self, x: &[f64]) -> Action;

    /// First action of an episode on the learning path.
    fn initialize(&mut self, x: &[f64]) -> Action;

    /// One learning update on `(x_t, a_t, x_tp1, r_tp1, z_tp1)` returning the next action.
    /// `x_tp1` is the absorbing state when the episode has just ended.
    fn step(&mut self, x_t: &[f64], a_t: &Action, x_tp1: &[f64], r_tp1: f64, z_tp1: f64)
    -> Action;

    /// Clears episode-local state; learned parameters are kept.
    fn reset(&mut self);

    fn compute_value_function(&self, x: &[f64]) -> f64;
}
