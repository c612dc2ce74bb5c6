pub mod cartpole;
pub mod swing_pendulum;

pub use cartpole::CartPole;
pub use swing_pendulum::SwingPendulum;
