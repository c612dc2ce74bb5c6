// detailed implementation
pub mod environments;
pub mod policies;
pub mod simulator;
pub mod utils;

// Traits and shared data
pub mod action;
pub mod agent;
pub mod config;
pub mod environment;
pub mod error;
pub mod policy;
pub mod transition;

pub use action::{Action, ActionList};
pub use agent::{Agent, ControlAgent, LearnerAgent};
pub use config::SimulatorConfig;
pub use environment::{Environment, ProblemSpace, Range};
pub use error::{Result, SimError};
pub use policy::Policy;
pub use simulator::{Benchmark, EpisodeSummary, Simulator};
pub use transition::Transition;
