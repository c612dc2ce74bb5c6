use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Knobs of a [`Simulator`](crate::simulator::Simulator).
///
/// Counts are signed: a non-positive episode count still yields the one
/// mandatory episode of `run_episodes`, a non-positive run count yields none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub max_episode_time_steps: usize,
    pub nb_episodes: i64,
    pub nb_runs: i64,
    pub verbose: bool,
    pub enable_statistics: bool,
    pub enable_test_episodes_after_each_run: bool,
    pub max_test_episodes_after_each_run: i64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_episode_time_steps: 5000,
            nb_episodes: -1,
            nb_runs: -1,
            verbose: true,
            enable_statistics: false,
            enable_test_episodes_after_each_run: false,
            max_test_episodes_after_each_run: 20,
        }
    }
}

impl SimulatorConfig {
    pub fn new(max_episode_time_steps: usize, nb_episodes: i64, nb_runs: i64) -> Self {
        Self {
            max_episode_time_steps,
            nb_episodes,
            nb_runs,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_statistics(mut self, enable: bool) -> Self {
        self.enable_statistics = enable;
        self
    }

    pub fn with_test_episodes_after_each_run(mut self, enable: bool) -> Self {
        self.enable_test_episodes_after_each_run = enable;
        self
    }
}
