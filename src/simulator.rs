use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::mem;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::action::Action;
use crate::agent::{Agent, ControlAgent};
use crate::config::SimulatorConfig;
use crate::environment::Environment;
use crate::error::Result;

pub const DEFAULT_VALUE_FUNCTION_PATH: &str = "visualization/valueFunction.txt";

// 0.0..=10.0 in steps of 0.1
const GRID_POINTS: usize = 101;
const GRID_STEP: f64 = 0.1;

/// Frozen view of a finished episode, handed by value to every listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub nb_total_time_steps: usize,
    pub nb_episode_done: i64,
    pub average_time_per_step: f64,
    pub episode_r: f64,
    pub episode_z: f64,
}

/// Episode-length statistics of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub mean: f64,
    pub dispersion: f64,
    pub standard_error: f64,
    pub confidence_95: f64,
}

impl Benchmark {
    /// `None` for an empty sample.
    ///
    /// The dispersion is `sqrt(sum((x - mean)^2)) / n`: the count divides once,
    /// after the square root.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let squared: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
        let dispersion = squared.sqrt() / n;
        let standard_error = dispersion / n.sqrt();
        Some(Self {
            mean,
            dispersion,
            standard_error,
            confidence_95: standard_error * 2.0,
        })
    }
}

enum EpisodePhase {
    AwaitingEpisodeStart,
    InEpisode(Action),
}

type Listener<'a> = Box<dyn FnMut(EpisodeSummary) + 'a>;

/// Drives an [`Agent`] against an [`Environment`] over steps, episodes and runs.
pub struct Simulator<'a> {
    agent: &'a mut dyn Agent,
    problem: &'a mut dyn Environment,
    phase: EpisodePhase,

    max_episode_time_steps: usize,
    nb_episodes: i64,
    nb_runs: i64,
    nb_episode_done: i64,
    ending_of_episode: bool,
    verbose: bool,

    total_time_in_milliseconds: f64,

    statistics: Vec<f64>,
    enable_statistics: bool,

    enable_test_episodes_after_each_run: bool,
    max_test_episodes_after_each_run: i64,

    time_step: usize,
    episode_r: f64,
    episode_z: f64,
    on_episode_end: Vec<Listener<'a>>,
}

impl<'a> Simulator<'a> {
    pub fn new(
        agent: &'a mut dyn Agent,
        problem: &'a mut dyn Environment,
        max_episode_time_steps: usize,
        nb_episodes: i64,
        nb_runs: i64,
    ) -> Self {
        let config = SimulatorConfig::new(max_episode_time_steps, nb_episodes, nb_runs);
        Self::from_config(agent, problem, &config)
    }

    pub fn from_config(
        agent: &'a mut dyn Agent,
        problem: &'a mut dyn Environment,
        config: &SimulatorConfig,
    ) -> Self {
        Self {
            agent,
            problem,
            phase: EpisodePhase::AwaitingEpisodeStart,
            max_episode_time_steps: config.max_episode_time_steps,
            nb_episodes: config.nb_episodes,
            nb_runs: config.nb_runs,
            nb_episode_done: 0,
            ending_of_episode: false,
            verbose: config.verbose,
            total_time_in_milliseconds: 0.0,
            statistics: Vec::new(),
            enable_statistics: config.enable_statistics,
            enable_test_episodes_after_each_run: config.enable_test_episodes_after_each_run,
            max_test_episodes_after_each_run: config.max_test_episodes_after_each_run,
            time_step: 0,
            episode_r: 0.0,
            episode_z: 0.0,
            on_episode_end: Vec::new(),
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn set_runs(&mut self, nb_runs: i64) {
        self.nb_runs = nb_runs;
    }

    pub fn set_episodes(&mut self, nb_episodes: i64) {
        self.nb_episodes = nb_episodes;
    }

    pub fn set_enable_statistics(&mut self, enable_statistics: bool) {
        self.enable_statistics = enable_statistics;
    }

    pub fn set_test_episodes_after_each_run(&mut self, enable: bool) {
        self.enable_test_episodes_after_each_run = enable;
    }

    /// Registers a listener fired, in registration order, after every episode.
    pub fn on_episode_end<F>(&mut self, listener: F)
    where
        F: FnMut(EpisodeSummary) + 'a,
    {
        self.on_episode_end.push(Box::new(listener));
    }

    pub fn is_beginning_of_episode(&self) -> bool {
        matches!(self.phase, EpisodePhase::AwaitingEpisodeStart)
    }

    pub fn is_ending_of_episode(&self) -> bool {
        self.ending_of_episode
    }

    pub fn time_step(&self) -> usize {
        self.time_step
    }

    pub fn episode_r(&self) -> f64 {
        self.episode_r
    }

    pub fn episode_z(&self) -> f64 {
        self.episode_z
    }

    pub fn nb_episode_done(&self) -> i64 {
        self.nb_episode_done
    }

    pub fn max_episode_time_steps(&self) -> usize {
        self.max_episode_time_steps
    }

    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    pub fn problem(&self) -> &dyn Environment {
        &*self.problem
    }

    pub fn agent(&self) -> &dyn Agent {
        &*self.agent
    }

    fn average_time_per_step(&self) -> f64 {
        if self.time_step == 0 {
            return 0.0;
        }
        self.total_time_in_milliseconds / self.time_step as f64
    }

    /// Consumes the statistics sample. Nothing is reported for an empty one.
    pub fn benchmark(&mut self) -> Option<Benchmark> {
        let benchmark = Benchmark::from_samples(&self.statistics);
        self.statistics.clear();

        if let Some(b) = benchmark {
            println!();
            println!("## Average: length={}", b.mean);
            println!("## (+- 95%) ={}", b.confidence_95);
            info!(mean = b.mean, confidence_95 = b.confidence_95, "benchmark");
        }
        benchmark
    }

    /// One transition of the episode state machine.
    pub fn step(&mut self) {
        match mem::replace(&mut self.phase, EpisodePhase::AwaitingEpisodeStart) {
            EpisodePhase::AwaitingEpisodeStart => {
                self.problem.initialize();
                self.time_step = 0;
                self.episode_r = 0.0;
                self.episode_z = 0.0;
                self.total_time_in_milliseconds = 0.0;
                // the episode has just started
                self.ending_of_episode = false;
                self.problem
                    .transition_mut()
                    .set_forced_end_of_episode(self.ending_of_episode);

                let a_t = self.agent.initialize(self.problem.transition());
                self.phase = EpisodePhase::InEpisode(a_t);
            }
            EpisodePhase::InEpisode(a_t) => {
                self.problem.step(&a_t);

                let step = self.problem.transition_mut();
                self.time_step += 1;
                self.episode_r += step.reward();
                self.episode_z += step.z();
                self.ending_of_episode =
                    step.end_of_episode() || self.time_step == self.max_episode_time_steps;
                step.set_forced_end_of_episode(self.ending_of_episode);

                let started = Instant::now();
                let a_tp1 = self.agent.next_action(self.problem.transition());
                self.total_time_in_milliseconds += started.elapsed().as_secs_f64() * 1000.0;
                self.phase = EpisodePhase::InEpisode(a_tp1);
            }
        }

        if self.ending_of_episode || self.time_step == self.max_episode_time_steps {
            self.end_episode();
        }
    }

    fn end_episode(&mut self) {
        let average_time_per_step = self.average_time_per_step();
        if self.verbose {
            print!(
                "{{{} [{} ({},{},{})]}} ",
                self.nb_episode_done,
                self.time_step,
                self.episode_r,
                self.episode_z,
                average_time_per_step
            );
            let _ = io::stdout().flush();
        }
        debug!(
            episode = self.nb_episode_done,
            steps = self.time_step,
            episode_r = self.episode_r,
            episode_z = self.episode_z,
            average_time_per_step,
            "episode finished"
        );

        if self.enable_statistics {
            self.statistics.push(self.time_step as f64);
        }
        self.nb_episode_done += 1;
        self.phase = EpisodePhase::AwaitingEpisodeStart;

        let summary = EpisodeSummary {
            nb_total_time_steps: self.time_step,
            nb_episode_done: self.nb_episode_done,
            average_time_per_step,
            episode_r: self.episode_r,
            episode_z: self.episode_z,
        };
        for listener in self.on_episode_end.iter_mut() {
            listener(summary);
        }
    }

    /// Steps until the configured number of episodes is done. Always steps at least once.
    pub fn run_episodes(&mut self) {
        loop {
            self.step();
            if self.nb_episode_done >= self.nb_episodes {
                break;
            }
        }
    }

    /// Runs a frozen evaluation over the same policy and environment.
    ///
    /// The temporary agent and simulator are dropped before this returns.
    pub fn run_evaluate(&mut self, nb_episodes: i64) {
        if self.verbose {
            println!();
            println!("@@ Evaluate={}", self.enable_test_episodes_after_each_run);
        }
        info!(nb_episodes, "evaluating frozen policy");

        let config = SimulatorConfig {
            max_episode_time_steps: self.max_episode_time_steps,
            nb_episodes,
            nb_runs: 1,
            verbose: self.verbose,
            ..SimulatorConfig::default()
        };
        let mut evaluate_agent = ControlAgent::new(self.agent.policy_mut());
        let mut runner = Simulator::from_config(&mut evaluate_agent, &mut *self.problem, &config);
        runner.run();
    }

    pub fn run(&mut self) {
        if self.verbose {
            println!("## ControlLearner={}", self.agent.name());
        }
        for run in 0..self.nb_runs {
            if self.verbose {
                println!();
                println!("@@ Run={run}");
            }
            info!(run, "starting run");

            if self.enable_statistics {
                self.statistics.clear();
            }
            self.nb_episode_done = 0;
            self.agent.reset();
            self.run_episodes();

            if self.enable_statistics {
                self.benchmark();
            }

            if self.enable_test_episodes_after_each_run {
                self.run_evaluate(self.max_test_episodes_after_each_run);
            }
        }
    }

    /// Writes the agent's value function over a 2-D grid, one row per line.
    /// Environments of any other dimension only get their `draw` hook called.
    pub fn compute_value_function(&self, sink: &mut dyn Write) -> io::Result<()> {
        let written = if self.problem.dimension() == 2 {
            self.write_grid(sink)
        } else {
            Ok(())
        };

        self.problem.draw();
        written
    }

    fn write_grid(&self, sink: &mut dyn Write) -> io::Result<()> {
        for i in 0..GRID_POINTS {
            let x = i as f64 * GRID_STEP;
            let row: Vec<String> = (0..GRID_POINTS)
                .map(|j| {
                    let x_t = [x, j as f64 * GRID_STEP];
                    self.agent.compute_value_function(&x_t).to_string()
                })
                .collect();
            writeln!(sink, "{}", row.join(" "))?;
        }
        Ok(())
    }

    pub fn write_value_function(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        self.compute_value_function(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
