use rlsim::environments::SwingPendulum;
use rlsim::policies::RandomPolicy;
use rlsim::simulator::DEFAULT_VALUE_FUNCTION_PATH;
use rlsim::utils::{EpisodeRecorder, plot_series};
use rlsim::{Environment, LearnerAgent, Range, Simulator, SimulatorConfig};

fn main() -> rlsim::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulatorConfig::from_path(path)?,
        None => SimulatorConfig::new(1000, 20, 1).with_statistics(true),
    };

    let mut problem = SwingPendulum::new(false);
    let mut control = RandomPolicy::continuous(problem.continuous_actions(), Range::new(-2.0, 2.0));
    let mut agent = LearnerAgent::new(&mut control);
    let recorder = EpisodeRecorder::new();

    let mut sim = Simulator::from_config(&mut agent, &mut problem, &config);
    sim.on_episode_end(recorder.clone().into_listener());
    sim.run();
    sim.write_value_function(DEFAULT_VALUE_FUNCTION_PATH)?;

    plot_series(
        &recorder.rewards(),
        "pendulum_rewards.png",
        "Swing pendulum (random)",
        "Episode reward",
    )?;
    Ok(())
}
