use rlsim::{SimError, SimulatorConfig};

#[test]
fn defaults_follow_simulator_conventions() {
    let config = SimulatorConfig::default();
    assert_eq!(config.nb_episodes, -1);
    assert_eq!(config.nb_runs, -1);
    assert!(config.verbose);
    assert!(!config.enable_statistics);
    assert!(!config.enable_test_episodes_after_each_run);
    assert_eq!(config.max_test_episodes_after_each_run, 20);
}

#[test]
fn partial_json_fills_in_defaults() {
    let config = SimulatorConfig::from_json_str(
        r#"{ "max_episode_time_steps": 5000, "nb_episodes": 50, "nb_runs": 1, "enable_statistics": true }"#,
    )
    .unwrap();

    assert_eq!(config.max_episode_time_steps, 5000);
    assert_eq!(config.nb_episodes, 50);
    assert_eq!(config.nb_runs, 1);
    assert!(config.enable_statistics);
    assert!(config.verbose);
    assert_eq!(config.max_test_episodes_after_each_run, 20);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = SimulatorConfig::from_json_str("{ \"nb_runs\": \"many\" }").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SimulatorConfig::from_path("/nonexistent/rlsim/config.json").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn config_file_round_trips_through_disk() {
    let dir = std::env::temp_dir().join(format!("rlsim-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sim.json");

    let config = SimulatorConfig::new(200, 10, 3).with_statistics(true);
    std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    assert_eq!(SimulatorConfig::from_path(&path).unwrap(), config);
    std::fs::remove_dir_all(&dir).unwrap();
}
