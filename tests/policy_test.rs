use rlsim::environments::SwingPendulum;
use rlsim::policies::RandomPolicy;
use rlsim::{ActionList, Environment, Policy, Range};

#[test]
fn random_policy_picks_from_the_catalogue() {
    let env = SwingPendulum::new(false);
    let catalogue = env.discrete_actions();
    let mut policy = RandomPolicy::new(catalogue);

    for _ in 0..200 {
        let a = policy.propose_action(&[0.0, 0.0]);
        assert_eq!(catalogue.get(a.id), Some(&a));
    }
    assert_eq!(policy.compute_value_function(&[1.0, 2.0]), 0.0);
}

#[test]
fn continuous_random_policy_samples_within_range() {
    let env = SwingPendulum::new(false);
    let mut policy = RandomPolicy::continuous(env.continuous_actions(), Range::new(-2.0, 2.0));

    for _ in 0..200 {
        let a = policy.initialize(&[0.0, 0.0]);
        assert_eq!(a.id, 0);
        assert_eq!(a.dimension(), 1);
        assert!((-2.0..=2.0).contains(&a.at(0)));
    }
}

#[test]
#[should_panic(expected = "non-empty action catalogue")]
fn random_policy_rejects_empty_catalogue() {
    RandomPolicy::new(&ActionList::default());
}
