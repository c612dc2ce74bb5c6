use rlsim::Benchmark;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn benchmark_divides_by_count_after_square_root() {
    let b = Benchmark::from_samples(&[10.0, 20.0, 30.0]).unwrap();

    assert_eq!(b.mean, 20.0);
    // sqrt(200) / 3, not sqrt(200 / 3)
    assert!(close(b.dispersion, 4.714045207910317));
    assert!(close(b.standard_error, 2.7216552697590872));
    assert!(close(b.confidence_95, 5.4433105395181745));
    assert!(!close(b.dispersion, (200.0_f64 / 3.0).sqrt()));
}

#[test]
fn benchmark_of_constant_sample_has_no_spread() {
    let b = Benchmark::from_samples(&[50.0; 8]).unwrap();
    assert_eq!(b.mean, 50.0);
    assert_eq!(b.dispersion, 0.0);
    assert_eq!(b.confidence_95, 0.0);
}

#[test]
fn benchmark_of_single_sample() {
    let b = Benchmark::from_samples(&[7.0]).unwrap();
    assert_eq!(b.mean, 7.0);
    assert_eq!(b.standard_error, 0.0);
}

#[test]
fn empty_sample_yields_no_benchmark() {
    assert!(Benchmark::from_samples(&[]).is_none());
}
