use descent_core::{
    config::Config,
    curve::loss_curve,
    descent::{Descent, run},
    objective::{LOSS_STAR, THETA_STAR, derivative, loss},
    pacing::NoPacing,
    trajectory::Trajectory,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn distance_to_minimum_shrinks_every_step() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let cfg = Config {
            theta0: rng.random_range(-100.0..=100.0),
            alpha: rng.random_range(0.01..=0.99),
            ..Config::default()
        };

        let mut prev = (cfg.theta0 - THETA_STAR).abs();
        let outcome = run(&cfg, &mut NoPacing, |s| {
            let dist = (s.theta - THETA_STAR).abs();
            if prev > 1e-9 {
                assert!(
                    dist < prev,
                    "theta0={}, alpha={}, iter {}: {} !< {}",
                    cfg.theta0,
                    cfg.alpha,
                    s.iter,
                    dist,
                    prev
                );
            }
            prev = dist;
        })
        .expect("0 < alpha < 1 always contracts");

        assert!(derivative(outcome.theta).abs() < cfg.epsilon);
    }
}

#[test]
fn loss_is_never_below_its_minimum() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1000 {
        let a: f64 = rng.random_range(-1e3..=1e3);
        assert!(loss(a) >= LOSS_STAR, "loss({a}) = {}", loss(a));
    }
}

#[test]
fn trajectory_starts_on_the_plotted_curve_and_ends_at_the_bottom() {
    let cfg = Config::default();
    let curve = loss_curve();
    let mut trajectory = Trajectory::new();

    let outcome = run(&cfg, &mut NoPacing, |s| trajectory.push(s.point())).unwrap();

    let lo = curve[0].x;
    let hi = curve[curve.len() - 1].x;
    assert!(trajectory.points().iter().all(|p| p.x >= lo && p.x <= hi));

    // Starting left of the minimum with a small step, theta only moves right.
    for pair in trajectory.points().windows(2) {
        assert!(pair[1].x > pair[0].x);
        assert!(pair[1].y < pair[0].y);
    }

    assert_eq!(
        outcome.to_string(),
        format!(
            "Minimum loss function: {}\nMinimum loss function when theta equals: {}",
            outcome.loss, outcome.theta
        )
    );
}

#[test]
fn stepping_by_hand_matches_the_driver() {
    let cfg = Config::default();
    let mut d = Descent::new(cfg);
    while d.step().is_some() {}

    let driven = run(&cfg, &mut NoPacing, |_| {}).unwrap();

    assert_eq!(d.outcome(), Ok(driven));
}
