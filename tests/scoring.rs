use riskreg::domain::scoring::{
    ProjectScore, ResponseType, Risk, RiskCategory, RiskStatus, TotalAccumulation,
    calculate_mitigated_project_score, calculate_mitigated_project_score_with,
    calculate_residual_risk, calculate_risk_rating, calculate_unmitigated_project_score,
    get_risk_level,
};

fn stored(rating: f64, response: &str, status: &str) -> Risk {
    Risk::new(
        format!("R-{rating}"),
        "stored risk",
        0.0,
        0.0,
        rating,
        ResponseType::from(response),
        RiskStatus::from(status),
        None,
    )
}

#[test]
fn rating_is_probability_times_impact() {
    assert_eq!(calculate_risk_rating(0.5, 50.0), 25.0);
    assert_eq!(calculate_risk_rating(1.0, 100.0), 100.0);
    assert_eq!(calculate_risk_rating(0.0, 80.0), 0.0);
}

#[test]
fn per_risk_levels_use_the_pmbok_bands() {
    for score in 0..=15 {
        assert_eq!(get_risk_level(f64::from(score)).name, "Low");
    }
    for score in 16..=35 {
        assert_eq!(get_risk_level(f64::from(score)).name, "Moderate");
    }
    for score in 36..=63 {
        assert_eq!(get_risk_level(f64::from(score)).name, "High");
    }
    for score in [64, 80, 100, 101, 150, 1000] {
        assert_eq!(get_risk_level(f64::from(score)).name, "Extreme");
    }
}

#[test]
fn residual_risk_scales_by_response_and_status() {
    assert_eq!(calculate_residual_risk(80.0, "Avoid", "Active"), 0.0);
    assert_eq!(calculate_residual_risk(80.0, "Accept", "Active"), 80.0);
    assert_eq!(calculate_residual_risk(80.0, "Mitigate", "Closed"), 0.0);
    assert!((calculate_residual_risk(100.0, "Transfer", "Monitoring") - 28.0).abs() < 1e-9);
}

#[test]
fn padded_response_and_status_text_gets_full_weight() {
    assert_eq!(calculate_residual_risk(100.0, " Transfer ", "Active"), 100.0);
    assert_eq!(
        calculate_residual_risk(100.0, " Transfer ", "Active"),
        calculate_residual_risk(100.0, "Bogus", "Active")
    );
    assert_eq!(calculate_mitigated_project_score(&[stored(80.0, "Accept", " closed")]), 80.0);
}

#[test]
fn an_empty_register_is_zero_and_low() {
    let unmitigated = ProjectScore::unmitigated(calculate_unmitigated_project_score(&[]));
    let mitigated = ProjectScore::mitigated(calculate_mitigated_project_score(&[]));

    assert_eq!(unmitigated.score, 0.0);
    assert_eq!(unmitigated.level.category, RiskCategory::Low);
    assert_eq!(mitigated.score, 0.0);
    assert_eq!(mitigated.level.category, RiskCategory::Low);
}

#[test]
fn the_unmitigated_high_band_starts_at_sixty() {
    let risks = vec![
        stored(80.0, "Accept", "Active"),
        stored(80.0, "Accept", "Active"),
        stored(20.0, "Accept", "Active"),
    ];

    let score = ProjectScore::unmitigated(calculate_unmitigated_project_score(&risks));

    assert_eq!(score.score, 60.0);
    assert_eq!(score.level.category, RiskCategory::High);
    assert!(!score.description.contains("priority management attention"));
}

#[test]
fn a_corrupted_rating_cannot_push_the_score_past_one_hundred() {
    let risks = vec![stored(150.0, "Accept", "Active")];

    assert_eq!(calculate_unmitigated_project_score(&risks), 100.0);
}

#[test]
fn bogus_responses_weigh_like_accept_everywhere() {
    assert_eq!(
        calculate_residual_risk(48.0, "Bogus", "Monitoring"),
        calculate_residual_risk(48.0, "Accept", "Monitoring")
    );

    let bogus = vec![stored(48.0, "Bogus", "Monitoring"), stored(12.0, "Bogus", "Active")];
    let accept = vec![stored(48.0, "Accept", "Monitoring"), stored(12.0, "Accept", "Active")];
    for accumulation in [TotalAccumulation::Precomputed, TotalAccumulation::Running] {
        assert_eq!(
            calculate_mitigated_project_score_with(&bogus, accumulation),
            calculate_mitigated_project_score_with(&accept, accumulation)
        );
    }
}

#[test]
fn scoring_twice_gives_identical_results() {
    let risks = vec![
        stored(100.0, "Transfer", "Monitoring"),
        stored(60.0, "Share", "Open"),
        stored(24.0, "Exploit", "In Progress"),
        stored(8.0, "Avoid", "Eventuated"),
    ];

    assert_eq!(
        calculate_unmitigated_project_score(&risks).to_bits(),
        calculate_unmitigated_project_score(&risks).to_bits()
    );
    assert_eq!(
        calculate_mitigated_project_score(&risks).to_bits(),
        calculate_mitigated_project_score(&risks).to_bits()
    );
}

#[test]
fn nan_ratings_surface_instead_of_crashing() {
    let risks = vec![stored(f64::NAN, "Accept", "Active"), stored(40.0, "Accept", "Active")];

    assert!(calculate_unmitigated_project_score(&risks).is_nan());
    assert_eq!(calculate_mitigated_project_score(&risks), 40.0);
}
