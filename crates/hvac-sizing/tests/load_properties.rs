//! Sizing properties over square footage and home-age brackets.

use approx::assert_relative_eq;
use rstest::rstest;

use hvac_core::enums::{EstimateConfidence, EstimationMethod, HomeAge};
use hvac_core::estimation::EstimationParams;
use hvac_core::screening::ScreeningAnswers;
use hvac_sizing::calculate_load;

fn answers(square_footage: u32, home_age: HomeAge) -> ScreeningAnswers {
    ScreeningAnswers {
        square_footage,
        home_age,
        ..ScreeningAnswers::default()
    }
}

#[rstest]
fn unadjusted_brackets_use_baseline(
    #[values(HomeAge::From1980To1999, HomeAge::From2000To2009, HomeAge::From2010, HomeAge::Unknown)]
    home_age: HomeAge,
    #[values(0, 750, 1500, 2000, 3250)] square_footage: u32,
) {
    let result = calculate_load(&answers(square_footage, home_age), &EstimationParams::default());
    assert_relative_eq!(result.cooling_tons, f64::from(square_footage) / 500.0);
    assert_eq!(result.heating_btus, u64::from(square_footage) * 40);
}

#[rstest]
fn older_brackets_scale_by_factor(
    #[values(HomeAge::Before1960, HomeAge::From1960To1979)] home_age: HomeAge,
    #[values(0, 750, 1200, 1500, 2000, 2400, 2500, 3250, 19_999)] square_footage: u32,
) {
    let result = calculate_load(&answers(square_footage, home_age), &EstimationParams::default());
    assert_relative_eq!(
        result.cooling_tons,
        f64::from(square_footage) / 500.0 * 1.15,
        max_relative = 1e-12
    );
    // 40 BTU/sqft * 1.15 is exactly 46 BTU/sqft.
    assert_eq!(result.heating_btus, u64::from(square_footage) * 46);
}

#[rstest]
#[case(1000, HomeAge::From2010)]
#[case(1850, HomeAge::Before1960)]
#[case(2400, HomeAge::From1960To1979)]
#[case(4100, HomeAge::Unknown)]
fn price_range_follows_capacity(#[case] square_footage: u32, #[case] home_age: HomeAge) {
    let result = calculate_load(&answers(square_footage, home_age), &EstimationParams::default());
    assert_relative_eq!(
        result.price_range_low,
        result.cooling_tons * 3000.0 + 2000.0,
        epsilon = 0.005
    );
    assert_relative_eq!(
        result.price_range_high,
        result.price_range_low * 2.5,
        epsilon = 0.005
    );
    assert!(result.price_range_high >= result.price_range_low);
}

#[test]
fn end_to_end_example_from_json() {
    let answers: ScreeningAnswers =
        serde_json::from_str(r#"{"squareFootage": 2000, "homeAge": "before_1960"}"#).unwrap();
    let result = calculate_load(&answers, &EstimationParams::default());

    assert_relative_eq!(result.cooling_tons, 4.6);
    assert_eq!(result.heating_btus, 92_000);
    assert_relative_eq!(result.price_range_low, 15_800.0);
    assert_relative_eq!(result.price_range_high, 39_500.0);
    assert_eq!(result.method, EstimationMethod::RuleOfThumb);
    assert_eq!(result.confidence, EstimateConfidence::Estimated);
}

#[test]
fn recommendations_are_attached() {
    let answers: ScreeningAnswers = serde_json::from_str(
        r#"{
            "squareFootage": 1600,
            "homeAge": "1980_1999",
            "hasCentralAc": false,
            "primaryGoals": ["adding_cooling"],
            "comfortProblems": ["hot_cold_rooms", "humidity", "drafts"],
            "airflowIssues": ["whistling"]
        }"#,
    )
    .unwrap();
    let result = calculate_load(&answers, &EstimationParams::default());
    assert_eq!(result.recommendations.len(), 3);
    assert_eq!(
        result.recommendations[0],
        hvac_sizing::recommendations::DUCTWORK_EVALUATION
    );
}
