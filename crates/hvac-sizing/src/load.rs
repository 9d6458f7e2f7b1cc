//! Area-based capacity and price estimation.

use hvac_core::enums::{EstimateConfidence, EstimationMethod};
use hvac_core::estimation::EstimationParams;
use hvac_core::screening::{LoadCalculationResult, ScreeningAnswers};

use crate::recommendations::generate_recommendations;

/// Estimate cooling/heating capacity and an installed price range.
///
/// 1. Baseline: `tons = sqft / sqft_per_ton`, `btu = sqft * btu_per_sqft`.
/// 2. Homes built before 1980 scale both by `older_home_factor`; the heating
///    figure is truncated back to an integer.
/// 3. `low = tons * price_per_ton + installation_base`,
///    `high = low * high_end_multiplier`, each rounded to whole cents.
///
/// Zero square footage yields zero capacity and an installation-only price.
#[must_use]
pub fn calculate_load(
    answers: &ScreeningAnswers,
    params: &EstimationParams,
) -> LoadCalculationResult {
    let (cooling_tons, heating_btus) = capacity(answers, params);

    let price_range_low =
        round_to_cents(cooling_tons.mul_add(params.price_per_ton, params.installation_base));
    let price_range_high = round_to_cents(price_range_low * params.high_end_multiplier);

    let recommendations = generate_recommendations(answers);

    tracing::debug!(
        square_footage = answers.square_footage,
        home_age = %answers.home_age,
        cooling_tons,
        heating_btus,
        price_range_low,
        price_range_high,
        recommendations = recommendations.len(),
        "load estimate computed"
    );

    LoadCalculationResult {
        cooling_tons,
        heating_btus,
        method: EstimationMethod::RuleOfThumb,
        confidence: EstimateConfidence::Estimated,
        price_range_low,
        price_range_high,
        recommendations,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn capacity(answers: &ScreeningAnswers, params: &EstimationParams) -> (f64, u64) {
    let mut cooling_tons = f64::from(answers.square_footage) / params.sqft_per_ton;
    let mut heating_btus = u64::from(answers.square_footage) * u64::from(params.btu_per_sqft);

    if answers.home_age.is_older_envelope() {
        cooling_tons *= params.older_home_factor;
        heating_btus = floor_scaled(heating_btus as f64 * params.older_home_factor) as u64;
    }

    (cooling_tons, heating_btus)
}

/// Floor a scaled BTU figure after snapping away binary representation
/// error, so `48_000 * 1.15` floors to 55_200 rather than 55_199.
fn floor_scaled(value: f64) -> f64 {
    const SNAP: f64 = 1e6;
    ((value * SNAP).round() / SNAP).floor()
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
