//! # hvac-sizing
//!
//! Rule-of-thumb load estimation for the guided sizing questionnaire.
//!
//! [`calculate_load`] maps a [`ScreeningAnswers`] value to a
//! [`LoadCalculationResult`]: cooling tons, heating BTU/hr, an installed
//! price range, and advisory recommendations from [`recommendations`].
//! The function is total and side-effect free; it never rejects input.
//!
//! Results are area-based estimates and always carry
//! `method = rule_of_thumb`, `confidence = estimated`. They are not a
//! substitute for a certified room-by-room load calculation.
//!
//! ```
//! use hvac_core::enums::HomeAge;
//! use hvac_core::estimation::EstimationParams;
//! use hvac_core::screening::ScreeningAnswers;
//! use hvac_sizing::calculate_load;
//!
//! let answers = ScreeningAnswers {
//!     square_footage: 2000,
//!     home_age: HomeAge::Before1960,
//!     ..ScreeningAnswers::default()
//! };
//! let result = calculate_load(&answers, &EstimationParams::default());
//! assert_eq!(result.heating_btus, 92_000);
//! assert_eq!(result.price_range_low, 15_800.0);
//! assert_eq!(result.price_range_high, 39_500.0);
//!
//! let larger = ScreeningAnswers {
//!     square_footage: 2500,
//!     ..answers
//! };
//! assert_eq!(calculate_load(&larger, &EstimationParams::default()).heating_btus, 115_000);
//! ```
//!
//! [`ScreeningAnswers`]: hvac_core::screening::ScreeningAnswers
//! [`LoadCalculationResult`]: hvac_core::screening::LoadCalculationResult

mod load;
pub mod recommendations;

pub use load::calculate_load;
pub use recommendations::generate_recommendations;
