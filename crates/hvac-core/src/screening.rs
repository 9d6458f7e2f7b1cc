//! Sizing questionnaire input and load estimate output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EstimateConfidence, EstimationMethod, HomeAge};

/// Answers to the guided sizing questionnaire.
///
/// Constructed per request and discarded after use. Every field defaults, so
/// a partial answer set (e.g. only `squareFootage` and `homeAge`) still
/// deserializes. Choice answers are the option values published by
/// [`crate::questionnaire::screening_questionnaire`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningAnswers {
    pub current_situation: String,
    pub home_type: String,
    pub stories: u32,
    /// Conditioned floor area in square feet.
    pub square_footage: u32,
    pub heating_system_type: String,
    pub has_central_ac: bool,
    pub home_age: HomeAge,
    pub primary_goals: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comfort_problems: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub home_modifications: Vec<String>,
    pub system_performance: String,
    pub equipment_location: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub airflow_issues: Vec<String>,
}

impl ScreeningAnswers {
    #[must_use]
    pub fn has_airflow_issue(&self, issue: &str) -> bool {
        self.airflow_issues.iter().any(|i| i == issue)
    }

    #[must_use]
    pub fn has_primary_goal(&self, goal: &str) -> bool {
        self.primary_goals.iter().any(|g| g == goal)
    }
}

/// A rule-of-thumb sizing estimate with a price range and advisories.
///
/// This is an estimate, never a substitute for a certified load calculation;
/// `method` and `confidence` say so explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadCalculationResult {
    pub cooling_tons: f64,
    pub heating_btus: u64,
    pub method: EstimationMethod,
    pub confidence: EstimateConfidence,
    pub price_range_low: f64,
    pub price_range_high: f64,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_answers_deserialize_with_defaults() {
        let answers: ScreeningAnswers =
            serde_json::from_str(r#"{"squareFootage": 2000, "homeAge": "before_1960"}"#).unwrap();
        assert_eq!(answers.square_footage, 2000);
        assert_eq!(answers.home_age, HomeAge::Before1960);
        assert!(!answers.has_central_ac);
        assert!(answers.primary_goals.is_empty());
        assert!(answers.airflow_issues.is_empty());
    }

    #[test]
    fn answers_use_camel_case_keys() {
        let answers = ScreeningAnswers {
            has_central_ac: true,
            airflow_issues: vec!["whistling".into()],
            ..ScreeningAnswers::default()
        };
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["hasCentralAc"], true);
        assert_eq!(json["airflowIssues"][0], "whistling");
        assert!(json.get("comfortProblems").is_none());
        assert!(json.get("has_central_ac").is_none());
    }

    #[test]
    fn membership_helpers() {
        let answers = ScreeningAnswers {
            primary_goals: vec!["adding_cooling".into()],
            airflow_issues: vec!["weak_airflow".into()],
            ..ScreeningAnswers::default()
        };
        assert!(answers.has_primary_goal("adding_cooling"));
        assert!(!answers.has_primary_goal("lower_bills"));
        assert!(answers.has_airflow_issue("weak_airflow"));
        assert!(!answers.has_airflow_issue("whistling"));
    }
}
