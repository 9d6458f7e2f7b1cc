//! Advisory recommendation rules.
//!
//! Rules are evaluated in the fixed order of [`RULES`]. Each rule is
//! independent of the others and contributes at most one message, so the
//! output never repeats a recommendation and adding a qualifying condition
//! never removes an earlier one.

use hvac_core::questionnaire::{AIRFLOW_WEAK, AIRFLOW_WHISTLING, GOAL_ADDING_COOLING};
use hvac_core::screening::ScreeningAnswers;

pub const DUCTWORK_EVALUATION: &str = "Consider ductwork evaluation for optimal performance";
pub const COMPREHENSIVE_EVALUATION: &str =
    "Multiple comfort issues detected - comprehensive system evaluation recommended";
pub const ADDING_COOLING_UPGRADES: &str =
    "Adding AC may require ductwork modifications and electrical upgrades";

/// More comfort problems than this trigger a whole-system evaluation.
const COMFORT_PROBLEM_THRESHOLD: usize = 2;

/// A single advisory: a predicate over the answers and the message it adds.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&ScreeningAnswers) -> bool,
    pub message: &'static str,
}

fn airflow_symptoms(answers: &ScreeningAnswers) -> bool {
    answers.has_airflow_issue(AIRFLOW_WHISTLING) || answers.has_airflow_issue(AIRFLOW_WEAK)
}

fn many_comfort_problems(answers: &ScreeningAnswers) -> bool {
    answers.comfort_problems.len() > COMFORT_PROBLEM_THRESHOLD
}

fn adding_cooling_without_central_ac(answers: &ScreeningAnswers) -> bool {
    !answers.has_central_ac && answers.has_primary_goal(GOAL_ADDING_COOLING)
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "ductwork_evaluation",
        applies: airflow_symptoms,
        message: DUCTWORK_EVALUATION,
    },
    Rule {
        name: "comprehensive_evaluation",
        applies: many_comfort_problems,
        message: COMPREHENSIVE_EVALUATION,
    },
    Rule {
        name: "adding_cooling_upgrades",
        applies: adding_cooling_without_central_ac,
        message: ADDING_COOLING_UPGRADES,
    },
];

/// Apply every rule in order and collect the messages of those that fire.
#[must_use]
pub fn generate_recommendations(answers: &ScreeningAnswers) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(answers))
        .inspect(|rule| tracing::trace!(rule = rule.name, "recommendation rule fired"))
        .map(|rule| rule.message.to_string())
        .collect()
}
