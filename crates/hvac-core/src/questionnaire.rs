//! Static definition of the guided sizing questionnaire.
//!
//! Each question `id` is the JSON key of the matching [`ScreeningAnswers`]
//! field, and each option `value` is the string the answer carries. The
//! recommendation rules key on some of these values (`whistling`,
//! `weak_airflow`, `adding_cooling`), so they are published here as
//! constants.
//!
//! [`ScreeningAnswers`]: crate::screening::ScreeningAnswers

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HomeAge;

pub const AIRFLOW_WHISTLING: &str = "whistling";
pub const AIRFLOW_WEAK: &str = "weak_airflow";
pub const GOAL_ADDING_COOLING: &str = "adding_cooling";

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    Number,
    YesNo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Questionnaire {
    pub questions: Vec<Question>,
}

impl Questionnaire {
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

fn options(pairs: &[(&str, &str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|(value, label)| QuestionOption {
            value: (*value).to_string(),
            label: (*label).to_string(),
        })
        .collect()
}

fn question(
    id: &str,
    prompt: &str,
    kind: QuestionKind,
    required: bool,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        kind,
        required,
        options,
    }
}

/// The questionnaire in display order.
#[must_use]
pub fn screening_questionnaire() -> Questionnaire {
    use QuestionKind::{MultiChoice, Number, SingleChoice, YesNo};

    let home_ages = HomeAge::ALL
        .iter()
        .map(|age| QuestionOption {
            value: age.as_str().to_string(),
            label: age.label().to_string(),
        })
        .collect();

    Questionnaire {
        questions: vec![
            question(
                "currentSituation",
                "What best describes your situation?",
                SingleChoice,
                true,
                options(&[
                    ("replace_failed", "My system stopped working"),
                    ("replace_aging", "My system is old and I want to replace it"),
                    ("upgrade", "I want a more efficient or comfortable system"),
                    ("new_construction", "New construction or addition"),
                ]),
            ),
            question(
                "homeType",
                "What type of home do you have?",
                SingleChoice,
                true,
                options(&[
                    ("single_family", "Single family"),
                    ("townhouse", "Townhouse"),
                    ("condo", "Condo / apartment"),
                    ("mobile", "Mobile home"),
                ]),
            ),
            question(
                "stories",
                "How many stories is your home?",
                Number,
                true,
                Vec::new(),
            ),
            question(
                "squareFootage",
                "Approximately how many square feet are heated and cooled?",
                Number,
                true,
                Vec::new(),
            ),
            question(
                "heatingSystemType",
                "How is your home heated today?",
                SingleChoice,
                true,
                options(&[
                    ("gas_furnace", "Gas furnace"),
                    ("electric_furnace", "Electric furnace"),
                    ("heat_pump", "Heat pump"),
                    ("boiler", "Boiler / radiators"),
                    ("none", "No central heating"),
                ]),
            ),
            question(
                "hasCentralAc",
                "Does your home have central air conditioning?",
                YesNo,
                true,
                Vec::new(),
            ),
            question(
                "homeAge",
                "When was your home built?",
                SingleChoice,
                true,
                home_ages,
            ),
            question(
                "primaryGoals",
                "What are your main goals?",
                MultiChoice,
                true,
                options(&[
                    ("lower_bills", "Lower energy bills"),
                    ("improve_comfort", "Improve comfort"),
                    (GOAL_ADDING_COOLING, "Add air conditioning"),
                    ("replace_equipment", "Replace aging equipment"),
                    ("air_quality", "Better indoor air quality"),
                ]),
            ),
            question(
                "comfortProblems",
                "Do you notice any of these comfort problems?",
                MultiChoice,
                false,
                options(&[
                    ("hot_cold_rooms", "Some rooms too hot or too cold"),
                    ("humidity", "Too humid or too dry"),
                    ("drafts", "Drafts"),
                    ("noise", "Noisy equipment"),
                    ("dust", "Excess dust"),
                ]),
            ),
            question(
                "homeModifications",
                "Have you made any of these changes to your home?",
                MultiChoice,
                false,
                options(&[
                    ("addition", "Added living space"),
                    ("new_windows", "Replaced windows"),
                    ("insulation", "Added insulation"),
                    ("finished_basement", "Finished the basement"),
                ]),
            ),
            question(
                "systemPerformance",
                "How well does your current system perform?",
                SingleChoice,
                true,
                options(&[
                    ("good", "Works well"),
                    ("fair", "Works but struggles on extreme days"),
                    ("poor", "Frequently fails to keep up"),
                    ("not_working", "Not working"),
                ]),
            ),
            question(
                "equipmentLocation",
                "Where is your indoor equipment located?",
                SingleChoice,
                true,
                options(&[
                    ("basement", "Basement"),
                    ("attic", "Attic"),
                    ("closet", "Closet / utility room"),
                    ("garage", "Garage"),
                    ("crawlspace", "Crawlspace"),
                ]),
            ),
            question(
                "airflowIssues",
                "Do you notice any airflow issues?",
                MultiChoice,
                false,
                options(&[
                    (AIRFLOW_WHISTLING, "Whistling vents"),
                    (AIRFLOW_WEAK, "Weak airflow from vents"),
                    ("uneven_airflow", "Uneven airflow between rooms"),
                    ("musty_smell", "Musty smell"),
                ]),
            ),
        ],
    }
}
