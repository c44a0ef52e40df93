use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::{answer, SurveyResponse};

/// Grouping shown alongside each suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionCategory {
    #[serde(rename = "Healthcare Access")]
    HealthcareAccess,
    #[serde(rename = "Water & Sanitation")]
    WaterAndSanitation,
    #[serde(rename = "Sanitation")]
    Sanitation,
    #[serde(rename = "Personal Hygiene")]
    PersonalHygiene,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    #[serde(rename = "Health Promotion")]
    HealthPromotion,
}

impl SuggestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SuggestionCategory::HealthcareAccess => "Healthcare Access",
            SuggestionCategory::WaterAndSanitation => "Water & Sanitation",
            SuggestionCategory::Sanitation => "Sanitation",
            SuggestionCategory::PersonalHygiene => "Personal Hygiene",
            SuggestionCategory::WasteManagement => "Waste Management",
            SuggestionCategory::HealthPromotion => "Health Promotion",
        }
    }
}

/// A catalog entry. Records handed to callers are instantiated from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTemplate {
    pub category: SuggestionCategory,
    pub title: &'static str,
    pub suggestion: &'static str,
    pub resources: &'static [&'static str],
}

impl SuggestionTemplate {
    pub fn instantiate(&self) -> SuggestionRecord {
        SuggestionRecord {
            category: self.category,
            title: self.title.to_string(),
            suggestion: self.suggestion.to_string(),
            resources: self.resources.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// One recommendation selected for a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub category: SuggestionCategory,
    pub title: String,
    pub suggestion: String,
    pub resources: Vec<String>,
}

/// Predicate over the raw answers paired with the template it emits.
#[derive(Clone, Copy)]
pub struct SuggestionRule {
    pub key: &'static str,
    pub applies: fn(&SurveyResponse) -> bool,
    pub template: SuggestionTemplate,
}

impl fmt::Debug for SuggestionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionRule")
            .field("key", &self.key)
            .field("template", &self.template)
            .finish()
    }
}

impl SuggestionRule {
    pub fn matches(&self, response: &SurveyResponse) -> bool {
        (self.applies)(response)
    }
}

fn is_one_of(value: &Option<String>, options: &[&str]) -> bool {
    answer(value).is_some_and(|found| options.contains(&found))
}

fn medicines_unavailable(response: &SurveyResponse) -> bool {
    is_one_of(&response.medicines_available, &["No"])
}

fn healthcare_unaffordable(response: &SurveyResponse) -> bool {
    answer(&response.healthcare_affordability) != Some("Yes")
}

fn clean_water_lacking(response: &SurveyResponse) -> bool {
    is_one_of(
        &response.clean_water_access,
        &[
            "No, we rely on alternative sources",
            "No, access is very limited",
        ],
    )
}

fn open_defecation(response: &SurveyResponse) -> bool {
    is_one_of(&response.toilet_facility, &["Open defecation"])
}

fn infrequent_hand_washing(response: &SurveyResponse) -> bool {
    is_one_of(&response.hand_washing, &["Rarely", "Never"])
}

fn no_community_waste_system(response: &SurveyResponse) -> bool {
    is_one_of(&response.community_waste_system, &["No"])
}

/// Evaluated top to bottom; every matching rule contributes its template.
pub static RULES: &[SuggestionRule] = &[
    SuggestionRule {
        key: "medicine_availability",
        applies: medicines_unavailable,
        template: SuggestionTemplate {
            category: SuggestionCategory::HealthcareAccess,
            title: "Medicine Availability",
            suggestion: "Contact local Primary Health Center (PHC) or Community Health Center (CHC). Consider setting up a community pharmacy or medical kit.",
            resources: &[
                "National Health Mission helpline: 104",
                "Jan Aushadhi stores for affordable medicines",
                "Local ASHA worker contact",
            ],
        },
    },
    SuggestionRule {
        key: "affordable_healthcare",
        applies: healthcare_unaffordable,
        template: SuggestionTemplate {
            category: SuggestionCategory::HealthcareAccess,
            title: "Affordable Healthcare",
            suggestion: "Explore government health schemes like Ayushman Bharat, PMJAY, or state-specific health insurance programs.",
            resources: &[
                "Ayushman Bharat scheme enrollment",
                "Local government hospital services",
                "Health insurance schemes",
            ],
        },
    },
    SuggestionRule {
        key: "clean_water_access",
        applies: clean_water_lacking,
        template: SuggestionTemplate {
            category: SuggestionCategory::WaterAndSanitation,
            title: "Clean Water Access",
            suggestion: "Contact local water department or panchayat. Consider water purification methods like boiling, filtering, or water purification tablets.",
            resources: &[
                "Jal Jeevan Mission for piped water",
                "Water quality testing kits",
                "Community water purification systems",
            ],
        },
    },
    SuggestionRule {
        key: "toilet_facility",
        applies: open_defecation,
        template: SuggestionTemplate {
            category: SuggestionCategory::Sanitation,
            title: "Toilet Facility",
            suggestion: "Apply for Swachh Bharat Mission toilet construction. Contact local gram panchayat for subsidies and support.",
            resources: &[
                "Swachh Bharat Mission portal",
                "Local panchayat office",
                "Toilet construction subsidies",
            ],
        },
    },
    SuggestionRule {
        key: "hand_washing",
        applies: infrequent_hand_washing,
        template: SuggestionTemplate {
            category: SuggestionCategory::PersonalHygiene,
            title: "Hand Washing",
            suggestion: "Develop a habit of washing hands before eating and after using toilet. Use soap and clean water for at least 20 seconds.",
            resources: &[
                "WHO hand hygiene guidelines",
                "Local health worker training",
                "Community hygiene awareness programs",
            ],
        },
    },
    SuggestionRule {
        key: "community_waste_system",
        applies: no_community_waste_system,
        template: SuggestionTemplate {
            category: SuggestionCategory::WasteManagement,
            title: "Community Waste System",
            suggestion: "Organize community meetings to establish waste collection system. Contact local municipal corporation or panchayat.",
            resources: &[
                "Swachh Bharat Mission waste management",
                "Community waste segregation training",
                "Local waste collection services",
            ],
        },
    },
];

/// Emitted only when no rule in the catalog fired.
pub static MAINTAIN_GOOD_PRACTICES: SuggestionTemplate = SuggestionTemplate {
    category: SuggestionCategory::HealthPromotion,
    title: "Maintain Good Practices",
    suggestion: "Continue your good health and hygiene practices. Consider becoming a health advocate in your community.",
    resources: &[
        "Community health volunteer programs",
        "Health awareness campaigns",
        "Peer education opportunities",
    ],
};
