use serde::{de, Deserialize, Deserializer, Serialize};

/// One respondent's questionnaire as submitted through the survey form.
///
/// Categorical answers are carried as raw strings; the scoring and suggestion
/// layers decide what they mean and degrade gracefully when an answer is
/// missing or outside the offered options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyResponse {
    pub village_name: String,
    pub date: String,
    pub student_name: String,
    pub contact_number: String,
    pub respondent_name: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub respondent_age: Option<u16>,
    pub respondent_occupation: String,
    pub respondent_contact: String,

    // General health information
    pub doctor_visits: Option<String>,
    pub common_health_issues: Option<String>,
    pub medicines_available: Option<String>,
    pub vaccinations: Option<String>,

    // Personal hygiene practices
    pub hand_washing: Option<String>,
    pub teeth_brushing: Option<String>,
    pub hygiene_items: Option<String>,
    pub travel_hygiene: Option<String>,

    // Public hygiene and sanitation
    pub clean_water_access: Option<String>,
    pub toilet_facility: Option<String>,
    pub waste_disposal: Option<String>,
    pub community_waste_system: Option<String>,

    // Food hygiene and nutrition
    pub food_cleaning: Option<String>,
    pub water_purification: Option<String>,
    pub cooking_hygiene: Option<String>,

    // Hygiene challenges and awareness
    pub biggest_hygiene_issue: Option<String>,
    pub health_issues_due_hygiene: Option<String>,
    pub surface_disinfection: Option<String>,
    pub hygiene_programs_awareness: Option<String>,
    pub healthcare_affordability: Option<String>,
    pub additional_comments: Option<String>,
}

impl SurveyResponse {
    /// Identity fields that are blank. Only presence is checked.
    pub fn missing_identity_fields(&self) -> Vec<&'static str> {
        let text_fields = [
            ("village_name", &self.village_name),
            ("date", &self.date),
            ("student_name", &self.student_name),
            ("contact_number", &self.contact_number),
            ("respondent_name", &self.respondent_name),
            ("respondent_occupation", &self.respondent_occupation),
            ("respondent_contact", &self.respondent_contact),
        ];

        let mut missing: Vec<&'static str> = text_fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if self.respondent_age.is_none() {
            missing.push("respondent_age");
        }

        missing
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeInput {
    Number(u16),
    Text(String),
}

/// Accepts the age as a number or as a numeric string; blank strings count as absent.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AgeInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AgeInput::Number(age)) => Ok(Some(age)),
        Some(AgeInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<u16>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid respondent_age `{text}`")))
        }
    }
}

/// An optional answer exactly as given; blank input counts as absent.
pub(crate) fn answer(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.trim().is_empty())
}

/// Survey questions whose answers grade a behavior on an ordinal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeDimension {
    DoctorVisits,
    HandWashing,
    TeethBrushing,
    WaterPurification,
    SurfaceDisinfection,
}

impl PracticeDimension {
    pub const ALL: [PracticeDimension; 5] = [
        PracticeDimension::DoctorVisits,
        PracticeDimension::HandWashing,
        PracticeDimension::TeethBrushing,
        PracticeDimension::WaterPurification,
        PracticeDimension::SurfaceDisinfection,
    ];

    pub const fn field_name(self) -> &'static str {
        match self {
            PracticeDimension::DoctorVisits => "doctor_visits",
            PracticeDimension::HandWashing => "hand_washing",
            PracticeDimension::TeethBrushing => "teeth_brushing",
            PracticeDimension::WaterPurification => "water_purification",
            PracticeDimension::SurfaceDisinfection => "surface_disinfection",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PracticeDimension::DoctorVisits => "Doctor Visits",
            PracticeDimension::HandWashing => "Hand Washing",
            PracticeDimension::TeethBrushing => "Teeth Brushing",
            PracticeDimension::WaterPurification => "Water Purification",
            PracticeDimension::SurfaceDisinfection => "Surface Disinfection",
        }
    }

    pub fn answer(self, response: &SurveyResponse) -> Option<&str> {
        let raw = match self {
            PracticeDimension::DoctorVisits => &response.doctor_visits,
            PracticeDimension::HandWashing => &response.hand_washing,
            PracticeDimension::TeethBrushing => &response.teeth_brushing,
            PracticeDimension::WaterPurification => &response.water_purification,
            PracticeDimension::SurfaceDisinfection => &response.surface_disinfection,
        };
        answer(raw)
    }
}

/// Survey questions whose answers report whether a resource is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDimension {
    MedicinesAvailable,
    CleanWaterAccess,
    CommunityWasteSystem,
    HealthcareAffordability,
}

impl AccessDimension {
    pub const ALL: [AccessDimension; 4] = [
        AccessDimension::MedicinesAvailable,
        AccessDimension::CleanWaterAccess,
        AccessDimension::CommunityWasteSystem,
        AccessDimension::HealthcareAffordability,
    ];

    pub const fn field_name(self) -> &'static str {
        match self {
            AccessDimension::MedicinesAvailable => "medicines_available",
            AccessDimension::CleanWaterAccess => "clean_water_access",
            AccessDimension::CommunityWasteSystem => "community_waste_system",
            AccessDimension::HealthcareAffordability => "healthcare_affordability",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AccessDimension::MedicinesAvailable => "Medicine Access",
            AccessDimension::CleanWaterAccess => "Clean Water",
            AccessDimension::CommunityWasteSystem => "Waste System",
            AccessDimension::HealthcareAffordability => "Healthcare Affordability",
        }
    }

    pub fn answer(self, response: &SurveyResponse) -> Option<&str> {
        let raw = match self {
            AccessDimension::MedicinesAvailable => &response.medicines_available,
            AccessDimension::CleanWaterAccess => &response.clean_water_access,
            AccessDimension::CommunityWasteSystem => &response.community_waste_system,
            AccessDimension::HealthcareAffordability => &response.healthcare_affordability,
        };
        answer(raw)
    }
}
