use super::super::domain::{AccessDimension, PracticeDimension};

/// Ordered option list for one practice question, worst answer first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionTable {
    options: &'static [&'static str],
}

/// Rank assigned to anything the table does not recognize.
pub const LOWEST_RANK: u8 = 1;

impl OptionTable {
    pub const fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn best_rank(&self) -> u8 {
        self.options.len() as u8
    }

    /// Exact, case-sensitive lookup; a miss falls back to `LOWEST_RANK`.
    pub fn lookup(&self, answer: &str) -> Option<u8> {
        self.options
            .iter()
            .position(|option| *option == answer)
            .map(|index| index as u8 + 1)
    }

    pub fn rank(&self, answer: Option<&str>) -> u8 {
        answer
            .and_then(|value| self.lookup(value))
            .unwrap_or(LOWEST_RANK)
    }
}

static DOCTOR_VISITS: OptionTable = OptionTable::new(&[
    "Never",
    "Rarely (once a year or less)",
    "Occasionally (only when needed)",
    "Regularly (once every few months)",
]);

static HAND_WASHING: OptionTable =
    OptionTable::new(&["Never", "Rarely", "Sometimes", "Always"]);

static TEETH_BRUSHING: OptionTable = OptionTable::new(&[
    "Only when I remember",
    "Once a day",
    "Twice a day",
    "After every meal",
]);

static WATER_PURIFICATION: OptionTable = OptionTable::new(&[
    "None",
    "Using purification tablets",
    "Filtering",
    "Boiling",
]);

static SURFACE_DISINFECTION: OptionTable =
    OptionTable::new(&["Never", "Occasionally", "Weekly", "Daily"]);

pub fn practice_table(dimension: PracticeDimension) -> &'static OptionTable {
    match dimension {
        PracticeDimension::DoctorVisits => &DOCTOR_VISITS,
        PracticeDimension::HandWashing => &HAND_WASHING,
        PracticeDimension::TeethBrushing => &TEETH_BRUSHING,
        PracticeDimension::WaterPurification => &WATER_PURIFICATION,
        PracticeDimension::SurfaceDisinfection => &SURFACE_DISINFECTION,
    }
}

/// The single answer that counts as adequate access; everything else is inadequate.
pub const fn adequate_answer(dimension: AccessDimension) -> &'static str {
    match dimension {
        AccessDimension::MedicinesAvailable => "Yes",
        AccessDimension::CleanWaterAccess => "Yes, always",
        AccessDimension::CommunityWasteSystem => "Yes",
        AccessDimension::HealthcareAffordability => "Yes",
    }
}
