//! Five audience tiers for explanations.
//!
//! A single topic is written once per tier, from a curious child up to an
//! attending physician.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audience tier of a piece of explanatory text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExplanationLevel {
    /// Children ages 5-12
    Child = 1,
    /// General adult patients and caregivers
    Patient = 2,
    /// Nurses, PAs and allied health professionals
    Nursing = 3,
    /// Medical and PA students
    MedicalStudent = 4,
    /// Attending physicians and specialists
    Physician = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("explanation level must be between 1 and 5, got {0}")]
pub struct InvalidLevel(pub u8);

impl ExplanationLevel {
    pub const ALL: [ExplanationLevel; 5] = [
        ExplanationLevel::Child,
        ExplanationLevel::Patient,
        ExplanationLevel::Nursing,
        ExplanationLevel::MedicalStudent,
        ExplanationLevel::Physician,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExplanationLevel::Child => "Child",
            ExplanationLevel::Patient => "Patient",
            ExplanationLevel::Nursing => "Nursing/Allied Health",
            ExplanationLevel::MedicalStudent => "Medical Student",
            ExplanationLevel::Physician => "Physician",
        }
    }

    /// Short label for badges
    pub fn label(&self) -> &'static str {
        match self {
            ExplanationLevel::Child => "Kids",
            ExplanationLevel::Patient => "Patient",
            ExplanationLevel::Nursing => "Nursing",
            ExplanationLevel::MedicalStudent => "Med Student",
            ExplanationLevel::Physician => "Physician",
        }
    }

    pub fn audience(&self) -> &'static str {
        match self {
            ExplanationLevel::Child => "Children ages 5-12",
            ExplanationLevel::Patient => "General adult patients and caregivers",
            ExplanationLevel::Nursing => {
                "Nurses, PAs, respiratory therapists, allied health professionals"
            }
            ExplanationLevel::MedicalStudent => "Medical students, PA students, advanced learners",
            ExplanationLevel::Physician => "Attending physicians, specialists, researchers",
        }
    }

    /// Flesch-Kincaid grade range the text should land in
    pub fn readability_grade_range(&self) -> (u8, u8) {
        match self {
            ExplanationLevel::Child => (3, 4),
            ExplanationLevel::Patient => (6, 8),
            ExplanationLevel::Nursing => (10, 12),
            ExplanationLevel::MedicalStudent => (13, 16),
            ExplanationLevel::Physician => (17, 20),
        }
    }
}

impl TryFrom<u8> for ExplanationLevel {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExplanationLevel::Child),
            2 => Ok(ExplanationLevel::Patient),
            3 => Ok(ExplanationLevel::Nursing),
            4 => Ok(ExplanationLevel::MedicalStudent),
            5 => Ok(ExplanationLevel::Physician),
            other => Err(InvalidLevel(other)),
        }
    }
}

impl From<ExplanationLevel> for u8 {
    fn from(level: ExplanationLevel) -> Self {
        level.number()
    }
}

impl std::fmt::Display for ExplanationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers_are_ordered() {
        let numbers: Vec<u8> = ExplanationLevel::ALL.iter().map(|l| l.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(ExplanationLevel::try_from(3), Ok(ExplanationLevel::Nursing));
        assert_eq!(ExplanationLevel::try_from(0), Err(InvalidLevel(0)));
        assert_eq!(ExplanationLevel::try_from(6), Err(InvalidLevel(6)));
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ExplanationLevel::Physician).unwrap(), "5");
        let level: ExplanationLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, ExplanationLevel::Patient);
        assert!(serde_json::from_str::<ExplanationLevel>("9").is_err());
    }

    #[test]
    fn test_grade_ranges_increase() {
        for pair in ExplanationLevel::ALL.windows(2) {
            assert!(pair[0].readability_grade_range().1 < pair[1].readability_grade_range().0);
        }
    }
}
