use crate::model::tag::TagError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the accessibility standard used to classify edge impacts. `None`
/// selects the threshold model instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibilityProfile {
    #[default]
    #[serde(rename = "NONE", alias = "none")]
    None,
    /// personne à mobilité réduite
    #[serde(rename = "PAM", alias = "pam")]
    Pam,
    /// usager en fauteuil roulant
    #[serde(rename = "UFR", alias = "ufr")]
    Ufr,
}

impl Display for AccessibilityProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            AccessibilityProfile::None => "NONE",
            AccessibilityProfile::Pam => "PAM",
            AccessibilityProfile::Ufr => "UFR",
        };
        write!(f, "{msg}")
    }
}

impl FromStr for AccessibilityProfile {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(AccessibilityProfile::None),
            "PAM" => Ok(AccessibilityProfile::Pam),
            "UFR" => Ok(AccessibilityProfile::Ufr),
            _ => Err(TagError::UnknownCategory {
                category: "accessibility profile",
                token: s.to_string(),
            }),
        }
    }
}
