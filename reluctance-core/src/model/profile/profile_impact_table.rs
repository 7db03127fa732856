use super::{ImpactClass, ProfileImpact, PAM_IMPACT, UFR_IMPACT};
use crate::model::preferences::AccessibilityProfile;
use crate::model::property::PropertyValue;

/// the impact tables of every supported profile, read-only after startup.
pub static PROFILE_IMPACTS: ProfileImpactTable = ProfileImpactTable::new();

#[derive(Debug, Clone, Copy)]
pub struct ProfileImpactTable {
    pam: ProfileImpact,
    ufr: ProfileImpact,
}

impl Default for ProfileImpactTable {
    fn default() -> Self {
        ProfileImpactTable::new()
    }
}

impl ProfileImpactTable {
    pub const fn new() -> ProfileImpactTable {
        ProfileImpactTable {
            pam: PAM_IMPACT,
            ufr: UFR_IMPACT,
        }
    }

    pub fn global() -> &'static ProfileImpactTable {
        &PROFILE_IMPACTS
    }

    /// the impact table for a profile, `None` for [`AccessibilityProfile::None`].
    pub fn get(&self, profile: AccessibilityProfile) -> Option<&ProfileImpact> {
        match profile {
            AccessibilityProfile::None => None,
            AccessibilityProfile::Pam => Some(&self.pam),
            AccessibilityProfile::Ufr => Some(&self.ufr),
        }
    }

    pub fn classify(&self, profile: AccessibilityProfile, value: PropertyValue) -> ImpactClass {
        self.get(profile)
            .map(|impact| impact.classify(value))
            .unwrap_or(ImpactClass::NoImpact)
    }
}
