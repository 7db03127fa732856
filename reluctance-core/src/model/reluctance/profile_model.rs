use crate::model::profile::ProfileImpact;
use crate::model::property::AccessibilityPropertySet;

/// multiplies `base` by the impact class of every present property.
pub fn profile_reluctance(
    base: f64,
    impact: &ProfileImpact,
    properties: &AccessibilityPropertySet,
) -> f64 {
    properties
        .present_values()
        .fold(base, |reluctance, value| reluctance * impact.classify(value).factor())
}
