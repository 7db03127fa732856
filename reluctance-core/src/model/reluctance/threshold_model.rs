use crate::model::category::Highway;
use crate::model::preferences::WalkPreferences;
use crate::model::property::{AccessibilityPropertySet, PropertyValue};
use crate::model::tag::Incline;

/// factor applied for each breached threshold.
const BREACH_FACTOR: f64 = 2.0;

/// whether a present edge property breaches the walker's thresholds.
pub fn breaches_threshold(walk: &WalkPreferences, value: PropertyValue) -> bool {
    match value {
        PropertyValue::Width(width) => width < walk.minimal_width(),
        PropertyValue::Lit(lit) => !lit && walk.light_required(),
        PropertyValue::Surface(surface) => walk.relucted_surfaces().contains(&surface),
        PropertyValue::TactilePaving(paving) => !paving && walk.tactile_paving_required(),
        PropertyValue::Smoothness(smoothness) => smoothness > walk.relucted_smoothness(),
        PropertyValue::Incline(Incline::Percent(percent)) => {
            percent.abs() > walk.maximal_incline().abs()
        }
        PropertyValue::Incline(Incline::Direction(_)) => false,
        PropertyValue::RessautMax(height) => height > walk.ressaut_max(),
        PropertyValue::RessautMin(height) => height < walk.ressaut_min(),
        PropertyValue::BevCtrast(contrast) => !contrast && walk.bev_ctrast_required(),
        PropertyValue::BevEtat(etat) => etat > walk.bev_etat(),
        PropertyValue::Highway(highway) => {
            highway == Highway::Steps && walk.reluctance_on_highway()
        }
        PropertyValue::Footway(_) | PropertyValue::TravHTrt(_) => false,
    }
}

/// doubles `base` once per breached threshold.
pub fn threshold_reluctance(
    base: f64,
    walk: &WalkPreferences,
    properties: &AccessibilityPropertySet,
) -> f64 {
    properties
        .present_values()
        .filter(|value| breaches_threshold(walk, *value))
        .fold(base, |reluctance, _| reluctance * BREACH_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::{breaches_threshold, threshold_reluctance};
    use crate::model::category::{BevEtat, Highway, InclineDirection, Smoothness, Surface};
    use crate::model::preferences::WalkPreferences;
    use crate::model::property::{AccessibilityPropertySet, PropertyValue};
    use crate::model::tag::{Incline, OptionalTag};

    #[test]
    fn defaults_never_breach() {
        let walk = WalkPreferences::default();
        let values = [
            PropertyValue::Width(0.1),
            PropertyValue::Lit(false),
            PropertyValue::Surface(Surface::Mud),
            PropertyValue::TactilePaving(false),
            PropertyValue::Smoothness(Smoothness::Impassable),
            PropertyValue::Incline(Incline::Percent(25.0)),
            PropertyValue::RessautMax(0.3),
            PropertyValue::RessautMin(0.0),
            PropertyValue::BevEtat(BevEtat::No),
            PropertyValue::BevCtrast(false),
            PropertyValue::Highway(Highway::Steps),
        ];
        for value in values {
            assert!(!breaches_threshold(&walk, value), "{value:?}");
        }
    }

    #[test]
    fn ordered_thresholds_trigger_on_strictly_worse() {
        let walk = WalkPreferences::builder()
            .with_relucted_smoothness(Smoothness::Bad)
            .with_bev_etat(BevEtat::Yes)
            .build();
        let smooth = |s| breaches_threshold(&walk, PropertyValue::Smoothness(s));
        assert!(!smooth(Smoothness::Intermediate));
        assert!(!smooth(Smoothness::Bad));
        assert!(smooth(Smoothness::VeryBad));
        assert!(smooth(Smoothness::Impassable));
        assert!(!breaches_threshold(&walk, PropertyValue::BevEtat(BevEtat::Yes)));
        assert!(breaches_threshold(&walk, PropertyValue::BevEtat(BevEtat::Bad)));
    }

    #[test]
    fn equal_grade_keeps_base_reluctance() {
        let walk = WalkPreferences::builder()
            .with_relucted_smoothness(Smoothness::Intermediate)
            .with_bev_etat(BevEtat::Bad)
            .build();
        let props = AccessibilityPropertySet::builder()
            .with_smoothness(OptionalTag::Present(Smoothness::Intermediate))
            .with_bev_etat(OptionalTag::Present(BevEtat::Bad))
            .build();
        assert_eq!(threshold_reluctance(1.5, &walk, &props), 1.5);
    }

    #[test]
    fn incline_compares_magnitudes() {
        let walk = WalkPreferences::builder().with_maximal_incline(-5.0).build();
        let incline = |i| breaches_threshold(&walk, PropertyValue::Incline(i));
        assert!(incline(Incline::Percent(-6.0)));
        assert!(incline(Incline::Percent(6.0)));
        assert!(!incline(Incline::Percent(5.0)));
        assert!(!incline(Incline::Direction(InclineDirection::Up)));
    }

    #[test]
    fn breaches_compose_in_any_order() {
        let walk = WalkPreferences::builder()
            .with_minimal_width(0.9)
            .with_light_required(true)
            .with_relucted_surfaces([Surface::Gravel])
            .build();
        let props = AccessibilityPropertySet::builder()
            .with_surface(OptionalTag::Present(Surface::Gravel))
            .with_lit(OptionalTag::Present(false))
            .with_width(OptionalTag::Present(0.5))
            .build();
        assert_eq!(threshold_reluctance(2.0, &walk, &props), 16.0);

        let lit_only = AccessibilityPropertySet::builder()
            .with_lit(OptionalTag::Present(false))
            .build();
        assert_eq!(threshold_reluctance(2.0, &walk, &lit_only), 4.0);
    }
}
