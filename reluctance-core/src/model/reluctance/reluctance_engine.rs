use super::{profile_reluctance, threshold_reluctance, ReluctanceError, TraverseMode};
use crate::model::preferences::{RoutingPreferences, WalkPreferences};
use crate::model::profile::ProfileImpactTable;
use crate::model::property::AccessibilityPropertySet;

/// computes the street reluctance of an edge for a routing request.
/// holds no mutable state and can be shared between search threads.
#[derive(Debug, Clone, Copy)]
pub struct ReluctanceEngine<'a> {
    impacts: &'a ProfileImpactTable,
}

impl Default for ReluctanceEngine<'static> {
    fn default() -> Self {
        ReluctanceEngine {
            impacts: ProfileImpactTable::global(),
        }
    }
}

impl<'a> ReluctanceEngine<'a> {
    pub fn new(impacts: &'a ProfileImpactTable) -> ReluctanceEngine<'a> {
        ReluctanceEngine { impacts }
    }

    /// reluctance of a regular (non-wheelchair) street edge. stairs
    /// override every other rule.
    pub fn compute_reluctance(
        &self,
        preferences: &RoutingPreferences,
        mode: TraverseMode,
        walking_bike: bool,
        edge_is_stairs: bool,
        properties: &AccessibilityPropertySet,
    ) -> Result<f64, ReluctanceError> {
        if edge_is_stairs {
            return Ok(preferences.walk.stairs_reluctance());
        }
        match mode {
            TraverseMode::Walk if walking_bike => Ok(preferences.bike.walking_reluctance),
            TraverseMode::Walk => {
                Ok(self.compute_regular_walk_reluctance(&preferences.walk, properties))
            }
            TraverseMode::Bicycle => Ok(preferences.bike.reluctance),
            TraverseMode::Car => Ok(preferences.car.reluctance),
            other => Err(ReluctanceError::InvalidMode(other)),
        }
    }

    /// walk reluctance adjusted by the edge's accessibility properties. a
    /// selected profile replaces the threshold rules entirely.
    pub fn compute_regular_walk_reluctance(
        &self,
        walk: &WalkPreferences,
        properties: &AccessibilityPropertySet,
    ) -> f64 {
        let base = walk.reluctance();
        match self.impacts.get(walk.accessibility_profile()) {
            None => threshold_reluctance(base, walk, properties),
            Some(impact) => profile_reluctance(base, impact, properties),
        }
    }

    /// wheelchair reluctance, driven by slope and the accessible flag only.
    pub fn compute_wheelchair_reluctance(
        &self,
        preferences: &RoutingPreferences,
        max_slope: f64,
        edge_wheelchair_accessible: bool,
        edge_is_stairs: bool,
    ) -> f64 {
        let wheelchair = &preferences.wheelchair;
        let mut reluctance = if edge_wheelchair_accessible {
            1.0
        } else {
            wheelchair.inaccessible_street_reluctance
        };
        reluctance *= preferences.walk.reluctance();

        if edge_is_stairs {
            reluctance *= wheelchair.stairs_reluctance;
        }

        let slope_exceeded_by = max_slope.abs() - wheelchair.max_slope;
        if slope_exceeded_by > 0.0 && wheelchair.slope_exceeded_reluctance > 0.0 {
            reluctance *= 1.0 + (100.0 * slope_exceeded_by) * wheelchair.slope_exceeded_reluctance;
        }
        reluctance
    }
}

#[cfg(test)]
mod tests {
    use super::ReluctanceEngine;
    use crate::model::category::{Highway, InclineDirection, Smoothness, Surface};
    use crate::model::preferences::{AccessibilityProfile, RoutingPreferences, WalkPreferences};
    use crate::model::property::{AccessibilityPropertySet, PropertyKey};
    use crate::model::reluctance::{ReluctanceError, TraverseMode};
    use crate::model::tag::{Incline, OptionalTag};

    fn narrow_edge() -> AccessibilityPropertySet {
        AccessibilityPropertySet::builder()
            .with_width(OptionalTag::Present(0.79))
            .build()
    }

    fn prefs_with(walk: std::sync::Arc<WalkPreferences>) -> RoutingPreferences {
        RoutingPreferences::default().with_walk(walk)
    }

    fn walk_reluctance(prefs: &RoutingPreferences, props: &AccessibilityPropertySet) -> f64 {
        let engine = ReluctanceEngine::default();
        match engine.compute_reluctance(prefs, TraverseMode::Walk, false, false, props) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn narrow_edge_doubles_once() {
        let walk = WalkPreferences::builder()
            .with_reluctance(1.0)
            .with_minimal_width(0.9)
            .build();
        assert_eq!(walk_reluctance(&prefs_with(walk), &narrow_edge()), 2.0);
    }

    #[test]
    fn profile_overrides_thresholds() {
        let walk = WalkPreferences::builder()
            .with_reluctance(1.0)
            .with_minimal_width(0.9)
            .with_light_required(true)
            .with_accessibility_profile(AccessibilityProfile::Pam)
            .build();
        let props = AccessibilityPropertySet::builder()
            .with_width(OptionalTag::Present(0.79))
            .with_lit(OptionalTag::Present(false))
            .build();
        assert_eq!(walk_reluctance(&prefs_with(walk), &props), 3.0);
    }

    #[test]
    fn concrete_lane_by_profile() {
        let props = AccessibilityPropertySet::builder()
            .with_surface(OptionalTag::Present(Surface::ConcreteLanes))
            .build();
        for (profile, expected) in [
            (AccessibilityProfile::Pam, 1.0),
            (AccessibilityProfile::Ufr, 5.0),
        ] {
            let walk = WalkPreferences::builder()
                .with_reluctance(1.0)
                .with_accessibility_profile(profile)
                .build();
            assert_eq!(walk_reluctance(&prefs_with(walk), &props), expected, "{profile}");
        }
    }

    #[test]
    fn incline_keyword_never_triggers() {
        let walk = WalkPreferences::builder().with_maximal_incline(0.0).build();
        let props = AccessibilityPropertySet::builder()
            .with_incline(OptionalTag::Present(Incline::Direction(InclineDirection::Up)))
            .build();
        assert_eq!(walk_reluctance(&prefs_with(walk), &props), 2.0);
    }

    #[test]
    fn absent_properties_are_neutral() {
        let props = AccessibilityPropertySet::default();
        for profile in [
            AccessibilityProfile::None,
            AccessibilityProfile::Pam,
            AccessibilityProfile::Ufr,
        ] {
            let walk = WalkPreferences::builder()
                .with_reluctance(1.0)
                .with_minimal_width(5.0)
                .with_accessibility_profile(profile)
                .build();
            assert_eq!(walk_reluctance(&prefs_with(walk), &props), 1.0, "{profile}");
        }
    }

    #[test]
    fn every_breach_doubles() {
        let walk = WalkPreferences::builder()
            .with_reluctance(1.0)
            .with_minimal_width(1.5)
            .with_light_required(true)
            .with_relucted_surfaces([Surface::Sett])
            .with_tactile_paving_required(true)
            .with_relucted_smoothness(Smoothness::Good)
            .with_maximal_incline(4.0)
            .with_ressaut_max(0.02)
            .with_ressaut_min(0.01)
            .with_bev_ctrast_required(true)
            .with_reluctance_on_highway(true)
            .build();
        let mut builder = AccessibilityPropertySet::builder();
        let tags = [
            (PropertyKey::Width, "1.0"),
            (PropertyKey::Lit, "no"),
            (PropertyKey::Surface, "sett"),
            (PropertyKey::TactilePaving, "no"),
            (PropertyKey::Smoothness, "bad"),
            (PropertyKey::Incline, "-8%"),
            (PropertyKey::RessautMax, "0.05"),
            (PropertyKey::RessautMin, "0.0"),
            (PropertyKey::BevCtrast, "no"),
            (PropertyKey::Highway, "steps"),
        ];
        for (key, raw) in tags {
            builder = match builder.with_tag(key, raw) {
                Ok(b) => b,
                Err(e) => panic!("{e}"),
            };
        }
        let props = builder.build();
        assert_eq!(walk_reluctance(&prefs_with(walk), &props), 1024.0);
    }

    #[test]
    fn stairs_override_everything() {
        let engine = ReluctanceEngine::default();
        let walk = WalkPreferences::builder()
            .with_stairs_reluctance(7.0)
            .with_accessibility_profile(AccessibilityProfile::Ufr)
            .build();
        let prefs = prefs_with(walk);
        let props = AccessibilityPropertySet::builder()
            .with_highway(OptionalTag::Present(Highway::Steps))
            .build();
        for mode in [TraverseMode::Walk, TraverseMode::Car, TraverseMode::Bus] {
            let result = engine.compute_reluctance(&prefs, mode, false, true, &props);
            assert_eq!(result, Ok(7.0), "{mode}");
        }
    }

    #[test]
    fn mode_dispatch() {
        let engine = ReluctanceEngine::default();
        let prefs = RoutingPreferences::default();
        let props = narrow_edge();
        let reluctance = |mode, walking_bike| {
            engine.compute_reluctance(&prefs, mode, walking_bike, false, &props)
        };
        assert_eq!(reluctance(TraverseMode::Walk, true), Ok(5.0));
        assert_eq!(reluctance(TraverseMode::Bicycle, false), Ok(2.0));
        assert_eq!(reluctance(TraverseMode::Car, false), Ok(2.0));
        assert_eq!(
            reluctance(TraverseMode::Ferry, false),
            Err(ReluctanceError::InvalidMode(TraverseMode::Ferry))
        );
    }

    #[test]
    fn wheelchair_reluctance() {
        let engine = ReluctanceEngine::default();
        let prefs = prefs_with(WalkPreferences::builder().with_reluctance(2.0).build());

        assert_eq!(engine.compute_wheelchair_reluctance(&prefs, 0.0, true, false), 2.0);
        assert_eq!(engine.compute_wheelchair_reluctance(&prefs, 0.0, false, false), 50.0);
        assert_eq!(engine.compute_wheelchair_reluctance(&prefs, 0.0, true, true), 200.0);

        let steep = engine.compute_wheelchair_reluctance(&prefs, -0.093, true, false);
        assert!((steep - 4.0).abs() < 1e-9, "{steep}");
    }
}
