use super::{AccessibilityProfile, WalkPreferences, WalkPreferencesBuilder};
use crate::model::category::{BevEtat, Smoothness, Surface};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// serialized walk preferences. every field is optional, missing fields
/// keep the value of the preferences being overridden.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WalkPreferencesConfig {
    pub speed: Option<f64>,
    pub reluctance: Option<f64>,
    pub board_cost: Option<i64>,
    pub stairs_reluctance: Option<f64>,
    pub stairs_time_factor: Option<f64>,
    pub safety_factor: Option<f64>,
    pub minimal_width: Option<f64>,
    pub light_required: Option<bool>,
    pub relucted_surfaces: Option<Vec<Surface>>,
    pub tactile_paving_required: Option<bool>,
    pub relucted_smoothness: Option<Smoothness>,
    pub maximal_incline: Option<f64>,
    pub ressaut_max: Option<f64>,
    pub ressaut_min: Option<f64>,
    pub bev_ctrast_required: Option<bool>,
    pub bev_etat: Option<BevEtat>,
    pub reluctance_on_highway: Option<bool>,
    pub accessibility_profile: Option<AccessibilityProfile>,
}

impl WalkPreferencesConfig {
    pub fn apply(&self, builder: WalkPreferencesBuilder) -> WalkPreferencesBuilder {
        let mut b = builder;
        if let Some(v) = self.speed {
            b = b.with_speed(v);
        }
        if let Some(v) = self.reluctance {
            b = b.with_reluctance(v);
        }
        if let Some(v) = self.board_cost {
            b = b.with_board_cost(v);
        }
        if let Some(v) = self.stairs_reluctance {
            b = b.with_stairs_reluctance(v);
        }
        if let Some(v) = self.stairs_time_factor {
            b = b.with_stairs_time_factor(v);
        }
        if let Some(v) = self.safety_factor {
            b = b.with_safety_factor(v);
        }
        if let Some(v) = self.minimal_width {
            b = b.with_minimal_width(v);
        }
        if let Some(v) = self.light_required {
            b = b.with_light_required(v);
        }
        if let Some(v) = &self.relucted_surfaces {
            b = b.with_relucted_surfaces(v.iter().copied());
        }
        if let Some(v) = self.tactile_paving_required {
            b = b.with_tactile_paving_required(v);
        }
        if let Some(v) = self.relucted_smoothness {
            b = b.with_relucted_smoothness(v);
        }
        if let Some(v) = self.maximal_incline {
            b = b.with_maximal_incline(v);
        }
        if let Some(v) = self.ressaut_max {
            b = b.with_ressaut_max(v);
        }
        if let Some(v) = self.ressaut_min {
            b = b.with_ressaut_min(v);
        }
        if let Some(v) = self.bev_ctrast_required {
            b = b.with_bev_ctrast_required(v);
        }
        if let Some(v) = self.bev_etat {
            b = b.with_bev_etat(v);
        }
        if let Some(v) = self.reluctance_on_highway {
            b = b.with_reluctance_on_highway(v);
        }
        if let Some(v) = self.accessibility_profile {
            b = b.with_accessibility_profile(v);
        }
        b
    }

    /// overrides the shared defaults.
    pub fn build(&self) -> Arc<WalkPreferences> {
        self.apply(WalkPreferences::builder()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::WalkPreferencesConfig;
    use crate::model::category::Surface;
    use crate::model::preferences::{AccessibilityProfile, WalkPreferences};
    use std::sync::Arc;

    #[test]
    fn empty_config_is_the_default() {
        let prefs = WalkPreferencesConfig::default().build();
        assert!(Arc::ptr_eq(&prefs, &WalkPreferences::shared_default()));
    }

    #[test]
    fn from_json() {
        let json = r#"{
            "minimal_width": 0.9,
            "relucted_surfaces": ["sand", "concrete:lane"],
            "accessibility_profile": "UFR"
        }"#;
        let conf: WalkPreferencesConfig = match serde_json::from_str(json) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        let prefs = conf.build();
        assert_eq!(prefs.minimal_width(), 0.9);
        assert!(prefs.relucted_surfaces().contains(&Surface::ConcreteLanes));
        assert_eq!(prefs.accessibility_profile(), AccessibilityProfile::Ufr);
        assert_eq!(prefs.speed(), 1.33);
    }
}
