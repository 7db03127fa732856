use super::{units, AccessibilityProfile, WalkPreferences};
use crate::model::category::{BevEtat, Smoothness, Surface};
use std::{collections::BTreeSet, sync::Arc};

/// builds a [`WalkPreferences`] from an original instance. when the result
/// equals the original, the original instance is handed back.
#[derive(Debug, Clone)]
pub struct WalkPreferencesBuilder {
    original: Arc<WalkPreferences>,
    values: WalkPreferences,
}

impl WalkPreferencesBuilder {
    pub fn new(original: Arc<WalkPreferences>) -> WalkPreferencesBuilder {
        let values = original.as_ref().clone();
        WalkPreferencesBuilder { original, values }
    }

    pub fn copy_of(original: &Arc<WalkPreferences>) -> WalkPreferencesBuilder {
        WalkPreferencesBuilder::new(Arc::clone(original))
    }

    pub fn original(&self) -> &Arc<WalkPreferences> {
        &self.original
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.values.speed = speed;
        self
    }

    pub fn with_reluctance(mut self, reluctance: f64) -> Self {
        self.values.reluctance = reluctance;
        self
    }

    pub fn with_board_cost(mut self, board_cost: i64) -> Self {
        self.values.board_cost = units::cost(board_cost);
        self
    }

    pub fn with_stairs_reluctance(mut self, stairs_reluctance: f64) -> Self {
        self.values.stairs_reluctance = stairs_reluctance;
        self
    }

    pub fn with_stairs_time_factor(mut self, stairs_time_factor: f64) -> Self {
        self.values.stairs_time_factor = stairs_time_factor;
        self
    }

    /// clamped into [0, 1].
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        if !(0.0..=1.0).contains(&safety_factor) {
            log::warn!("safety factor {safety_factor} clamped into [0, 1]");
        }
        self.values.safety_factor = safety_factor.clamp(0.0, 1.0);
        self
    }

    pub fn with_minimal_width(mut self, minimal_width: f64) -> Self {
        self.values.minimal_width = minimal_width;
        self
    }

    pub fn with_light_required(mut self, light_required: bool) -> Self {
        self.values.light_required = light_required;
        self
    }

    pub fn with_relucted_surfaces<I>(mut self, surfaces: I) -> Self
    where
        I: IntoIterator<Item = Surface>,
    {
        self.values.relucted_surfaces = surfaces.into_iter().collect::<BTreeSet<_>>();
        self
    }

    pub fn with_tactile_paving_required(mut self, tactile_paving_required: bool) -> Self {
        self.values.tactile_paving_required = tactile_paving_required;
        self
    }

    pub fn with_relucted_smoothness(mut self, relucted_smoothness: Smoothness) -> Self {
        self.values.relucted_smoothness = relucted_smoothness;
        self
    }

    pub fn with_maximal_incline(mut self, maximal_incline: f64) -> Self {
        self.values.maximal_incline = maximal_incline;
        self
    }

    pub fn with_ressaut_max(mut self, ressaut_max: f64) -> Self {
        self.values.ressaut_max = ressaut_max;
        self
    }

    pub fn with_ressaut_min(mut self, ressaut_min: f64) -> Self {
        self.values.ressaut_min = ressaut_min;
        self
    }

    pub fn with_bev_ctrast_required(mut self, bev_ctrast_required: bool) -> Self {
        self.values.bev_ctrast_required = bev_ctrast_required;
        self
    }

    pub fn with_bev_etat(mut self, bev_etat: BevEtat) -> Self {
        self.values.bev_etat = bev_etat;
        self
    }

    pub fn with_reluctance_on_highway(mut self, reluctance_on_highway: bool) -> Self {
        self.values.reluctance_on_highway = reluctance_on_highway;
        self
    }

    pub fn with_accessibility_profile(
        mut self,
        accessibility_profile: AccessibilityProfile,
    ) -> Self {
        self.values.accessibility_profile = accessibility_profile;
        self
    }

    pub fn apply<F>(self, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        body(self)
    }

    pub fn build(self) -> Arc<WalkPreferences> {
        let v = self.values;
        let candidate = WalkPreferences {
            speed: units::speed(v.speed),
            reluctance: units::reluctance(v.reluctance),
            board_cost: v.board_cost,
            stairs_reluctance: units::reluctance(v.stairs_reluctance),
            stairs_time_factor: units::reluctance(v.stairs_time_factor),
            safety_factor: units::ratio(v.safety_factor),
            minimal_width: units::length(v.minimal_width),
            light_required: v.light_required,
            relucted_surfaces: v.relucted_surfaces,
            tactile_paving_required: v.tactile_paving_required,
            relucted_smoothness: v.relucted_smoothness,
            maximal_incline: units::incline(v.maximal_incline),
            ressaut_max: units::height(v.ressaut_max),
            ressaut_min: units::height(v.ressaut_min),
            bev_ctrast_required: v.bev_ctrast_required,
            bev_etat: v.bev_etat,
            reluctance_on_highway: v.reluctance_on_highway,
            accessibility_profile: v.accessibility_profile,
        };
        if candidate == *self.original {
            self.original
        } else {
            Arc::new(candidate)
        }
    }
}
