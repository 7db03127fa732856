use super::{AccessibilityProfile, WalkPreferencesBuilder};
use crate::model::category::{BevEtat, Smoothness, Surface};
use itertools::Itertools;
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use std::{
    collections::BTreeSet,
    fmt::Display,
    hash::{Hash, Hasher},
    sync::Arc,
};

static DEFAULT_WALK_PREFERENCES: Lazy<Arc<WalkPreferences>> =
    Lazy::new(|| Arc::new(WalkPreferences::default()));

/// walking preferences for a routing request, including the accessibility
/// thresholds. values are normalized on build so that instances can be used
/// as cache keys. immutable and safe to share between threads.
#[derive(Debug, Clone)]
pub struct WalkPreferences {
    pub(super) speed: f64,
    pub(super) reluctance: f64,
    pub(super) board_cost: u32,
    pub(super) stairs_reluctance: f64,
    pub(super) stairs_time_factor: f64,
    pub(super) safety_factor: f64,
    pub(super) minimal_width: f64,
    pub(super) light_required: bool,
    pub(super) relucted_surfaces: BTreeSet<Surface>,
    pub(super) tactile_paving_required: bool,
    pub(super) relucted_smoothness: Smoothness,
    pub(super) maximal_incline: f64,
    pub(super) ressaut_max: f64,
    pub(super) ressaut_min: f64,
    pub(super) bev_ctrast_required: bool,
    pub(super) bev_etat: BevEtat,
    pub(super) reluctance_on_highway: bool,
    pub(super) accessibility_profile: AccessibilityProfile,
}

impl Default for WalkPreferences {
    fn default() -> Self {
        Self {
            speed: 1.33,
            reluctance: 2.0,
            board_cost: 600,
            stairs_reluctance: 2.0,
            stairs_time_factor: 3.0,
            safety_factor: 1.0,
            minimal_width: 0.0,
            light_required: false,
            relucted_surfaces: BTreeSet::new(),
            tactile_paving_required: false,
            relucted_smoothness: Smoothness::Impassable,
            maximal_incline: f64::MAX,
            ressaut_max: f64::MAX,
            ressaut_min: 0.0,
            bev_ctrast_required: false,
            bev_etat: BevEtat::No,
            reluctance_on_highway: false,
            accessibility_profile: AccessibilityProfile::None,
        }
    }
}

impl WalkPreferences {
    /// the process-wide default instance.
    pub fn shared_default() -> Arc<WalkPreferences> {
        Arc::clone(&DEFAULT_WALK_PREFERENCES)
    }

    /// a builder seeded with the defaults.
    pub fn builder() -> WalkPreferencesBuilder {
        WalkPreferencesBuilder::new(WalkPreferences::shared_default())
    }

    /// human walk speed in m/s.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// base multiplier applied to walking time.
    pub fn reluctance(&self) -> f64 {
        self.reluctance
    }

    pub fn board_cost(&self) -> u32 {
        self.board_cost
    }

    /// used in place of the walk reluctance on stairs.
    pub fn stairs_reluctance(&self) -> f64 {
        self.stairs_reluctance
    }

    pub fn stairs_time_factor(&self) -> f64 {
        self.stairs_time_factor
    }

    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    /// narrower edges are relucted. 0 accepts every width.
    pub fn minimal_width(&self) -> f64 {
        self.minimal_width
    }

    pub fn light_required(&self) -> bool {
        self.light_required
    }

    pub fn relucted_surfaces(&self) -> &BTreeSet<Surface> {
        &self.relucted_surfaces
    }

    pub fn tactile_paving_required(&self) -> bool {
        self.tactile_paving_required
    }

    /// edges strictly worse than this grade are relucted. an edge tagged
    /// with exactly this grade is not.
    pub fn relucted_smoothness(&self) -> Smoothness {
        self.relucted_smoothness
    }

    pub fn maximal_incline(&self) -> f64 {
        self.maximal_incline
    }

    pub fn ressaut_max(&self) -> f64 {
        self.ressaut_max
    }

    pub fn ressaut_min(&self) -> f64 {
        self.ressaut_min
    }

    pub fn bev_ctrast_required(&self) -> bool {
        self.bev_ctrast_required
    }

    /// curb-ramp condition threshold, compared like
    /// [`WalkPreferences::relucted_smoothness`]: only a strictly worse
    /// condition is relucted.
    pub fn bev_etat(&self) -> BevEtat {
        self.bev_etat
    }

    pub fn reluctance_on_highway(&self) -> bool {
        self.reluctance_on_highway
    }

    pub fn accessibility_profile(&self) -> AccessibilityProfile {
        self.accessibility_profile
    }

    fn float_fields(&self) -> [OrderedFloat<f64>; 9] {
        [
            self.speed,
            self.reluctance,
            self.stairs_reluctance,
            self.stairs_time_factor,
            self.safety_factor,
            self.minimal_width,
            self.maximal_incline,
            self.ressaut_max,
            self.ressaut_min,
        ]
        .map(OrderedFloat)
    }
}

impl PartialEq for WalkPreferences {
    fn eq(&self, other: &Self) -> bool {
        self.float_fields() == other.float_fields()
            && self.board_cost == other.board_cost
            && self.light_required == other.light_required
            && self.relucted_surfaces == other.relucted_surfaces
            && self.tactile_paving_required == other.tactile_paving_required
            && self.relucted_smoothness == other.relucted_smoothness
            && self.bev_ctrast_required == other.bev_ctrast_required
            && self.bev_etat == other.bev_etat
            && self.reluctance_on_highway == other.reluctance_on_highway
            && self.accessibility_profile == other.accessibility_profile
    }
}

impl Eq for WalkPreferences {}

impl Hash for WalkPreferences {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.float_fields().hash(state);
        self.board_cost.hash(state);
        self.light_required.hash(state);
        self.relucted_surfaces.hash(state);
        self.tactile_paving_required.hash(state);
        self.relucted_smoothness.hash(state);
        self.bev_ctrast_required.hash(state);
        self.bev_etat.hash(state);
        self.reluctance_on_highway.hash(state);
        self.accessibility_profile.hash(state);
    }
}

fn push_num(fields: &mut Vec<String>, name: &str, value: f64, default: f64) {
    if OrderedFloat(value) != OrderedFloat(default) {
        fields.push(format!("{name}: {value:?}"));
    }
}

/// lists only the fields that differ from the defaults.
impl Display for WalkPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = WalkPreferences::default();
        let mut fields: Vec<String> = vec![];
        push_num(&mut fields, "speed", self.speed, d.speed);
        push_num(&mut fields, "reluctance", self.reluctance, d.reluctance);
        if self.board_cost != d.board_cost {
            fields.push(format!("board_cost: {}", self.board_cost));
        }
        push_num(
            &mut fields,
            "stairs_reluctance",
            self.stairs_reluctance,
            d.stairs_reluctance,
        );
        push_num(
            &mut fields,
            "stairs_time_factor",
            self.stairs_time_factor,
            d.stairs_time_factor,
        );
        push_num(&mut fields, "safety_factor", self.safety_factor, d.safety_factor);
        push_num(&mut fields, "minimal_width", self.minimal_width, d.minimal_width);
        if self.light_required {
            fields.push(String::from("light_required"));
        }
        if !self.relucted_surfaces.is_empty() {
            let surfaces = self.relucted_surfaces.iter().join(", ");
            fields.push(format!("relucted_surfaces: [{surfaces}]"));
        }
        if self.tactile_paving_required {
            fields.push(String::from("tactile_paving_required"));
        }
        if self.relucted_smoothness != d.relucted_smoothness {
            fields.push(format!("relucted_smoothness: '{}'", self.relucted_smoothness));
        }
        push_num(&mut fields, "maximal_incline", self.maximal_incline, d.maximal_incline);
        push_num(&mut fields, "ressaut_max", self.ressaut_max, d.ressaut_max);
        push_num(&mut fields, "ressaut_min", self.ressaut_min, d.ressaut_min);
        if self.bev_etat != d.bev_etat {
            fields.push(format!("bev_etat: {}", self.bev_etat));
        }
        if self.bev_ctrast_required {
            fields.push(String::from("bev_ctrast_required"));
        }
        if self.reluctance_on_highway {
            fields.push(String::from("reluctance_on_highway"));
        }
        if self.accessibility_profile != d.accessibility_profile {
            fields.push(format!("accessibility_profile: {}", self.accessibility_profile));
        }
        write!(f, "WalkPreferences{{{}}}", fields.join(", "))
    }
}
