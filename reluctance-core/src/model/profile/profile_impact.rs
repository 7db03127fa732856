use super::ImpactClass;
use crate::model::category::{BevEtat, Footway, Highway, Smoothness, Surface};
use crate::model::property::PropertyValue;
use crate::model::tag::Incline;

/// classifies each property slot for one accessibility profile.
#[derive(Clone, Copy)]
pub struct ProfileImpact {
    pub width: fn(f64) -> ImpactClass,
    pub lit: fn(bool) -> ImpactClass,
    pub surface: fn(Surface) -> ImpactClass,
    pub tactile_paving: fn(bool) -> ImpactClass,
    pub smoothness: fn(Smoothness) -> ImpactClass,
    pub highway: fn(Highway) -> ImpactClass,
    pub footway: fn(Footway) -> ImpactClass,
    pub incline: fn(Incline) -> ImpactClass,
    pub ressaut_max: fn(f64) -> ImpactClass,
    pub ressaut_min: fn(f64) -> ImpactClass,
    pub bev_etat: fn(BevEtat) -> ImpactClass,
    pub bev_ctrast: fn(bool) -> ImpactClass,
    pub trav_h_trt: fn(f64) -> ImpactClass,
}

fn no_impact<T>(_: T) -> ImpactClass {
    ImpactClass::NoImpact
}

impl ProfileImpact {
    /// every slot classified as [`ImpactClass::NoImpact`].
    pub const NO_IMPACT: ProfileImpact = ProfileImpact {
        width: no_impact::<f64>,
        lit: no_impact::<bool>,
        surface: no_impact::<Surface>,
        tactile_paving: no_impact::<bool>,
        smoothness: no_impact::<Smoothness>,
        highway: no_impact::<Highway>,
        footway: no_impact::<Footway>,
        incline: no_impact::<Incline>,
        ressaut_max: no_impact::<f64>,
        ressaut_min: no_impact::<f64>,
        bev_etat: no_impact::<BevEtat>,
        bev_ctrast: no_impact::<bool>,
        trav_h_trt: no_impact::<f64>,
    };

    pub fn classify(&self, value: PropertyValue) -> ImpactClass {
        match value {
            PropertyValue::Width(v) => (self.width)(v),
            PropertyValue::Lit(v) => (self.lit)(v),
            PropertyValue::Surface(v) => (self.surface)(v),
            PropertyValue::TactilePaving(v) => (self.tactile_paving)(v),
            PropertyValue::Smoothness(v) => (self.smoothness)(v),
            PropertyValue::Highway(v) => (self.highway)(v),
            PropertyValue::Footway(v) => (self.footway)(v),
            PropertyValue::Incline(v) => (self.incline)(v),
            PropertyValue::RessautMax(v) => (self.ressaut_max)(v),
            PropertyValue::RessautMin(v) => (self.ressaut_min)(v),
            PropertyValue::BevEtat(v) => (self.bev_etat)(v),
            PropertyValue::BevCtrast(v) => (self.bev_ctrast)(v),
            PropertyValue::TravHTrt(v) => (self.trav_h_trt)(v),
        }
    }
}

impl std::fmt::Debug for ProfileImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileImpact").finish_non_exhaustive()
    }
}
