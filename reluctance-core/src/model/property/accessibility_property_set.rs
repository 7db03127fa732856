use super::{AccessibilityPropertySetBuilder, PropertyKey, PropertyValue};
use crate::model::category::{BevEtat, Footway, Highway, Smoothness, Surface};
use crate::model::tag::{Incline, OptionalTag};

/// accessibility attributes of one pedestrian edge. every slot is always
/// defined, possibly as `Absent`. immutable once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessibilityPropertySet {
    pub(super) width: OptionalTag<f64>,
    pub(super) lit: OptionalTag<bool>,
    pub(super) surface: OptionalTag<Surface>,
    pub(super) tactile_paving: OptionalTag<bool>,
    pub(super) smoothness: OptionalTag<Smoothness>,
    pub(super) highway: OptionalTag<Highway>,
    pub(super) footway: OptionalTag<Footway>,
    pub(super) incline: OptionalTag<Incline>,
    pub(super) ressaut_max: OptionalTag<f64>,
    pub(super) ressaut_min: OptionalTag<f64>,
    pub(super) bev_etat: OptionalTag<BevEtat>,
    pub(super) bev_ctrast: OptionalTag<bool>,
    pub(super) trav_h_trt: OptionalTag<f64>,
}

impl AccessibilityPropertySet {
    pub fn builder() -> AccessibilityPropertySetBuilder {
        AccessibilityPropertySetBuilder::default()
    }

    /// the slot keys, in their stable order.
    pub fn keys() -> &'static [PropertyKey] {
        &PropertyKey::ALL
    }

    pub fn width(&self) -> OptionalTag<f64> {
        self.width
    }

    pub fn lit(&self) -> OptionalTag<bool> {
        self.lit
    }

    pub fn surface(&self) -> OptionalTag<Surface> {
        self.surface
    }

    pub fn tactile_paving(&self) -> OptionalTag<bool> {
        self.tactile_paving
    }

    pub fn smoothness(&self) -> OptionalTag<Smoothness> {
        self.smoothness
    }

    pub fn highway(&self) -> OptionalTag<Highway> {
        self.highway
    }

    pub fn footway(&self) -> OptionalTag<Footway> {
        self.footway
    }

    pub fn incline(&self) -> OptionalTag<Incline> {
        self.incline
    }

    pub fn ressaut_max(&self) -> OptionalTag<f64> {
        self.ressaut_max
    }

    pub fn ressaut_min(&self) -> OptionalTag<f64> {
        self.ressaut_min
    }

    pub fn bev_etat(&self) -> OptionalTag<BevEtat> {
        self.bev_etat
    }

    pub fn bev_ctrast(&self) -> OptionalTag<bool> {
        self.bev_ctrast
    }

    pub fn trav_h_trt(&self) -> OptionalTag<f64> {
        self.trav_h_trt
    }

    /// the value held in a slot, `None` when the slot is absent.
    pub fn get(&self, key: PropertyKey) -> Option<PropertyValue> {
        use PropertyKey as K;
        use PropertyValue as V;
        match key {
            K::Width => self.width.value().map(V::Width),
            K::Lit => self.lit.value().map(V::Lit),
            K::Surface => self.surface.value().map(V::Surface),
            K::TactilePaving => self.tactile_paving.value().map(V::TactilePaving),
            K::Smoothness => self.smoothness.value().map(V::Smoothness),
            K::Highway => self.highway.value().map(V::Highway),
            K::Footway => self.footway.value().map(V::Footway),
            K::Incline => self.incline.value().map(V::Incline),
            K::RessautMax => self.ressaut_max.value().map(V::RessautMax),
            K::RessautMin => self.ressaut_min.value().map(V::RessautMin),
            K::BevEtat => self.bev_etat.value().map(V::BevEtat),
            K::BevCtrast => self.bev_ctrast.value().map(V::BevCtrast),
            K::TravHTrt => self.trav_h_trt.value().map(V::TravHTrt),
        }
    }

    pub fn is_present(&self, key: PropertyKey) -> bool {
        self.get(key).is_some()
    }

    /// the present slots, in key order.
    pub fn present_values(&self) -> impl Iterator<Item = PropertyValue> + '_ {
        Self::keys().iter().filter_map(|key| self.get(*key))
    }

    pub fn is_empty(&self) -> bool {
        self.present_values().next().is_none()
    }
}
