use super::{AccessibilityPropertySet, PropertyKey, PropertyValue};
use crate::model::category::{BevEtat, Footway, Highway, Smoothness, Surface};
use crate::model::tag::{Incline, OptionalTag, TagError};

#[derive(Debug, Clone, Default)]
pub struct AccessibilityPropertySetBuilder {
    properties: AccessibilityPropertySet,
}

impl AccessibilityPropertySetBuilder {
    pub fn with_width(mut self, width: OptionalTag<f64>) -> Self {
        self.properties.width = width;
        self
    }

    pub fn with_lit(mut self, lit: OptionalTag<bool>) -> Self {
        self.properties.lit = lit;
        self
    }

    pub fn with_surface(mut self, surface: OptionalTag<Surface>) -> Self {
        self.properties.surface = surface;
        self
    }

    pub fn with_tactile_paving(mut self, tactile_paving: OptionalTag<bool>) -> Self {
        self.properties.tactile_paving = tactile_paving;
        self
    }

    pub fn with_smoothness(mut self, smoothness: OptionalTag<Smoothness>) -> Self {
        self.properties.smoothness = smoothness;
        self
    }

    pub fn with_highway(mut self, highway: OptionalTag<Highway>) -> Self {
        self.properties.highway = highway;
        self
    }

    pub fn with_footway(mut self, footway: OptionalTag<Footway>) -> Self {
        self.properties.footway = footway;
        self
    }

    pub fn with_incline(mut self, incline: OptionalTag<Incline>) -> Self {
        self.properties.incline = incline;
        self
    }

    pub fn with_ressaut_max(mut self, ressaut_max: OptionalTag<f64>) -> Self {
        self.properties.ressaut_max = ressaut_max;
        self
    }

    pub fn with_ressaut_min(mut self, ressaut_min: OptionalTag<f64>) -> Self {
        self.properties.ressaut_min = ressaut_min;
        self
    }

    pub fn with_bev_etat(mut self, bev_etat: OptionalTag<BevEtat>) -> Self {
        self.properties.bev_etat = bev_etat;
        self
    }

    pub fn with_bev_ctrast(mut self, bev_ctrast: OptionalTag<bool>) -> Self {
        self.properties.bev_ctrast = bev_ctrast;
        self
    }

    pub fn with_trav_h_trt(mut self, trav_h_trt: OptionalTag<f64>) -> Self {
        self.properties.trav_h_trt = trav_h_trt;
        self
    }

    /// fills the slot matching the value's key.
    pub fn with_value(self, value: PropertyValue) -> Self {
        use OptionalTag::Present;
        match value {
            PropertyValue::Width(v) => self.with_width(Present(v)),
            PropertyValue::Lit(v) => self.with_lit(Present(v)),
            PropertyValue::Surface(v) => self.with_surface(Present(v)),
            PropertyValue::TactilePaving(v) => self.with_tactile_paving(Present(v)),
            PropertyValue::Smoothness(v) => self.with_smoothness(Present(v)),
            PropertyValue::Highway(v) => self.with_highway(Present(v)),
            PropertyValue::Footway(v) => self.with_footway(Present(v)),
            PropertyValue::Incline(v) => self.with_incline(Present(v)),
            PropertyValue::RessautMax(v) => self.with_ressaut_max(Present(v)),
            PropertyValue::RessautMin(v) => self.with_ressaut_min(Present(v)),
            PropertyValue::BevEtat(v) => self.with_bev_etat(Present(v)),
            PropertyValue::BevCtrast(v) => self.with_bev_ctrast(Present(v)),
            PropertyValue::TravHTrt(v) => self.with_trav_h_trt(Present(v)),
        }
    }

    /// marks a slot as absent.
    pub fn without(self, key: PropertyKey) -> Self {
        use OptionalTag::Absent;
        match key {
            PropertyKey::Width => self.with_width(Absent),
            PropertyKey::Lit => self.with_lit(Absent),
            PropertyKey::Surface => self.with_surface(Absent),
            PropertyKey::TactilePaving => self.with_tactile_paving(Absent),
            PropertyKey::Smoothness => self.with_smoothness(Absent),
            PropertyKey::Highway => self.with_highway(Absent),
            PropertyKey::Footway => self.with_footway(Absent),
            PropertyKey::Incline => self.with_incline(Absent),
            PropertyKey::RessautMax => self.with_ressaut_max(Absent),
            PropertyKey::RessautMin => self.with_ressaut_min(Absent),
            PropertyKey::BevEtat => self.with_bev_etat(Absent),
            PropertyKey::BevCtrast => self.with_bev_ctrast(Absent),
            PropertyKey::TravHTrt => self.with_trav_h_trt(Absent),
        }
    }

    /// parses a raw tag string into the given slot.
    pub fn with_tag(self, key: PropertyKey, raw: &str) -> Result<Self, TagError> {
        match PropertyValue::parse(key, raw)? {
            Some(value) => Ok(self.with_value(value)),
            None => Ok(self.without(key)),
        }
    }

    pub fn build(self) -> AccessibilityPropertySet {
        self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::AccessibilityPropertySetBuilder;
    use crate::model::category::Smoothness;
    use crate::model::property::{PropertyKey, PropertyValue};
    use crate::model::tag::OptionalTag;

    #[test]
    fn with_tag_fills_and_clears() {
        let props = AccessibilityPropertySetBuilder::default()
            .with_tag(PropertyKey::Smoothness, "bad")
            .and_then(|b| b.with_tag(PropertyKey::Width, "0.9"))
            .and_then(|b| b.with_tag(PropertyKey::Width, "   "));
        match props {
            Ok(b) => {
                let props = b.build();
                assert_eq!(props.smoothness(), OptionalTag::Present(Smoothness::Bad));
                assert!(props.width().is_absent());
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn with_tag_propagates_number_errors() {
        let result =
            AccessibilityPropertySetBuilder::default().with_tag(PropertyKey::Width, "1m20");
        assert!(result.is_err());
    }

    #[test]
    fn with_value_round_trip() {
        let value = PropertyValue::RessautMin(0.03);
        let props = AccessibilityPropertySetBuilder::default().with_value(value).build();
        assert_eq!(props.get(PropertyKey::RessautMin), Some(value));
    }
}
