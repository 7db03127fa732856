use crate::model::category::Category;
use crate::model::property::AccessibilityPropertySet;
use serde::{Deserialize, Serialize};

/// accessibility attributes of an itinerary step, as shown to end users.
/// absent properties serialize as `null`. categories are reported by their
/// snake_case name (`concrete_lanes`), not the OSM label (`concrete:lane`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub struct WalkStepAccessibility {
    pub width: Option<f64>,
    pub lit: Option<bool>,
    pub surface: Option<String>,
    pub tactile_paving: Option<bool>,
    pub smoothness: Option<String>,
    pub highway: Option<String>,
    pub footway: Option<String>,
    pub incline: Option<String>,
    pub trav_h_trt: Option<f64>,
}

impl From<&AccessibilityPropertySet> for WalkStepAccessibility {
    fn from(properties: &AccessibilityPropertySet) -> Self {
        WalkStepAccessibility {
            width: properties.width().value(),
            lit: properties.lit().value(),
            surface: name_of(properties.surface().value()),
            tactile_paving: properties.tactile_paving().value(),
            smoothness: name_of(properties.smoothness().value()),
            highway: name_of(properties.highway().value()),
            footway: name_of(properties.footway().value()),
            incline: properties.incline().to_tag_string(),
            trav_h_trt: properties.trav_h_trt().value(),
        }
    }
}

fn name_of<C: Category>(category: Option<C>) -> Option<String> {
    category.map(|c| c.name().to_string())
}
