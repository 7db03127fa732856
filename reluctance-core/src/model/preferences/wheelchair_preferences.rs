use serde::{Deserialize, Serialize};

/// penalties applied by the wheelchair reluctance entry point.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct WheelchairPreferences {
    /// base factor for edges not marked wheelchair accessible.
    pub inaccessible_street_reluctance: f64,
    pub stairs_reluctance: f64,
    /// maximum slope (rise over run) before the slope penalty applies.
    pub max_slope: f64,
    pub slope_exceeded_reluctance: f64,
}

impl Default for WheelchairPreferences {
    fn default() -> Self {
        Self {
            inaccessible_street_reluctance: 25.0,
            stairs_reluctance: 100.0,
            max_slope: 0.083,
            slope_exceeded_reluctance: 1.0,
        }
    }
}
