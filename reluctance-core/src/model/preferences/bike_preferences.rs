use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct BikePreferences {
    pub reluctance: f64,
    /// used while walking alongside a bicycle.
    pub walking_reluctance: f64,
}

impl Default for BikePreferences {
    fn default() -> Self {
        Self {
            reluctance: 2.0,
            walking_reluctance: 5.0,
        }
    }
}
