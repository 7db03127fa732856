use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct CarPreferences {
    pub reluctance: f64,
}

impl Default for CarPreferences {
    fn default() -> Self {
        Self { reluctance: 2.0 }
    }
}
