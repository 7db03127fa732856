use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// severity of a property's impact on a profile. the numeric class is the
/// multiplicative reluctance factor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImpactClass {
    NoImpact = 1,
    Low = 2,
    Moderate = 3,
    High = 4,
    Severe = 5,
}

impl ImpactClass {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn factor(&self) -> f64 {
        f64::from(self.value())
    }
}

impl Display for ImpactClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
