use super::{
    BikePreferences, CarPreferences, RoutingPreferences, WalkPreferencesConfig,
    WheelchairPreferences,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RoutingPreferencesConfig {
    #[serde(default)]
    pub walk: WalkPreferencesConfig,
    #[serde(default)]
    pub bike: BikePreferences,
    #[serde(default)]
    pub car: CarPreferences,
    #[serde(default)]
    pub wheelchair: WheelchairPreferences,
}

impl From<&RoutingPreferencesConfig> for RoutingPreferences {
    fn from(value: &RoutingPreferencesConfig) -> Self {
        RoutingPreferences::default()
            .with_walk(value.walk.build())
            .with_bike(value.bike.clone())
            .with_car(value.car.clone())
            .with_wheelchair(value.wheelchair.clone())
    }
}
