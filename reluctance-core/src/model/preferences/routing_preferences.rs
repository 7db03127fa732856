use super::{BikePreferences, CarPreferences, WalkPreferences, WheelchairPreferences};
use std::sync::Arc;

/// the per-mode preferences of one routing request.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPreferences {
    pub walk: Arc<WalkPreferences>,
    pub bike: BikePreferences,
    pub car: CarPreferences,
    pub wheelchair: WheelchairPreferences,
}

impl Default for RoutingPreferences {
    fn default() -> Self {
        Self {
            walk: WalkPreferences::shared_default(),
            bike: BikePreferences::default(),
            car: CarPreferences::default(),
            wheelchair: WheelchairPreferences::default(),
        }
    }
}

impl RoutingPreferences {
    pub fn with_walk(mut self, walk: Arc<WalkPreferences>) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_bike(mut self, bike: BikePreferences) -> Self {
        self.bike = bike;
        self
    }

    pub fn with_car(mut self, car: CarPreferences) -> Self {
        self.car = car;
        self
    }

    pub fn with_wheelchair(mut self, wheelchair: WheelchairPreferences) -> Self {
        self.wheelchair = wheelchair;
        self
    }
}
