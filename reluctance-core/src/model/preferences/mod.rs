mod accessibility_profile;
mod bike_preferences;
mod car_preferences;
mod routing_preferences;
mod routing_preferences_config;
pub mod units;
mod walk_preferences;
mod walk_preferences_builder;
mod walk_preferences_config;
mod wheelchair_preferences;

pub use accessibility_profile::AccessibilityProfile;
pub use bike_preferences::BikePreferences;
pub use car_preferences::CarPreferences;
pub use routing_preferences::RoutingPreferences;
pub use routing_preferences_config::RoutingPreferencesConfig;
pub use walk_preferences::WalkPreferences;
pub use walk_preferences_builder::WalkPreferencesBuilder;
pub use walk_preferences_config::WalkPreferencesConfig;
pub use wheelchair_preferences::WheelchairPreferences;
