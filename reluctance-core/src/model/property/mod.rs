mod accessibility_property_set;
mod accessibility_property_set_builder;
mod property_key;
mod property_value;

pub use accessibility_property_set::AccessibilityPropertySet;
pub use accessibility_property_set_builder::AccessibilityPropertySetBuilder;
pub use property_key::PropertyKey;
pub use property_value::PropertyValue;
