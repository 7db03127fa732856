use super::PropertyKey;
use crate::model::category::{BevEtat, Footway, Highway, Smoothness, Surface};
use crate::model::tag::{Incline, OptionalTag, TagError};
use std::fmt::Display;

/// a present slot value together with the slot it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Width(f64),
    Lit(bool),
    Surface(Surface),
    TactilePaving(bool),
    Smoothness(Smoothness),
    Highway(Highway),
    Footway(Footway),
    Incline(Incline),
    RessautMax(f64),
    RessautMin(f64),
    BevEtat(BevEtat),
    BevCtrast(bool),
    TravHTrt(f64),
}

impl PropertyValue {
    pub fn key(&self) -> PropertyKey {
        match self {
            PropertyValue::Width(_) => PropertyKey::Width,
            PropertyValue::Lit(_) => PropertyKey::Lit,
            PropertyValue::Surface(_) => PropertyKey::Surface,
            PropertyValue::TactilePaving(_) => PropertyKey::TactilePaving,
            PropertyValue::Smoothness(_) => PropertyKey::Smoothness,
            PropertyValue::Highway(_) => PropertyKey::Highway,
            PropertyValue::Footway(_) => PropertyKey::Footway,
            PropertyValue::Incline(_) => PropertyKey::Incline,
            PropertyValue::RessautMax(_) => PropertyKey::RessautMax,
            PropertyValue::RessautMin(_) => PropertyKey::RessautMin,
            PropertyValue::BevEtat(_) => PropertyKey::BevEtat,
            PropertyValue::BevCtrast(_) => PropertyKey::BevCtrast,
            PropertyValue::TravHTrt(_) => PropertyKey::TravHTrt,
        }
    }

    /// parses a raw tag string for the given slot. `Ok(None)` when the
    /// string carries nothing usable for that slot.
    pub fn parse(key: PropertyKey, raw: &str) -> Result<Option<PropertyValue>, TagError> {
        use PropertyKey as K;
        use PropertyValue as V;
        let value = match key {
            K::Width => OptionalTag::<f64>::parse(raw)?.value().map(V::Width),
            K::Lit => OptionalTag::<bool>::parse(raw)?.value().map(V::Lit),
            K::Surface => OptionalTag::<Surface>::parse(raw)?.value().map(V::Surface),
            K::TactilePaving => OptionalTag::<bool>::parse(raw)?
                .value()
                .map(V::TactilePaving),
            K::Smoothness => OptionalTag::<Smoothness>::parse(raw)?
                .value()
                .map(V::Smoothness),
            K::Highway => OptionalTag::<Highway>::parse(raw)?.value().map(V::Highway),
            K::Footway => OptionalTag::<Footway>::parse(raw)?.value().map(V::Footway),
            K::Incline => OptionalTag::<Incline>::parse(raw)?.value().map(V::Incline),
            K::RessautMax => OptionalTag::<f64>::parse(raw)?.value().map(V::RessautMax),
            K::RessautMin => OptionalTag::<f64>::parse(raw)?.value().map(V::RessautMin),
            K::BevEtat => OptionalTag::<BevEtat>::parse(raw)?.value().map(V::BevEtat),
            K::BevCtrast => OptionalTag::<bool>::parse(raw)?.value().map(V::BevCtrast),
            K::TravHTrt => OptionalTag::<f64>::parse(raw)?.value().map(V::TravHTrt),
        };
        Ok(value)
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Width(v)
            | PropertyValue::RessautMax(v)
            | PropertyValue::RessautMin(v)
            | PropertyValue::TravHTrt(v) => write!(f, "{v}"),
            PropertyValue::Lit(v)
            | PropertyValue::TactilePaving(v)
            | PropertyValue::BevCtrast(v) => write!(f, "{v}"),
            PropertyValue::Surface(v) => write!(f, "{v}"),
            PropertyValue::Smoothness(v) => write!(f, "{v}"),
            PropertyValue::Highway(v) => write!(f, "{v}"),
            PropertyValue::Footway(v) => write!(f, "{v}"),
            PropertyValue::Incline(v) => write!(f, "{v}"),
            PropertyValue::BevEtat(v) => write!(f, "{v}"),
        }
    }
}
