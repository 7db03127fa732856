use crate::model::tag::{TagError, TagShape};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the fixed accessibility slots carried on every pedestrian edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    Width,
    Lit,
    Surface,
    TactilePaving,
    Smoothness,
    Highway,
    Footway,
    Incline,
    RessautMax,
    RessautMin,
    BevEtat,
    BevCtrast,
    TravHTrt,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 13] = [
        PropertyKey::Width,
        PropertyKey::Lit,
        PropertyKey::Surface,
        PropertyKey::TactilePaving,
        PropertyKey::Smoothness,
        PropertyKey::Highway,
        PropertyKey::Footway,
        PropertyKey::Incline,
        PropertyKey::RessautMax,
        PropertyKey::RessautMin,
        PropertyKey::BevEtat,
        PropertyKey::BevCtrast,
        PropertyKey::TravHTrt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::Width => "width",
            PropertyKey::Lit => "lit",
            PropertyKey::Surface => "surface",
            PropertyKey::TactilePaving => "tactile_paving",
            PropertyKey::Smoothness => "smoothness",
            PropertyKey::Highway => "highway",
            PropertyKey::Footway => "footway",
            PropertyKey::Incline => "incline",
            PropertyKey::RessautMax => "ressaut_max",
            PropertyKey::RessautMin => "ressaut_min",
            PropertyKey::BevEtat => "bev_etat",
            PropertyKey::BevCtrast => "bev_ctrast",
            PropertyKey::TravHTrt => "trav_h_trt",
        }
    }

    /// the key as it appears on OSM ways. survey-specific slots live in the
    /// `wgt:` namespace.
    pub fn osm_key(&self) -> &'static str {
        match self {
            PropertyKey::RessautMax => "wgt:ressaut_max",
            PropertyKey::RessautMin => "wgt:ressaut_min",
            PropertyKey::BevEtat => "wgt:bev_etat",
            PropertyKey::BevCtrast => "wgt:bev_ctrast",
            PropertyKey::TravHTrt => "wgt:trav_h_trt",
            other => other.name(),
        }
    }

    pub fn shape(&self) -> TagShape {
        match self {
            PropertyKey::Width
            | PropertyKey::RessautMax
            | PropertyKey::RessautMin
            | PropertyKey::TravHTrt => TagShape::Number,
            PropertyKey::Lit | PropertyKey::TactilePaving | PropertyKey::BevCtrast => {
                TagShape::Flag
            }
            PropertyKey::Surface
            | PropertyKey::Smoothness
            | PropertyKey::Highway
            | PropertyKey::Footway
            | PropertyKey::BevEtat => TagShape::Category,
            PropertyKey::Incline => TagShape::CategoryOrNumber,
        }
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PropertyKey {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyKey::ALL
            .into_iter()
            .find(|k| k.name() == s || k.osm_key() == s)
            .ok_or_else(|| TagError::UnknownProperty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyKey;

    #[test]
    fn wgt_namespace() {
        assert_eq!(PropertyKey::RessautMax.osm_key(), "wgt:ressaut_max");
        assert_eq!(PropertyKey::Width.osm_key(), "width");
        assert_eq!("wgt:bev_etat".parse::<PropertyKey>(), Ok(PropertyKey::BevEtat));
        assert_eq!("bev_etat".parse::<PropertyKey>(), Ok(PropertyKey::BevEtat));
        assert!("colour".parse::<PropertyKey>().is_err());
    }
}
