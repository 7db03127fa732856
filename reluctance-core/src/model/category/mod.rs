use crate::model::tag::TagValue;
use itertools::Itertools;
use std::hash::Hash;

/// declares a closed OSM category. each variant names its canonical tag
/// value and, when OSM spells it differently, the wire label after `as`.
macro_rules! osm_category {
    (@label $tag_name:literal) => {
        $tag_name
    };
    (@label $tag_name:literal, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($description:literal) {
            $( $variant:ident => $tag_name:literal $(as $label:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::model::category::Category for $name {
            const DESCRIPTION: &'static str = $description;
            const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag_name ),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => osm_category!(@label $tag_name $(, $label)?) ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::model::category::Category::label(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::tag::TagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                use $crate::model::category::Category;
                $name::ALL
                    .iter()
                    .copied()
                    .find(|c| c.label() == s || c.name() == s)
                    .ok_or_else(|| $crate::model::tag::TagError::UnknownCategory {
                        category: $description,
                        token: s.to_string(),
                    })
            }
        }

        impl $crate::model::tag::TagValue for $name {
            const SHAPE: $crate::model::tag::TagShape = $crate::model::tag::TagShape::Category;

            fn parse_tag(
                raw: &str,
            ) -> Result<Option<Self>, $crate::model::tag::TagError> {
                Ok(<$name as $crate::model::category::Category>::from_label(raw))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::model::category::Category::label(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod bev_etat;
mod footway;
mod highway;
mod incline_direction;
mod smoothness;
mod surface;

pub use bev_etat::BevEtat;
pub use footway::Footway;
pub use highway::Highway;
pub use incline_direction::InclineDirection;
pub use smoothness::Smoothness;
pub use surface::Surface;

/// a closed set of OSM tag values. declaration order is the enum's `Ord`,
/// which ordered categories use as best-to-worst.
pub trait Category: TagValue + Eq + Hash + Ord + 'static {
    /// human name of the category, used in error messages.
    const DESCRIPTION: &'static str;
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// the spelling found in OSM data.
    fn label(&self) -> &'static str;

    /// exact, case-sensitive match against the OSM spelling.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// reads a `;`-separated multi-valued tag such as `surface=asphalt;gravel`.
/// unknown entries are dropped along with repeats, first-seen order is kept.
pub fn parse_multiple<C: Category>(raw: &str) -> Vec<C> {
    raw.split(';')
        .map(str::trim)
        .filter_map(C::from_label)
        .unique()
        .collect_vec()
}
