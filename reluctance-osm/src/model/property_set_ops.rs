use super::{OsmTags, ReluctanceCliError};
use reluctance_core::model::{
    category::{parse_multiple, BevEtat, Category, Footway, Highway, Smoothness, Surface},
    property::{AccessibilityPropertySet, PropertyKey, PropertyValue},
    tag::TagError,
};

/// builds the accessibility property set of a way from its OSM tags. every
/// slot is visited, untagged slots stay absent.
///
/// numeric tags that do not parse are dropped with a warning when
/// `ignore_errors` is set, otherwise the failure is returned.
pub fn accessibility_properties(
    tags: &OsmTags,
    ignore_errors: bool,
) -> Result<AccessibilityPropertySet, ReluctanceCliError> {
    let mut builder = AccessibilityPropertySet::builder();
    for key in PropertyKey::ALL {
        let Some(raw) = tags.get(key.osm_key()) else {
            continue;
        };
        match parse_property(key, raw) {
            Ok(Some(value)) => builder = builder.with_value(value),
            Ok(None) => log::debug!("unrecognized {} value '{raw}'", key.osm_key()),
            Err(e) if ignore_errors => log::warn!("ignoring {} tag: {e}", key.osm_key()),
            Err(e) => return Err(ReluctanceCliError::from(e)),
        }
    }
    Ok(builder.build())
}

/// categorical tags may hold `;`-separated values, the first recognized one
/// is kept.
fn parse_property(key: PropertyKey, raw: &str) -> Result<Option<PropertyValue>, TagError> {
    let value = match key {
        PropertyKey::Surface => first::<Surface>(raw).map(PropertyValue::Surface),
        PropertyKey::Smoothness => first::<Smoothness>(raw).map(PropertyValue::Smoothness),
        PropertyKey::Highway => first::<Highway>(raw).map(PropertyValue::Highway),
        PropertyKey::Footway => first::<Footway>(raw).map(PropertyValue::Footway),
        PropertyKey::BevEtat => first::<BevEtat>(raw).map(PropertyValue::BevEtat),
        _ => return PropertyValue::parse(key, raw),
    };
    Ok(value)
}

fn first<C: Category>(raw: &str) -> Option<C> {
    parse_multiple::<C>(raw).first().copied()
}

#[cfg(test)]
mod tests {
    use super::accessibility_properties;
    use crate::model::OsmTags;
    use reluctance_core::model::{
        category::{BevEtat, Highway, Surface},
        tag::{Incline, OptionalTag},
    };

    #[test]
    fn reads_every_slot() {
        let tags = OsmTags::from_iter([
            ("highway", "footway"),
            ("footway", "sidewalk"),
            ("width", "1.5"),
            ("lit", "yes"),
            ("surface", "lava;paving_stones;asphalt"),
            ("incline", "5%"),
            ("wgt:ressaut_max", "0.04"),
            ("wgt:bev_etat", "bad"),
            ("wgt:trav_h_trt", "0.1"),
            ("name", "rue de la Paix"),
        ]);
        let props = match accessibility_properties(&tags, false) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(props.highway(), OptionalTag::Present(Highway::Footway));
        assert_eq!(props.width(), OptionalTag::Present(1.5));
        assert_eq!(props.lit(), OptionalTag::Present(true));
        assert_eq!(props.surface(), OptionalTag::Present(Surface::PavingStones));
        assert_eq!(props.incline(), OptionalTag::Present(Incline::Percent(5.0)));
        assert_eq!(props.ressaut_max(), OptionalTag::Present(0.04));
        assert_eq!(props.bev_etat(), OptionalTag::Present(BevEtat::Bad));
        assert_eq!(props.trav_h_trt(), OptionalTag::Present(0.1));
        assert!(props.smoothness().is_absent());
        assert!(props.tactile_paving().is_absent());
    }

    #[test]
    fn bad_numbers_fail_unless_ignored() {
        let tags = OsmTags::from_iter([("width", "narrow"), ("surface", "gravel")]);
        assert!(accessibility_properties(&tags, false).is_err());
        match accessibility_properties(&tags, true) {
            Ok(props) => {
                assert!(props.width().is_absent());
                assert_eq!(props.surface(), OptionalTag::Present(Surface::Gravel));
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn unknown_categories_are_absent() {
        let tags = OsmTags::from_iter([("smoothness", "silky"), ("lit", "sometimes")]);
        match accessibility_properties(&tags, false) {
            Ok(props) => assert!(props.is_empty()),
            Err(e) => panic!("{e}"),
        }
    }
}
