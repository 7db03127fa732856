use super::{TagError, TagShape};
use std::fmt::Display;

/// a typed payload that can be read from a raw OSM tag string.
///
/// `Display` must write the form that `parse_tag` reads back, so that
/// every present value survives a round trip through its tag string.
pub trait TagValue: Copy + PartialEq + Display {
    const SHAPE: TagShape;

    /// parses a (non-blank) raw tag value. `Ok(None)` means the tag carries
    /// nothing usable for this shape and should be treated as absent; only
    /// numeric parsing reports an error.
    fn parse_tag(raw: &str) -> Result<Option<Self>, TagError>;
}

/// flags follow the usual OSM truthiness conventions, anything else is absent.
impl TagValue for bool {
    const SHAPE: TagShape = TagShape::Flag;

    fn parse_tag(raw: &str) -> Result<Option<Self>, TagError> {
        match raw {
            "yes" | "true" | "1" => Ok(Some(true)),
            "no" | "false" | "0" => Ok(Some(false)),
            _ => Ok(None),
        }
    }
}

impl TagValue for f64 {
    const SHAPE: TagShape = TagShape::Number;

    fn parse_tag(raw: &str) -> Result<Option<Self>, TagError> {
        let value = raw.parse::<f64>().map_err(|e| TagError::ParseError {
            shape: TagShape::Number,
            token: raw.to_string(),
            message: e.to_string(),
        })?;
        if !value.is_finite() {
            return Err(TagError::ParseError {
                shape: TagShape::Number,
                token: raw.to_string(),
                message: String::from("value is not finite"),
            });
        }
        Ok(Some(value))
    }
}
