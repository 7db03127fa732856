use super::{TagError, TagShape, TagValue};
use crate::model::category::{Category, InclineDirection};
use std::fmt::Display;

/// an `incline` tag is either a direction keyword or a signed percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Incline {
    Direction(InclineDirection),
    Percent(f64),
}

impl Incline {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Incline::Percent(p) => Some(*p),
            Incline::Direction(_) => None,
        }
    }

    pub fn direction(&self) -> Option<InclineDirection> {
        match self {
            Incline::Direction(d) => Some(*d),
            Incline::Percent(_) => None,
        }
    }
}

impl Display for Incline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Incline::Direction(d) => write!(f, "{d}"),
            Incline::Percent(p) => write!(f, "{p}"),
        }
    }
}

impl TagValue for Incline {
    const SHAPE: TagShape = TagShape::CategoryOrNumber;

    /// the keyword interpretation is tried first. numbers may carry a
    /// trailing `%`. anything else is absent, never an error.
    fn parse_tag(raw: &str) -> Result<Option<Self>, TagError> {
        if let Some(direction) = InclineDirection::from_label(raw) {
            return Ok(Some(Incline::Direction(direction)));
        }
        let numeric = raw.strip_suffix('%').unwrap_or(raw).trim();
        match numeric.parse::<f64>() {
            Ok(p) if p.is_finite() => Ok(Some(Incline::Percent(p))),
            _ => Ok(None),
        }
    }
}
