use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the shape of payload an OSM tag is expected to carry once parsed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TagShape {
    Flag,
    Category,
    Number,
    CategoryOrNumber,
}

impl Display for TagShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            TagShape::Flag => "flag",
            TagShape::Category => "category",
            TagShape::Number => "number",
            TagShape::CategoryOrNumber => "category_or_number",
        };
        write!(f, "{msg}")
    }
}
