use super::{TagError, TagValue};

/// a tag slot that is either absent or carries a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalTag<T> {
    Absent,
    Present(T),
}

impl<T> Default for OptionalTag<T> {
    fn default() -> Self {
        OptionalTag::Absent
    }
}

impl<T> OptionalTag<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, OptionalTag::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            OptionalTag::Absent => None,
            OptionalTag::Present(value) => Some(value),
        }
    }
}

impl<T: Copy> OptionalTag<T> {
    pub fn value(&self) -> Option<T> {
        self.as_option().copied()
    }

    pub fn get_typed(&self) -> Result<T, TagError> {
        self.value().ok_or(TagError::NoValuePresent)
    }
}

impl<T: TagValue> OptionalTag<T> {
    /// parses a raw tag value. blank input and inputs that do not match the
    /// slot's shape produce `Absent`; an unreadable number is an error.
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(OptionalTag::Absent);
        }
        let parsed = T::parse_tag(trimmed)?;
        Ok(parsed.into())
    }

    /// lenient variant of [`OptionalTag::parse`] used on dirty input.
    pub fn parse_or_absent(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(tag) => tag,
            Err(e) => {
                log::warn!("{e}, treating tag as absent");
                OptionalTag::Absent
            }
        }
    }

    /// the string form of the value, readable again by [`OptionalTag::parse`].
    pub fn to_tag_string(&self) -> Option<String> {
        self.as_option().map(|v| v.to_string())
    }
}

impl<T> From<Option<T>> for OptionalTag<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => OptionalTag::Present(v),
            None => OptionalTag::Absent,
        }
    }
}

impl<T> From<OptionalTag<T>> for Option<T> {
    fn from(value: OptionalTag<T>) -> Self {
        match value {
            OptionalTag::Absent => None,
            OptionalTag::Present(v) => Some(v),
        }
    }
}
