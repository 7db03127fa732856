mod incline;
mod optional_tag;
mod tag_error;
mod tag_shape;
mod tag_value;

pub use incline::Incline;
pub use optional_tag::OptionalTag;
pub use tag_error::TagError;
pub use tag_shape::TagShape;
pub use tag_value::TagValue;
