mod osm_tags;
pub mod property_set_ops;
mod reluctance_cli_error;

pub use osm_tags::OsmTags;
pub use reluctance_cli_error::ReluctanceCliError;
