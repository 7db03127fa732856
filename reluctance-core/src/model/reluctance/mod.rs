mod profile_model;
mod reluctance_engine;
mod reluctance_error;
mod threshold_model;
mod traverse_mode;

pub use profile_model::profile_reluctance;
pub use reluctance_engine::ReluctanceEngine;
pub use reluctance_error::ReluctanceError;
pub use threshold_model::{breaches_threshold, threshold_reluctance};
pub use traverse_mode::TraverseMode;
