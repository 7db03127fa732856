pub mod category;
pub mod preferences;
pub mod profile;
pub mod property;
pub mod reluctance;
pub mod step;
pub mod tag;
