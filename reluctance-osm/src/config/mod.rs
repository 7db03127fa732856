mod reluctance_app_configuration;

pub use reluctance_app_configuration::ReluctanceAppConfiguration;
