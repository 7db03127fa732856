use crate::model::ReluctanceCliError;
use reluctance_core::model::preferences::RoutingPreferencesConfig;
use serde::{Deserialize, Serialize};

/// defines behaviors for an edge scoring run
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ReluctanceAppConfiguration {
    #[serde(default)]
    pub routing: RoutingPreferencesConfig,
    #[serde(default)]
    pub ignore_osm_parsing_errors: bool,
    /// score walk edges as walking alongside a bicycle
    #[serde(default)]
    pub walking_bike: bool,
}

impl TryFrom<&String> for ReluctanceAppConfiguration {
    type Error = ReluctanceCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ReluctanceCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ReluctanceCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ReluctanceCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ReluctanceCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ReluctanceCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReluctanceAppConfiguration;
    use crate::model::ReluctanceCliError;
    use reluctance_core::model::{
        category::Surface,
        preferences::{AccessibilityProfile, RoutingPreferences},
    };

    #[test]
    fn decode_toml() {
        let toml_str = r#"
            ignore_osm_parsing_errors = true

            [routing.walk]
            reluctance = 1.5
            minimal_width = 0.9
            relucted_surfaces = ["gravel", "concrete:plates"]
            accessibility_profile = "PAM"

            [routing.car]
            reluctance = 3.0
        "#;
        let conf: ReluctanceAppConfiguration = match toml::from_str(toml_str) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert!(conf.ignore_osm_parsing_errors);
        assert!(!conf.walking_bike);
        let prefs = RoutingPreferences::from(&conf.routing);
        assert_eq!(prefs.walk.reluctance(), 1.5);
        assert_eq!(prefs.walk.accessibility_profile(), AccessibilityProfile::Pam);
        assert!(prefs.walk.relucted_surfaces().contains(&Surface::ConcretePlates));
        assert_eq!(prefs.car.reluctance, 3.0);
        assert_eq!(prefs.bike.walking_reluctance, 5.0);
    }

    #[test]
    fn unsupported_extension() {
        let result = ReluctanceAppConfiguration::try_from(&String::from("conf.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let name = format!("reluctance-conf-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        if let Err(e) = std::fs::write(&path, "{ \"routing\": ") {
            panic!("{e}");
        }
        let f = path.to_string_lossy().to_string();
        let result = ReluctanceAppConfiguration::try_from(&f);
        let _ = std::fs::remove_file(&path);
        match result {
            Err(ReluctanceCliError::ConfigurationError(msg)) => {
                assert!(msg.starts_with("failure decoding"), "{msg}")
            }
            other => panic!("expected a configuration error, found {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let f = String::from("/nonexistent/reluctance.json");
        match ReluctanceAppConfiguration::try_from(&f) {
            Err(ReluctanceCliError::ConfigurationError(msg)) => {
                assert!(msg.starts_with("failure reading"), "{msg}")
            }
            other => panic!("expected a configuration error, found {other:?}"),
        }
    }
}
