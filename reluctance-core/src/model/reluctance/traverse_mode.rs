use super::ReluctanceError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TraverseMode {
    Walk,
    Bicycle,
    Scooter,
    Car,
    Bus,
    Rail,
    Tram,
    Subway,
    Ferry,
    Flex,
}

impl Display for TraverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            TraverseMode::Walk => "walk",
            TraverseMode::Bicycle => "bicycle",
            TraverseMode::Scooter => "scooter",
            TraverseMode::Car => "car",
            TraverseMode::Bus => "bus",
            TraverseMode::Rail => "rail",
            TraverseMode::Tram => "tram",
            TraverseMode::Subway => "subway",
            TraverseMode::Ferry => "ferry",
            TraverseMode::Flex => "flex",
        };
        write!(f, "{msg}")
    }
}

impl FromStr for TraverseMode {
    type Err = ReluctanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" => Ok(TraverseMode::Walk),
            "bicycle" => Ok(TraverseMode::Bicycle),
            "scooter" => Ok(TraverseMode::Scooter),
            "car" => Ok(TraverseMode::Car),
            "bus" => Ok(TraverseMode::Bus),
            "rail" => Ok(TraverseMode::Rail),
            "tram" => Ok(TraverseMode::Tram),
            "subway" => Ok(TraverseMode::Subway),
            "ferry" => Ok(TraverseMode::Ferry),
            "flex" => Ok(TraverseMode::Flex),
            _ => Err(ReluctanceError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TraverseMode;

    #[test]
    fn parse_mode() {
        assert_eq!("WALK".parse::<TraverseMode>(), Ok(TraverseMode::Walk));
        assert_eq!("bicycle".parse::<TraverseMode>(), Ok(TraverseMode::Bicycle));
        assert!("hovercraft".parse::<TraverseMode>().is_err());
    }
}
