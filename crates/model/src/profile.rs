use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mode of travel, selecting the routing engine's cost and restriction
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelProfile {
    Foot,
    Bike,
}

impl TravelProfile {
    /// Profile name as the routing engine expects it in the request path.
    pub fn osrm_name(&self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.osrm_name())
    }
}

impl FromStr for TravelProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foot" => Ok(Self::Foot),
            "bike" => Ok(Self::Bike),
            other => Err(format!("unknown travel profile: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_profiles() {
        assert_eq!("foot".parse::<TravelProfile>(), Ok(TravelProfile::Foot));
        assert_eq!("bike".parse::<TravelProfile>(), Ok(TravelProfile::Bike));
    }

    #[test]
    fn rejects_unknown_profile() {
        assert!("car".parse::<TravelProfile>().is_err());
    }
}
