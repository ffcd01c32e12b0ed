use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The fixed set of roles provisioned at bootstrap.
///
/// Roles travel as plain strings (database rows, token claims, allow-lists);
/// this enum is the canonical spelling of each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "staff")]
    Staff,
    #[serde(rename = "manager")]
    Manager,
    #[serde(rename = "hr")]
    Hr,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "god-admin")]
    GodAdmin,
}

impl RoleName {
    pub const ALL: [RoleName; 5] = [
        Self::Staff,
        Self::Manager,
        Self::Hr,
        Self::Admin,
        Self::GodAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Manager => "manager",
            Self::Hr => "hr",
            Self::Admin => "admin",
            Self::GodAdmin => "god-admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Staff => "Regular employee with basic access.",
            Self::Manager => "Managerial role with oversight of a team/department.",
            Self::Hr => "Human Resources personnel with access to employee data and HR functions.",
            Self::Admin => {
                "System administrator with broad access, excluding god-level operations."
            }
            Self::GodAdmin => {
                "Super administrator with unrestricted access to all system functionalities."
            }
        }
    }
}

impl FromStr for RoleName {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            "hr" => Ok(Self::Hr),
            "admin" => Ok(Self::Admin),
            "god-admin" => Ok(Self::GodAdmin),
            _ => Err(CoreError::InvalidRoleName {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
