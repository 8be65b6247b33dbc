//! The closed set of departments.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Department a collaborator belongs to.
///
/// This is a closed enumeration, not a mutable entity: permission rules are
/// matched exhaustively against it, so an unknown department cannot reach an
/// authorization decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Commercial,
    Support,
    Management,
}

impl Department {
    /// All departments, in declaration order.
    pub const ALL: [Department; 3] = [
        Department::Commercial,
        Department::Support,
        Department::Management,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Commercial => "commercial",
            Department::Support => "support",
            Department::Management => "management",
        }
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial" => Ok(Department::Commercial),
            "support" => Ok(Department::Support),
            "management" => Ok(Department::Management),
            other => Err(DomainError::validation(format!(
                "unknown department: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_departments() {
        for department in Department::ALL {
            assert_eq!(department.as_str().parse::<Department>(), Ok(department));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "finance".parse::<Department>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Department::Management).unwrap(),
            "\"management\""
        );
        assert_eq!(
            serde_json::from_str::<Department>("\"commercial\"").unwrap(),
            Department::Commercial
        );
    }
}
