//! GHG Protocol emission scopes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmissionsError;
use crate::model::Category;

/// GHG Protocol scope: direct (1), purchased energy (2), value chain (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "scope_1")]
    Scope1,
    #[serde(rename = "scope_2")]
    Scope2,
    #[serde(rename = "scope_3")]
    Scope3,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    /// Wire name, e.g. `"scope_2"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Scope1 => "scope_1",
            Scope::Scope2 => "scope_2",
            Scope::Scope3 => "scope_3",
        }
    }

    /// Every category that reports into this scope, in GHG Protocol order.
    pub fn categories(&self) -> &'static [Category] {
        Category::for_scope(*self)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = EmissionsError;

    /// Accepts `scope_1`, `scope1`, `Scope 1`, `1` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        match digits.strip_prefix("scope").unwrap_or(&digits) {
            "1" => Ok(Scope::Scope1),
            "2" => Ok(Scope::Scope2),
            "3" => Ok(Scope::Scope3),
            _ => Err(EmissionsError::UnknownScope(s.to_string())),
        }
    }
}
