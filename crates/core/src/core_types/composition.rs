//! Bulk composition classes for impacting bodies

use crate::error::ImpactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material class of the impacting body
///
/// Each class is bound to a fixed bulk density through
/// [`CompositionDensities`](crate::config::CompositionDensities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    /// Iron-nickel metal (e.g., the Barringer/Canyon Diablo impactor)
    Iron,
    /// Ordinary chondrite rock, the most common near-Earth asteroid type
    Stony,
    /// Carbon-rich, porous chondrite
    Carbonaceous,
    /// Ice-rich cometary nucleus
    Comet,
}

impl Composition {
    /// Every composition class, densest first
    pub const ALL: [Composition; 4] = [
        Composition::Iron,
        Composition::Stony,
        Composition::Carbonaceous,
        Composition::Comet,
    ];

    /// Lowercase name used on the wire and in presets
    pub fn name(self) -> &'static str {
        match self {
            Composition::Iron => "iron",
            Composition::Stony => "stony",
            Composition::Carbonaceous => "carbonaceous",
            Composition::Comet => "comet",
        }
    }
}

impl FromStr for Composition {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iron" => Ok(Composition::Iron),
            "stony" => Ok(Composition::Stony),
            "carbonaceous" => Ok(Composition::Carbonaceous),
            "comet" => Ok(Composition::Comet),
            other => Err(ImpactError::invalid_parameter(
                "composition",
                format!("unknown composition '{other}', expected iron, stony, carbonaceous or comet"),
            )),
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for composition in Composition::ALL {
            assert_eq!(composition.name().parse::<Composition>(), Ok(composition));
        }
        assert_eq!(" Iron ".parse::<Composition>(), Ok(Composition::Iron));
    }

    #[test]
    fn test_parse_unknown_is_invalid_parameter() {
        let err = "unknown".parse::<Composition>().unwrap_err();
        assert!(matches!(
            err,
            ImpactError::InvalidParameter {
                name: "composition",
                ..
            }
        ));
    }
}
