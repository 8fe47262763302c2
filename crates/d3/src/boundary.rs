//! Container types: arbitrary boxes and the standard shipping archetypes.

use loadfit_core::geometry::{Boundary, Dimensions};
use loadfit_core::{Error, Result};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box-shaped container with a weight capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container3D {
    /// Interior dimensions.
    dimensions: Dimensions,

    /// Maximum total weight of the contents.
    max_weight: f64,
}

impl Container3D {
    /// Creates a container from its interior dimensions and weight capacity.
    pub fn new(dimensions: Dimensions, max_weight: f64) -> Self {
        Self {
            dimensions,
            max_weight,
        }
    }

    /// Creates a container with no weight limit.
    pub fn unlimited(dimensions: Dimensions) -> Self {
        Self::new(dimensions, f64::INFINITY)
    }

    /// Sets the weight capacity.
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }
}

impl Boundary for Container3D {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn max_weight(&self) -> f64 {
        self.max_weight
    }

    fn validate(&self) -> Result<()> {
        if let Err(Error::InvalidDimensions(msg)) = self.dimensions.validate() {
            return Err(Error::InvalidDimensions(format!("container: {}", msg)));
        }

        if self.max_weight.is_nan() || self.max_weight <= 0.0 {
            return Err(Error::InvalidWeight(
                "container max weight must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Standard ISO shipping containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerArchetype {
    /// 20-foot dry container.
    #[cfg_attr(feature = "serde", serde(rename = "20ft"))]
    Twenty,
    /// 40-foot dry container.
    #[cfg_attr(feature = "serde", serde(rename = "40ft"))]
    Forty,
}

/// Interior size (cm) and payload (kg) of an archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeSpec {
    /// Interior dimensions in centimetres.
    pub internal: Dimensions,
    /// Maximum payload in kilograms.
    pub max_weight: f64,
}

const TWENTY_FT: ArchetypeSpec = ArchetypeSpec {
    internal: Dimensions::new(589.0, 235.0, 239.0),
    max_weight: 28_200.0,
};

const FORTY_FT: ArchetypeSpec = ArchetypeSpec {
    internal: Dimensions::new(1203.0, 235.0, 239.0),
    max_weight: 26_700.0,
};

impl ContainerArchetype {
    /// All archetypes, smallest first.
    pub const ALL: [Self; 2] = [Self::Twenty, Self::Forty];

    /// Returns the interior size and payload.
    pub fn spec(&self) -> ArchetypeSpec {
        match self {
            Self::Twenty => TWENTY_FT,
            Self::Forty => FORTY_FT,
        }
    }

    /// Builds a container for this archetype.
    pub fn container(&self) -> Container3D {
        let spec = self.spec();
        Container3D::new(spec.internal, spec.max_weight)
    }

    /// Returns the short name ("20ft" / "40ft").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Twenty => "20ft",
            Self::Forty => "40ft",
        }
    }
}

impl std::fmt::Display for ContainerArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerArchetype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "20ft" | "20" | "twenty" => Ok(Self::Twenty),
            "40ft" | "40" | "forty" => Ok(Self::Forty),
            other => Err(Error::Parse(format!("unknown container type '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_container_volume() {
        let container = Container3D::new(Dimensions::new(100.0, 80.0, 50.0), 1000.0);
        assert_relative_eq!(container.volume(), 400000.0, epsilon = 0.001);
        assert_eq!(container.max_weight(), 1000.0);
    }

    #[test]
    fn test_validation() {
        let valid = Container3D::new(Dimensions::new(100.0, 80.0, 50.0), 10.0);
        assert!(valid.validate().is_ok());

        let invalid = Container3D::new(Dimensions::new(-100.0, 80.0, 50.0), 10.0);
        assert!(invalid.validate().is_err());

        let missing = Container3D::new(Dimensions::ZERO, 10.0);
        assert_eq!(
            missing.validate().unwrap_err().to_string(),
            "Invalid dimensions: container: missing required dimensions"
        );

        let no_budget = valid.with_max_weight(0.0);
        assert!(no_budget.validate().is_err());

        assert!(Container3D::unlimited(Dimensions::new(1.0, 1.0, 1.0))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_archetype_table() {
        let twenty = ContainerArchetype::Twenty.spec();
        assert_eq!(twenty.internal, Dimensions::new(589.0, 235.0, 239.0));
        assert_eq!(twenty.max_weight, 28_200.0);

        let forty = ContainerArchetype::Forty.container();
        assert_eq!(forty.dimensions(), Dimensions::new(1203.0, 235.0, 239.0));
        assert_eq!(forty.max_weight(), 26_700.0);
    }

    #[test]
    fn test_archetype_parse() {
        assert_eq!("20ft".parse::<ContainerArchetype>().unwrap(), ContainerArchetype::Twenty);
        assert_eq!(" 40FT ".parse::<ContainerArchetype>().unwrap(), ContainerArchetype::Forty);
        assert!("45ft".parse::<ContainerArchetype>().is_err());
        assert_eq!(ContainerArchetype::Forty.to_string(), "40ft");
    }
}
