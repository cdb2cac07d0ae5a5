//! Field layout configuration
//!
//! Authored as JSON; the default reproduces the reference page layout.

use serde::{Deserialize, Serialize};

use crate::sim::{ShapeConfig, ShapeKind};

/// Ordered shape list a `ShapeField` is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub shapes: Vec<ShapeConfig>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        use ShapeKind::*;
        Self {
            shapes: vec![
                // Three small fast circles
                ShapeConfig::new(Circle, 80.0, 2.0),
                ShapeConfig::new(Circle, 90.0, 1.8),
                ShapeConfig::new(Circle, 85.0, 2.2),
                // One big slow circle
                ShapeConfig::new(Circle, 200.0, 0.5),
                // Two medium squares
                ShapeConfig::new(Square, 130.0, 1.2),
                ShapeConfig::new(Square, 140.0, 1.0),
                // Three small fast rhombi
                ShapeConfig::new(Rhombus, 70.0, 2.5),
                ShapeConfig::new(Rhombus, 75.0, 2.3),
                ShapeConfig::new(Rhombus, 80.0, 2.0),
            ],
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_nine_shapes() {
        let config = FieldConfig::default();
        assert_eq!(config.shapes.len(), 9);

        let circles = config
            .shapes
            .iter()
            .filter(|c| c.kind == ShapeKind::Circle)
            .count();
        assert_eq!(circles, 4);
    }

    #[test]
    fn test_json_round_trip() {
        let config = FieldConfig::default();
        let json = config.to_json().unwrap();
        let parsed = FieldConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let config = FieldConfig {
            shapes: vec![ShapeConfig::new(ShapeKind::Rhombus, 70.0, 2.5)],
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"rhombus\""));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{\"shapes\": [{").is_err());
        assert!(
            FieldConfig::from_json("{\"shapes\": [{\"kind\": \"hexagon\", \"size\": 1.0, \"speed_scale\": 1.0}]}")
                .is_err()
        );
    }
}
