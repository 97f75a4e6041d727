//! Style configuration for chord diagrams.
//!
//! The renderer treats every value here as opaque: sizes are SVG user units,
//! colors are CSS color strings passed straight to the surface. A theme is
//! built once per render and borrowed by every drawing call.

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;

/// Complete style bundle for one diagram.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub sizes: Sizes,
    pub colors: Colors,
    pub typography: Typography,
}

/// Marker and stroke dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sizes {
    /// Diameter of a position marker; also the barre thickness and the
    /// string-usage indicator size
    pub position: f64,
    /// Width of grid lines and indicator strokes
    pub stroke_width: f64,
}

impl Default for Sizes {
    fn default() -> Self {
        Self {
            position: 24.0,
            stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub background: String,
    /// Fret and string lines, and the nut
    pub grid: String,
    /// Position markers and barres
    pub position: String,
    /// Open rings and closed crosses above the nut
    pub string_usage_indicator: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            grid: "#1a1a1a".to_string(),
            position: "#1a1a1a".to_string(),
            string_usage_indicator: "#1a1a1a".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Chord name above the diagram
    pub name: TextStyle,
    /// Fret number beside the first row when the diagram starts above the nut
    pub first_fret_indicator: TextStyle,
    /// Finger label drawn on top of position markers
    pub finger_indicator: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            name: TextStyle::new(24.0, "#1a1a1a"),
            first_fret_indicator: TextStyle::new(18.0, "#1a1a1a"),
            finger_indicator: TextStyle::new(14.0, "white"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: String,
    /// CSS font weight ("normal", "bold", "600", ...)
    pub font_weight: String,
}

impl TextStyle {
    pub fn new(font_size: f64, color: &str) -> Self {
        Self {
            font_size,
            color: color.to_string(),
            font_weight: "normal".to_string(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = "bold".to_string();
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0, "#1a1a1a")
    }
}

impl Theme {
    /// Parse a theme from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact style for small guitar chord thumbnails.
    pub fn guitar_thumbnail() -> Self {
        Self {
            sizes: Sizes {
                position: 10.0,
                ..Sizes::default()
            },
            typography: Typography {
                name: TextStyle::new(14.0, "#1a1a1a"),
                first_fret_indicator: TextStyle::new(14.0, "#1a1a1a"),
                finger_indicator: TextStyle::new(8.0, "white"),
            },
            ..Theme::default()
        }
    }

    /// Compact ukulele style with a bold red chord name.
    pub fn ukulele_thumbnail() -> Self {
        Self {
            sizes: Sizes {
                position: 13.0,
                ..Sizes::default()
            },
            typography: Typography {
                name: TextStyle::new(14.0, "red").bold(),
                first_fret_indicator: TextStyle::new(14.0, "#1a1a1a"),
                finger_indicator: TextStyle::new(8.0, "white"),
            },
            ..Theme::default()
        }
    }
}
