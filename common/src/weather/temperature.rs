use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemperatureBand {
    VeryCold,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
    VeryHot,
    ExtremeHot,
}

impl TemperatureBand {
    pub const ALL: [TemperatureBand; 8] = [
        TemperatureBand::VeryCold,
        TemperatureBand::Cold,
        TemperatureBand::Cool,
        TemperatureBand::Mild,
        TemperatureBand::Warm,
        TemperatureBand::Hot,
        TemperatureBand::VeryHot,
        TemperatureBand::ExtremeHot,
    ];
}

/// Seven ascending thresholds splitting the axis into eight bands, one colour per band.
///
/// A reading equal to a threshold belongs to the band above it.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureScale {
    thresholds: [f64; 7],
    colors: [String; 8],
    default_color: String,
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self {
            thresholds: [-15.0, -5.0, 5.0, 15.0, 25.0, 30.0, 35.0],
            colors: [
                "bright blue".to_string(),
                "blue".to_string(),
                "cyan".to_string(),
                "green".to_string(),
                "yellow".to_string(),
                "bright yellow".to_string(),
                "red".to_string(),
                "bright red".to_string(),
            ],
            default_color: "white".to_string(),
        }
    }
}

impl TemperatureScale {
    pub fn new(
        thresholds: [f64; 7],
        colors: [String; 8],
        default_color: String,
    ) -> Result<Self, ConfigError> {
        if thresholds.iter().any(|t| !t.is_finite()) || thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidValue {
                key: "temperature thresholds".to_string(),
                reason: format!("must be finite and strictly ascending, got {thresholds:?}"),
            });
        }
        Ok(Self {
            thresholds,
            colors,
            default_color,
        })
    }

    pub fn with_thresholds(self, thresholds: [f64; 7]) -> Result<Self, ConfigError> {
        Self::new(thresholds, self.colors, self.default_color)
    }

    pub fn with_colors(self, colors: [String; 8], default_color: String) -> Self {
        Self {
            colors,
            default_color,
            ..self
        }
    }

    pub fn thresholds(&self) -> &[f64; 7] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[String; 8] {
        &self.colors
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn band(&self, temperature: f64) -> TemperatureBand {
        let idx: usize = self.thresholds.iter().filter(|t| temperature >= **t).count();
        TemperatureBand::ALL[idx]
    }

    /// Colour name for a reading; `None` (no data yet) maps to the default colour.
    pub fn color(&self, temperature: Option<f64>) -> &str {
        match temperature {
            Some(t) if t.is_finite() => &self.colors[self.band(t) as usize],
            _ => &self.default_color,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
