/// Current conditions for one city, already decoded from the provider's format.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    /// Short condition group, e.g. "Clouds".
    pub summary: String,
    pub description: String,
    pub icon: String,
}

impl WeatherReport {
    pub fn rounded_temperature(&self) -> i32 {
        self.temperature.round() as i32
    }

    pub fn rounded_feels_like(&self) -> i32 {
        self.feels_like.round() as i32
    }

    pub fn icon_url(&self, icon_base: &str) -> String {
        format!("{}/{}@2x.png", icon_base.trim_end_matches('/'), self.icon)
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
