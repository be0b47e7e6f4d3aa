use colored::*;
use tourbook_common::booking::notification::{Notification, NotificationKind};
use tourbook_common::weather::report::WeatherReport;
use tourbook_common::weather::temperature::TemperatureScale;

use crate::terminal::colors;

pub fn signed(value: i32) -> String {
    if value > 0 { format!("+{value}") } else { value.to_string() }
}

/// `+21°C`, coloured by the band the reading falls into.
pub fn temperature(value: f64, scale: &TemperatureScale) -> ColoredString {
    let color: Color = Color::from(scale.color(Some(value)));
    format!("{}°C", signed(value.round() as i32)).color(color).bold()
}

pub fn weather_lines(report: &WeatherReport, scale: &TemperatureScale, icon_base: &str) -> Vec<(String, ColoredString)> {
    vec![
        ("Temp".to_string(), temperature(report.temperature, scale)),
        ("Feels".to_string(), temperature(report.feels_like, scale)),
        ("Humidity".to_string(), format!("{}%", report.humidity).normal()),
        ("Sky".to_string(), format!("{} ({})", report.description, report.summary).normal()),
        ("Icon".to_string(), report.icon_url(icon_base).color(colors::MUTED)),
    ]
}

pub fn notification(notification: &Notification) -> ColoredString {
    match notification.kind {
        NotificationKind::Success => notification.message.as_str().color(colors::SUCCESS).bold(),
        NotificationKind::Error => notification.message.as_str().color(colors::ERROR).bold(),
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
