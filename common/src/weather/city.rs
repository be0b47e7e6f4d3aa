use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(id: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }

    pub fn defaults() -> Vec<City> {
        vec![
            City::new("beijing", "Пекин", 39.9042, 116.4074),
            City::new("guangzhou", "Гуанчжоу", 23.1291, 113.2644),
            City::new("harbin", "Харбин", 45.8038, 126.534),
        ]
    }
}

impl FromStr for City {
    type Err = String;

    /// Parses `id:name:lat:lon`, e.g. `harbin:Харбин:45.8038:126.534`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        let [id, name, lat, lon] = parts.as_slice() else {
            return Err(format!("expected id:name:lat:lon, got '{s}'"));
        };

        if id.is_empty() {
            return Err(format!("city id cannot be empty: '{s}'"));
        }

        let lat: f64 = lat
            .parse()
            .map_err(|e| format!("Invalid latitude '{lat}': {e}"))?;
        let lon: f64 = lon
            .parse()
            .map_err(|e| format!("Invalid longitude '{lon}': {e}"))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude out of range: {lat}"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude out of range: {lon}"));
        }

        Ok(City::new(id, if name.is_empty() { id } else { name }, lat, lon))
    }
}

/// Parses a `;` or `,` separated list of cities, skipping empty entries.
pub fn parse_list(s: &str) -> anyhow::Result<Vec<City>> {
    let mut cities: Vec<City> = Vec::new();

    for part in s.split([';', ',']) {
        let part: &str = part.trim();
        if part.is_empty() {
            continue;
        }

        let city: City = City::from_str(part)
            .map_err(|e| anyhow::anyhow!("Failed to parse city '{}': {}", part, e))?;

        cities.push(city);
    }

    Ok(cities)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
