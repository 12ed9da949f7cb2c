use serde::Deserialize;

use crate::domain::market::entities::MarketRecord;

const MAP_LINK_BASE: &str = "https://maps.google.com/?q=";

/// One row of the farmers-market CSV export.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketRow {
    pub id: String,
    #[serde(rename = "location")]
    pub name: String,
    pub intersection: String,
    #[serde(default)]
    pub products: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub fn map_link(address: &str, region_suffix: &str) -> String {
    let full_address = format!("{address}, {region_suffix}");
    format!("{MAP_LINK_BASE}{}", urlencoding::encode(&full_address))
}

impl MarketRow {
    /// Returns `None` when the row has no usable latitude or longitude.
    pub fn into_market_record(self, region_suffix: &str) -> Option<MarketRecord> {
        let latitude = parse_coordinate(self.latitude.as_deref())?;
        let longitude = parse_coordinate(self.longitude.as_deref())?;

        Some(MarketRecord {
            google_link: map_link(&self.intersection, region_suffix),
            schedule: format!("{}: {}–{}", self.day, self.start_time, self.end_time),
            id: self.id,
            name: self.name,
            address: self.intersection,
            products: self.products,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(latitude: Option<&str>, longitude: Option<&str>) -> MarketRow {
        MarketRow {
            id: "7".to_string(),
            name: "Daley Plaza".to_string(),
            intersection: "Washington St & Dearborn St".to_string(),
            products: "Honey, Flowers".to_string(),
            day: "Thursday".to_string(),
            start_time: "7:00 AM".to_string(),
            end_time: "2:00 PM".to_string(),
            latitude: latitude.map(str::to_string),
            longitude: longitude.map(str::to_string),
        }
    }

    #[test]
    fn test_row_maps_to_record() {
        let record = row(Some("41.8837"), Some(" -87.6298 "))
            .into_market_record("Chicago, IL")
            .unwrap();

        assert_eq!(record.id, "7");
        assert_eq!(record.name, "Daley Plaza");
        assert_eq!(record.address, "Washington St & Dearborn St");
        assert_eq!(record.schedule, "Thursday: 7:00 AM–2:00 PM");
        assert_eq!(record.latitude, 41.8837);
        assert_eq!(record.longitude, -87.6298);
        assert_eq!(
            record.google_link,
            "https://maps.google.com/?q=Washington%20St%20%26%20Dearborn%20St%2C%20Chicago%2C%20IL"
        );
    }

    #[test]
    fn test_missing_or_bad_coordinates_drop_the_row() {
        assert!(row(None, Some("-87.6")).into_market_record("X").is_none());
        assert!(row(Some("41.8"), None).into_market_record("X").is_none());
        assert!(row(Some(""), Some("-87.6")).into_market_record("X").is_none());
        assert!(row(Some("north"), Some("-87.6")).into_market_record("X").is_none());
        assert!(row(Some("NaN"), Some("-87.6")).into_market_record("X").is_none());
    }
}
