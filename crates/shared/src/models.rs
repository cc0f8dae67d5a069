use serde::{Deserialize, Serialize};

/// Which metric drives marker color and legend content on a map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VizMode {
    Fish,
    Temperature,
    Disaster,
}

impl VizMode {
    /// Caption shown under a map title, e.g. "sea surface temperature".
    pub fn caption(&self) -> &'static str {
        match self {
            VizMode::Fish => "fish population density",
            VizMode::Temperature => "sea surface temperature",
            VizMode::Disaster => "disaster alerts",
        }
    }
}

impl std::fmt::Display for VizMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizMode::Fish => write!(f, "Fish"),
            VizMode::Temperature => write!(f, "Temperature"),
            VizMode::Disaster => write!(f, "Disaster"),
        }
    }
}

/// Ordinal fish-density category reported per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityClass {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for DensityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityClass::High => write!(f, "High"),
            DensityClass::Medium => write!(f, "Medium"),
            DensityClass::Low => write!(f, "Low"),
        }
    }
}

/// A monitored patch of ocean: position, current readings, and an optional
/// active hazard label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub density_class: DensityClass,
    pub alert: Option<String>,
}

impl ZoneRecord {
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "Critical"),
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SosStatus {
    Active,
    Dispatched,
    Resolved,
}

impl std::fmt::Display for SosStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SosStatus::Active => write!(f, "Active"),
            SosStatus::Dispatched => write!(f, "Coast Guard Dispatched"),
            SosStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// An emergency report from a vessel at sea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlert {
    pub id: String,
    pub fisherman: String,
    pub boat_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_nm: f64,
    pub reported: String,
    pub emergency: String,
    pub priority: Priority,
    pub status: SosStatus,
    pub crew_size: u8,
    pub contact: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// An active weather/ocean hazard shown on the conditions dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardNotice {
    pub kind: String,
    pub severity: Severity,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reported: String,
    pub description: String,
    pub affected_vessels: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PubStatus {
    Published,
    UnderReview,
}

impl std::fmt::Display for PubStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PubStatus::Published => write!(f, "Published"),
            PubStatus::UnderReview => write!(f, "Under Review"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub author: String,
    pub date: String,
    pub status: PubStatus,
    pub citations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneHealth {
    Optimal,
    Good,
    Poor,
}

impl std::fmt::Display for ZoneHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneHealth::Optimal => write!(f, "Optimal"),
            ZoneHealth::Good => write!(f, "Good"),
            ZoneHealth::Poor => write!(f, "Poor"),
        }
    }
}

/// Condition summary for a named fishing ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishingZoneStatus {
    pub zone: String,
    pub health: ZoneHealth,
    pub density_class: DensityClass,
    pub latitude: f64,
    pub longitude: f64,
}

/// One labeled value in a bar or pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_record_deserialize() {
        let json = r#"{
            "id": "zone1",
            "name": "Arabian Sea North",
            "latitude": 20.5,
            "longitude": 69.2,
            "temperatureC": 26.2,
            "densityClass": "High",
            "alert": null
        }"#;
        let zone: ZoneRecord = serde_json::from_str(json).unwrap();
        assert_eq!(zone.id, "zone1");
        assert_eq!(zone.name, "Arabian Sea North");
        assert!((zone.temperature_c - 26.2).abs() < 1e-9);
        assert_eq!(zone.density_class, DensityClass::High);
        assert!(zone.alert.is_none());
        assert!(!zone.has_alert());
    }

    #[test]
    fn test_zone_record_serialize_camel_case() {
        let zone = ZoneRecord {
            id: "zone2".to_string(),
            name: "Arabian Sea Central".to_string(),
            latitude: 18.0,
            longitude: 70.1,
            temperature_c: 31.5,
            density_class: DensityClass::Medium,
            alert: Some("Cyclone Warning".to_string()),
        };
        let json = serde_json::to_string(&zone).unwrap();
        assert!(json.contains(r#""temperatureC":31.5"#));
        assert!(json.contains(r#""densityClass":"Medium""#));
        assert!(json.contains(r#""alert":"Cyclone Warning""#));
        assert!(!json.contains("temperature_c"));
    }

    #[test]
    fn test_sos_alert_deserialize() {
        let json = r#"{
            "id": "SOS001",
            "fisherman": "Ravi Kumar",
            "boatName": "Sea Explorer",
            "latitude": 19.2,
            "longitude": 72.8,
            "distanceNm": 12.0,
            "reported": "15 minutes ago",
            "emergency": "Engine Failure",
            "priority": "High",
            "status": "Active",
            "crewSize": 4,
            "contact": "+91 98765 43210",
            "description": "Engine stopped working, drifting with current"
        }"#;
        let sos: SosAlert = serde_json::from_str(json).unwrap();
        assert_eq!(sos.boat_name, "Sea Explorer");
        assert_eq!(sos.priority, Priority::High);
        assert_eq!(sos.status, SosStatus::Active);
        assert_eq!(sos.crew_size, 4);
    }

    #[test]
    fn test_hazard_notice_roundtrip() {
        let notice = HazardNotice {
            kind: "Cyclone".to_string(),
            severity: Severity::High,
            location: "Bay of Bengal".to_string(),
            latitude: 16.5,
            longitude: 82.3,
            reported: "2 hours ago".to_string(),
            description: "Wind speeds up to 120 km/h".to_string(),
            affected_vessels: 45,
        };
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains(r#""affectedVessels":45"#));
        let back: HazardNotice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notice);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SosStatus::Dispatched.to_string(), "Coast Guard Dispatched");
        assert_eq!(PubStatus::UnderReview.to_string(), "Under Review");
        assert_eq!(DensityClass::Medium.to_string(), "Medium");
        assert_eq!(VizMode::Fish.to_string(), "Fish");
    }

    #[test]
    fn test_mode_captions() {
        assert_eq!(VizMode::Temperature.caption(), "sea surface temperature");
        assert_eq!(VizMode::Disaster.caption(), "disaster alerts");
    }
}
