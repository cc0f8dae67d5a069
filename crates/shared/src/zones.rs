//! The zone registry: the canonical, ordered set of monitored zones.

use crate::models::{DensityClass, ZoneRecord};

/// Immutable, ordered collection of zone records backing a dashboard
/// context. There is no mutation API; changing data means supplying a new
/// registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRegistry {
    zones: Vec<ZoneRecord>,
}

fn zone(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    temperature_c: f64,
    density_class: DensityClass,
    alert: Option<&str>,
) -> ZoneRecord {
    ZoneRecord {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        temperature_c,
        density_class,
        alert: alert.map(str::to_string),
    }
}

impl ZoneRegistry {
    /// Build a registry from caller-supplied records, keeping their order.
    pub fn from_records(zones: Vec<ZoneRecord>) -> Self {
        Self { zones }
    }

    /// The seven operational zones of the Indian-waters dashboards.
    pub fn indian_waters() -> Self {
        use DensityClass::{High, Low, Medium};
        Self::from_records(vec![
            zone("zone1", "Arabian Sea North", 20.5, 69.2, 26.2, High, None),
            zone(
                "zone2",
                "Arabian Sea Central",
                18.0,
                70.1,
                31.5,
                Medium,
                Some("Cyclone Warning"),
            ),
            zone("zone3", "Bay of Bengal", 16.5, 82.3, 29.8, High, None),
            zone(
                "zone4",
                "Indian Ocean South",
                8.2,
                76.8,
                27.1,
                Low,
                Some("High Waves"),
            ),
            zone("zone5", "Lakshadweep Sea", 12.3, 71.7, 32.1, Medium, None),
            zone("zone6", "Gulf of Mannar", 9.1, 79.2, 28.5, High, None),
            // East of the mapped box; render-side clamping pins it to the edge.
            zone("zone7", "Andaman Sea", 11.5, 92.8, 30.2, Medium, None),
        ])
    }

    /// All zones, in registry order.
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    /// Look up a zone by id. An absent id is a normal outcome (stale
    /// selection), not an error.
    pub fn get(&self, id: &str) -> Option<&ZoneRecord> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::INDIAN_WATERS;

    #[test]
    fn test_indian_waters_is_ordered() {
        let registry = ZoneRegistry::indian_waters();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.zones()[0].id, "zone1");
        assert_eq!(registry.zones()[6].name, "Andaman Sea");
    }

    #[test]
    fn test_get_by_id() {
        let registry = ZoneRegistry::indian_waters();
        let bengal = registry.get("zone3").unwrap();
        assert_eq!(bengal.name, "Bay of Bengal");
        assert!((bengal.temperature_c - 29.8).abs() < 1e-9);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let registry = ZoneRegistry::indian_waters();
        assert!(registry.get("ghost").is_none());
    }

    #[test]
    fn test_alert_zones() {
        let registry = ZoneRegistry::indian_waters();
        let alerted: Vec<&str> = registry
            .zones()
            .iter()
            .filter(|z| z.has_alert())
            .map(|z| z.id.as_str())
            .collect();
        assert_eq!(alerted, ["zone2", "zone4"]);
    }

    #[test]
    fn test_andaman_sea_sits_east_of_box() {
        // The registry deliberately carries one out-of-box zone so the
        // clamping policy stays exercised by production data.
        let registry = ZoneRegistry::indian_waters();
        let andaman = registry.get("zone7").unwrap();
        assert!(andaman.longitude > INDIAN_WATERS.east);
    }

    #[test]
    fn test_from_records_preserves_order() {
        let records = vec![
            zone("b", "Bravo", 10.0, 70.0, 28.0, DensityClass::Low, None),
            zone("a", "Alpha", 12.0, 72.0, 29.0, DensityClass::High, None),
        ];
        let registry = ZoneRegistry::from_records(records);
        assert_eq!(registry.zones()[0].id, "b");
        assert_eq!(registry.zones()[1].id, "a");
        assert!(!registry.is_empty());
    }
}
