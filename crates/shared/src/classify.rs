//! Metric-to-color classification for map markers and legends.

use crate::models::{DensityClass, VizMode, ZoneRecord};

/// A discrete visual class: band label plus the CSS color it renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub label: &'static str,
    pub color: &'static str,
}

/// Ascending `(inclusive lower bound, band)` steps for sea surface
/// temperature. The first step catches everything below 26 and the last is
/// open-ended above 31.
const TEMP_SCALE: [(f64, ColorBand); 6] = [
    (
        f64::NEG_INFINITY,
        ColorBand {
            label: "<26\u{00b0}C",
            color: "#3b82f6",
        },
    ),
    (
        26.0,
        ColorBand {
            label: "26-27\u{00b0}C",
            color: "#22d3ee",
        },
    ),
    (
        27.0,
        ColorBand {
            label: "27-28\u{00b0}C",
            color: "#22c55e",
        },
    ),
    (
        28.0,
        ColorBand {
            label: "28-29\u{00b0}C",
            color: "#eab308",
        },
    ),
    (
        29.0,
        ColorBand {
            label: "29-31\u{00b0}C",
            color: "#f97316",
        },
    ),
    (
        31.0,
        ColorBand {
            label: "31\u{00b0}C+",
            color: "#ef4444",
        },
    ),
];

const DENSITY_HIGH: ColorBand = ColorBand {
    label: "High",
    color: "#10b981",
};
const DENSITY_MEDIUM: ColorBand = ColorBand {
    label: "Medium",
    color: "#f59e0b",
};
const DENSITY_LOW: ColorBand = ColorBand {
    label: "Low",
    color: "#94a3b8",
};

const HAZARD_ACTIVE: ColorBand = ColorBand {
    label: "Active Alert",
    color: "#dc2626",
};
const HAZARD_CLEAR: ColorBand = ColorBand {
    label: "No Alert",
    color: "#38bdf8",
};

/// Walk an ascending threshold table and return the band of the highest
/// satisfied inclusive lower bound. A value sitting exactly on a breakpoint
/// lands in the higher band. Non-finite values keep the first entry.
///
/// `steps` must be non-empty and sorted by ascending bound.
pub fn band_for<T: Copy>(value: f64, steps: &[(f64, T)]) -> T {
    let mut current = steps[0].1;
    for &(lower, band) in steps {
        if value >= lower {
            current = band;
        } else {
            break;
        }
    }
    current
}

/// Band for an ordinal fish-density class. Direct mapping, no interpolation.
pub fn density_band(class: DensityClass) -> ColorBand {
    match class {
        DensityClass::High => DENSITY_HIGH,
        DensityClass::Medium => DENSITY_MEDIUM,
        DensityClass::Low => DENSITY_LOW,
    }
}

/// Binary hazard band: an active alert or clear water.
pub fn hazard_band(alert_active: bool) -> ColorBand {
    if alert_active {
        HAZARD_ACTIVE
    } else {
        HAZARD_CLEAR
    }
}

/// Classify a zone under the given visualization mode.
pub fn classify(zone: &ZoneRecord, mode: VizMode) -> ColorBand {
    match mode {
        VizMode::Fish => density_band(zone.density_class),
        VizMode::Temperature => band_for(zone.temperature_c, &TEMP_SCALE),
        VizMode::Disaster => hazard_band(zone.has_alert()),
    }
}

/// Legend rows for a mode, straight from the tables `classify` reads, in
/// display order.
pub fn legend(mode: VizMode) -> Vec<ColorBand> {
    match mode {
        VizMode::Fish => vec![DENSITY_HIGH, DENSITY_MEDIUM, DENSITY_LOW],
        VizMode::Temperature => TEMP_SCALE.iter().map(|&(_, band)| band).collect(),
        VizMode::Disaster => vec![HAZARD_ACTIVE, HAZARD_CLEAR],
    }
}
