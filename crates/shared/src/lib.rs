//! Domain types and pure map math shared by the Tidewatch dashboards.

pub mod classify;
pub mod geo;
pub mod models;
pub mod zones;
