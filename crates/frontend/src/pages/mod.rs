pub mod fisheries;
pub mod home;
pub mod ocean_map;
pub mod research;
pub mod sos;
