pub mod data_chart;
pub mod heat_map;
pub mod navigation;
pub mod stat_card;
pub mod toast;
