/// Application directory discovery and leaf/grouping classification.
pub mod apps;

pub use apps::{AppLayout, classify, scan_apps};
