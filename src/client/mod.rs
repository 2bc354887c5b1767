// Client module - vessel-info API client
pub mod api;

pub use api::{VesselInfoClient, snapshot_url, report_line, render_result};
