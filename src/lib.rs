// Vessel QnA Snapshot Client Library
// One-shot fetcher for the vessel-info qna-snapshot endpoint

pub mod models;
pub mod client;
pub mod config;
pub mod verbosity;

pub use models::{QnaRequest, SnapshotEnvelope};
pub use client::{VesselInfoClient, snapshot_url, report_line, render_result};
pub use config::{VesselInfoConfig, ApiConfig, load_api_token};

// Constants
pub const API_BASE_URL: &str = "https://dev-api.siya.com";
pub const API_TOKEN_FILE: &str = "API_TOKEN";
pub const API_TOKEN_ENV: &str = "VESSEL_INFO_TOKEN";
pub const BASE_URL_ENV: &str = "VESSEL_INFO_BASE_URL";
pub const CONFIG_FILE: &str = "vessel_qna.toml";

// Example call made when no identifiers are given (BW KIZOKU)
pub const DEFAULT_IMO: &str = "9810032";
pub const DEFAULT_QUESTION_NO: &str = "1";
