// Data models for the vessel-info API
pub mod request;
pub mod responses;

pub use request::QnaRequest;
pub use responses::SnapshotEnvelope;
