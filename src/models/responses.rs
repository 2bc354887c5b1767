use serde_json::Value;

// API Response wrapper
// The envelope is kept untyped: only `resultData` is ever looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEnvelope(pub Value);

impl SnapshotEnvelope {
    pub const RESULT_FIELD: &'static str = "resultData";

    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self(serde_json::from_str(body)?))
    }

    /// A string `resultData` is the result; anything else yields the whole envelope.
    pub fn into_result(self) -> Value {
        if let Some(Value::String(inner)) = self.0.get(Self::RESULT_FIELD) {
            return Value::String(inner.clone());
        }
        self.0
    }
}
