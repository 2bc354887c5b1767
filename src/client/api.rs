use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use crate::models::SnapshotEnvelope;
use crate::{v_debug, v_error, v_summary};

/// Build the qna-snapshot URL. Identifiers are substituted verbatim.
pub fn snapshot_url(base_url: &str, imo: &str, question_no: &str) -> String {
    format!(
        "{}/v1.0/vessel-info/qna-snapshot/{}/{}",
        base_url.trim_end_matches('/'),
        imo,
        question_no
    )
}

#[derive(Clone)]
pub struct VesselInfoClient {
    client: reqwest::Client,
    base_url: String,
}

impl VesselInfoClient {
    pub fn new(token: &str, base_url: impl Into<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| format!("Invalid API token: {}", e))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(VesselInfoClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one snapshot. Transport errors and non-2xx statuses are both errors.
    pub async fn get_qna_snapshot(&self, imo: &str, question_no: &str) -> Result<Value, Box<dyn std::error::Error>> {
        let url = snapshot_url(&self.base_url, imo, question_no);
        v_debug!("🌐 [{}] GET {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        v_debug!("🌐 [{}] {} <- {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), status.as_u16(), url);

        if !status.is_success() {
            return Err(format!("API request failed with status: {} for url: {}", status, url).into());
        }

        let response_text = response.text().await?;
        v_debug!("📄 Response body: {}", response_text);

        let envelope = SnapshotEnvelope::parse(&response_text)?;
        Ok(envelope.into_result())
    }

    /// Fetch, print and return a snapshot. Every failure collapses into `None`
    /// after a diagnostic line; nothing is propagated to the caller.
    pub async fn fetch_qna_snapshot(&self, imo: &str, question_no: &str) -> Option<Value> {
        let outcome = self.get_qna_snapshot(imo, question_no).await;
        let line = report_line(&outcome);
        match outcome {
            Ok(result) => {
                v_summary!("{}", line);
                Some(result)
            }
            Err(_) => {
                v_error!("{}", line);
                None
            }
        }
    }
}

/// The stdout line for one fetch: the pretty result or the failure diagnostic.
pub fn report_line(outcome: &Result<Value, Box<dyn std::error::Error>>) -> String {
    match outcome {
        Ok(result) => render_result(result),
        Err(e) => format!("Error making API request: {}", e),
    }
}

/// Two-space indented JSON with non-ASCII written as `\uXXXX` escapes.
pub fn render_result(result: &Value) -> String {
    let pretty = serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
    escape_non_ascii(&pretty)
}

// Non-ASCII only ever appears inside JSON strings, so escaping it in place is safe
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
