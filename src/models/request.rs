/// Identity of one snapshot lookup: a vessel IMO number and a question number.
/// Both are opaque strings and are never validated before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QnaRequest {
    pub imo: String,
    pub question_no: String,
}

impl QnaRequest {
    pub fn new(imo: impl Into<String>, question_no: impl Into<String>) -> Self {
        Self {
            imo: imo.into(),
            question_no: question_no.into(),
        }
    }
}

impl Default for QnaRequest {
    fn default() -> Self {
        Self::new(crate::DEFAULT_IMO, crate::DEFAULT_QUESTION_NO)
    }
}
