use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::imaging::prompt::{ANALYSIS_DISCLAIMER, EMPTY_REPORT_FALLBACK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImagingReport {
    /// Markdown exactly as returned by the model.
    pub report: String,
    pub model: String,
    pub disclaimer: String,
    pub generated_at: DateTime<Utc>,
}

impl ImagingReport {
    pub fn new(report: Option<String>, model: String) -> Self {
        let report = match report {
            Some(text) if !text.trim().is_empty() => text,
            _ => EMPTY_REPORT_FALLBACK.to_string(),
        };

        Self {
            report,
            model,
            disclaimer: ANALYSIS_DISCLAIMER.to_string(),
            generated_at: Utc::now(),
        }
    }
}
