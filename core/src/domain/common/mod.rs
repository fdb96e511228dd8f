use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct HealthSuiteConfig {
    pub llm: LLMConfig,
    pub imaging: ImagingConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Fallback key used when a session has not supplied its own.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct ImagingConfig {
    pub scratch_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
