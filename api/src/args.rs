use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use healthsuite_core::{
    domain::common::{HealthSuiteConfig, ImagingConfig, LLMConfig, SessionConfig},
    infrastructure::llm::gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "healthsuite", version, about = "AI Health Suite server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub imaging: ImagingArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/healthsuite`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Used for sessions that have not entered their own key.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ImagingArgs {
    #[arg(long = "scratch-dir", env = "SCRATCH_DIR", default_value_os_t = default_scratch_dir())]
    pub scratch_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(long = "session-ttl-secs", env = "SESSION_TTL_SECS", default_value_t = 3600)]
    pub ttl_secs: u64,

    #[arg(
        long = "session-sweep-interval-secs",
        env = "SESSION_SWEEP_INTERVAL_SECS",
        default_value_t = 60
    )]
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Ignored when RUST_LOG is set.
    #[arg(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
    pub level: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join("healthsuite")
}

impl From<Args> for HealthSuiteConfig {
    fn from(args: Args) -> Self {
        HealthSuiteConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            imaging: ImagingConfig {
                scratch_dir: args.imaging.scratch_dir,
            },
            session: SessionConfig {
                idle_ttl: Duration::from_secs(args.session.ttl_secs),
                sweep_interval: Duration::from_secs(args.session.sweep_interval_secs),
            },
        }
    }
}
