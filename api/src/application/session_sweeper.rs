use healthsuite_core::{
    application::HealthSuiteService,
    domain::{common::SessionConfig, session::ports::SessionService},
};
use tokio::task::JoinHandle;
use tracing::error;

/// Every `sweep_interval`, ends sessions nobody has touched for `idle_ttl`.
pub fn spawn_session_sweeper(
    service: HealthSuiteService,
    config: SessionConfig,
) -> JoinHandle<()> {
    let SessionConfig {
        idle_ttl: ttl,
        sweep_interval,
    } = config;

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = service.purge_idle_sessions(ttl).await {
                error!("Session sweep failed: {}", e);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use healthsuite_core::{
        application::create_service,
        domain::{
            common::{
                HealthSuiteConfig, ImagingConfig, LLMConfig, SessionConfig,
                entities::app_errors::CoreError,
            },
            session::ports::SessionService,
        },
    };
    use tempfile::TempDir;

    use super::spawn_session_sweeper;

    #[tokio::test]
    async fn test_sweeper_ends_idle_sessions_using_session_config() {
        let scratch = TempDir::new().unwrap();
        let session = SessionConfig {
            idle_ttl: Duration::ZERO,
            sweep_interval: Duration::from_millis(10),
        };
        let service = create_service(HealthSuiteConfig {
            llm: LLMConfig {
                gemini_api_key: None,
                gemini_model: "gemini-test".to_string(),
                gemini_base_url: "http://127.0.0.1:9".to_string(),
            },
            imaging: ImagingConfig {
                scratch_dir: scratch.path().to_path_buf(),
            },
            session: session.clone(),
        })
        .await
        .unwrap();

        let started = service.start_session().await.unwrap();
        let sweeper = spawn_session_sweeper(service.clone(), session);

        tokio::time::sleep(Duration::from_millis(200)).await;
        sweeper.abort();

        assert_eq!(
            service.get_session(started.id).await,
            Err(CoreError::SessionNotFound)
        );
    }
}
