use std::process::ExitCode;

use kubeai_smoke::config;
use kubeai_smoke::smoke::SmokeRunner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing KubeAI smoke test...");

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("target: {} model: {}", config.base_url, config.model);

    for scenario in &config.scenarios {
        if let Some(reason) = scenario.known_failure_reason() {
            log::warn!("scenario {scenario} is expected to fail: {reason}");
        }
    }

    let scenarios = config.scenarios.clone();
    let runner = SmokeRunner::from_config(config);
    let report = runner.run(&scenarios).await;

    log::info!(
        "{} of {} scenarios passed",
        report.passed_count(),
        report.outcomes.len()
    );
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
