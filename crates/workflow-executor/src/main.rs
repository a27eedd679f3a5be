/*
[INPUT]:  config.json (beside the executable or WORKFLOW_EXECUTOR_CONFIG)
[OUTPUT]: Demo task run with status/result reports sent to the backend
[POS]:    Binary entry point
[UPDATE]: When changing the startup flow or the task source
*/

use anyhow::{Context, Result};
use tracing::{debug, info};

use workflow_executor::config::resolve_config_path;
use workflow_executor::logging::init_tracing;
use workflow_executor::{ExecutorConfig, build_demo_task, execute_task};
use workflow_executor_adapter::ExecutorClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _log_guard = init_tracing();

    let config_path = resolve_config_path().context("resolve config path")?;
    let config = ExecutorConfig::from_file(&config_path)
        .with_context(|| format!("load config from {}", config_path.display()))?;
    let backend_url = config.backend_url().context("read backend url")?;

    info!("Using backend URL: {}", backend_url);

    let task = build_demo_task();
    let client = ExecutorClient::new(backend_url).context("build backend client")?;
    let summary = execute_task(&task, &client).await;
    drop(client);

    debug!(
        steps = summary.steps_executed,
        status_failures = summary.status_failures,
        result_delivered = summary.result_delivered,
        elapsed_secs = summary.elapsed.as_secs_f64(),
        "run finished"
    );

    Ok(())
}
