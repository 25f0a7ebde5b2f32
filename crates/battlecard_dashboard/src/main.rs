use anyhow::Context;
use battlecard_client::config::Config;
use battlecard_client::http_client::ReqwestBattlecardClient;
use battlecard_dashboard::Dashboard;
use battlecard_dashboard::config::FilterConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from env var `BATTLECARD_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("BATTLECARD_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let combined_filter = format!("{},reqwest=warn,hyper=warn", log_env);
    let env_filter = tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,reqwest=warn,hyper=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("battlecard_dashboard: log filter: {}", log_env);

    let cfg = Config::from_env().context("reading client configuration")?;
    let today = chrono::Local::now().date_naive();
    let spec = FilterConfig::from_env(today).context("reading filter configuration")?;

    let client = ReqwestBattlecardClient::from_config(&cfg);
    tracing::info!("battlecard_dashboard: fetching records from {}", client.api_url());
    let dashboard = Dashboard::load(&client)
        .await
        .context("Failed to fetch data. Please try again later.")?;

    let views = dashboard.recompute(&spec);
    if views.is_empty() {
        tracing::info!("battlecard_dashboard: no records match the current filter");
    }
    println!("{}", dashboard.render_json(&spec, &views)?);

    Ok(())
}
