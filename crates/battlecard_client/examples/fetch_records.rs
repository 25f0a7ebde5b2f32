use battlecard_client::{BattlecardClient, config::Config, http_client::ReqwestBattlecardClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: reads BATTLECARD_API_URL / BATTLECARD_API_TOKEN from env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = ReqwestBattlecardClient::from_config(&cfg);
    let records = client.fetch_records().await?;
    println!("Fetched {} records from {}", records.len(), client.api_url());
    for rec in records.iter().take(5) {
        println!(
            "  {} | {} | {}",
            rec.deal_id,
            rec.competitor_name.as_deref().unwrap_or("-"),
            rec.deal_stage.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
