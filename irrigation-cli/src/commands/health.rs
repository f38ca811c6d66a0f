//! Health command

use anyhow::Result;

use crate::client::ApiClient;

/// Fetch and print the service health report.
pub async fn execute(client: &ApiClient) -> Result<()> {
    let health = client.health().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}
