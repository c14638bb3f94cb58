use log::warn;
use reqwest::Client;

use crate::components::normalize::{
    dedup_by_address, normalize_entries, prioritize_by_logo, CatalogError, Result, SourceKind,
};
use crate::config::registry::{MAX_STORED_TOKENS, TOKEN_PROBE_BASE};
use crate::models::token::Token;
use crate::utils::fetcher::Fetcher;

pub async fn fetch_registry_tokens(fetcher: &Fetcher, base_url: &str) -> Result<Vec<Token>> {
    let url = format!("{}/all", base_url);
    let payload = fetcher
        .fetch_batch(&[url])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            CatalogError::MalformedResponse("Invalid tokens format".to_string(), String::new())
        })?;

    let tokens = normalize_entries(SourceKind::Registry, &payload)?;
    let tokens = dedup_by_address(tokens);

    Ok(prioritize_by_logo(tokens, MAX_STORED_TOKENS))
}

fn probe_url(base_url: &str, address: &str) -> String {
    format!("{}/tokens/v1/token/{}", base_url, address)
}

// Lightweight liveness probe for a single mint, used before offering an
// unlisted address in the picker. Any transport problem reads as "absent".
pub async fn token_exists(address: &str) -> bool {
    token_exists_at(TOKEN_PROBE_BASE, address).await
}

pub async fn token_exists_at(base_url: &str, address: &str) -> bool {
    let url = probe_url(base_url, address);
    let client = Client::new();

    match client.get(&url).send().await {
        Ok(res) => res.status().is_success(),
        Err(e) => {
            warn!("token lookup for {} failed: {}", address, e);
            false
        }
    }
}
