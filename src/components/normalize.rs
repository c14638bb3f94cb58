use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::config::alpha::DEFAULT_DECIMALS;
use crate::models::token::Token;
use crate::utils::fetcher::FetchError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Malformed response: {0}, content: {1}")]
    MalformedResponse(String, String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// The two upstream schemas share nothing but being arrays of objects, so
// every payload is tagged with its source and mapped per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Alpha,
    Registry,
}

pub fn normalize_entries(kind: SourceKind, payload: &Value) -> Result<Vec<Token>> {
    let entries = payload.as_array().ok_or_else(|| {
        CatalogError::MalformedResponse("Invalid tokens format".to_string(), payload.to_string())
    })?;

    let tokens = entries
        .iter()
        .map(|entry| match kind {
            SourceKind::Alpha => alpha_token(entry),
            SourceKind::Registry => registry_token(entry),
        })
        .collect();

    Ok(tokens)
}

fn optional_logo(value: &Value) -> Option<String> {
    match value.as_str() {
        Some("") | None => None,
        Some(uri) => Some(uri.to_string()),
    }
}

// Market entries carry no decimals, so every alpha token gets the default.
fn alpha_token(entry: &Value) -> Token {
    Token {
        address: entry["id"].as_str().unwrap_or_default().to_string(),
        symbol: entry["symbol"].as_str().unwrap_or_default().to_uppercase(),
        name: entry["name"].as_str().unwrap_or_default().to_string(),
        logo: optional_logo(&entry["image"]),
        decimals: DEFAULT_DECIMALS,
        price: entry["current_price"].as_f64().unwrap_or_default(),
        market_cap: entry["market_cap"].as_f64().unwrap_or_default(),
        volume_24h: entry["total_volume"].as_f64().unwrap_or_default(),
    }
}

// The registry list carries no pricing, those fields stay zero until some
// other source fills them in.
fn registry_token(entry: &Value) -> Token {
    Token {
        address: entry["address"].as_str().unwrap_or_default().to_string(),
        symbol: entry["symbol"].as_str().unwrap_or_default().to_string(),
        name: entry["name"].as_str().unwrap_or_default().to_string(),
        logo: optional_logo(&entry["logoURI"]),
        decimals: entry["decimals"].as_u64().unwrap_or(0) as u8,
        price: 0.0,
        market_cap: 0.0,
        volume_24h: 0.0,
    }
}

// Later duplicates overwrite earlier ones but keep the earlier slot, so the
// upstream ordering survives deduplication.
pub fn dedup_by_address(tokens: Vec<Token>) -> Vec<Token> {
    let mut slot_by_address: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match slot_by_address.get(&token.address) {
            Some(&slot) => out[slot] = token,
            None => {
                slot_by_address.insert(token.address.clone(), out.len());
                out.push(token);
            }
        }
    }

    out
}

pub fn prioritize_by_logo(tokens: Vec<Token>, cap: usize) -> Vec<Token> {
    let (with_logo, without_logo): (Vec<Token>, Vec<Token>) =
        tokens.into_iter().partition(|token| token.logo.is_some());

    let mut out = with_logo;
    out.extend(without_logo);
    out.truncate(cap);
    out
}
