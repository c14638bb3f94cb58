use serde::{Deserialize, Serialize};

// Serialized form matches the layout the swap client reads back:
// camelCase fields, logo key dropped when the source has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub decimals: u8,
    pub price: f64,
    pub market_cap: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
}

impl Token {
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.symbol.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

pub fn filter_tokens(tokens: &[Token], query: &str) -> Vec<Token> {
    tokens.iter().filter(|t| t.matches(query)).cloned().collect()
}
