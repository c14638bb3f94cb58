pub const REGISTRY_API_BASE: &str = "https://token.jup.ag";
pub const TOKEN_PROBE_BASE: &str = "https://lite-api.jup.ag";

pub const MAX_STORED_TOKENS: usize = 1000;

pub const REGISTRY_TOKENS_KEY: &str = "solanaTokens";
pub const REGISTRY_TIMESTAMP_KEY: &str = "solanaTokensTimestamp";
