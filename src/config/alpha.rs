pub const ALPHA_API_BASE: &str = "https://api.coingecko.com";
pub const ALPHA_CATEGORY: &str = "binance-alpha-spotlight";
pub const ALPHA_PAGE_COUNT: u32 = 3;
pub const ALPHA_PAGE_SIZE: u32 = 100;

// The market listing never reports decimals; most listed assets use 18.
pub const DEFAULT_DECIMALS: u8 = 18;

pub const ALPHA_TOKENS_KEY: &str = "alphaTokens";
pub const ALPHA_TIMESTAMP_KEY: &str = "alphaTokensTimestamp";
