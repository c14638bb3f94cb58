pub const QUOTE_API_BASE: &str = "https://quote-api.jup.ag";
pub const SLIPPAGE_BPS: u16 = 50;
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

// Display-only figure; the executed transaction carries its own fee terms.
pub const SERVICE_FEE_PERCENT: f64 = 0.01;
