pub const CATALOG_TTL_MS: u64 = 24 * 60 * 60 * 1000;
