use std::sync::Arc;

use log::{error, info, warn};

use crate::components::alpha::fetch_alpha_tokens;
use crate::components::registry::fetch_registry_tokens;
use crate::config::alpha::{ALPHA_API_BASE, ALPHA_TIMESTAMP_KEY, ALPHA_TOKENS_KEY};
use crate::config::catalog::CATALOG_TTL_MS;
use crate::config::registry::{REGISTRY_API_BASE, REGISTRY_TIMESTAMP_KEY, REGISTRY_TOKENS_KEY};
use crate::db::store::KvStore;
use crate::models::token::Token;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::fetcher::Fetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Alpha,
    Registry,
}

impl CatalogKind {
    pub fn tokens_key(&self) -> &'static str {
        match self {
            CatalogKind::Alpha => ALPHA_TOKENS_KEY,
            CatalogKind::Registry => REGISTRY_TOKENS_KEY,
        }
    }

    pub fn timestamp_key(&self) -> &'static str {
        match self {
            CatalogKind::Alpha => ALPHA_TIMESTAMP_KEY,
            CatalogKind::Registry => REGISTRY_TIMESTAMP_KEY,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CatalogKind::Alpha => "ALPHA",
            CatalogKind::Registry => "REGISTRY",
        }
    }

    // An empty stored registry list usually means a refresh once wrote the
    // result of a total upstream failure, so it is treated as absent.
    fn refetch_on_empty(&self) -> bool {
        matches!(self, CatalogKind::Registry)
    }
}

pub struct TokenCatalog {
    kind: CatalogKind,
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    fetcher: Fetcher,
    base_url: String,
}

impl TokenCatalog {
    pub fn alpha(store: Arc<dyn KvStore>) -> Self {
        TokenCatalog::with_parts(
            CatalogKind::Alpha,
            store,
            Arc::new(SystemClock),
            Fetcher::new(),
            ALPHA_API_BASE,
        )
    }

    pub fn registry(store: Arc<dyn KvStore>) -> Self {
        TokenCatalog::with_parts(
            CatalogKind::Registry,
            store,
            Arc::new(SystemClock),
            Fetcher::new(),
            REGISTRY_API_BASE,
        )
    }

    pub fn with_parts(
        kind: CatalogKind,
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        fetcher: Fetcher,
        base_url: &str,
    ) -> Self {
        TokenCatalog {
            kind,
            store,
            clock,
            fetcher,
            base_url: base_url.to_string(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn stored_timestamp_ms(&self) -> Option<u64> {
        self.store
            .get(self.kind.timestamp_key())
            .and_then(|raw| raw.trim().parse().ok())
    }

    // A missing or unreadable timestamp counts as never fetched.
    pub fn is_stale(&self) -> bool {
        match self.stored_timestamp_ms() {
            Some(ts) => self.clock.now_ms().saturating_sub(ts) >= CATALOG_TTL_MS,
            None => true,
        }
    }

    pub fn stored(&self) -> Vec<Token> {
        let raw = match self.store.get(self.kind.tokens_key()) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("{}: stored catalog unreadable: {}", self.tag(), e);
                Vec::new()
            }
        }
    }

    // Refreshes over the network when forced, stale, or (registry only)
    // when the stored list is empty; otherwise answers from the store. A
    // refresh that yields nothing returns empty without touching the store,
    // so the next call still sees stale data and tries again.
    pub async fn update(&self, force: bool) -> Vec<Token> {
        let stored = self.stored();
        let needs_refresh = force
            || self.is_stale()
            || (self.kind.refetch_on_empty() && stored.is_empty());

        if !needs_refresh {
            return stored;
        }

        info!("{}: refreshing token catalog", self.tag());
        let fetched = match self.kind {
            CatalogKind::Alpha => fetch_alpha_tokens(&self.fetcher, &self.base_url).await,
            CatalogKind::Registry => fetch_registry_tokens(&self.fetcher, &self.base_url).await,
        };

        let tokens = match fetched {
            Ok(tokens) => tokens,
            Err(e) => {
                error!("{}: catalog refresh failed: {}", self.tag(), e);
                return Vec::new();
            }
        };

        if tokens.is_empty() {
            warn!("{}: upstream returned no tokens", self.tag());
            return tokens;
        }

        self.persist(&tokens);
        info!("{}: catalog updated, {} tokens", self.tag(), tokens.len());
        tokens
    }

    // Write failures are logged and swallowed, the fetched list still serves
    // the current session. The timestamp is only written after the tokens
    // land, a half-written pair would otherwise read as fresh-but-empty.
    fn persist(&self, tokens: &[Token]) {
        let serialized = match serde_json::to_string(tokens) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("{}: catalog not serializable: {}", self.tag(), e);
                return;
            }
        };

        if let Err(e) = self.store.set(self.kind.tokens_key(), &serialized) {
            warn!("{}: failed to store catalog: {}", self.tag(), e);
            return;
        }

        let now = self.clock.now_ms().to_string();
        if let Err(e) = self.store.set(self.kind.timestamp_key(), &now) {
            warn!("{}: failed to store timestamp: {}", self.tag(), e);
        }
    }
}
