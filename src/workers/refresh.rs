use log::info;
use std::time::Duration;
use tokio::time::sleep;

use crate::models::catalog::TokenCatalog;

// How often the worker re-checks staleness. Checks against a fresh catalog
// answer from the store, so this can be much shorter than the TTL.
pub const REFRESH_CHECK_SECONDS: u64 = 3600;

pub async fn run_catalog_refresh(catalog: TokenCatalog, period: Duration) {
    info!("{}: refresh worker started", catalog.tag());

    loop {
        catalog.update(false).await;
        sleep(period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::{KvStore, MemoryStore};
    use crate::models::catalog::CatalogKind;
    use crate::utils::clock::{Clock, SystemClock};
    use crate::utils::fetcher::Fetcher;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::time;

    #[tokio::test]
    async fn first_pass_populates_the_store() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/all")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    { "address": "mint-1", "symbol": "TKN", "name": "Token", "decimals": 9, "logoURI": "u" }
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let store = Arc::new(MemoryStore::default());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let fetcher = Fetcher::with_policy(1, Duration::from_millis(1), Duration::from_secs(5));
        let catalog = TokenCatalog::with_parts(
            CatalogKind::Registry,
            store.clone(),
            clock,
            fetcher,
            &server.url(),
        );

        let worker = tokio::spawn(run_catalog_refresh(catalog, Duration::from_secs(3600)));

        let mut stored = None;
        for _ in 0..100 {
            stored = store.get(CatalogKind::Registry.tokens_key());
            if stored.is_some() {
                break;
            }
            time::sleep(Duration::from_millis(10)).await;
        }
        worker.abort();

        assert!(stored.is_some());
        assert!(store.get(CatalogKind::Registry.timestamp_key()).is_some());
    }
}
