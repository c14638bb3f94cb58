use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{sync::Arc, time::Duration};
use tokio;

use swap_data_rs::{
    db::store::SledStore,
    models::{catalog::TokenCatalog, deadline::seed_deadlines},
    utils::clock::{Clock, SystemClock},
    workers::{
        deadline::{DeadlineTracker, DEADLINE_TICK_SECONDS},
        refresh::{run_catalog_refresh, REFRESH_CHECK_SECONDS},
    },
};

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let db_path = std::env::var("DB_PATH").expect("Incorrect DB_PATH env var");
    let store = Arc::new(SledStore::open(&db_path).expect("Cannot open token database."));

    let alpha = TokenCatalog::alpha(store.clone());
    let registry = TokenCatalog::registry(store.clone());

    let check_period = Duration::from_secs(REFRESH_CHECK_SECONDS);
    tokio::task::spawn(run_catalog_refresh(alpha, check_period));
    tokio::task::spawn(run_catalog_refresh(registry, check_period));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tracker = DeadlineTracker::spawn(
        seed_deadlines(clock.now_ms()),
        clock,
        Duration::from_secs(DEADLINE_TICK_SECONDS),
    );

    info!("swap data daemon started");

    tokio::signal::ctrl_c()
        .await
        .expect("Cannot listen for shutdown signal.");

    tracker.stop().await;
    info!("swap data daemon stopped");
}
