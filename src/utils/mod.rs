pub mod clock;
pub mod fetcher;
