pub mod alpha;
pub mod catalog;
pub mod fetch;
pub mod quotes;
pub mod registry;
pub mod tokens;
