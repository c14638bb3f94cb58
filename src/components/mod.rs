pub mod alpha;
pub mod normalize;
pub mod quotes;
pub mod registry;
