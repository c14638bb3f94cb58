pub mod catalog;
pub mod deadline;
pub mod quotes;
pub mod token;
