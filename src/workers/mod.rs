pub mod deadline;
pub mod refresh;
