pub mod logging;
pub mod visitor;
