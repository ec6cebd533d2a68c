pub mod bracket;
pub mod report;
pub mod server;
