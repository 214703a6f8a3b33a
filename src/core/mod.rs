pub mod bounds;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod geo;
pub mod labels;
pub mod offset;
pub mod panel;
pub mod session;
