pub mod api;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod error;
pub mod model;
pub mod pitch;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).
