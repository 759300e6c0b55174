pub mod depth_chart;
pub mod error;
pub mod espn;
pub mod handler;
pub mod model;
pub mod names;
pub mod slate;
pub mod validate;
