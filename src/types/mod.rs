//! Data types shared by the merger, the table model and the render adapters.

mod config;
mod plan;
mod row;

pub use config::*;
pub use plan::*;
pub use row::*;
