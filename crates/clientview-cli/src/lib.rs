//! Library side of the `clientview` CLI.

pub mod logging;
pub mod render;
pub mod report;
