//! CLI library components for the component descriptor deriver.

pub mod logging;
