//! Reescala do invariante de produto constante (x·y=k) e cotações ajustadas.

pub mod amm;
pub mod config;
pub mod telemetry;

pub use amm::types::U256;
