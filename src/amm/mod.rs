pub mod types;         // reservas, escalas e resultados
pub mod guardrails;    // validação de entradas + helpers numéricos
pub mod rescale;       // núcleo: reescala de k
pub mod swap;          // cotações x·y=k
pub mod pricing;       // quote + slippage
pub mod simulation;    // fluxo de duas trades
pub mod report;        // apresentação (1e18)

// módulos unificados de erro
pub mod error_catalog;
pub mod error;
pub mod error_map;
