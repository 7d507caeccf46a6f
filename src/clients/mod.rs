//! Clientes - clientes HTTP para APIs externas

pub mod recalculation_client;

pub use recalculation_client::{
    HttpRecalculationClient, OfflineBackend, RecalculationBackend, RecalculationError,
};
