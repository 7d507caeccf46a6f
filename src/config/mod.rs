//! Configuración del servicio

pub mod environment;

pub use environment::*;
