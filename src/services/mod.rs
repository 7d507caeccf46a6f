//! Módulo de servicios
//!
//! Este módulo contiene la lógica de la comparación: lectura de entradas,
//! cálculo de derivados, el estado del modelo y el recálculo.

pub mod comparison_model;
pub mod derivation;
pub mod input_parsing;
pub mod recalculation_service;

pub use comparison_model::*;
pub use derivation::*;
