//! Modelos de datos
//!
//! Registros de vehículo, secciones de la tabla y catálogo por defecto.

pub mod defaults;
pub mod sections;
pub mod vehicle;
