//! Estado compartido de la aplicación
//!
//! Este módulo define el estado que recibe cada handler de axum. El modelo
//! está detrás de un `RwLock`; los handlers lo mantienen solo durante una mutación.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::clients::recalculation_client::{
    HttpRecalculationClient, OfflineBackend, RecalculationBackend, RecalculationError,
};
use crate::config::environment::EnvironmentConfig;
use crate::services::comparison_model::ComparisonModel;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub model: Arc<RwLock<ComparisonModel>>,
    pub backend: Arc<dyn RecalculationBackend>,
}

impl AppState {
    /// Envuelve el modelo en su `RwLock` compartido
    pub fn new(
        config: EnvironmentConfig,
        model: ComparisonModel,
        backend: Arc<dyn RecalculationBackend>,
    ) -> Self {
        Self {
            config,
            model: Arc::new(RwLock::new(model)),
            backend,
        }
    }

    /// Catálogo por defecto más el backend indicado en `config`
    pub fn from_config(config: EnvironmentConfig) -> Result<Self, RecalculationError> {
        let backend: Arc<dyn RecalculationBackend> = match &config.recalculation_base_url {
            Some(url) => {
                info!("🔗 Recalculation backend: {}", url);
                Arc::new(HttpRecalculationClient::new(
                    url.clone(),
                    config.recalculation_timeout,
                )?)
            }
            None => {
                info!("📴 No recalculation backend configured, computing locally");
                Arc::new(OfflineBackend)
            }
        };
        Ok(Self::new(config, ComparisonModel::with_default_catalog(), backend))
    }
}
