//! Cliente HTTP para el backend de recálculo
//!
//! Este módulo envía un array JSON de registros a `POST /recalculate` y el
//! backend contesta con las versiones definitivas de esos registros.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::vehicle::VehicleRecord;

#[derive(Debug, Error)]
pub enum RecalculationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Recalculation backend unavailable: {0}")]
    Unavailable(String),
}

/// Cualquier cosa capaz de recalcular un lote de registros
#[async_trait]
pub trait RecalculationBackend: Send + Sync {
    async fn recalculate(
        &self,
        vehicles: Vec<VehicleRecord>,
    ) -> Result<Vec<VehicleRecord>, RecalculationError>;

    /// Etiqueta corta para los logs
    fn describe(&self) -> String;
}

/// Cliente para un endpoint de recálculo remoto
#[derive(Debug, Clone)]
pub struct HttpRecalculationClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
}

impl HttpRecalculationClient {
    /// Crea el cliente con su propio `reqwest::Client` y timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RecalculationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reutiliza un `reqwest::Client` ya configurado
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// URL completa de `POST /recalculate`
    pub fn endpoint(&self) -> String {
        format!("{}/recalculate", self.base_url)
    }
}

#[async_trait]
impl RecalculationBackend for HttpRecalculationClient {
    async fn recalculate(
        &self,
        vehicles: Vec<VehicleRecord>,
    ) -> Result<Vec<VehicleRecord>, RecalculationError> {
        let url = self.endpoint();
        debug!("📤 POST {} with {} vehicles", url, vehicles.len());

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&vehicles)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // El cuerpo del error es opcional
            let message = response
                .json::<BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(RecalculationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let updated: Vec<VehicleRecord> = response.json().await?;
        info!("📥 Backend returned {} recalculated vehicles", updated.len());
        Ok(updated)
    }

    fn describe(&self) -> String {
        self.endpoint()
    }
}

/// Sustituto cuando no hay URL de backend. Cada llamada falla, lo que
/// lleva el recálculo por la vía local.
#[derive(Debug, Clone, Default)]
pub struct OfflineBackend;

#[async_trait]
impl RecalculationBackend for OfflineBackend {
    async fn recalculate(
        &self,
        _vehicles: Vec<VehicleRecord>,
    ) -> Result<Vec<VehicleRecord>, RecalculationError> {
        Err(RecalculationError::Unavailable(
            "no recalculation backend configured".to_string(),
        ))
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}
