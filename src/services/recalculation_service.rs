//! Recálculo de la comparación
//!
//! Este módulo refresca los derivados pendientes, envía las columnas visibles
//! y desbloqueadas al backend de recálculo y fusiona la respuesta por id. Si
//! el backend no responde o contesta con error, se recalcula toda la colección
//! en local y la llamada sigue teniendo éxito. Un intento, sin reintentos.
//!
//! El lock del modelo no se mantiene durante la petición. Dos llamadas
//! solapadas terminan las dos y gana la última.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::clients::recalculation_client::RecalculationBackend;
use crate::services::comparison_model::ComparisonModel;

pub const REMOTE_SUCCESS_MESSAGE: &str = "Recalculation successful!";
pub const LOCAL_SUCCESS_MESSAGE: &str = "Recalculation completed locally (no backend connection)";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum RecalculationSource {
    /// Registros sustituidos por la respuesta del backend
    #[serde(rename_all = "camelCase")]
    Remote { sent: usize, updated: usize },
    /// Falló el backend; todo se recalculó en el proceso
    #[serde(rename_all = "camelCase")]
    Local { recomputed: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationOutcome {
    #[serde(flatten)]
    pub source: RecalculationSource,
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

impl RecalculationOutcome {
    /// Verificar si la respuesta vino del backend
    pub fn is_remote(&self) -> bool {
        matches!(self.source, RecalculationSource::Remote { .. })
    }
}

/// Recalcula la comparación vía backend, con alternativa local si falla.
///
/// Los derivados pendientes se refrescan antes de construir el envío, así
/// que nunca se envía un registro desactualizado.
pub async fn submit_for_recalculation(
    model: &RwLock<ComparisonModel>,
    backend: &dyn RecalculationBackend,
) -> RecalculationOutcome {
    let payload = {
        let mut model = model.write().await;
        model.refresh();
        model.recalculation_payload()
    };
    let sent = payload.len();
    info!("🔄 Recalculating {} vehicles via {}", sent, backend.describe());

    match backend.recalculate(payload).await {
        Ok(updated) => {
            let updated = model.write().await.apply_remote_updates(updated);
            info!("✅ Recalculation applied to {} of {} vehicles", updated, sent);
            RecalculationOutcome {
                source: RecalculationSource::Remote { sent, updated },
                message: REMOTE_SUCCESS_MESSAGE.to_string(),
                completed_at: Utc::now(),
            }
        }
        Err(e) => {
            error!("❌ Error recalculating data: {}", e);
            let recomputed = model.write().await.recompute_all();
            warn!("⚠️ Recomputed {} vehicles locally", recomputed);
            RecalculationOutcome {
                source: RecalculationSource::Local {
                    recomputed,
                    reason: e.to_string(),
                },
                message: LOCAL_SUCCESS_MESSAGE.to_string(),
                completed_at: Utc::now(),
            }
        }
    }
}
