use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::clients::recalculation_client::RecalculationBackend;
use crate::dto::comparison_dto::{
    AddVehicleResponse, ComparisonView, SetFieldRequest, SetFieldResponse,
};
use crate::models::sections::SectionKey;
use crate::models::vehicle::EditableField;
use crate::services::comparison_model::{ComparisonModel, FieldUpdate};
use crate::services::recalculation_service::{submit_for_recalculation, RecalculationOutcome};
use crate::utils::errors::{column_not_found, AppError, AppResult};

pub struct ComparisonController {
    model: Arc<RwLock<ComparisonModel>>,
    backend: Arc<dyn RecalculationBackend>,
}

impl ComparisonController {
    pub fn new(model: Arc<RwLock<ComparisonModel>>, backend: Arc<dyn RecalculationBackend>) -> Self {
        Self { model, backend }
    }

    /// Refresca los campos derivados pendientes y devuelve la tabla
    pub async fn view(&self) -> ComparisonView {
        let mut model = self.model.write().await;
        model.refresh();
        ComparisonView::from_model(&model)
    }

    pub async fn set_field(
        &self,
        index: usize,
        field: &str,
        request: SetFieldRequest,
    ) -> AppResult<SetFieldResponse> {
        request.validate()?;
        let field: EditableField = field.parse()?;

        let mut model = self.model.write().await;
        let result = model.set_field(index, field, &request.value);
        if result == FieldUpdate::OutOfRange {
            return Err(column_not_found(index));
        }
        model.refresh();

        let vehicle = model
            .vehicle(index)
            .cloned()
            .ok_or_else(|| column_not_found(index))?;
        Ok(SetFieldResponse { result, vehicle })
    }

    pub async fn add_vehicle(&self) -> AppResult<AddVehicleResponse> {
        let mut model = self.model.write().await;
        let index = model
            .add_vehicle()
            .ok_or_else(|| AppError::Internal("comparison has no default vehicles".to_string()))?;
        model.refresh();

        let id = model
            .vehicle(index)
            .map(|v| v.id.clone())
            .ok_or_else(|| column_not_found(index))?;
        Ok(AddVehicleResponse { index, id })
    }

    pub async fn reset(&self) -> ComparisonView {
        let mut model = self.model.write().await;
        model.reset_all();
        ComparisonView::from_model(&model)
    }

    pub async fn set_visible(&self, index: usize, visible: bool) -> Vec<bool> {
        let mut model = self.model.write().await;
        model.set_column_visible(index, visible);
        model.visibility().to_vec()
    }

    pub async fn toggle_visible(&self, index: usize) -> Vec<bool> {
        let mut model = self.model.write().await;
        model.toggle_column_visible(index);
        model.visibility().to_vec()
    }

    pub async fn set_locked(&self, index: usize, locked: bool) -> Vec<bool> {
        let mut model = self.model.write().await;
        model.set_column_locked(index, locked);
        model.locked().to_vec()
    }

    pub async fn set_section(&self, key: &str, expanded: bool) -> AppResult<bool> {
        let key: SectionKey = key.parse()?;
        let mut model = self.model.write().await;
        model.set_section_expanded(key, expanded);
        Ok(model.sections().is_expanded(key))
    }

    pub async fn toggle_section(&self, key: &str) -> AppResult<bool> {
        let key: SectionKey = key.parse()?;
        Ok(self.model.write().await.toggle_section(key))
    }

    pub async fn recalculate(&self) -> RecalculationOutcome {
        submit_for_recalculation(&self.model, self.backend.as_ref()).await
    }
}
