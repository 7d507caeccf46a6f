use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::sections::ExpandedSections;
use crate::models::vehicle::VehicleRecord;
use crate::services::comparison_model::{ComparisonModel, FieldUpdate};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Banda de color de la celda de puntuación CARB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            ScoreBand::Excellent
        } else if score >= 4.0 {
            ScoreBand::VeryGood
        } else if score >= 3.5 {
            ScoreBand::Good
        } else {
            ScoreBand::Fair
        }
    }
}

/// `0` se muestra como `--`, los negativos como `-$n`
pub fn format_currency(value: f64) -> String {
    if value == 0.0 {
        "--".to_string()
    } else if value > 0.0 {
        format!("${}", value)
    } else {
        format!("-${}", value.abs())
    }
}

pub fn column_title(index: usize) -> String {
    if index == 0 {
        "Current Vehicle".to_string()
    } else {
        format!("Option {}", index)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub cost_per_year: String,
    pub price_of_convenience: String,
    pub living_cost_savings: String,
    pub trade_in_value: String,
    pub score_band: ScoreBand,
}

impl From<&VehicleRecord> for VehicleSummary {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            cost_per_year: format_currency(vehicle.cost_per_year),
            price_of_convenience: format_currency(vehicle.price_of_convenience()),
            living_cost_savings: format_currency(vehicle.living_cost_savings),
            trade_in_value: format_currency(vehicle.trade_in_value),
            score_band: ScoreBand::from_score(vehicle.carb_score),
        }
    }
}

/// Una columna de la tabla. Las bloqueadas van enmascaradas y sin datos del vehículo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub index: usize,
    pub title: String,
    pub visible: bool,
    pub locked: bool,
    pub vehicle: Option<VehicleRecord>,
    pub summary: Option<VehicleSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub columns: Vec<ColumnView>,
    pub sections: ExpandedSections,
    pub locked_columns: usize,
}

impl ComparisonView {
    /// Construye la vista a partir de un modelo con los derivados al día
    pub fn from_model(model: &ComparisonModel) -> Self {
        let columns: Vec<ColumnView> = model
            .vehicles()
            .iter()
            .enumerate()
            .map(|(index, vehicle)| {
                let locked = model.locked()[index];
                ColumnView {
                    index,
                    title: column_title(index),
                    visible: model.visibility()[index],
                    locked,
                    vehicle: (!locked).then(|| vehicle.clone()),
                    summary: (!locked).then(|| VehicleSummary::from(vehicle)),
                }
            })
            .collect();

        Self {
            locked_columns: columns.iter().filter(|c| c.locked).count(),
            columns,
            sections: model.sections().clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetFieldRequest {
    /// Tope muy por encima de cualquier texto de celda; el texto ilegible
    /// más corto se descarta en el modelo sin error
    #[validate(length(max = 256))]
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFieldResponse {
    pub result: FieldUpdate,
    pub vehicle: VehicleRecord,
}

#[derive(Debug, Deserialize)]
pub struct SetVisibilityRequest {
    pub visible: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetLockRequest {
    pub locked: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetSectionRequest {
    pub expanded: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVehicleResponse {
    pub index: usize,
    pub id: String,
}
