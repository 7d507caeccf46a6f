//! Modelo de registro de vehículo
//!
//! Este módulo define un `VehicleRecord` por columna. La forma JSON (camelCase) es
//! la misma que recibe y devuelve el backend de recálculo.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tipo de combustible que la fórmula de puntuación trata como sin emisiones de escape.
pub const ELECTRIC_FUEL_TYPE: &str = "Electric";

/// Una opción de coche en la tabla de comparación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,

    // Atributos descriptivos
    pub make: String,
    pub model: String,
    pub category: String,
    pub trim_grade: String,
    pub drive: String,
    pub energy_type: String,
    pub fuel_type: String,
    #[serde(rename = "range")]
    pub range_km: u32,
    pub make_year: u16,
    pub state: String,

    // Entradas editables
    pub kilometers: f64,
    pub drive_away_price: f64,
    pub scheduled_maintenance: f64,
    pub registration_fees: f64,
    pub insurance_costs: f64,
    pub tyres: f64,
    pub off_grid_energy_percent: f64,
    pub depreciation_percent: f64,
    pub dealer_cash_incentives: f64,
    pub drive_away_price_finance: f64,

    // Entradas de solo lectura del catálogo
    pub petrol_cost: f64,
    pub electricity_cost: f64,
    pub tyre_changes: u32,
    #[serde(default)]
    pub carbon_emissions_annual: f64,
    #[serde(default)]
    pub carbon_emissions_five_years: f64,

    // Derivados
    #[serde(default)]
    pub cost_per_year: f64,
    #[serde(default)]
    pub depreciation_dollars: f64,
    #[serde(default)]
    pub trade_in_value: f64,
    #[serde(default, rename = "totalCOO")]
    pub total_coo: f64,
    #[serde(default)]
    pub living_cost_savings: f64,
    #[serde(default)]
    pub five_year_savings: f64,
    #[serde(default)]
    pub annual_savings: f64,
    #[serde(default)]
    pub monthly_savings: f64,
    #[serde(default)]
    pub weekly_savings: f64,
    #[serde(default)]
    pub carb_score: f64,
}

impl VehicleRecord {
    pub fn is_electric(&self) -> bool {
        self.fuel_type == ELECTRIC_FUEL_TYPE
    }

    /// Precio final más cinco años de uso del coche
    pub fn price_of_convenience(&self) -> f64 {
        self.drive_away_price + self.total_coo
    }

    /// Valor actual de una entrada editable
    pub fn field(&self, field: EditableField) -> f64 {
        match field {
            EditableField::Kilometers => self.kilometers,
            EditableField::DriveAwayPrice => self.drive_away_price,
            EditableField::ScheduledMaintenance => self.scheduled_maintenance,
            EditableField::RegistrationFees => self.registration_fees,
            EditableField::InsuranceCosts => self.insurance_costs,
            EditableField::Tyres => self.tyres,
            EditableField::OffGridEnergyPercent => self.off_grid_energy_percent,
            EditableField::DepreciationPercent => self.depreciation_percent,
            EditableField::DealerCashIncentives => self.dealer_cash_incentives,
            EditableField::DriveAwayPriceFinance => self.drive_away_price_finance,
        }
    }

    /// Escribe una entrada editable sin tocar los derivados
    pub fn set(&mut self, field: EditableField, value: f64) {
        let slot = match field {
            EditableField::Kilometers => &mut self.kilometers,
            EditableField::DriveAwayPrice => &mut self.drive_away_price,
            EditableField::ScheduledMaintenance => &mut self.scheduled_maintenance,
            EditableField::RegistrationFees => &mut self.registration_fees,
            EditableField::InsuranceCosts => &mut self.insurance_costs,
            EditableField::Tyres => &mut self.tyres,
            EditableField::OffGridEnergyPercent => &mut self.off_grid_energy_percent,
            EditableField::DepreciationPercent => &mut self.depreciation_percent,
            EditableField::DealerCashIncentives => &mut self.dealer_cash_incentives,
            EditableField::DriveAwayPriceFinance => &mut self.drive_away_price_finance,
        };
        *slot = value;
    }
}

/// Cómo se interpreta el texto de un campo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Número entero, p. ej. un precio en dólares
    Numeric,
    /// Número decimal que puede llevar sufijo `%`
    Percent,
}

/// Las entradas que el usuario puede editar en la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditableField {
    Kilometers,
    DriveAwayPrice,
    ScheduledMaintenance,
    RegistrationFees,
    InsuranceCosts,
    Tyres,
    OffGridEnergyPercent,
    DepreciationPercent,
    DealerCashIncentives,
    DriveAwayPriceFinance,
}

impl EditableField {
    pub const ALL: [EditableField; 10] = [
        EditableField::Kilometers,
        EditableField::DriveAwayPrice,
        EditableField::ScheduledMaintenance,
        EditableField::RegistrationFees,
        EditableField::InsuranceCosts,
        EditableField::Tyres,
        EditableField::OffGridEnergyPercent,
        EditableField::DepreciationPercent,
        EditableField::DealerCashIncentives,
        EditableField::DriveAwayPriceFinance,
    ];

    /// Tipo de lectura de la entrada del campo
    pub fn kind(self) -> InputKind {
        match self {
            EditableField::OffGridEnergyPercent | EditableField::DepreciationPercent => {
                InputKind::Percent
            }
            _ => InputKind::Numeric,
        }
    }

    /// Nombre en el JSON y en las URLs
    pub fn as_str(self) -> &'static str {
        match self {
            EditableField::Kilometers => "kilometers",
            EditableField::DriveAwayPrice => "driveAwayPrice",
            EditableField::ScheduledMaintenance => "scheduledMaintenance",
            EditableField::RegistrationFees => "registrationFees",
            EditableField::InsuranceCosts => "insuranceCosts",
            EditableField::Tyres => "tyres",
            EditableField::OffGridEnergyPercent => "offGridEnergyPercent",
            EditableField::DepreciationPercent => "depreciationPercent",
            EditableField::DealerCashIncentives => "dealerCashIncentives",
            EditableField::DriveAwayPriceFinance => "driveAwayPriceFinance",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an editable field")]
pub struct UnknownFieldError(pub String);

impl FromStr for EditableField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditableField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}
