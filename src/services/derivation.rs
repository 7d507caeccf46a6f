//! Campos derivados de coste y emisiones
//!
//! Este módulo contiene funciones puras de las entradas de un registro y, para
//! los ahorros, del registro base (posición 0 de la colección).
//!
//! Los campos se derivan en una sola pasada en este orden:
//! coste anual -> depreciación -> valor de reventa -> coste total a 5 años ->
//! ahorros -> puntuación. El coste total a 5 años usa el coste anual
//! calculado en la misma pasada, así que basta con aplicarlo una vez.

use serde::{Deserialize, Serialize};

use crate::models::vehicle::VehicleRecord;

pub const OWNERSHIP_YEARS: f64 = 5.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;

pub const MAX_CARB_SCORE: f64 = 5.0;
pub const MIN_CARB_SCORE: f64 = 0.0;

const ELECTRIC_EMISSION_FACTOR: f64 = 0.1;
const COMBUSTION_EMISSION_FACTOR: f64 = 1.0;
const LONG_RANGE_THRESHOLD_KM: u32 = 500;
const LONG_RANGE_EFFICIENCY_FACTOR: f64 = 1.2;

/// Ahorros de un registro frente al base, en varios horizontes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBreakdown {
    pub living_cost_savings: f64,
    pub five_year_savings: f64,
    pub annual_savings: f64,
    pub monthly_savings: f64,
    pub weekly_savings: f64,
}

impl SavingsBreakdown {
    /// Reparte el ahorro a 5 años en anual, mensual y semanal
    pub fn from_five_year(total: f64) -> Self {
        let annual = total / OWNERSHIP_YEARS;
        Self {
            living_cost_savings: total,
            five_year_savings: total,
            annual_savings: annual,
            monthly_savings: annual / MONTHS_PER_YEAR,
            weekly_savings: annual / WEEKS_PER_YEAR,
        }
    }

    /// Compara las cifras ya derivadas de `record` con `baseline`
    pub fn between(baseline: &VehicleRecord, record: &VehicleRecord) -> Self {
        if baseline.id == record.id {
            return Self::default();
        }
        Self::from_five_year(living_cost_savings(
            (baseline.total_coo, baseline.drive_away_price, baseline.depreciation_dollars),
            (record.total_coo, record.drive_away_price, record.depreciation_dollars),
        ))
    }

    fn apply_to(&self, record: &mut VehicleRecord) {
        record.living_cost_savings = self.living_cost_savings;
        record.five_year_savings = self.five_year_savings;
        record.annual_savings = self.annual_savings;
        record.monthly_savings = self.monthly_savings;
        record.weekly_savings = self.weekly_savings;
    }
}

/// Diferencias de `(coste total, precio final, depreciación)`,
/// base menos opción. Positivo significa que la opción es más barata.
pub fn living_cost_savings(baseline: (f64, f64, f64), option: (f64, f64, f64)) -> f64 {
    let (base_tco, base_price, base_depreciation) = baseline;
    let (tco, price, depreciation) = option;
    (base_tco - tco) + (base_price - price) + (base_depreciation - depreciation)
}

/// Coste anual de uso: mantenimiento, combustible, electricidad, matrícula y seguro
pub fn running_cost_per_year(record: &VehicleRecord) -> f64 {
    record.scheduled_maintenance
        + record.petrol_cost
        + record.electricity_cost
        + record.registration_fees
        + record.insurance_costs
}

/// Redondea a un decimal
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Puntuación compuesta de emisiones 0-5, redondeada a un decimal y acotada.
///
/// Porcentajes off-grid fuera de 0..=100 llevarían la puntuación
/// fuera de la escala.
pub fn carb_score(is_electric: bool, off_grid_energy_percent: f64, range_km: u32) -> f64 {
    let emission_factor = if is_electric {
        ELECTRIC_EMISSION_FACTOR
    } else {
        COMBUSTION_EMISSION_FACTOR
    };
    let off_grid_factor = 1.0 - off_grid_energy_percent / 100.0;
    let efficiency_factor = if range_km > LONG_RANGE_THRESHOLD_KM {
        LONG_RANGE_EFFICIENCY_FACTOR
    } else {
        1.0
    };

    let raw = MAX_CARB_SCORE - emission_factor * off_grid_factor * efficiency_factor;
    round_to_tenth(raw).clamp(MIN_CARB_SCORE, MAX_CARB_SCORE)
}

/// Devuelve una copia de `record` con todos los campos derivados recalculados
pub fn recompute_derived(record: &VehicleRecord, baseline: &VehicleRecord) -> VehicleRecord {
    let mut next = record.clone();

    next.cost_per_year = running_cost_per_year(record);
    next.depreciation_dollars = record.drive_away_price * (record.depreciation_percent / 100.0);
    next.trade_in_value = record.drive_away_price - next.depreciation_dollars;
    next.total_coo = next.cost_per_year * OWNERSHIP_YEARS + record.tyres;

    SavingsBreakdown::between(baseline, &next).apply_to(&mut next);

    next.carb_score = carb_score(
        record.is_electric(),
        record.off_grid_energy_percent,
        record.range_km,
    );
    next
}

/// Recalcula el base contra sí mismo y después cada registro contra
/// el base actualizado. Un slice vacío da un vector vacío.
pub fn recompute_collection(records: &[VehicleRecord]) -> Vec<VehicleRecord> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let baseline = recompute_derived(first, first);

    let mut out = Vec::with_capacity(records.len());
    out.push(baseline.clone());
    out.extend(records[1..].iter().map(|r| recompute_derived(r, &baseline)));
    out
}
