//! Secciones plegables de la tabla
//!
//! Este módulo es solo estado de interfaz; no lee ni escribe datos de vehículos.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    /// Coste de mantener el coche en circulación
    RoadCost,
    NoFinance,
    Convenience,
    LivingCost,
    WithFinance,
    FinanceCost,
    FinanceConvenience,
    FinanceLivingCost,
    CarbonEmissions,
    CarbScore,
}

impl SectionKey {
    pub const ALL: [SectionKey; 10] = [
        SectionKey::RoadCost,
        SectionKey::NoFinance,
        SectionKey::Convenience,
        SectionKey::LivingCost,
        SectionKey::WithFinance,
        SectionKey::FinanceCost,
        SectionKey::FinanceConvenience,
        SectionKey::FinanceLivingCost,
        SectionKey::CarbonEmissions,
        SectionKey::CarbScore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::RoadCost => "roadCost",
            SectionKey::NoFinance => "noFinance",
            SectionKey::Convenience => "convenience",
            SectionKey::LivingCost => "livingCost",
            SectionKey::WithFinance => "withFinance",
            SectionKey::FinanceCost => "financeCost",
            SectionKey::FinanceConvenience => "financeConvenience",
            SectionKey::FinanceLivingCost => "financeLivingCost",
            SectionKey::CarbonEmissions => "carbonEmissions",
            SectionKey::CarbScore => "carbScore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a table section")]
pub struct UnknownSectionError(pub String);

impl FromStr for SectionKey {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}

/// Indicador expandida/plegada por sección. Todo empieza plegado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedSections {
    pub road_cost: bool,
    pub no_finance: bool,
    pub convenience: bool,
    pub living_cost: bool,
    pub with_finance: bool,
    pub finance_cost: bool,
    pub finance_convenience: bool,
    pub finance_living_cost: bool,
    pub carbon_emissions: bool,
    pub carb_score: bool,
}

impl ExpandedSections {
    fn slot(&mut self, key: SectionKey) -> &mut bool {
        match key {
            SectionKey::RoadCost => &mut self.road_cost,
            SectionKey::NoFinance => &mut self.no_finance,
            SectionKey::Convenience => &mut self.convenience,
            SectionKey::LivingCost => &mut self.living_cost,
            SectionKey::WithFinance => &mut self.with_finance,
            SectionKey::FinanceCost => &mut self.finance_cost,
            SectionKey::FinanceConvenience => &mut self.finance_convenience,
            SectionKey::FinanceLivingCost => &mut self.finance_living_cost,
            SectionKey::CarbonEmissions => &mut self.carbon_emissions,
            SectionKey::CarbScore => &mut self.carb_score,
        }
    }

    /// Verificar si una sección está expandida
    pub fn is_expanded(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::RoadCost => self.road_cost,
            SectionKey::NoFinance => self.no_finance,
            SectionKey::Convenience => self.convenience,
            SectionKey::LivingCost => self.living_cost,
            SectionKey::WithFinance => self.with_finance,
            SectionKey::FinanceCost => self.finance_cost,
            SectionKey::FinanceConvenience => self.finance_convenience,
            SectionKey::FinanceLivingCost => self.finance_living_cost,
            SectionKey::CarbonEmissions => self.carbon_emissions,
            SectionKey::CarbScore => self.carb_score,
        }
    }

    /// Fija el estado de una sección
    pub fn set(&mut self, key: SectionKey, expanded: bool) {
        *self.slot(key) = expanded;
    }

    /// Invierte una sección y devuelve su nuevo estado
    pub fn toggle(&mut self, key: SectionKey) -> bool {
        let slot = self.slot(key);
        *slot = !*slot;
        *slot
    }
}
