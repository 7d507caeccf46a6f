//! Catálogo de comparación por defecto
//!
//! Este módulo siembra seis coches en cada modelo nuevo: el coche actual en la
//! posición 0 y cinco opciones. Los derivados se rellenan con la misma
//! derivación que usa el modelo, así que son coherentes.

use crate::models::vehicle::VehicleRecord;
use crate::services::derivation::recompute_collection;

struct Seed {
    id: &'static str,
    make: &'static str,
    model: &'static str,
    category: &'static str,
    trim_grade: &'static str,
    drive: &'static str,
    energy_type: &'static str,
    fuel_type: &'static str,
    range_km: u32,
    make_year: u16,
    drive_away_price: f64,
    scheduled_maintenance: f64,
    petrol_cost: f64,
    electricity_cost: f64,
    insurance_costs: f64,
    tyres: f64,
    tyre_changes: u32,
    off_grid_energy_percent: f64,
    depreciation_percent: f64,
    carbon_emissions_annual: f64,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "car-1",
        make: "Toyota",
        model: "Corolla",
        category: "Hatch",
        trim_grade: "Ascent Sport",
        drive: "FWD",
        energy_type: "ICE",
        fuel_type: "Petrol",
        range_km: 650,
        make_year: 2018,
        drive_away_price: 30000.0,
        scheduled_maintenance: 450.0,
        petrol_cost: 2100.0,
        electricity_cost: 0.0,
        insurance_costs: 1100.0,
        tyres: 800.0,
        tyre_changes: 1,
        off_grid_energy_percent: 0.0,
        depreciation_percent: 30.0,
        carbon_emissions_annual: 2.3,
    },
    Seed {
        id: "car-2",
        make: "Tesla",
        model: "Model 3",
        category: "Sedan",
        trim_grade: "Rear-Wheel Drive",
        drive: "RWD",
        energy_type: "BEV",
        fuel_type: "Electric",
        range_km: 513,
        make_year: 2024,
        drive_away_price: 58000.0,
        scheduled_maintenance: 250.0,
        petrol_cost: 0.0,
        electricity_cost: 650.0,
        insurance_costs: 1500.0,
        tyres: 1200.0,
        tyre_changes: 1,
        off_grid_energy_percent: 40.0,
        depreciation_percent: 35.0,
        carbon_emissions_annual: 0.6,
    },
    Seed {
        id: "car-3",
        make: "BYD",
        model: "Atto 3",
        category: "SUV",
        trim_grade: "Extended Range",
        drive: "FWD",
        energy_type: "BEV",
        fuel_type: "Electric",
        range_km: 420,
        make_year: 2024,
        drive_away_price: 48000.0,
        scheduled_maintenance: 300.0,
        petrol_cost: 0.0,
        electricity_cost: 700.0,
        insurance_costs: 1300.0,
        tyres: 900.0,
        tyre_changes: 1,
        off_grid_energy_percent: 20.0,
        depreciation_percent: 40.0,
        carbon_emissions_annual: 0.7,
    },
    Seed {
        id: "car-4",
        make: "Toyota",
        model: "RAV4",
        category: "SUV",
        trim_grade: "GX Hybrid",
        drive: "AWD",
        energy_type: "HEV",
        fuel_type: "Hybrid",
        range_km: 1000,
        make_year: 2024,
        drive_away_price: 45000.0,
        scheduled_maintenance: 420.0,
        petrol_cost: 1300.0,
        electricity_cost: 0.0,
        insurance_costs: 1250.0,
        tyres: 1000.0,
        tyre_changes: 1,
        off_grid_energy_percent: 0.0,
        depreciation_percent: 25.0,
        carbon_emissions_annual: 1.4,
    },
    Seed {
        id: "car-5",
        make: "Hyundai",
        model: "Ioniq 5",
        category: "SUV",
        trim_grade: "Dynamiq",
        drive: "RWD",
        energy_type: "BEV",
        fuel_type: "Electric",
        range_km: 507,
        make_year: 2024,
        drive_away_price: 65000.0,
        scheduled_maintenance: 280.0,
        petrol_cost: 0.0,
        electricity_cost: 680.0,
        insurance_costs: 1600.0,
        tyres: 1300.0,
        tyre_changes: 1,
        off_grid_energy_percent: 60.0,
        depreciation_percent: 38.0,
        carbon_emissions_annual: 0.5,
    },
    Seed {
        id: "car-6",
        make: "MG",
        model: "MG4",
        category: "Hatch",
        trim_grade: "Excite 51",
        drive: "RWD",
        energy_type: "BEV",
        fuel_type: "Electric",
        range_km: 350,
        make_year: 2024,
        drive_away_price: 40000.0,
        scheduled_maintenance: 260.0,
        petrol_cost: 0.0,
        electricity_cost: 620.0,
        insurance_costs: 1150.0,
        tyres: 850.0,
        tyre_changes: 1,
        off_grid_energy_percent: 0.0,
        depreciation_percent: 42.0,
        carbon_emissions_annual: 0.6,
    },
];

const DEFAULT_KILOMETERS: f64 = 15000.0;
const DEFAULT_STATE: &str = "NSW";
const DEFAULT_REGISTRATION_FEES: f64 = 900.0;

impl Seed {
    fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            id: self.id.to_string(),
            make: self.make.to_string(),
            model: self.model.to_string(),
            category: self.category.to_string(),
            trim_grade: self.trim_grade.to_string(),
            drive: self.drive.to_string(),
            energy_type: self.energy_type.to_string(),
            fuel_type: self.fuel_type.to_string(),
            range_km: self.range_km,
            make_year: self.make_year,
            state: DEFAULT_STATE.to_string(),
            kilometers: DEFAULT_KILOMETERS,
            drive_away_price: self.drive_away_price,
            scheduled_maintenance: self.scheduled_maintenance,
            registration_fees: DEFAULT_REGISTRATION_FEES,
            insurance_costs: self.insurance_costs,
            tyres: self.tyres,
            off_grid_energy_percent: self.off_grid_energy_percent,
            depreciation_percent: self.depreciation_percent,
            dealer_cash_incentives: 0.0,
            drive_away_price_finance: self.drive_away_price,
            petrol_cost: self.petrol_cost,
            electricity_cost: self.electricity_cost,
            tyre_changes: self.tyre_changes,
            carbon_emissions_annual: self.carbon_emissions_annual,
            carbon_emissions_five_years: self.carbon_emissions_annual * 5.0,
            cost_per_year: 0.0,
            depreciation_dollars: 0.0,
            trade_in_value: 0.0,
            total_coo: 0.0,
            living_cost_savings: 0.0,
            five_year_savings: 0.0,
            annual_savings: 0.0,
            monthly_savings: 0.0,
            weekly_savings: 0.0,
            carb_score: 0.0,
        }
    }
}

/// Copia nueva del catálogo por defecto con los derivados calculados
pub fn default_catalog() -> Vec<VehicleRecord> {
    let seeds: Vec<VehicleRecord> = SEEDS.iter().map(Seed::to_record).collect();
    recompute_collection(&seeds)
}
