//! Modelo de comparación
//!
//! Este módulo define el único contenedor de estado de la tabla: los
//! registros ordenados más los indicadores por columna (visible, bloqueada,
//! pendiente) y el estado de las secciones. Toda mutación pasa por métodos de
//! `ComparisonModel`; los derivados se refrescan de forma explícita, nunca como
//! efecto secundario de mostrar la tabla.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::defaults::default_catalog;
use crate::models::sections::{ExpandedSections, SectionKey};
use crate::models::vehicle::{EditableField, VehicleRecord};
use crate::services::derivation::{recompute_collection, recompute_derived};
use crate::services::input_parsing::parse_input;

/// Columnas finales bloqueadas tras el acceso premium en un modelo nuevo
pub const LOCKED_TAIL_COLUMNS: usize = 3;

/// Resultado de `ComparisonModel::set_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldUpdate {
    Applied,
    /// Texto ilegible; se conserva el valor anterior
    Rejected,
    OutOfRange,
}

#[derive(Debug, Clone)]
pub struct ComparisonModel {
    defaults: Vec<VehicleRecord>,
    vehicles: Vec<VehicleRecord>,
    visibility: Vec<bool>,
    locked: Vec<bool>,
    stale: Vec<bool>,
    sections: ExpandedSections,
}

fn initial_locks(len: usize) -> Vec<bool> {
    let first_locked = len.saturating_sub(LOCKED_TAIL_COLUMNS);
    (0..len).map(|i| i >= first_locked).collect()
}

impl ComparisonModel {
    /// Crea el modelo con su propia copia de `defaults`
    pub fn new(defaults: Vec<VehicleRecord>) -> Self {
        let len = defaults.len();
        Self {
            vehicles: defaults.clone(),
            defaults,
            visibility: vec![true; len],
            locked: initial_locks(len),
            stale: vec![false; len],
            sections: ExpandedSections::default(),
        }
    }

    /// Modelo sembrado con el catálogo por defecto
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Registros tal cual; pueden tener derivados pendientes hasta `refresh`
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    /// Registro de una columna, `None` fuera de rango
    pub fn vehicle(&self, index: usize) -> Option<&VehicleRecord> {
        self.vehicles.get(index)
    }

    pub fn defaults(&self) -> &[VehicleRecord] {
        &self.defaults
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    pub fn locked(&self) -> &[bool] {
        &self.locked
    }

    pub fn sections(&self) -> &ExpandedSections {
        &self.sections
    }

    /// Verificar si los derivados de una columna están pendientes
    pub fn is_stale(&self, index: usize) -> bool {
        self.stale.get(index).copied().unwrap_or(false)
    }

    /// Verificar si queda algún registro pendiente
    pub fn has_stale(&self) -> bool {
        self.stale.iter().any(|s| *s)
    }

    /// Aplica el texto de una celda a una entrada de un registro.
    ///
    /// El texto ilegible no toca el campo; una escritura válida marca
    /// los derivados del registro como pendientes.
    pub fn set_field(&mut self, index: usize, field: EditableField, raw: &str) -> FieldUpdate {
        let Some(record) = self.vehicles.get_mut(index) else {
            debug!("set_field ignored: column {} out of range", index);
            return FieldUpdate::OutOfRange;
        };

        match parse_input(field.kind(), raw) {
            Some(value) => {
                record.set(field, value);
                self.stale[index] = true;
                debug!("✏️ {}[{}] = {}", field, index, value);
                FieldUpdate::Applied
            }
            None => {
                debug!("✏️ {}[{}] kept, unreadable input {:?}", field, index, raw);
                FieldUpdate::Rejected
            }
        }
    }

    fn next_vehicle_id(&self) -> String {
        let taken: HashSet<&str> = self.vehicles.iter().map(|v| v.id.as_str()).collect();
        let mut serial = self.vehicles.len() + 1;
        loop {
            let candidate = format!("car-{}", serial);
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            serial += 1;
        }
    }

    /// Añade una copia del primer registro por defecto con un id nuevo.
    ///
    /// Las columnas nuevas empiezan visibles y bloqueadas. Devuelve el índice, o `None`
    /// si el modelo se creó sin registros por defecto.
    pub fn add_vehicle(&mut self) -> Option<usize> {
        let template = self.defaults.first()?;
        let mut record = template.clone();
        record.id = self.next_vehicle_id();

        info!("➕ Added vehicle {} at column {}", record.id, self.vehicles.len());
        self.vehicles.push(record);
        self.visibility.push(true);
        self.locked.push(true);
        self.stale.push(true);
        Some(self.vehicles.len() - 1)
    }

    /// Vuelve a una copia limpia de los valores por defecto con los indicadores iniciales.
    /// Las secciones expandidas no cambian.
    pub fn reset_all(&mut self) {
        let len = self.defaults.len();
        self.vehicles = self.defaults.clone();
        self.visibility = vec![true; len];
        self.locked = initial_locks(len);
        self.stale = vec![false; len];
        info!("↺ Comparison reset to {} default vehicles", len);
    }

    /// Muestra u oculta una columna; fuera de rango no hace nada
    pub fn set_column_visible(&mut self, index: usize, visible: bool) {
        match self.visibility.get_mut(index) {
            Some(flag) => *flag = visible,
            None => debug!("set_column_visible ignored: column {} out of range", index),
        }
    }

    /// Devuelve la nueva visibilidad, `None` fuera de rango
    pub fn toggle_column_visible(&mut self, index: usize) -> Option<bool> {
        let flag = self.visibility.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Bloquea o desbloquea una columna; fuera de rango no hace nada
    pub fn set_column_locked(&mut self, index: usize, locked: bool) {
        match self.locked.get_mut(index) {
            Some(flag) => *flag = locked,
            None => debug!("set_column_locked ignored: column {} out of range", index),
        }
    }

    /// Expande o pliega una sección
    pub fn set_section_expanded(&mut self, key: SectionKey, expanded: bool) {
        self.sections.set(key, expanded);
    }

    /// Invierte una sección y devuelve su nuevo estado
    pub fn toggle_section(&mut self, key: SectionKey) -> bool {
        self.sections.toggle(key)
    }

    /// Recalcula los derivados de los registros pendientes.
    ///
    /// Si el base está pendiente se recalcula todo, porque
    /// todos los ahorros se miden contra él. Devuelve cuántos registros
    /// se recalcularon.
    pub fn refresh(&mut self) -> usize {
        if self.is_empty() || !self.has_stale() {
            return 0;
        }
        if self.stale[0] {
            return self.recompute_all();
        }

        let baseline = self.vehicles[0].clone();
        let mut count = 0;
        for (record, stale) in self.vehicles.iter_mut().zip(self.stale.iter_mut()) {
            if *stale {
                *record = recompute_derived(record, &baseline);
                *stale = false;
                count += 1;
            }
        }
        count
    }

    /// Recalcula todos los registros; devuelve el tamaño de la colección
    pub fn recompute_all(&mut self) -> usize {
        self.vehicles = recompute_collection(&self.vehicles);
        self.stale.iter_mut().for_each(|s| *s = false);
        self.vehicles.len()
    }

    /// Registros visibles y desbloqueados con los derivados recalculados contra
    /// el base actual, en orden de columna
    pub fn recalculation_payload(&self) -> Vec<VehicleRecord> {
        let Some(first) = self.vehicles.first() else {
            return Vec::new();
        };
        let baseline = recompute_derived(first, first);

        self.vehicles
            .iter()
            .enumerate()
            .filter(|(i, _)| self.visibility[*i] && !self.locked[*i])
            .map(|(_, record)| recompute_derived(record, &baseline))
            .collect()
    }

    /// Sustituye los registros cuyo id coincide con uno de `updates`. Los ids
    /// desconocidos se ignoran. Devuelve cuántos registros se sustituyeron.
    ///
    /// Si vuelve el base, los registros que el backend no devolvió se
    /// recalculan contra él.
    pub fn apply_remote_updates(&mut self, updates: Vec<VehicleRecord>) -> usize {
        let mut returned = vec![false; self.vehicles.len()];
        for update in updates {
            match self.vehicles.iter().position(|v| v.id == update.id) {
                Some(index) => {
                    self.vehicles[index] = update;
                    self.stale[index] = false;
                    returned[index] = true;
                }
                None => debug!("Recalculated vehicle {} no longer in comparison", update.id),
            }
        }

        if returned.first() == Some(&true) {
            let baseline = self.vehicles[0].clone();
            let mut rederived = 0;
            for (i, record) in self.vehicles.iter_mut().enumerate().skip(1) {
                if !returned[i] {
                    *record = recompute_derived(record, &baseline);
                    self.stale[i] = false;
                    rederived += 1;
                }
            }
            debug!("Baseline replaced remotely, {} other vehicles rederived", rederived);
        }

        returned.iter().filter(|r| **r).count()
    }
}

impl Default for ComparisonModel {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}
