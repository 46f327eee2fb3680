//! Registro estático de destinos, indexado pelo rótulo do atalho.

use crate::types::{DestinationInfo, NavAction, TrafficLevel};

/// Rótulo do atalho que leva ao destino "casa".
pub const HOME_LABEL: &str = "自宅";

/// Mapeia atalhos para destinos. A busca é total: rótulos sem entrada
/// resolvem para o destino principal (`fallback`).
#[derive(Debug, Clone)]
pub struct DestinationRegistry {
    entries: Vec<(String, DestinationInfo)>,
    fallback: DestinationInfo,
}

impl DestinationRegistry {
    pub fn new(fallback: DestinationInfo) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Registra (ou substitui) o destino associado a um rótulo.
    pub fn with_entry(mut self, label: impl Into<String>, destination: DestinationInfo) -> Self {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = destination,
            None => self.entries.push((label, destination)),
        }
        self
    }

    /// Registro padrão: só `自宅` tem entrada própria, o resto vai para o
    /// destino principal.
    pub fn standard() -> Self {
        Self::new(primary_preset()).with_entry(HOME_LABEL, home_preset())
    }

    /// Destino para um atalho. Nunca falha.
    pub fn select_by_action(&self, action: &NavAction) -> &DestinationInfo {
        self.lookup(&action.label)
    }

    pub fn lookup(&self, label: &str) -> &DestinationInfo {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, d)| d)
            .unwrap_or(&self.fallback)
    }

    /// Destino exibido ao abrir a tela.
    pub fn primary(&self) -> &DestinationInfo {
        &self.fallback
    }

    pub fn home(&self) -> &DestinationInfo {
        self.lookup(HOME_LABEL)
    }

    pub fn destinations(&self) -> impl Iterator<Item = &DestinationInfo> {
        self.entries
            .iter()
            .map(|(_, d)| d)
            .chain(std::iter::once(&self.fallback))
    }
}

impl Default for DestinationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn primary_preset() -> DestinationInfo {
    DestinationInfo {
        name: "トヨタ記念館".into(),
        eta_minutes: 25,
        distance_km: 13.0,
        base_speed: 45.0,
        traffic: TrafficLevel::Moderate,
    }
}

fn home_preset() -> DestinationInfo {
    DestinationInfo {
        name: "トヨタ車体本社".into(),
        eta_minutes: 30,
        distance_km: 21.0,
        base_speed: 55.0,
        traffic: TrafficLevel::Smooth,
    }
}
