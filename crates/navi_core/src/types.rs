//! Tipos de domínio da tela inicial: atalhos, destinos e nível de trânsito.

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Atalhos
// ──────────────────────────────────────────────

/// Atalho de destino rápido exibido na grade.
///
/// O `label` é único dentro de uma lista de atalhos e serve de chave
/// tanto para o registro de destinos quanto para o estado de hover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavAction {
    pub label: String,
    pub icon: String,
}

impl NavAction {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Os nove atalhos fixos da tela, na ordem de exibição.
pub fn default_nav_actions() -> Vec<NavAction> {
    [
        ("自宅", "🏠"),
        ("職場", "🏢"),
        ("コンビニ", "🏪"),
        ("ガソリン", "⛽"),
        ("駐車場", "🅿️"),
        ("履歴", "🕘"),
        ("お気に入り", "⭐"),
        ("高速回避", "🛣️"),
        ("設定", "⚙️"),
    ]
    .into_iter()
    .map(|(label, icon)| NavAction::new(label, icon))
    .collect()
}

// ──────────────────────────────────────────────
// Trânsito
// ──────────────────────────────────────────────

/// Nível de trânsito até o destino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrafficLevel {
    Smooth,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Rótulo fixo exibido no badge.
    pub fn label(self) -> &'static str {
        match self {
            TrafficLevel::Smooth => "順調",
            TrafficLevel::Moderate => "やや混雑",
            TrafficLevel::Heavy => "渋滞",
        }
    }
}

// ──────────────────────────────────────────────
// Destino
// ──────────────────────────────────────────────

/// Resumo do destino ativo mostrado no card principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationInfo {
    /// Nome do destino
    pub name: String,
    /// Tempo estimado de chegada (min)
    pub eta_minutes: u32,
    /// Distância restante (km)
    pub distance_km: f32,
    /// Velocidade média de referência (km/h), dentro de [MIN_SPEED, MAX_SPEED]
    pub base_speed: f32,
    /// Nível de trânsito
    pub traffic: TrafficLevel,
}

impl DestinationInfo {
    pub fn eta_label(&self) -> String {
        format!("約 {} 分", self.eta_minutes)
    }

    pub fn distance_label(&self) -> String {
        format!("{} km", self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_actions_have_unique_labels() {
        let actions = default_nav_actions();
        assert_eq!(actions.len(), 9);
        let mut labels: Vec<_> = actions.iter().map(|a| a.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 9);
        assert_eq!(actions[0].label, "自宅");
    }

    #[test]
    fn labels_render_without_trailing_decimals() {
        let d = DestinationInfo {
            name: "x".into(),
            eta_minutes: 25,
            distance_km: 13.0,
            base_speed: 45.0,
            traffic: TrafficLevel::Moderate,
        };
        assert_eq!(d.distance_label(), "13 km");
        assert_eq!(d.eta_label(), "約 25 分");
        assert_eq!(d.traffic.label(), "やや混雑");
    }
}
