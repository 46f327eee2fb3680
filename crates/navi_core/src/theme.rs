//! Paletas visuais da tela inicial.

use serde::{Deserialize, Serialize};

/// Cor em formato hex string (ex: "#0f172a") para serialização.
/// A conversão para `egui::Color32` é feita no app.
pub type ColorHex = String;

/// Definição completa de um tema de cores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Fundo
    pub bg: ColorHex,
    pub card: ColorHex,
    pub border: ColorHex,
    // Texto
    pub text: ColorHex,
    pub dim: ColorHex,
    pub title: ColorHex,
    // Grade de atalhos
    pub tile: ColorHex,
    pub tile_hover: ColorHex,
    pub accent: ColorHex,
    // Badge de trânsito
    pub smooth: ColorHex,
    pub moderate: ColorHex,
    pub heavy: ColorHex,
}

/// Converte uma string hex "#RRGGBB" para tupla (r, g, b).
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255); // fallback branco
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
    (r, g, b)
}

/// Tema noturno (padrão).
pub fn night_theme() -> Theme {
    Theme {
        name: "night".into(),
        bg: "#0f172a".into(),
        card: "#172033".into(),
        border: "#2a3448".into(),
        text: "#e2e8f0".into(),
        dim: "#94a3b8".into(),
        title: "#f8fafc".into(),
        tile: "#131c2e".into(),
        tile_hover: "#1e2a44".into(),
        accent: "#38bdf8".into(),
        smooth: "#4ade80".into(),
        moderate: "#f87171".into(),
        heavy: "#ef4444".into(),
    }
}

/// Tema diurno.
pub fn day_theme() -> Theme {
    Theme {
        name: "day".into(),
        bg: "#f1f5f9".into(),
        card: "#ffffff".into(),
        border: "#cbd5e1".into(),
        text: "#1e293b".into(),
        dim: "#64748b".into(),
        title: "#0f172a".into(),
        tile: "#e2e8f0".into(),
        tile_hover: "#cbd5e1".into(),
        accent: "#0284c7".into(),
        smooth: "#16a34a".into(),
        moderate: "#dc2626".into(),
        heavy: "#b91c1c".into(),
    }
}

/// Retorna tema pelo nome.
pub fn get_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "day" => day_theme(),
        _ => night_theme(),
    }
}

/// Nomes de temas disponíveis.
pub fn theme_names() -> Vec<&'static str> {
    vec!["night", "day"]
}
