//! Conversão de temas para `egui::Color32`.

use egui::Color32;
use navi_core::TrafficLevel;
use navi_core::theme::{self, Theme};

/// Tema convertido para tipos egui.
#[derive(Clone)]
pub struct EguiTheme {
    pub name: String,
    pub bg: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub title: Color32,
    pub tile: Color32,
    pub tile_hover: Color32,
    pub accent: Color32,
    pub smooth: Color32,
    pub moderate: Color32,
    pub heavy: Color32,
}

impl EguiTheme {
    /// Converte um [`Theme`] do core para [`EguiTheme`].
    pub fn from_core(t: &Theme) -> Self {
        Self {
            name: t.name.clone(),
            bg: hex_color(&t.bg),
            card: hex_color(&t.card),
            border: hex_color(&t.border),
            text: hex_color(&t.text),
            dim: hex_color(&t.dim),
            title: hex_color(&t.title),
            tile: hex_color(&t.tile),
            tile_hover: hex_color(&t.tile_hover),
            accent: hex_color(&t.accent),
            smooth: hex_color(&t.smooth),
            moderate: hex_color(&t.moderate),
            heavy: hex_color(&t.heavy),
        }
    }

    pub fn traffic_color(&self, level: TrafficLevel) -> Color32 {
        match level {
            TrafficLevel::Smooth => self.smooth,
            TrafficLevel::Moderate => self.moderate,
            TrafficLevel::Heavy => self.heavy,
        }
    }

    pub fn is_light(&self) -> bool {
        self.name == "day"
    }
}

fn hex_color(hex: &str) -> Color32 {
    let (r, g, b) = theme::hex_to_rgb(hex);
    Color32::from_rgb(r, g, b)
}

/// Carrega todos os temas disponíveis.
pub fn all_themes() -> Vec<EguiTheme> {
    theme::theme_names()
        .iter()
        .map(|name| EguiTheme::from_core(&theme::get_theme(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traffic_colors_come_from_palette() {
        for t in all_themes() {
            assert_eq!(t.traffic_color(TrafficLevel::Smooth), t.smooth);
            assert_ne!(t.traffic_color(TrafficLevel::Smooth), t.traffic_color(TrafficLevel::Moderate));
        }
    }

    #[test]
    fn only_day_is_light() {
        let names: Vec<_> = all_themes().iter().map(|t| (t.name.clone(), t.is_light())).collect();
        assert_eq!(names, vec![("night".to_string(), false), ("day".to_string(), true)]);
    }
}
