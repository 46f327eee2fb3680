//! Grade de atalhos renderizada com egui.

use crate::theme_egui::EguiTheme;
use egui::{RichText, Stroke, Ui};
use navi_core::NavAction;
use navi_core::grid::{GridHover, grid_cells};

const SPACING: f32 = 12.0;
const MIN_TILE_WIDTH: f32 = 90.0;
const TILE_HEIGHT: f32 = 64.0;

/// Eventos do frame: hover atual e atalho clicado.
#[derive(Debug, Default)]
pub struct GridResponse {
    pub hovered: Option<String>,
    pub selected: Option<NavAction>,
}

/// Desenha os atalhos visíveis em `cols` colunas.
pub fn show(
    ui: &mut Ui,
    visible: &[NavAction],
    cols: u32,
    hover: &GridHover,
    theme: &EguiTheme,
) -> GridResponse {
    let cols = cols.max(1);
    let n = cols as f32;
    let tile_w = ((ui.available_width() - SPACING * (n - 1.0)) / n).max(MIN_TILE_WIDTH);

    let mut out = GridResponse::default();
    egui::Grid::new("shortcut_grid")
        .num_columns(cols as usize)
        .spacing([SPACING, SPACING])
        .show(ui, |ui: &mut Ui| {
            for (_, col, action) in grid_cells(visible, cols) {
                let fill = if hover.is_hovered(&action.label) {
                    theme.tile_hover
                } else {
                    theme.tile
                };
                let text = RichText::new(format!("{}\n{}", action.icon, action.label))
                    .color(theme.text)
                    .size(14.0);
                let button = egui::Button::new(text)
                    .fill(fill)
                    .stroke(Stroke::new(1.0, theme.border))
                    .corner_radius(14.0)
                    .min_size(egui::vec2(tile_w, TILE_HEIGHT));

                let response = ui.add(button);
                if response.hovered() {
                    out.hovered = Some(action.label.clone());
                }
                if response.clicked() {
                    out.selected = Some(action.clone());
                }
                if col + 1 == cols as usize {
                    ui.end_row();
                }
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme_egui::all_themes;
    use navi_core::grid::visible_actions;
    use navi_core::types::default_nav_actions;

    #[test]
    fn idle_frame_emits_no_events() {
        let ctx = egui::Context::default();
        let theme = all_themes().remove(0);
        let actions = default_nav_actions();
        let visible = visible_actions(&actions, 2, 3);

        let mut response = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = Some(show(ui, visible, 3, &GridHover::default(), &theme));
            });
        });

        let response = response.unwrap();
        assert!(response.hovered.is_none());
        assert!(response.selected.is_none());
    }
}
