//! Cards da tela inicial renderizados com egui.

use crate::theme_egui::EguiTheme;
use egui::{Color32, RichText, Ui};
use navi_core::{DestinationInfo, TrafficLevel};

// ──────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────

fn card_frame(ui: &mut Ui, title: &str, theme: &EguiTheme, add_body: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(16.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(140.0);
            ui.label(RichText::new(title).color(theme.dim).size(12.0));
            ui.add_space(4.0);
            add_body(ui);
        });
}

fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.6)))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(text).color(color).size(11.0));
        });
}

// ──────────────────────────────────────────
// Header / Footer
// ──────────────────────────────────────────

pub fn render_header(ui: &mut Ui, theme: &EguiTheme) {
    ui.label(RichText::new("Navi Demo").color(theme.title).size(20.0).strong());
    ui.label(RichText::new("現在地：刈谷市駅周辺").color(theme.dim).size(11.0));
}

pub fn render_footer(ui: &mut Ui, theme: &EguiTheme) {
    ui.label(
        RichText::new("[T] Theme | [F] Fullscreen | [Q/Esc] Quit")
            .color(theme.dim)
            .monospace()
            .size(10.0),
    );
    ui.label(
        RichText::new("CI/CDで設定を変えて即反映するデモ画面です")
            .color(theme.dim)
            .size(11.0),
    );
}

// ──────────────────────────────────────────
// Cards
// ──────────────────────────────────────────

pub fn render_destination(ui: &mut Ui, dest: &DestinationInfo, theme: &EguiTheme) {
    card_frame(ui, "目的地", theme, |ui: &mut Ui| {
        ui.label(RichText::new(&dest.name).color(theme.text).size(16.0).strong());
        ui.add_space(6.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(dest.eta_label()).color(theme.dim).size(11.0));
            ui.label(RichText::new("/").color(theme.dim).size(11.0));
            ui.label(RichText::new(dest.distance_label()).color(theme.dim).size(11.0));
        });
    });
}

pub fn render_speed(ui: &mut Ui, speed_label: &str, theme: &EguiTheme) {
    card_frame(ui, "平均速度", theme, |ui: &mut Ui| {
        ui.label(
            RichText::new(speed_label)
                .color(theme.accent)
                .size(18.0)
                .strong()
                .monospace(),
        );
    });
}

pub fn render_traffic(ui: &mut Ui, traffic: TrafficLevel, theme: &EguiTheme) {
    card_frame(ui, "渋滞レベル", theme, |ui: &mut Ui| {
        badge(ui, traffic.label(), theme.traffic_color(traffic));
    });
}
