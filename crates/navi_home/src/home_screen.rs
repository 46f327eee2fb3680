//! Tela inicial – App eframe/egui.

use crate::fonts;
use crate::layout_fetch;
use crate::panels;
use crate::shortcut_grid;
use crate::theme_egui::{self, EguiTheme};
use crossbeam_channel::{Receiver, TryRecvError};
use egui::RichText;
use navi_core::{AppConfig, HomeView, LayoutConfig};
use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Frequência de checagem do channel enquanto o layout não chegou.
const LAYOUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct NaviHomeApp {
    view: HomeView,
    theme: EguiTheme,
    theme_index: usize,
    all_themes: Vec<EguiTheme>,

    // Fetch único do layout; `None` depois de aplicado
    layout_rx: Option<Receiver<LayoutConfig>>,
    rng: ThreadRng,

    is_fullscreen: bool,
}

impl NaviHomeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        fonts::install_cjk_font(&cc.egui_ctx, &config.ui.cjk_font_path);

        // Dispara o fetch do layout (uma vez por montagem)
        let url = layout_fetch::layout_request_url(&config.layout.base_url);
        let layout_rx = layout_fetch::spawn_layout_fetch(url, config.request_timeout());

        let all_themes = theme_egui::all_themes();
        let theme_index = all_themes
            .iter()
            .position(|t| t.name == config.ui.theme)
            .unwrap_or(0);
        let theme = all_themes[theme_index].clone();

        Self {
            view: HomeView::standard(config.home_options(), Instant::now()),
            theme,
            theme_index,
            all_themes,
            layout_rx: Some(layout_rx),
            rng: rand::rng(),
            is_fullscreen: false,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Lê as teclas primeiro: comandos de viewport dentro de `input` travam o contexto
        let (toggle_theme, quit, toggle_fullscreen) = ctx.input(|i: &egui::InputState| {
            (
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::Q) || i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F) || i.key_pressed(egui::Key::F11),
            )
        });

        if toggle_theme {
            self.theme_index = (self.theme_index + 1) % self.all_themes.len();
            self.theme = self.all_themes[self.theme_index].clone();
            info!("Tema: {}", self.theme.name);
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if toggle_fullscreen {
            self.is_fullscreen = !self.is_fullscreen;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen));
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = if self.theme.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.panel_fill = self.theme.bg;
        visuals.window_fill = self.theme.card;
        visuals.override_text_color = Some(self.theme.text);
        ctx.set_visuals(visuals);
    }

    /// Destino, velocidade e trânsito: lado a lado ou empilhados.
    fn render_info(&self, ui: &mut egui::Ui) {
        let dest = self.view.destination();
        let speed = self.view.speed_label();

        if self.view.is_compact() {
            panels::render_destination(ui, dest, &self.theme);
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                panels::render_speed(&mut cols[0], &speed, &self.theme);
                panels::render_traffic(&mut cols[1], dest.traffic, &self.theme);
            });
        } else {
            ui.columns(3, |cols| {
                panels::render_destination(&mut cols[0], dest, &self.theme);
                panels::render_speed(&mut cols[1], &speed, &self.theme);
                panels::render_traffic(&mut cols[2], dest.traffic, &self.theme);
            });
        }
    }

    fn render_grid(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui: &mut egui::Ui| {
            ui.label(RichText::new("クイック目的地").color(self.theme.text).strong());
            ui.label(
                RichText::new(format!("{} 行表示（設定で変更）", self.view.rows()))
                    .color(self.theme.dim)
                    .size(11.0),
            );
        });
        ui.add_space(10.0);

        let response = shortcut_grid::show(
            ui,
            self.view.visible_actions(),
            self.view.cols(),
            self.view.hover(),
            &self.theme,
        );

        self.view.set_hovered(response.hovered.as_deref());
        if let Some(action) = response.selected {
            self.view.select(&action, Instant::now());
        }
    }
}

/// Aplica o layout assim que a thread de fetch entregar. Canal desconectado
/// sem resultado resolve para o padrão; em ambos os casos o receiver é solto.
fn poll_layout(layout_rx: &mut Option<Receiver<LayoutConfig>>, view: &mut HomeView) {
    let Some(rx) = layout_rx else {
        return;
    };
    let config = match rx.try_recv() {
        Ok(config) => config,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            warn!("Thread de fetch terminou sem resultado; usando layout padrão");
            LayoutConfig::default()
        }
    };
    view.apply_layout(config);
    *layout_rx = None;
}

impl eframe::App for NaviHomeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // ── Layout remoto / velocidade / largura ──
        poll_layout(&mut self.layout_rx, &mut self.view);
        self.view.tick(now, &mut self.rng);
        self.view.set_viewport_width(ctx.screen_rect().width());

        // ── Próximo repaint: tick da velocidade ou checagem do channel ──
        let mut wait = self.view.next_tick_in(now).unwrap_or(LAYOUT_POLL_INTERVAL);
        if self.layout_rx.is_some() {
            wait = wait.min(LAYOUT_POLL_INTERVAL);
        }
        ctx.request_repaint_after(wait);

        self.apply_visuals(ctx);
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::new().fill(self.theme.card).inner_margin(6.0))
            .show(ctx, |ui: &mut egui::Ui| {
                ui.vertical_centered(|ui: &mut egui::Ui| {
                    panels::render_footer(ui, &self.theme);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui: &mut egui::Ui| {
            panels::render_header(ui, &self.theme);
            ui.separator();
            ui.add_space(8.0);

            self.render_info(ui);
            ui.add_space(16.0);

            self.render_grid(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.view.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use navi_core::HomeOptions;

    fn view() -> HomeView {
        HomeView::standard(HomeOptions::default(), Instant::now())
    }

    #[test]
    fn pending_fetch_keeps_waiting() {
        let (_tx, rx) = bounded::<LayoutConfig>(1);
        let mut layout_rx = Some(rx);
        let mut view = view();

        poll_layout(&mut layout_rx, &mut view);
        assert!(layout_rx.is_some());
        assert!(!view.is_layout_loaded());
    }

    #[test]
    fn delivered_layout_is_applied_once() {
        let (tx, rx) = bounded(1);
        tx.send(LayoutConfig { icon_grid_rows: 3 }).unwrap();
        let mut layout_rx = Some(rx);
        let mut view = view();

        poll_layout(&mut layout_rx, &mut view);
        assert!(layout_rx.is_none());
        assert_eq!(view.rows(), 3);
        assert_eq!(view.visible_actions().len(), 9);
    }

    #[test]
    fn dead_fetch_thread_settles_with_default() {
        let (tx, rx) = bounded::<LayoutConfig>(1);
        drop(tx);
        let mut layout_rx = Some(rx);
        let mut view = view();

        poll_layout(&mut layout_rx, &mut view);
        assert!(layout_rx.is_none());
        assert!(view.is_layout_loaded());
        assert_eq!(view.rows(), 2);
        assert_eq!(view.visible_actions().len(), 6);
    }
}
