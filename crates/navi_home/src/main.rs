//! # Navi Home
//!
//! Tela inicial de navegação automotiva (demo) com GUI via eframe/egui.
//!
//! Mostra o destino ativo, uma velocidade média simulada e a grade de
//! atalhos cujo número de linhas vem do `config/ui-layout.json` remoto.
//!
//! ## Atalhos
//! - `F` / `F11`: Fullscreen
//! - `T`: Alternar tema
//! - `Q` / `Esc`: Sair

mod fonts;
mod home_screen;
mod layout_fetch;
mod panels;
mod shortcut_grid;
mod theme_egui;

use home_screen::NaviHomeApp;
use navi_core::config::AppConfig;
use tracing::warn;

fn main() -> eframe::Result<()> {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Config ──
    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path);

    // Salva config padrão se não existir
    if !config_path.exists() {
        if let Err(e) = config.save(&config_path) {
            warn!("Não foi possível salvar config padrão: {e}");
        }
    }

    // ── Janela eframe ──
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Navi Demo")
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Navi Demo",
        options,
        Box::new(move |cc| Ok(Box::new(NaviHomeApp::new(cc, config)))),
    )
}
