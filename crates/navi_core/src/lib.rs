//! # Navi Core
//!
//! Estado e regras da tela inicial do Navi Demo, sem dependência de GUI.
//!
//! ## Módulos
//! - [`types`] – Atalhos, destinos e nível de trânsito
//! - [`layout`] – Validação do `ui-layout.json` remoto (linhas da grade)
//! - [`registry`] – Registro de destinos por atalho
//! - [`grid`] – Itens visíveis da grade e hover
//! - [`timer`] – Intervalo recorrente com re-arm
//! - [`speed`] – Velocidade simulada com jitter
//! - [`home`] – Estado completo da tela
//! - [`config`] – Configuração local via TOML
//! - [`theme`] – Paletas (night, day)

pub mod types;
pub mod layout;
pub mod registry;
pub mod grid;
pub mod timer;
pub mod speed;
pub mod home;
pub mod config;
pub mod theme;

// Re-exports convenientes
pub use types::{DestinationInfo, NavAction, TrafficLevel};
pub use layout::{LayoutConfig, LayoutError, DEFAULT_ICON_GRID_ROWS};
pub use registry::DestinationRegistry;
pub use home::{HomeOptions, HomeView};
pub use config::AppConfig;
