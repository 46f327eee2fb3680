//! Estado da tela inicial.
//!
//! [`HomeView`] é dono de todo o estado (layout, destino ativo, velocidade,
//! largura da janela). A camada de GUI lê snapshots e devolve eventos
//! (layout carregado, atalho selecionado, tick de frame, resize).

use crate::grid::{GridHover, visible_actions};
use crate::layout::{DEFAULT_ICON_GRID_ROWS, LayoutConfig};
use crate::registry::DestinationRegistry;
use crate::speed::{SpeedParams, SpeedSimulator};
use crate::types::{DestinationInfo, NavAction, default_nav_actions};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Atalhos por linha.
pub const DEFAULT_GRID_COLS: u32 = 3;

/// Abaixo desta largura o layout fica compacto (cards empilhados).
pub const COMPACT_WIDTH: f32 = 900.0;

/// Opções fixas da tela, vindas do `navi.toml`.
#[derive(Debug, Clone)]
pub struct HomeOptions {
    pub grid_cols: u32,
    pub compact_width: f32,
    pub speed: SpeedParams,
}

impl Default for HomeOptions {
    fn default() -> Self {
        Self {
            grid_cols: DEFAULT_GRID_COLS,
            compact_width: COMPACT_WIDTH,
            speed: SpeedParams::default(),
        }
    }
}

pub struct HomeView {
    layout: Option<LayoutConfig>,
    viewport_width: f32,
    grid_cols: u32,
    compact_width: f32,
    actions: Vec<NavAction>,
    registry: DestinationRegistry,
    destination: DestinationInfo,
    speed: SpeedSimulator,
    hover: GridHover,
}

impl HomeView {
    /// Monta a tela com o destino principal e o simulador já rodando.
    pub fn new(
        actions: Vec<NavAction>,
        registry: DestinationRegistry,
        options: HomeOptions,
        now: Instant,
    ) -> Self {
        let destination = registry.primary().clone();
        let speed = SpeedSimulator::new(destination.base_speed, options.speed, now);
        Self {
            layout: None,
            viewport_width: 0.0,
            grid_cols: options.grid_cols.max(1),
            compact_width: options.compact_width,
            actions,
            registry,
            destination,
            speed,
            hover: GridHover::default(),
        }
    }

    /// Tela padrão: nove atalhos, registro padrão.
    pub fn standard(options: HomeOptions, now: Instant) -> Self {
        Self::new(default_nav_actions(), DestinationRegistry::standard(), options, now)
    }

    // ── Layout ──

    /// Aplica o layout carregado. Só o primeiro resultado vale; o carregamento
    /// acontece uma única vez por sessão.
    pub fn apply_layout(&mut self, config: LayoutConfig) -> bool {
        if self.layout.is_some() {
            debug!("Layout já aplicado, ignorando {:?}", config);
            return false;
        }
        info!("Grade com {} linha(s) x {} coluna(s)", config.icon_grid_rows, self.grid_cols);
        self.layout = Some(config);
        let visible = visible_actions(&self.actions, config.icon_grid_rows, self.grid_cols);
        self.hover.sync(visible);
        true
    }

    pub fn is_layout_loaded(&self) -> bool {
        self.layout.is_some()
    }

    /// Linhas da grade; 2 enquanto o layout não chegou.
    pub fn rows(&self) -> u32 {
        self.layout
            .map_or(DEFAULT_ICON_GRID_ROWS, |l| l.icon_grid_rows)
    }

    pub fn cols(&self) -> u32 {
        self.grid_cols
    }

    pub fn actions(&self) -> &[NavAction] {
        &self.actions
    }

    pub fn visible_actions(&self) -> &[NavAction] {
        visible_actions(&self.actions, self.rows(), self.grid_cols)
    }

    // ── Destino ──

    /// Troca o destino ativo pelo do atalho. Re-selecionar o destino atual
    /// não mexe na velocidade nem no intervalo.
    pub fn select(&mut self, action: &NavAction, now: Instant) -> bool {
        let next = self.registry.select_by_action(action);
        if *next == self.destination {
            debug!("'{}' já é o destino ativo", next.name);
            return false;
        }

        info!("Destino: {} (via '{}')", next.name, action.label);
        self.destination = next.clone();
        self.speed.rebase(self.destination.base_speed, now);
        true
    }

    pub fn destination(&self) -> &DestinationInfo {
        &self.destination
    }

    // ── Velocidade ──

    /// Avança o simulador; `Some` quando a velocidade exibida mudou de tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<u32> {
        self.speed.poll(now, rng)
    }

    pub fn speed(&self) -> u32 {
        self.speed.current()
    }

    pub fn speed_label(&self) -> String {
        format!("{} km/h", self.speed.current())
    }

    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.speed.next_tick_in(now)
    }

    // ── Janela ──

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Só afeta a disposição dos cards.
    pub fn is_compact(&self) -> bool {
        self.viewport_width < self.compact_width
    }

    // ── Hover ──

    pub fn hover(&self) -> &GridHover {
        &self.hover
    }

    /// Sincroniza o hover com os itens visíveis e marca `label`.
    pub fn set_hovered(&mut self, label: Option<&str>) {
        let visible = visible_actions(&self.actions, self.rows(), self.grid_cols);
        self.hover.sync(visible);
        self.hover.set(label);
    }

    /// Encerra a tela: cancela o intervalo da velocidade.
    pub fn unmount(&mut self) {
        self.speed.stop();
        info!("Tela inicial encerrada");
    }

    pub fn is_running(&self) -> bool {
        self.speed.is_running()
    }
}
