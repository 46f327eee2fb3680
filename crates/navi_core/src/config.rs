//! Configuração local do aplicativo via TOML (`navi.toml`).
//!
//! Não confundir com o `ui-layout.json` remoto (ver [`crate::layout`]):
//! aqui ficam o base path do servidor, parâmetros da simulação e tema.

use crate::home::{COMPACT_WIDTH, DEFAULT_GRID_COLS, HomeOptions};
use crate::registry::DestinationRegistry;
use crate::speed::{MAX_SPEED, MIN_SPEED, SPEED_JITTER_RANGE, SPEED_UPDATE_INTERVAL, SpeedParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Base path embutido no build (`NAVI_BASE_URL=... cargo build`).
pub const BUILD_BASE_URL: Option<&str> = option_env!("NAVI_BASE_URL");

/// Base path quando nada foi definido no build nem no TOML.
pub const FALLBACK_BASE_URL: &str = "http://127.0.0.1:5173/";

/// De onde vem o `ui-layout.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSourceConfig {
    /// Prefixo da URL do documento (suporta sub-path)
    pub base_url: String,
    /// Atalhos por linha
    pub grid_cols: u32,
    /// Timeout do GET (segundos)
    pub request_timeout_secs: f64,
}

impl Default for LayoutSourceConfig {
    fn default() -> Self {
        Self {
            base_url: BUILD_BASE_URL.unwrap_or(FALLBACK_BASE_URL).into(),
            grid_cols: DEFAULT_GRID_COLS,
            request_timeout_secs: 10.0,
        }
    }
}

impl LayoutSourceConfig {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.base_url.trim().is_empty() {
            errors.push("base_url não pode ser vazio".into());
        }
        if self.grid_cols == 0 {
            errors.push("grid_cols deve ser >= 1".into());
        }
        if !(self.request_timeout_secs > 0.0 && self.request_timeout_secs <= 120.0) {
            errors.push(format!(
                "Timeout inválido: {} (0–120s)",
                self.request_timeout_secs
            ));
        }
        errors
    }
}

/// Parâmetros da velocidade simulada.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub min_speed: f32,
    pub max_speed: f32,
    pub update_interval_ms: u64,
    pub jitter_range: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            update_interval_ms: SPEED_UPDATE_INTERVAL.as_millis() as u64,
            jitter_range: SPEED_JITTER_RANGE,
        }
    }
}

impl SimulationConfig {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        // Comparações negadas também pegam NaN
        let finite = self.min_speed.is_finite() && self.max_speed.is_finite();
        if !(finite && self.min_speed >= 0.0 && self.min_speed <= self.max_speed) {
            errors.push(format!(
                "Faixa de velocidade inválida: {}–{}",
                self.min_speed, self.max_speed
            ));
        } else {
            // Trocar de destino exibe a base exata: ela precisa caber na faixa
            for d in DestinationRegistry::standard().destinations() {
                if d.base_speed < self.min_speed || d.base_speed > self.max_speed {
                    errors.push(format!(
                        "Faixa {}–{} exclui a velocidade base de {} ({} km/h)",
                        self.min_speed, self.max_speed, d.name, d.base_speed
                    ));
                }
            }
        }
        if self.update_interval_ms == 0 {
            errors.push("update_interval_ms deve ser > 0".into());
        }
        if !(self.jitter_range.is_finite() && self.jitter_range >= 0.0) {
            errors.push(format!("jitter_range inválido: {}", self.jitter_range));
        }
        errors
    }

    pub fn params(&self) -> SpeedParams {
        SpeedParams {
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            update_interval: Duration::from_millis(self.update_interval_ms),
            jitter_range: self.jitter_range,
        }
    }
}

/// Aparência.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tema: "night" ou "day"
    pub theme: String,
    /// Largura abaixo da qual os cards são empilhados
    pub compact_width: f32,
    /// Fonte com glifos japoneses (vazio = procurar fontes do sistema)
    pub cjk_font_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "night".into(),
            compact_width: COMPACT_WIDTH,
            cjk_font_path: String::new(),
        }
    }
}

impl UiConfig {
    fn errors(&self) -> Vec<String> {
        if self.compact_width >= 0.0 {
            Vec::new()
        } else {
            vec![format!("compact_width inválido: {}", self.compact_width)]
        }
    }
}

/// Configuração raiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutSourceConfig,
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config.sanitized();
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do navi.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("navi.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.layout.errors();
        errors.extend(self.simulation.errors());
        errors.extend(self.ui.errors());
        errors
    }

    /// Substitui seções inválidas pelo padrão, registrando cada erro.
    pub fn sanitized(mut self) -> Self {
        for e in self.validate() {
            warn!("navi.toml: {e}");
        }
        if !self.layout.errors().is_empty() {
            self.layout = LayoutSourceConfig::default();
        }
        if !self.simulation.errors().is_empty() {
            self.simulation = SimulationConfig::default();
        }
        if !self.ui.errors().is_empty() {
            self.ui = UiConfig::default();
        }
        self
    }

    pub fn home_options(&self) -> HomeOptions {
        HomeOptions {
            grid_cols: self.layout.grid_cols,
            compact_width: self.ui.compact_width,
            speed: self.simulation.params(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.layout.request_timeout_secs)
    }
}
