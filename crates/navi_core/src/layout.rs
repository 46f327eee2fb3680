//! Configuração de layout remota (`config/ui-layout.json`).
//!
//! O documento esperado é `{"iconGridRows": <inteiro>}`. Qualquer outro
//! formato é tolerado: o chamador recebe um [`LayoutError`] e resolve para
//! [`LayoutConfig::default`] via [`LayoutConfig::or_default`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Linhas de atalhos usadas enquanto o fetch não terminou ou quando falha.
pub const DEFAULT_ICON_GRID_ROWS: u32 = 2;

/// Caminho relativo do documento de layout, a partir do base path.
pub const LAYOUT_PATH: &str = "config/ui-layout.json";

const ROWS_FIELD: &str = "iconGridRows";

/// Parâmetros de exibição carregados uma vez por sessão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(rename = "iconGridRows")]
    pub icon_grid_rows: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_grid_rows: DEFAULT_ICON_GRID_ROWS,
        }
    }
}

/// Erros de validação do documento de layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Documento de layout não é um objeto JSON")]
    NotAnObject,

    #[error("Campo `{ROWS_FIELD}` ausente")]
    MissingRows,

    #[error("Campo `{ROWS_FIELD}` inválido: {0} (esperado inteiro >= 0)")]
    InvalidRows(Value),
}

impl LayoutConfig {
    /// Valida um documento JSON já decodificado.
    ///
    /// Aceita qualquer número JSON que represente um inteiro não negativo,
    /// inclusive `3.0`. Valores acima de `u32::MAX` saturam (todos os
    /// atalhos ficam visíveis).
    pub fn from_value(value: &Value) -> Result<Self, LayoutError> {
        let obj = value.as_object().ok_or(LayoutError::NotAnObject)?;
        let raw = obj.get(ROWS_FIELD).ok_or(LayoutError::MissingRows)?;

        let rows = match raw {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            _ => None,
        };

        rows.map(|r| Self {
            icon_grid_rows: u32::try_from(r).unwrap_or(u32::MAX),
        })
        .ok_or_else(|| LayoutError::InvalidRows(raw.clone()))
    }

    /// Resolve o resultado do carregamento, registrando o diagnóstico e
    /// caindo para o padrão em caso de erro. Nunca falha.
    pub fn or_default<E: std::fmt::Display>(result: Result<Self, E>) -> Self {
        match result {
            Ok(config) => {
                info!("Layout carregado: {} linha(s) de atalhos", config.icon_grid_rows);
                config
            }
            Err(e) => {
                warn!("Falha ao carregar ui-layout.json: {e}. Usando {DEFAULT_ICON_GRID_ROWS} linhas");
                Self::default()
            }
        }
    }
}

/// Decodifica e valida o corpo textual do documento.
pub fn parse_layout(body: &str) -> Result<LayoutConfig, LayoutError> {
    let value: Value = serde_json::from_str(body)?;
    LayoutConfig::from_value(&value)
}

/// Monta a URL do documento com `?ts=` para evitar cache.
///
/// O base path pode vir com ou sem `/` final (ex: servido em sub-path).
pub fn layout_url(base_path: &str, ts_millis: u128) -> String {
    let sep = if base_path.ends_with('/') { "" } else { "/" };
    format!("{base_path}{sep}{LAYOUT_PATH}?ts={ts_millis}")
}
