//! Fonte de fallback para os rótulos em japonês.
//!
//! As fontes embutidas do egui não têm glifos CJK; sem esta etapa os
//! rótulos aparecem como caixas vazias.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

const CJK_FONT_NAME: &str = "navi-cjk";

const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Caminhos tentados, em ordem: o configurado primeiro.
fn candidate_paths(configured: &str) -> Vec<PathBuf> {
    let configured = configured.trim();
    (!configured.is_empty())
        .then(|| PathBuf::from(configured))
        .into_iter()
        .chain(CJK_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

fn read_first(paths: &[PathBuf]) -> Option<(&Path, Vec<u8>)> {
    paths
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p.as_path(), bytes)))
}

/// Instala a primeira fonte CJK encontrada como fallback das famílias
/// padrão. Retorna o caminho usado.
pub fn install_cjk_font(ctx: &egui::Context, configured: &str) -> Option<PathBuf> {
    let paths = candidate_paths(configured);
    let Some((path, bytes)) = read_first(&paths) else {
        warn!("Nenhuma fonte CJK encontrada; rótulos em japonês podem não renderizar");
        return None;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    info!("Fonte CJK: {}", path.display());
    Some(path.to_path_buf())
}
