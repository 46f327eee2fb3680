//! Derivação da grade de atalhos: quais itens aparecem e onde.

use crate::types::NavAction;

/// Primeiros `rows * cols` atalhos. Lista menor que a grade é exibida
/// inteira, sem preenchimento.
pub fn visible_actions(actions: &[NavAction], rows: u32, cols: u32) -> &[NavAction] {
    let capacity = usize::try_from(rows.saturating_mul(cols)).unwrap_or(usize::MAX);
    &actions[..actions.len().min(capacity)]
}

/// Posição `(linha, coluna, atalho)` de cada item, em ordem row-major.
pub fn grid_cells(visible: &[NavAction], cols: u32) -> impl Iterator<Item = (usize, usize, &NavAction)> {
    let cols = cols.max(1) as usize;
    visible
        .iter()
        .enumerate()
        .map(move |(i, action)| (i / cols, i % cols, action))
}

/// Destaque de hover, puramente visual.
///
/// Indexado pelo rótulo; é descartado sempre que o conjunto visível muda.
#[derive(Debug, Default, Clone)]
pub struct GridHover {
    visible: Vec<String>,
    hovered: Option<String>,
}

impl GridHover {
    /// Sincroniza com os itens visíveis do frame atual.
    pub fn sync(&mut self, visible: &[NavAction]) {
        let changed = self.visible.len() != visible.len()
            || self.visible.iter().zip(visible).any(|(l, a)| *l != a.label);
        if changed {
            self.visible = visible.iter().map(|a| a.label.clone()).collect();
            self.hovered = None;
        }
    }

    pub fn set(&mut self, label: Option<&str>) {
        self.hovered = label
            .filter(|l| self.visible.iter().any(|v| v == *l))
            .map(str::to_owned);
    }

    pub fn is_hovered(&self, label: &str) -> bool {
        self.hovered.as_deref() == Some(label)
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }
}
