//! Row selection and the empty-selection guard
//!
//! Bulk actions (print, export, delete, ...) run over the selected rows.
//! Invoking one with nothing selected yields a `NothingSelected` error carrying
//! the prompt shown to the user instead of running the action.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// Actions gated on a non-empty selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    Print,
    WebCsv,
    JdEdi,
    WgEdi,
    MailPdf,
    Delete,
    Edit,
    DetailDisplay,
}

impl OrderAction {
    /// Prompt shown when the action is invoked with nothing selected
    pub fn empty_selection_prompt(self) -> &'static str {
        match self {
            Self::Print => "印刷する明細を選択してください",
            Self::WebCsv | Self::JdEdi | Self::WgEdi | Self::MailPdf => {
                "出力する明細を選択してください"
            }
            Self::Delete => "削除する発注を選択してください",
            Self::Edit => "修正する明細を選択してください",
            Self::DetailDisplay => "明細を表示する発注書を選択してください",
        }
    }
}

/// Ordered set of selected row keys
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection<K> {
    keys: Vec<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K: PartialEq + Clone> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one key; returns whether it is selected afterwards
    pub fn toggle(&mut self, key: K) -> bool {
        match self.keys.iter().position(|k| *k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                false
            }
            None => {
                self.keys.push(key);
                true
            }
        }
    }

    pub fn select(&mut self, key: K) {
        if !self.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn deselect(&mut self, key: &K) {
        self.keys.retain(|k| k != key);
    }

    /// Replace the selection with every visible key (header checkbox)
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a K>)
    where
        K: 'a,
    {
        self.keys.clear();
        for key in visible {
            self.select(key.clone());
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Header checkbox state: every visible key is selected (false when none are visible)
    pub fn is_all_selected<'a>(&self, visible: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        let mut any = false;
        for key in visible {
            if !self.contains(key) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys for `action`, or the action's prompt when nothing is selected
    pub fn require(&self, action: OrderAction) -> AppResult<&[K]> {
        if self.keys.is_empty() {
            tracing::debug!(?action, "Action invoked with empty selection");
            return Err(AppError::nothing_selected(action.empty_selection_prompt()));
        }
        Ok(&self.keys)
    }
}
