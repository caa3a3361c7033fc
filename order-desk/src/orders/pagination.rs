//! Page slicing for header lists

use serde::{Deserialize, Serialize};

/// Rows per page offered by the list screens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn rows(self) -> usize {
        match self {
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    pub fn from_rows(rows: usize) -> Option<Self> {
        match rows {
            50 => Some(Self::Fifty),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }
}

/// One page of a list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based; 1 for an empty list
    pub page: usize,
    pub per_page: usize,
    /// 0 for an empty list
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice out page `page` (1-based, clamped into range)
///
/// `per_page` of zero is treated as one.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        per_page,
        total_pages,
        total_items: items.len(),
    }
}
