//! Menu tree assembly.
//!
//! Groups a restaurant's available items under its active categories. Items
//! whose category is missing or inactive land in a trailing "uncategorized"
//! section so they stay orderable.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::DbId;

/// Id used for the synthetic uncategorized section.
pub const UNCATEGORIZED_ID: DbId = 0;

/// Default display name for the uncategorized section.
pub const DEFAULT_UNCATEGORIZED_LABEL: &str = "Outros";

/// An active category, already in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
}

/// One section of the rendered menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSection<T> {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub items: Vec<T>,
}

/// Group items under their categories.
///
/// `categories` must already be ordered by position; `items` by name. Both
/// orders are kept. Every active category is returned even when empty; the
/// uncategorized section is appended only if something falls into it.
pub fn assemble_menu<T>(
    categories: Vec<CategoryRef>,
    items: impl IntoIterator<Item = (Option<DbId>, T)>,
    uncategorized_label: &str,
) -> Vec<MenuSection<T>> {
    let index: HashMap<DbId, usize> = categories
        .iter()
        .enumerate()
        .map(|(pos, c)| (c.id, pos))
        .collect();

    let mut sections: Vec<MenuSection<T>> = categories
        .into_iter()
        .map(|c| MenuSection {
            id: c.id,
            name: c.name,
            slug: c.slug,
            items: Vec::new(),
        })
        .collect();
    let mut uncategorized = Vec::new();

    for (category_id, item) in items {
        match category_id.and_then(|id| index.get(&id)) {
            Some(&pos) => sections[pos].items.push(item),
            None => uncategorized.push(item),
        }
    }

    if !uncategorized.is_empty() {
        sections.push(MenuSection {
            id: UNCATEGORIZED_ID,
            name: uncategorized_label.to_string(),
            slug: None,
            items: uncategorized,
        });
    }

    sections
}
