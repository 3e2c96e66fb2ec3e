//! Account lookup for non-pipe model items, driven by the `ItemType` column.
//!
//! Keywords and item types are compared after dropping whitespace and case,
//! so `Curtain Wall` matches `CurtainWall:Storefront`. The longest keyword
//! found wins.

use std::{cmp::Reverse, collections::HashSet};

use crate::tables::{ItemTypeAccount, Tables};

/// Lowercase with all whitespace removed.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct ItemTypeIndex<'t> {
    /// Normalized keyword → account, longest keyword first.
    keywords: Vec<(String, &'t ItemTypeAccount)>,
    /// Normalized skip fragments paired with their table spelling.
    skip: Vec<(String, &'t str)>,
}

impl<'t> ItemTypeIndex<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for account in &tables.item_types {
            for keyword in &account.keywords {
                let norm = normalize(keyword);
                if !norm.is_empty() && seen.insert(norm.clone()) {
                    keywords.push((norm, account));
                }
            }
        }
        // stable: equal lengths keep table order
        keywords.sort_by_key(|(k, _)| Reverse(k.chars().count()));

        let skip = tables
            .item_type_skip
            .iter()
            .map(|s| (normalize(s), s.as_str()))
            .filter(|(norm, _)| !norm.is_empty())
            .collect();

        Self { keywords, skip }
    }

    /// Account for the most specific keyword contained in `item_type`.
    pub fn classify(&self, item_type: &str) -> Option<&'t ItemTypeAccount> {
        let norm = normalize(item_type);
        if norm.is_empty() {
            return None;
        }
        self.keywords
            .iter()
            .find(|(k, _)| norm.contains(k.as_str()))
            .map(|&(_, account)| account)
    }

    /// The skip fragment `item_type` contains, if any.
    pub fn skip_match(&self, item_type: &str) -> Option<&'t str> {
        let norm = normalize(item_type);
        if norm.is_empty() {
            return None;
        }
        self.skip
            .iter()
            .find(|(s, _)| norm.contains(s.as_str()))
            .map(|&(_, original)| original)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
