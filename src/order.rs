//! Ordering policies for navigation and listing UI
//!
//! Two deterministic, query-time orderings over classified module entries:
//!
//! - **Sidebar**: modules with few variables and little content first, so
//!   function/type-rich modules surface above variable dumps.
//! - **Listing pages**: modules with any oversized bucket sink below the
//!   small, skimmable ones; each side is alphabetical.
//!
//! Plus the column layout used by grouped listing pages: ordered sections
//! distributed round-robin over at most three columns, each section capped to
//! a configurable number of visible items with the remainder as a count.
//!
//! Both sorts are stable with an explicit alphabetical tiebreak, so equal
//! inputs always produce identical output.

use serde::Serialize;

use crate::classify::ModuleItems;
use crate::flatten::{ItemBuckets, ModuleRollup};

/// Bucket size above which a module counts as having a "large section"
pub const LARGE_SECTION_THRESHOLD: usize = 10;

/// Maximum display columns on grouped listing pages
pub const MAX_LISTING_COLUMNS: usize = 3;

/// Default number of visible items per listing section
pub const SECTION_ITEM_CAP: usize = 10;

/// Bucket-count seam shared by classified items and rollup summaries, so the
/// ordering policies apply to either
pub trait SectionCounts {
    fn variables_len(&self) -> usize;
    fn total_items(&self) -> usize;
    fn has_large_section(&self, threshold: usize) -> bool;
}

impl SectionCounts for ModuleItems<'_> {
    fn variables_len(&self) -> usize {
        self.variables.len()
    }

    fn total_items(&self) -> usize {
        ModuleItems::total_items(self)
    }

    fn has_large_section(&self, threshold: usize) -> bool {
        ModuleItems::has_large_section(self, threshold)
    }
}

impl SectionCounts for ItemBuckets<'_> {
    fn variables_len(&self) -> usize {
        self.variables.len()
    }

    fn total_items(&self) -> usize {
        ItemBuckets::total_items(self)
    }

    fn has_large_section(&self, threshold: usize) -> bool {
        ItemBuckets::has_large_section(self, threshold)
    }
}

impl SectionCounts for ModuleRollup<'_> {
    fn variables_len(&self) -> usize {
        self.items.variables.len()
    }

    fn total_items(&self) -> usize {
        self.items.total_items()
    }

    fn has_large_section(&self, threshold: usize) -> bool {
        self.items.has_large_section(threshold)
    }
}

/// Sidebar ordering: ascending variable count, then ascending total item
/// count, ties broken alphabetically by module name
pub fn sort_sidebar_entries<T: SectionCounts>(entries: &mut [(String, T)]) {
    entries.sort_by(|(a_name, a), (b_name, b)| {
        a.variables_len()
            .cmp(&b.variables_len())
            .then_with(|| a.total_items().cmp(&b.total_items()))
            .then_with(|| a_name.cmp(b_name))
    });
}

/// Listing ordering: modules without a large section first, each side
/// alphabetical by module name
pub fn sort_listing_entries<T: SectionCounts>(entries: &mut [(String, T)], threshold: usize) {
    entries.sort_by(|(a_name, a), (b_name, b)| {
        a.has_large_section(threshold)
            .cmp(&b.has_large_section(threshold))
            .then_with(|| a_name.cmp(b_name))
    });
}

/// One module's section on a grouped listing page: the visible item names up
/// to the cap, plus how many items were cut
#[derive(Debug, Clone, Serialize)]
pub struct ListingSection<'a> {
    pub module: &'a str,
    pub visible: Vec<&'a str>,
    pub hidden: usize,
}

impl<'a> ListingSection<'a> {
    /// Cap an ordered item-name sequence to `cap` visible entries
    pub fn capped(module: &'a str, names: impl Iterator<Item = &'a str>, cap: usize) -> Self {
        let mut visible = Vec::new();
        let mut hidden = 0;
        for name in names {
            if visible.len() < cap {
                visible.push(name);
            } else {
                hidden += 1;
            }
        }
        Self {
            module,
            visible,
            hidden,
        }
    }
}

/// Distribute ordered sections round-robin over at most `max_columns` columns
///
/// Never produces more columns than sections; an empty input yields no
/// columns. Section order within each column follows the input order.
pub fn group_into_columns<'a>(
    sections: Vec<ListingSection<'a>>,
    max_columns: usize,
) -> Vec<Vec<ListingSection<'a>>> {
    if sections.is_empty() {
        return Vec::new();
    }

    let count = max_columns.clamp(1, sections.len());
    let mut columns: Vec<Vec<ListingSection>> = (0..count).map(|_| Vec::new()).collect();
    for (idx, section) in sections.into_iter().enumerate() {
        columns[idx % count].push(section);
    }
    columns
}

/// Build the full listing layout for ordered classified entries
pub fn layout_listing<'a>(
    entries: &'a [(String, ModuleItems<'a>)],
    max_columns: usize,
    cap: usize,
) -> Vec<Vec<ListingSection<'a>>> {
    let sections = entries
        .iter()
        .map(|(name, items)| ListingSection::capped(name, items.item_names(), cap))
        .collect();
    group_into_columns(sections, max_columns)
}
