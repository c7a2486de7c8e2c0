//! Corpus builder with link filtering
//!
//! This module provides a mutable corpus builder that uses FxHashMap
//! for O(1) page interning during construction. Self-links are dropped
//! at insertion; links to pages outside the universe are dropped when
//! building from a raw link mapping.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::PageId;

/// A page in the corpus builder
#[derive(Debug, Clone)]
pub struct BuilderPage {
    /// The page identifier (filename for HTML corpora)
    pub name: String,
    /// Outbound links by target page ID
    pub links: FxHashSet<PageId>,
}

impl BuilderPage {
    /// Create a new page with no outbound links
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: FxHashSet::default(),
        }
    }
}

/// A mutable corpus builder optimized for incremental construction
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    /// Maps page name -> page ID
    name_to_id: FxHashMap<String, PageId>,
    /// Page storage
    pages: Vec<BuilderPage>,
}

impl CorpusBuilder {
    /// Create a new empty corpus builder
    pub fn new() -> Self {
        Self {
            name_to_id: FxHashMap::default(),
            pages: Vec::new(),
        }
    }

    /// Create a corpus builder with pre-allocated capacity
    pub fn with_capacity(page_capacity: usize) -> Self {
        Self {
            name_to_id: FxHashMap::with_capacity_and_hasher(page_capacity, Default::default()),
            pages: Vec::with_capacity(page_capacity),
        }
    }

    /// Get or create a page for the given name, returning its ID
    pub fn add_page(&mut self, name: &str) -> PageId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.pages.len() as PageId;
        self.name_to_id.insert(name.to_string(), id);
        self.pages.push(BuilderPage::new(name));
        id
    }

    /// Record an outbound link from one page to another
    ///
    /// Self-links are dropped. Duplicate links collapse to one edge.
    pub fn add_link(&mut self, from: PageId, to: PageId) {
        if from == to {
            return; // no self-links
        }
        if (to as usize) >= self.pages.len() {
            return;
        }
        if let Some(page) = self.pages.get_mut(from as usize) {
            page.links.insert(to);
        }
    }

    /// Build a corpus from a raw page -> link-target mapping
    ///
    /// Every key of the mapping becomes a page; keys are interned in
    /// sorted order so page IDs are deterministic across runs. A link is
    /// kept only when its target is itself a page in the universe, and
    /// never when it points back at its own page.
    pub fn from_raw_links(raw: &FxHashMap<String, FxHashSet<String>>) -> Self {
        let mut builder = Self::with_capacity(raw.len());

        let mut names: Vec<&String> = raw.keys().collect();
        names.sort();
        for name in &names {
            builder.add_page(name);
        }

        for name in names {
            let from = builder.name_to_id[name.as_str()];
            for target in &raw[name] {
                if let Some(&to) = builder.name_to_id.get(target.as_str()) {
                    builder.add_link(from, to);
                }
            }
        }

        builder
    }

    /// Get the number of pages in the universe
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the total number of links
    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }

    /// Get a page by ID
    pub fn get_page(&self, id: PageId) -> Option<&BuilderPage> {
        self.pages.get(id as usize)
    }

    /// Get a page ID by name
    pub fn get_page_id(&self, name: &str) -> Option<PageId> {
        self.name_to_id.get(name).copied()
    }

    /// Iterate over all pages
    pub fn pages(&self) -> impl Iterator<Item = (PageId, &BuilderPage)> {
        self.pages.iter().enumerate().map(|(i, p)| (i as PageId, p))
    }

    /// Check if the universe is empty
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
