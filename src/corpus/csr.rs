//! Compressed Sparse Row (CSR) corpus representation
//!
//! CSR stores out-links contiguously, making iteration over a page's
//! links very fast. This is ideal for the rank estimators, which
//! repeatedly walk or sweep over all links. The corpus is immutable
//! once built; both estimators share it read-only.

use rustc_hash::{FxHashMap, FxHashSet};

use super::builder::CorpusBuilder;
use crate::error::{RankError, Result};
use crate::types::PageId;

/// An immutable hyperlink corpus in CSR form
///
/// Invariants, established at construction:
/// - every link target is a page in the universe;
/// - no page links to itself;
/// - the universe holds at least one page.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Number of pages
    num_pages: usize,
    /// Row pointers: page i's links are at indices row_ptr[i]..row_ptr[i+1]
    row_ptr: Vec<usize>,
    /// Target page IDs for each link
    col_idx: Vec<PageId>,
    /// Out-degree for each page
    out_degree: Vec<u32>,
    /// Page names, indexed by page ID
    names: Vec<String>,
    /// Name -> ID lookup for boundary callers
    name_to_id: FxHashMap<String, PageId>,
}

impl Corpus {
    /// Convert a [`CorpusBuilder`] into CSR form
    ///
    /// Fails with [`RankError::EmptyCorpus`] when the universe is empty.
    pub fn from_builder(builder: &CorpusBuilder) -> Result<Self> {
        if builder.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let num_pages = builder.page_count();
        let mut row_ptr = Vec::with_capacity(num_pages + 1);
        let mut col_idx = Vec::new();
        let mut out_degree = Vec::with_capacity(num_pages);
        let mut names = Vec::with_capacity(num_pages);
        let mut name_to_id =
            FxHashMap::with_capacity_and_hasher(num_pages, Default::default());

        row_ptr.push(0);

        for (id, page) in builder.pages() {
            names.push(page.name.clone());
            name_to_id.insert(page.name.clone(), id);

            // Collect and sort links for deterministic iteration
            let mut links: Vec<PageId> = page.links.iter().copied().collect();
            links.sort_unstable();

            out_degree.push(links.len() as u32);
            col_idx.extend(links);
            row_ptr.push(col_idx.len());
        }

        Ok(Self {
            num_pages,
            row_ptr,
            col_idx,
            out_degree,
            names,
            name_to_id,
        })
    }

    /// Build a corpus directly from a raw page -> link-target mapping
    ///
    /// Link targets outside the universe and self-links are dropped, per
    /// the builder's contract.
    pub fn from_raw_links(raw: &FxHashMap<String, FxHashSet<String>>) -> Result<Self> {
        Self::from_builder(&CorpusBuilder::from_raw_links(raw))
    }

    /// Number of pages in the universe
    pub fn len(&self) -> usize {
        self.num_pages
    }

    /// Always false: construction rejects an empty universe
    pub fn is_empty(&self) -> bool {
        self.num_pages == 0
    }

    /// Iterate over all page IDs
    pub fn pages(&self) -> impl Iterator<Item = PageId> {
        0..self.num_pages as PageId
    }

    /// Out-links of a page, sorted by target ID
    pub fn out_links(&self, page: PageId) -> &[PageId] {
        let start = self.row_ptr[page as usize];
        let end = self.row_ptr[page as usize + 1];
        &self.col_idx[start..end]
    }

    /// Out-degree of a page
    pub fn out_degree(&self, page: PageId) -> u32 {
        self.out_degree[page as usize]
    }

    /// A page with no out-links is dangling
    pub fn is_dangling(&self, page: PageId) -> bool {
        self.out_degree[page as usize] == 0
    }

    /// Find all dangling pages
    pub fn dangling_pages(&self) -> Vec<PageId> {
        (0..self.num_pages as PageId)
            .filter(|&p| self.out_degree[p as usize] == 0)
            .collect()
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.col_idx.len()
    }

    /// Page name for an ID
    pub fn name(&self, page: PageId) -> &str {
        &self.names[page as usize]
    }

    /// Page ID for a name
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.name_to_id.get(name).copied()
    }
}
