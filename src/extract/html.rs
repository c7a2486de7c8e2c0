//! HTML link extraction
//!
//! Crawls a directory of `.html` documents and produces the raw
//! page -> link-target mapping consumed by
//! [`CorpusBuilder::from_raw_links`](crate::corpus::builder::CorpusBuilder::from_raw_links).
//! A link is any `href="..."` attribute value inside an anchor tag.
//! Targets are NOT filtered to the corpus universe here; that is the
//! corpus builder's contract.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::Result;

/// Anchor-tag href attribute
static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("valid href pattern"));

/// Extract raw outbound links from every `.html` file in `dir`
///
/// Each `.html` file becomes a page keyed by its filename. A page's own
/// filename is removed from its link set; everything else, including
/// targets outside the directory, is passed through raw.
pub fn extract_corpus(dir: &Path) -> Result<FxHashMap<String, FxHashSet<String>>> {
    let mut pages: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") || !entry.file_type()?.is_file() {
            continue;
        }

        let contents = fs::read_to_string(entry.path())?;
        let mut links: FxHashSet<String> = HREF
            .captures_iter(&contents)
            .map(|capture| capture[1].to_string())
            .collect();
        links.remove(&name);

        pages.insert(name, links);
    }

    debug!(pages = pages.len(), "extracted corpus directory");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::csr::Corpus;
    use crate::error::RankError;
    use crate::rank::iterative::IterativePageRank;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) {
        let mut file = fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_extracts_anchor_hrefs() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "1.html",
            r#"<html><body><a href="2.html">two</a> <a class="x" href="3.html">three</a></body></html>"#,
        );
        write_file(&dir, "2.html", r#"<a href="1.html">one</a>"#);
        write_file(&dir, "3.html", "<html><body>no links</body></html>");

        let raw = extract_corpus(dir.path()).unwrap();

        assert_eq!(raw.len(), 3);
        assert!(raw["1.html"].contains("2.html"));
        assert!(raw["1.html"].contains("3.html"));
        assert!(raw["3.html"].is_empty());
    }

    #[test]
    fn test_ignores_non_html_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "page.html", r#"<a href="notes.txt">notes</a>"#);
        write_file(&dir, "notes.txt", r#"<a href="page.html">back</a>"#);

        let raw = extract_corpus(dir.path()).unwrap();

        assert_eq!(raw.len(), 1);
        // The raw mapping still carries the target; the corpus builder
        // drops it for being outside the universe.
        assert!(raw["page.html"].contains("notes.txt"));
    }

    #[test]
    fn test_drops_own_filename() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "self.html",
            r#"<a href="self.html">me</a> <a href="other.html">other</a>"#,
        );

        let raw = extract_corpus(dir.path()).unwrap();

        assert!(!raw["self.html"].contains("self.html"));
        assert!(raw["self.html"].contains("other.html"));
    }

    #[test]
    fn test_href_outside_anchor_ignored() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "page.html",
            r#"<link href="style.css"><a href="real.html">real</a>"#,
        );

        let raw = extract_corpus(dir.path()).unwrap();

        assert_eq!(raw["page.html"].len(), 1);
        assert!(raw["page.html"].contains("real.html"));
    }

    #[test]
    fn test_missing_directory_errors() {
        let err = extract_corpus(Path::new("/no/such/corpus")).unwrap_err();
        assert!(matches!(err, RankError::Io(_)));
    }

    #[test]
    fn test_extracted_corpus_ranks_end_to_end() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.html", r#"<a href="b.html">b</a>"#);
        write_file(&dir, "b.html", r#"<a href="a.html">a</a>"#);

        let raw = extract_corpus(dir.path()).unwrap();
        let corpus = Corpus::from_raw_links(&raw).unwrap();
        let table = IterativePageRank::new().run(&corpus).unwrap();

        assert!(table.converged);
        assert!((table.sum() - 1.0).abs() < 1e-6);
        assert!((table.score(corpus.page_id("a.html").unwrap()) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_empty_directory_yields_empty_mapping() {
        let dir = TempDir::new().unwrap();
        let raw = extract_corpus(dir.path()).unwrap();
        assert!(raw.is_empty());
        // Downstream, corpus construction rejects the empty universe.
        assert!(matches!(
            Corpus::from_raw_links(&raw),
            Err(RankError::EmptyCorpus)
        ));
    }
}
