// src/state.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};

/// Deduplication identity of an announcement: SHA-1 of title + link,
/// as 40 lowercase hex chars. Matches the format of the persisted file,
/// so fingerprints stay stable across runs.
pub fn fingerprint(title: &str, link: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(title.as_bytes());
    hasher.update(link.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// The set of fingerprints ever observed, persisted across runs as a JSON
/// array of hex strings. Append-only; entries are never expired.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeenSet {
    inner: HashSet<String>,
}

impl SeenSet {
    /// Load from `path`. A missing file is an empty set; an existing but
    /// malformed file is an error (the run aborts rather than silently
    /// re-notifying the whole listing).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading seen-set from {}", path.display()))?;
        let list: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seen-set {}", path.display()))?;
        Ok(Self {
            inner: list.into_iter().collect(),
        })
    }

    /// Persist the full set. Writes a sibling temp file and renames it into
    /// place so a crash mid-write cannot truncate the previous state.
    pub fn save(&self, path: &Path) -> Result<()> {
        let list: Vec<&String> = self.inner.iter().collect();
        let raw = serde_json::to_string(&list).context("serializing seen-set")?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .with_context(|| format!("writing seen-set to {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("replacing seen-set at {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, fp: &str) -> bool {
        self.inner.contains(fp)
    }

    pub fn insert(&mut self, fp: String) -> bool {
        self.inner.insert(fp)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic_and_distinct() {
        let a = fingerprint("2024 유튜브 제작 공고", "https://x/1");
        let b = fingerprint("2024 유튜브 제작 공고", "https://x/1");
        let c = fingerprint("도로 보수 공고", "https://x/2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 40);
        assert!(a
            .chars()
            .all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let set = SeenSet::load(&dir.path().join("seen.json")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");
        let mut set = SeenSet::default();
        set.insert(fingerprint("a", "https://x/1"));
        set.insert(fingerprint("b", "https://x/2"));
        set.save(&path).unwrap();
        let loaded = SeenSet::load(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(SeenSet::load(&path).is_err());
    }
}
