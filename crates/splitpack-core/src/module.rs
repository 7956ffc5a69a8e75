//! In-memory model of a module's contents.
//!
//! Read-only inputs to the splitters: the splitter never mutates a
//! [`ModuleContent`], it only reads entries and directory targeting.

use serde::{Deserialize, Serialize};
use splitpack_schema::abi::Abi;
use splitpack_schema::targeting::{DimensionTargeting, Targeting};
use std::collections::HashSet;

/// A single file carried by a module, identified by its path relative to
/// the module root (e.g. `lib/arm64-v8a/libfoo.so`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleEntry {
    path: String,
}

impl ModuleEntry {
    /// Create an entry from its module-relative path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Module-relative path of this entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this entry sits under `dir`.
    ///
    /// The match respects path-component boundaries: `lib/x86_64/libz.so`
    /// is not under `lib/x86`.
    pub fn is_under(&self, dir: &str) -> bool {
        let dir = dir.trim_end_matches('/');
        self.path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl std::fmt::Display for ModuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// One native-code directory and the targeting it was built for.
///
/// Native directories target exactly the ABI dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedDirectory {
    path: String,
    targeting: Targeting,
}

impl TargetedDirectory {
    /// Directory holding native libraries built for a single ABI.
    pub fn for_abi(path: impl Into<String>, abi: Abi) -> Self {
        Self::new(
            path,
            Targeting::default().with_abi(DimensionTargeting::of(abi)),
        )
    }

    /// Directory with an arbitrary targeting record.
    pub fn new(path: impl Into<String>, targeting: Targeting) -> Self {
        Self {
            path: path.into(),
            targeting,
        }
    }

    /// Module-relative path of the directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Targeting record of the directory.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }
}

/// Native-library configuration: the targeted directories of one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeLibraries {
    directories: Vec<TargetedDirectory>,
}

impl NativeLibraries {
    /// Configuration over the given directories, in declaration order.
    pub fn new(directories: impl IntoIterator<Item = TargetedDirectory>) -> Self {
        Self {
            directories: directories.into_iter().collect(),
        }
    }

    /// Targeted directories in declaration order.
    pub fn directories(&self) -> &[TargetedDirectory] {
        &self.directories
    }
}

/// Read-only contents of one module: its targeting so far, whether it is
/// the master (always-installed) unit, its file entries, and the optional
/// native-library configuration.
///
/// Entries are kept in insertion order with duplicate paths removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContent {
    targeting: Targeting,
    master_split: bool,
    entries: Vec<ModuleEntry>,
    native_libraries: Option<NativeLibraries>,
}

impl ModuleContent {
    /// Empty module with the given targeting and master flag.
    pub fn new(targeting: Targeting, master_split: bool) -> Self {
        Self {
            targeting,
            master_split,
            entries: Vec::new(),
            native_libraries: None,
        }
    }

    /// Set the module's entries, deduplicating by path and keeping the
    /// first occurrence's position.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = ModuleEntry>) -> Self {
        let mut seen = HashSet::new();
        self.entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.path().to_string()))
            .collect();
        self
    }

    /// Attach a native-library configuration.
    pub fn with_native_libraries(mut self, native: NativeLibraries) -> Self {
        self.native_libraries = Some(native);
        self
    }

    /// Targeting of the module as a whole.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Whether this module is the always-installed master unit.
    pub fn is_master_split(&self) -> bool {
        self.master_split
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Entries located under `dir`, in entry order.
    pub fn entries_under<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a ModuleEntry> {
        self.entries.iter().filter(move |entry| entry.is_under(dir))
    }

    /// The native-library configuration, if the module has native code.
    pub fn native_libraries(&self) -> Option<&NativeLibraries> {
        self.native_libraries.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_under_respects_component_boundaries() {
        let entry = ModuleEntry::new("lib/x86_64/libz.so");
        assert!(entry.is_under("lib/x86_64"));
        assert!(entry.is_under("lib/x86_64/"));
        assert!(entry.is_under("lib"));
        assert!(!entry.is_under("lib/x86"));
        assert!(!entry.is_under("assets"));
    }

    #[test]
    fn test_entries_deduplicate_by_path() {
        let module = ModuleContent::new(Targeting::default(), true).with_entries([
            ModuleEntry::new("assets/a.txt"),
            ModuleEntry::new("assets/b.txt"),
            ModuleEntry::new("assets/a.txt"),
        ]);
        let paths: Vec<&str> = module.entries().iter().map(ModuleEntry::path).collect();
        assert_eq!(paths, vec!["assets/a.txt", "assets/b.txt"]);
    }

    #[test]
    fn test_entries_under_prefix_lookup() {
        let module = ModuleContent::new(Targeting::default(), true).with_entries([
            ModuleEntry::new("lib/x86/liba.so"),
            ModuleEntry::new("lib/x86_64/liba.so"),
            ModuleEntry::new("manifest/AndroidManifest.xml"),
        ]);
        let under: Vec<&str> = module
            .entries_under("lib/x86")
            .map(ModuleEntry::path)
            .collect();
        assert_eq!(under, vec!["lib/x86/liba.so"]);
    }
}
