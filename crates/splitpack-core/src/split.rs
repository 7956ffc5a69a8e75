//! Output delivery units.

use serde::{Deserialize, Serialize};
use splitpack_schema::targeting::Targeting;

use crate::module::{ModuleContent, ModuleEntry};

/// Mutation a downstream collaborator applies to the parent module's
/// manifest when assembling the delivered set. The splitter only emits the
/// token; it never inspects or rewrites manifest content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestMutator {
    /// Mark the manifest as requiring split support at install time.
    RequireSplits,
}

/// One deliverable unit produced by partitioning, installed conditionally
/// based on device match against its targeting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    targeting: Targeting,
    master_split: bool,
    entries: Vec<ModuleEntry>,
    manifest_mutators: Vec<ManifestMutator>,
}

impl Split {
    /// Wrap a module unchanged into a single split (pass-through).
    pub fn of(module: &ModuleContent) -> Self {
        Self::new(
            module.targeting().clone(),
            module.is_master_split(),
            module.entries().to_vec(),
            Vec::new(),
        )
    }

    pub(crate) fn new(
        targeting: Targeting,
        master_split: bool,
        entries: Vec<ModuleEntry>,
        manifest_mutators: Vec<ManifestMutator>,
    ) -> Self {
        Self {
            targeting,
            master_split,
            entries,
            manifest_mutators,
        }
    }

    /// Targeting record the installer matches against the device.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Whether this split is installed regardless of device configuration.
    pub fn is_master_split(&self) -> bool {
        self.master_split
    }

    /// Entries carried by this split.
    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    /// Manifest mutations to apply when this split is part of the set.
    pub fn manifest_mutators(&self) -> &[ManifestMutator] {
        &self.manifest_mutators
    }
}
