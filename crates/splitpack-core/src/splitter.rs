//! Splits a module's native libraries by ABI.

use std::collections::BTreeSet;

use thiserror::Error;

use splitpack_schema::abi::Abi;
use splitpack_schema::targeting::{DimensionTargeting, Targeting};

use crate::module::{ModuleContent, ModuleEntry, TargetedDirectory};
use crate::split::{ManifestMutator, Split};

/// Errors produced while partitioning a module into splits.
///
/// Partitioning is all-or-nothing: an `Err` means no split was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// The 64-bit policy removed every ABI the module carries.
    #[error(
        "generation of 64-bit native libraries is disabled, \
         but the module contains only 64-bit native libraries"
    )]
    Only64BitLibraries,

    /// A native directory does not declare the ABI it was built for.
    #[error("native directory `{0}` has no ABI targeting")]
    MissingAbiTargeting(String),
}

/// Partitions one module into delivery splits along a single dimension.
pub trait ModuleSplitter {
    /// Split `module` into delivery units.
    ///
    /// The returned splits carry disjoint entry sets whose union is
    /// exactly the module's entries, except for content dropped by an
    /// explicit policy (e.g. excluded 64-bit libraries).
    ///
    /// # Errors
    ///
    /// Returns a [`SplitError`] and no splits when the module cannot be
    /// partitioned under the splitter's configuration.
    fn split(&self, module: &ModuleContent) -> Result<Vec<Split>, SplitError>;
}

/// Splits the native libraries in a module by ABI.
///
/// Each retained ABI yields one non-master split whose targeting extends
/// the module's own targeting with that ABI as primary and every other
/// retained ABI as alternative. Entries not under any native directory are
/// re-emitted in a final split with the module's original targeting.
#[derive(Debug, Clone)]
pub struct AbiSplitter {
    include_64_bit: bool,
}

impl AbiSplitter {
    /// Create a splitter. `include_64_bit` controls whether 64-bit
    /// architectures are retained in the output or dropped entirely.
    pub fn new(include_64_bit: bool) -> Self {
        Self { include_64_bit }
    }
}

impl Default for AbiSplitter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ModuleSplitter for AbiSplitter {
    fn split(&self, module: &ModuleContent) -> Result<Vec<Split>, SplitError> {
        let Some(native) = module.native_libraries() else {
            return Ok(vec![Split::of(module)]);
        };

        // Group directories by their targeting, keeping first-seen order.
        // Only the ABI dimension varies across native directories, so
        // structural equality is a sufficient grouping key.
        let mut groups: Vec<(&Targeting, Vec<&TargetedDirectory>)> = Vec::new();
        for directory in native.directories() {
            match groups
                .iter_mut()
                .find(|(targeting, _)| *targeting == directory.targeting())
            {
                Some((_, members)) => members.push(directory),
                None => groups.push((directory.targeting(), vec![directory])),
            }
        }

        let mut group_abis = Vec::with_capacity(groups.len());
        for (targeting, members) in &groups {
            let abi = targeting
                .abi
                .as_ref()
                .and_then(|t| t.values().iter().next().copied())
                .ok_or_else(|| SplitError::MissingAbiTargeting(members[0].path().to_string()))?;
            group_abis.push(abi);
        }

        // The exact set of ABIs that will be generated decides the
        // alternatives declared on every split.
        let generated: BTreeSet<Abi> = group_abis
            .iter()
            .copied()
            .filter(|abi| self.include_64_bit || !abi.is_64_bit())
            .collect();

        if generated.is_empty() && !self.include_64_bit {
            return Err(SplitError::Only64BitLibraries);
        }

        tracing::debug!(
            "splitting {} native directories across {} ABIs",
            native.directories().len(),
            generated.len()
        );

        // Entries not claimed by any ABI group are re-emitted at the end
        // in a split that keeps the module's own targeting. The claimed
        // markers guarantee every entry lands in exactly one place.
        let mut claimed = vec![false; module.entries().len()];
        let mut splits = Vec::new();

        for ((_, members), abi) in groups.iter().zip(&group_abis) {
            let mut indices = Vec::new();
            for directory in members {
                for (index, entry) in module.entries().iter().enumerate() {
                    if !claimed[index] && entry.is_under(directory.path()) {
                        claimed[index] = true;
                        indices.push(index);
                    }
                }
            }

            if self.include_64_bit || !abi.is_64_bit() {
                let alternatives = generated.iter().copied().filter(|other| other != abi);
                let targeting = module
                    .targeting()
                    .clone()
                    .with_abi(DimensionTargeting::new([*abi], alternatives));
                let entries = indices
                    .iter()
                    .map(|&index| module.entries()[index].clone())
                    .collect();
                splits.push(Split::new(
                    targeting,
                    false,
                    entries,
                    vec![ManifestMutator::RequireSplits],
                ));
            } else {
                tracing::debug!("dropping {} entries targeting {abi}", indices.len());
            }
        }

        let leftover: Vec<ModuleEntry> = module
            .entries()
            .iter()
            .zip(&claimed)
            .filter(|&(_, &was_claimed)| !was_claimed)
            .map(|(entry, _)| entry.clone())
            .collect();
        if !leftover.is_empty() {
            splits.push(Split::new(
                module.targeting().clone(),
                module.is_master_split(),
                leftover,
                Vec::new(),
            ));
        }

        Ok(splits)
    }
}
