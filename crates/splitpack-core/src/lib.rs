//! Core library for Splitpack: the targeting closure and the splitter
//! that partitions one module into device-targeted delivery splits.

pub mod module;
pub mod split;
pub mod splitter;
pub mod targeting;

pub use module::{ModuleContent, ModuleEntry, NativeLibraries, TargetedDirectory};
pub use split::{ManifestMutator, Split};
pub use splitter::{AbiSplitter, ModuleSplitter, SplitError};
