//! Device-targeting records.
//!
//! A [`Targeting`] record describes which device-configuration values a
//! piece of content is intended for, one optional constraint per
//! [`Dimension`]. Records are immutable value objects: the partitioner
//! derives new records from old ones, it never mutates them in place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::abi::Abi;
use crate::config::{Language, OpenGlVersion, ScreenDensity, TextureFormat};

/// One axis of device variation that a targeting record can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Processor architecture of native code.
    Abi,
    /// Resource language.
    Language,
    /// Texture compression format of graphics assets.
    TextureCompressionFormat,
    /// Graphics API capability (OpenGL ES version).
    GraphicsApi,
    /// Platform API level.
    SdkVersion,
    /// Screen density bucket.
    ScreenDensity,
}

/// Primary values plus known alternatives along a single dimension.
///
/// `values` is what the owning record targets; `alternatives` are the
/// mutually exclusive sibling values served by other delivery units. The
/// two sets are disjoint: the constructor drops any alternative that is
/// also a primary value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionTargeting<T: Ord> {
    values: BTreeSet<T>,
    alternatives: BTreeSet<T>,
}

impl<T: Ord> DimensionTargeting<T> {
    /// Create a targeting set from primary values and alternatives,
    /// enforcing disjointness of the two sets.
    pub fn new(
        values: impl IntoIterator<Item = T>,
        alternatives: impl IntoIterator<Item = T>,
    ) -> Self {
        let values: BTreeSet<T> = values.into_iter().collect();
        let alternatives = alternatives
            .into_iter()
            .filter(|alt| !values.contains(alt))
            .collect();
        Self {
            values,
            alternatives,
        }
    }

    /// Targeting of a single primary value with no known alternatives.
    pub fn of(value: T) -> Self {
        Self::new([value], [])
    }

    /// Primary values of this targeting.
    pub fn values(&self) -> &BTreeSet<T> {
        &self.values
    }

    /// Sibling values served by other delivery units.
    pub fn alternatives(&self) -> &BTreeSet<T> {
        &self.alternatives
    }

    /// Whether this targeting constrains nothing at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.alternatives.is_empty()
    }
}

impl<T: Ord> Default for DimensionTargeting<T> {
    fn default() -> Self {
        Self {
            values: BTreeSet::new(),
            alternatives: BTreeSet::new(),
        }
    }
}

/// ABI-dimension targeting.
pub type AbiTargeting = DimensionTargeting<Abi>;
/// Language-dimension targeting.
pub type LanguageTargeting = DimensionTargeting<Language>;
/// Texture-compression-format targeting.
pub type TextureFormatTargeting = DimensionTargeting<TextureFormat>;
/// Graphics-API targeting (OpenGL ES versions).
pub type GraphicsApiTargeting = DimensionTargeting<OpenGlVersion>;
/// SDK-version (platform API level) targeting.
pub type SdkVersionTargeting = DimensionTargeting<u32>;
/// Screen-density targeting.
pub type ScreenDensityTargeting = DimensionTargeting<ScreenDensity>;

/// A device-targeting record.
///
/// The default record constrains no dimension and matches any device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Targeting {
    /// Processor-architecture constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<AbiTargeting>,
    /// Resource-language constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageTargeting>,
    /// Texture-compression-format constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_format: Option<TextureFormatTargeting>,
    /// Graphics-API constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics_api: Option<GraphicsApiTargeting>,
    /// Platform-API-level constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<SdkVersionTargeting>,
    /// Screen-density constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_density: Option<ScreenDensityTargeting>,
}

impl Targeting {
    /// Set the ABI constraint.
    pub fn with_abi(mut self, targeting: AbiTargeting) -> Self {
        self.abi = Some(targeting);
        self
    }

    /// Set the language constraint.
    pub fn with_language(mut self, targeting: LanguageTargeting) -> Self {
        self.language = Some(targeting);
        self
    }

    /// Set the texture-compression-format constraint.
    pub fn with_texture_format(mut self, targeting: TextureFormatTargeting) -> Self {
        self.texture_format = Some(targeting);
        self
    }

    /// Set the graphics-API constraint.
    pub fn with_graphics_api(mut self, targeting: GraphicsApiTargeting) -> Self {
        self.graphics_api = Some(targeting);
        self
    }

    /// Set the SDK-version constraint.
    pub fn with_sdk_version(mut self, targeting: SdkVersionTargeting) -> Self {
        self.sdk_version = Some(targeting);
        self
    }

    /// Set the screen-density constraint.
    pub fn with_screen_density(mut self, targeting: ScreenDensityTargeting) -> Self {
        self.screen_density = Some(targeting);
        self
    }

    /// Merge records by per-dimension union of primaries and alternatives.
    ///
    /// A dimension is present in the result iff it is present in at least
    /// one input; disjointness of the merged sets is re-established.
    pub fn merge<'a>(records: impl IntoIterator<Item = &'a Targeting>) -> Targeting {
        let mut merged = Targeting::default();
        for record in records {
            union_into(&mut merged.abi, record.abi.as_ref());
            union_into(&mut merged.language, record.language.as_ref());
            union_into(&mut merged.texture_format, record.texture_format.as_ref());
            union_into(&mut merged.graphics_api, record.graphics_api.as_ref());
            union_into(&mut merged.sdk_version, record.sdk_version.as_ref());
            union_into(&mut merged.screen_density, record.screen_density.as_ref());
        }
        merged
    }
}

fn union_into<T: Ord + Clone>(
    acc: &mut Option<DimensionTargeting<T>>,
    next: Option<&DimensionTargeting<T>>,
) {
    let Some(next) = next else { return };
    let merged = match acc.take() {
        Some(current) => DimensionTargeting::new(
            current.values().iter().chain(next.values()).cloned(),
            current
                .alternatives()
                .iter()
                .chain(next.alternatives())
                .cloned(),
        ),
        None => next.clone(),
    };
    *acc = Some(merged);
}
