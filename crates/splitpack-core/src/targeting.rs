//! Operations over targeting records: dimension extraction, the
//! alternatives closure, and effective SDK bounds.

use std::collections::BTreeSet;

use splitpack_schema::targeting::{Dimension, DimensionTargeting, SdkVersionTargeting, Targeting};

/// Lowest platform API level; the effective lower bound of a record with
/// no SDK constraint.
pub const DEFAULT_MIN_SDK: u32 = 1;

/// Returns the set of dimensions a record actually constrains.
///
/// A dimension counts as constrained when the record carries a non-empty
/// primary or alternatives set for it. The default record yields the
/// empty set.
pub fn targeting_dimensions(targeting: &Targeting) -> BTreeSet<Dimension> {
    let mut dimensions = BTreeSet::new();
    if targeting.abi.as_ref().is_some_and(|t| !t.is_empty()) {
        dimensions.insert(Dimension::Abi);
    }
    if targeting.language.as_ref().is_some_and(|t| !t.is_empty()) {
        dimensions.insert(Dimension::Language);
    }
    if targeting
        .texture_format
        .as_ref()
        .is_some_and(|t| !t.is_empty())
    {
        dimensions.insert(Dimension::TextureCompressionFormat);
    }
    if targeting
        .graphics_api
        .as_ref()
        .is_some_and(|t| !t.is_empty())
    {
        dimensions.insert(Dimension::GraphicsApi);
    }
    if targeting.sdk_version.as_ref().is_some_and(|t| !t.is_empty()) {
        dimensions.insert(Dimension::SdkVersion);
    }
    if targeting
        .screen_density
        .as_ref()
        .is_some_and(|t| !t.is_empty())
    {
        dimensions.insert(Dimension::ScreenDensity);
    }
    dimensions
}

/// Computes the closed, symmetric variant set for `dimension`.
///
/// Collects the distinct primary values across `records`, then emits one
/// fresh record per value whose alternatives are every other value in the
/// universe. Alternatives carried by the inputs are discarded on purpose:
/// upstream producers may supply incomplete or stale sets, so the closure
/// derives them from the observed value universe instead. Records that do
/// not constrain `dimension` contribute nothing.
///
/// Output records constrain only `dimension` and are emitted in value
/// order, so the result is deterministic for a fixed input.
pub fn close_alternatives(records: &[Targeting], dimension: Dimension) -> Vec<Targeting> {
    match dimension {
        Dimension::Abi => close(records, |t| t.abi.as_ref(), Targeting::with_abi),
        Dimension::Language => close(records, |t| t.language.as_ref(), Targeting::with_language),
        Dimension::TextureCompressionFormat => close(
            records,
            |t| t.texture_format.as_ref(),
            Targeting::with_texture_format,
        ),
        Dimension::GraphicsApi => close(
            records,
            |t| t.graphics_api.as_ref(),
            Targeting::with_graphics_api,
        ),
        Dimension::SdkVersion => close(
            records,
            |t| t.sdk_version.as_ref(),
            Targeting::with_sdk_version,
        ),
        Dimension::ScreenDensity => close(
            records,
            |t| t.screen_density.as_ref(),
            Targeting::with_screen_density,
        ),
    }
}

fn close<T, G, S>(records: &[Targeting], get: G, set: S) -> Vec<Targeting>
where
    T: Ord + Clone,
    G: Fn(&Targeting) -> Option<&DimensionTargeting<T>>,
    S: Fn(Targeting, DimensionTargeting<T>) -> Targeting,
{
    let universe: BTreeSet<&T> = records
        .iter()
        .filter_map(&get)
        .flat_map(|t| t.values().iter())
        .collect();

    universe
        .iter()
        .map(|value| {
            let alternatives = universe
                .iter()
                .filter(|other| *other != value)
                .map(|other| (*other).clone());
            set(
                Targeting::default(),
                DimensionTargeting::new([(*value).clone()], alternatives),
            )
        })
        .collect()
}

/// Effective minimum API level of an SDK targeting record.
pub fn min_sdk(sdk: &SdkVersionTargeting) -> u32 {
    sdk.values()
        .iter()
        .min()
        .copied()
        .unwrap_or(DEFAULT_MIN_SDK)
}

/// Effective upper API-level bound of an SDK targeting record.
///
/// Returns the smallest alternative strictly greater than the record's own
/// minimum primary value; `u32::MAX` when the record is unset, has no
/// alternatives, or is itself the topmost variant (every alternative below
/// the primary). Alternatives below the primary never bound it.
pub fn max_sdk(sdk: &SdkVersionTargeting) -> u32 {
    let Some(min) = sdk.values().iter().min().copied() else {
        return u32::MAX;
    };
    sdk.alternatives()
        .iter()
        .copied()
        .filter(|alt| *alt > min)
        .min()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitpack_schema::abi::Abi;
    use splitpack_schema::config::{Language, OpenGlVersion, TextureFormat};

    fn sdk_record(min: u32, alternatives: impl IntoIterator<Item = u32>) -> Targeting {
        Targeting::default().with_sdk_version(DimensionTargeting::new([min], alternatives))
    }

    #[test]
    fn test_dimensions_of_default_record() {
        assert!(targeting_dimensions(&Targeting::default()).is_empty());
    }

    #[test]
    fn test_dimensions_of_graphics_api() {
        let record = Targeting::default()
            .with_graphics_api(DimensionTargeting::of(OpenGlVersion::new(2, 3)));
        assert_eq!(
            targeting_dimensions(&record),
            BTreeSet::from([Dimension::GraphicsApi])
        );
    }

    #[test]
    fn test_dimensions_of_language() {
        let record =
            Targeting::default().with_language(DimensionTargeting::of(Language::new("en")));
        assert_eq!(
            targeting_dimensions(&record),
            BTreeSet::from([Dimension::Language])
        );
    }

    #[test]
    fn test_dimensions_of_texture_format() {
        let record =
            Targeting::default().with_texture_format(DimensionTargeting::of(TextureFormat::Atc));
        assert_eq!(
            targeting_dimensions(&record),
            BTreeSet::from([Dimension::TextureCompressionFormat])
        );
    }

    #[test]
    fn test_dimensions_of_abi() {
        let record = Targeting::default().with_abi(DimensionTargeting::of(Abi::Arm64V8a));
        assert_eq!(
            targeting_dimensions(&record),
            BTreeSet::from([Dimension::Abi])
        );
    }

    #[test]
    fn test_dimensions_of_merged_record() {
        let merged = Targeting::merge([
            &Targeting::default().with_texture_format(DimensionTargeting::of(TextureFormat::Atc)),
            &Targeting::default().with_abi(DimensionTargeting::new(
                [Abi::Arm64V8a, Abi::ArmeabiV7a],
                [],
            )),
            &Targeting::default()
                .with_graphics_api(DimensionTargeting::of(OpenGlVersion::new(3, 0))),
        ]);
        assert_eq!(
            targeting_dimensions(&merged),
            BTreeSet::from([
                Dimension::Abi,
                Dimension::TextureCompressionFormat,
                Dimension::GraphicsApi,
            ])
        );
    }

    #[test]
    fn test_dimensions_ignore_empty_targeting() {
        let record = Targeting::default().with_sdk_version(DimensionTargeting::default());
        assert!(targeting_dimensions(&record).is_empty());
    }

    #[test]
    fn test_close_alternatives_single_variant() {
        let closed = close_alternatives(&[sdk_record(1, [])], Dimension::SdkVersion);
        assert_eq!(closed, vec![sdk_record(1, [])]);
    }

    #[test]
    fn test_close_alternatives_disjoint_variants() {
        let closed = close_alternatives(
            &[sdk_record(21, [23]), sdk_record(23, [21])],
            Dimension::SdkVersion,
        );
        assert_eq!(closed, vec![sdk_record(21, [23]), sdk_record(23, [21])]);
    }

    #[test]
    fn test_close_alternatives_overlapping_variants() {
        // Stale and partial alternative hints collapse into the full
        // sibling universe per distinct primary value.
        let closed = close_alternatives(
            &[
                sdk_record(21, [25]),
                sdk_record(25, [21]),
                sdk_record(21, [23]),
                sdk_record(23, [21]),
            ],
            Dimension::SdkVersion,
        );
        assert_eq!(
            closed,
            vec![
                sdk_record(21, [23, 25]),
                sdk_record(23, [21, 25]),
                sdk_record(25, [21, 23]),
            ]
        );
    }

    #[test]
    fn test_close_alternatives_singleton_universe() {
        let closed = close_alternatives(&[sdk_record(21, [99])], Dimension::SdkVersion);
        assert_eq!(closed, vec![sdk_record(21, [])]);
    }

    #[test]
    fn test_close_alternatives_empty_input() {
        assert!(close_alternatives(&[], Dimension::SdkVersion).is_empty());
    }

    #[test]
    fn test_close_alternatives_on_abi_dimension() {
        let records = [
            Targeting::default().with_abi(DimensionTargeting::of(Abi::X86)),
            Targeting::default().with_abi(DimensionTargeting::of(Abi::Arm64V8a)),
        ];
        let closed = close_alternatives(&records, Dimension::Abi);
        assert_eq!(
            closed,
            vec![
                Targeting::default()
                    .with_abi(DimensionTargeting::new([Abi::Arm64V8a], [Abi::X86])),
                Targeting::default()
                    .with_abi(DimensionTargeting::new([Abi::X86], [Abi::Arm64V8a])),
            ]
        );
    }

    #[test]
    fn test_min_sdk_empty_targeting() {
        assert_eq!(min_sdk(&SdkVersionTargeting::default()), 1);
    }

    #[test]
    fn test_min_sdk_non_empty_targeting() {
        assert_eq!(min_sdk(&DimensionTargeting::new([21], [23])), 21);
    }

    #[test]
    fn test_max_sdk_empty_targeting() {
        assert_eq!(max_sdk(&SdkVersionTargeting::default()), u32::MAX);
    }

    #[test]
    fn test_max_sdk_bounded_by_alternative_above() {
        assert_eq!(max_sdk(&DimensionTargeting::new([21], [23])), 23);
    }

    #[test]
    fn test_max_sdk_topmost_variant_unbounded() {
        assert_eq!(max_sdk(&DimensionTargeting::new([23], [21])), u32::MAX);
    }

    #[test]
    fn test_max_sdk_no_alternatives_unbounded() {
        assert_eq!(max_sdk(&DimensionTargeting::new([21], [])), u32::MAX);
    }

    #[test]
    fn test_max_sdk_alternatives_straddle_primary() {
        // Alternatives below the primary never bound it; the smallest one
        // above does.
        assert_eq!(max_sdk(&DimensionTargeting::new([23], [21, 25])), 25);
        assert_eq!(max_sdk(&DimensionTargeting::new([23], [21, 25, 29])), 25);
    }
}
