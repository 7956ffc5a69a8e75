//! Configuration values for the non-ABI targeting dimensions.

use serde::{Deserialize, Serialize};

/// A normalized resource-language tag (e.g. `en`, `pt-br`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    /// Create a new language tag, normalizing the input to lowercase.
    pub fn new(tag: &str) -> Self {
        Self(tag.to_lowercase())
    }

    /// Return the normalized tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

/// Texture compression format of packaged graphics assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextureFormat {
    /// ETC1 with RGB8 textures.
    #[serde(rename = "etc1-rgb8")]
    Etc1Rgb8,
    /// Paletted textures.
    #[serde(rename = "paletted")]
    Paletted,
    /// 3Dc compressed textures.
    #[serde(rename = "3dc")]
    ThreeDc,
    /// ATC compressed textures.
    #[serde(rename = "atc")]
    Atc,
    /// LATC compressed textures.
    #[serde(rename = "latc")]
    Latc,
    /// DXT1 compressed textures.
    #[serde(rename = "dxt1")]
    Dxt1,
    /// S3TC compressed textures.
    #[serde(rename = "s3tc")]
    S3tc,
    /// PVRTC compressed textures.
    #[serde(rename = "pvrtc")]
    Pvrtc,
    /// ASTC compressed textures.
    #[serde(rename = "astc")]
    Astc,
    /// ETC2 compressed textures.
    #[serde(rename = "etc2")]
    Etc2,
}

/// An OpenGL ES version, ordered by (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OpenGlVersion {
    /// Major version number.
    pub major: u16,
    /// Minor version number.
    pub minor: u16,
}

impl OpenGlVersion {
    /// Create a version from its major and minor components.
    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for OpenGlVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Screen density bucket, ordered from lowest to highest density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenDensity {
    /// Low density (~120 dpi).
    Ldpi,
    /// Medium density (~160 dpi).
    Mdpi,
    /// TV density (~213 dpi).
    Tvdpi,
    /// High density (~240 dpi).
    Hdpi,
    /// Extra-high density (~320 dpi).
    Xhdpi,
    /// Extra-extra-high density (~480 dpi).
    Xxhdpi,
    /// Extra-extra-extra-high density (~640 dpi).
    Xxxhdpi,
}

impl ScreenDensity {
    /// Nominal dots-per-inch value of this bucket.
    pub fn dpi(&self) -> u16 {
        match self {
            Self::Ldpi => 120,
            Self::Mdpi => 160,
            Self::Tvdpi => 213,
            Self::Hdpi => 240,
            Self::Xhdpi => 320,
            Self::Xxhdpi => 480,
            Self::Xxxhdpi => 640,
        }
    }
}
