//! Processor architectures (ABIs) of native code.

/// Processor architecture a native-code directory was compiled for.
///
/// The dashed spellings (`arm64-v8a`, `armeabi-v7a`) are the canonical
/// directory names inside a module, so [`Abi::as_str`] and the `FromStr`
/// impl round-trip through them.
///
/// # Example
///
/// ```
/// use splitpack_schema::Abi;
///
/// let abi: Abi = "arm64-v8a".parse().unwrap();
/// assert!(abi.is_64_bit());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Abi {
    /// Legacy 32-bit ARM without hardware floating point.
    #[serde(rename = "armeabi")]
    Armeabi,
    /// 32-bit ARM (ARMv7-A).
    #[serde(rename = "armeabi-v7a")]
    ArmeabiV7a,
    /// 64-bit ARM (ARMv8-A).
    #[serde(rename = "arm64-v8a")]
    Arm64V8a,
    /// 32-bit x86.
    #[serde(rename = "x86")]
    X86,
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 32-bit MIPS.
    #[serde(rename = "mips")]
    Mips,
    /// 64-bit MIPS.
    #[serde(rename = "mips64")]
    Mips64,
}

/// Error returned when a string does not name a known ABI.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ABI: {0}")]
pub struct ParseAbiError(String);

impl Abi {
    /// Canonical directory spelling of this ABI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armeabi => "armeabi",
            Self::ArmeabiV7a => "armeabi-v7a",
            Self::Arm64V8a => "arm64-v8a",
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Mips => "mips",
            Self::Mips64 => "mips64",
        }
    }

    /// Whether this is a 64-bit architecture, excludable via the splitter's
    /// 64-bit policy.
    pub fn is_64_bit(&self) -> bool {
        matches!(self, Self::Arm64V8a | Self::X86_64 | Self::Mips64)
    }
}

impl std::fmt::Display for Abi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Abi {
    type Err = ParseAbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "armeabi" => Ok(Self::Armeabi),
            "armeabi-v7a" => Ok(Self::ArmeabiV7a),
            "arm64-v8a" => Ok(Self::Arm64V8a),
            "x86" => Ok(Self::X86),
            "x86_64" => Ok(Self::X86_64),
            "mips" => Ok(Self::Mips),
            "mips64" => Ok(Self::Mips64),
            _ => Err(ParseAbiError(s.to_string())),
        }
    }
}
