//! Size conversion and formatting utilities.
//!
//! This module turns a user supplied magnitude and unit (like `100` + `"MB"`)
//! into a byte count, and formats byte counts back into human-readable
//! strings for display. All units are binary (1 KB = 1024 bytes).

use std::{fmt, str::FromStr};

use anyhow::{Result, bail};

/// Bytes in one kilobyte.
pub const KB: u64 = 1024;

/// Bytes in one megabyte.
pub const MB: u64 = KB * 1024;

/// Bytes in one gigabyte.
pub const GB: u64 = MB * 1024;

/// Unit used to express a size threshold.
///
/// Parsing via [`FromStr`] is case-insensitive, so `kb`, `Kb` and `KB` are
/// equivalent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SizeUnit {
    /// Kilobytes (1024 bytes)
    #[default]
    Kb,

    /// Megabytes (1024² bytes)
    Mb,

    /// Gigabytes (1024³ bytes)
    Gb,
}

impl SizeUnit {
    /// Number of bytes in one of this unit.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Kb => KB,
            Self::Mb => MB,
            Self::Gb => GB,
        }
    }
}

impl FromStr for SizeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "KB" => Ok(Self::Kb),
            "MB" => Ok(Self::Mb),
            "GB" => Ok(Self::Gb),
            _ => bail!("Invalid size unit '{s}': expected one of KB, MB, GB"),
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Kb => "KB",
            Self::Mb => "MB",
            Self::Gb => "GB",
        };
        f.write_str(label)
    }
}

/// A minimum file size, expressed as a magnitude and a unit.
///
/// Files must be strictly larger than [`SizeThreshold::bytes`] to match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SizeThreshold {
    /// The numeric part of the threshold
    pub magnitude: u64,

    /// The unit the magnitude is expressed in
    pub unit: SizeUnit,
}

impl SizeThreshold {
    /// Create a new threshold.
    #[must_use]
    pub const fn new(magnitude: u64, unit: SizeUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Resolve the threshold to a byte count.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte count would overflow `u64`.
    pub fn bytes(&self) -> Result<u64> {
        multiply_with_overflow_check(self.magnitude, self.unit.multiplier())
    }
}

impl fmt::Display for SizeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Convert a magnitude in the given unit into bytes.
///
/// The unit comparison is case-insensitive.
///
/// # Arguments
///
/// * `magnitude` - The numeric size value
/// * `unit` - One of `"KB"`, `"MB"` or `"GB"` in any letter case
///
/// # Errors
///
/// This function will return an error if:
/// - The unit is not one of KB, MB or GB
/// - The resulting value would overflow `u64`
///
/// # Examples
///
/// ```
/// # use find_big_files::utils::to_bytes;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// assert_eq!(to_bytes(2, "kb")?, 2_048);
/// assert_eq!(to_bytes(1, "MB")?, 1_048_576);
/// assert!(to_bytes(1, "TB").is_err());
/// # Ok(())
/// # }
/// ```
pub fn to_bytes(magnitude: u64, unit: &str) -> Result<u64> {
    let unit: SizeUnit = unit.parse()?;
    SizeThreshold::new(magnitude, unit).bytes()
}

/// Format a byte count using the largest unit it fills at least once.
///
/// Values of a kilobyte or more are shown with two decimal places
/// (`"1.50 MB"`); smaller values are shown as whole bytes (`"512 B"`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(size: u64) -> String {
    const TIERS: [(u64, &str); 3] = [(GB, "GB"), (MB, "MB"), (KB, "KB")];

    for (unit, label) in TIERS {
        if size >= unit {
            return format!("{:.2} {label}", size as f64 / unit as f64);
        }
    }

    format!("{size} B")
}

/// Multiply two values with overflow checking.
fn multiply_with_overflow_check(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b)
        .ok_or_else(|| anyhow::anyhow!("Size value overflow: {a} * {b}"))
}
