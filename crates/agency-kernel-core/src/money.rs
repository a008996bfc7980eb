use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whole-dollar amount.
///
/// Display strings such as `"$15,000"` are parsed once at ingest; every sum and ratio
/// works on the integer value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Currency(pub i64);

impl Currency {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn dollars(self) -> i64 {
        self.0
    }

    /// Parse a display amount: one leading `$` is stripped, every `,` is removed, and
    /// the remainder must be an optional `-` followed by base-10 digits.
    ///
    /// Locale variants (`.` grouping, non-breaking spaces), a leading `+`, and `-$5`
    /// style negatives are not recognised and yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let unsigned = value.strip_prefix('$').unwrap_or(value);
        let digits = unsigned.replace(',', "");
        let magnitude = digits.strip_prefix('-').unwrap_or(digits.as_str());
        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i64>().ok().map(Self)
    }

    /// Amount in thousands with one decimal, e.g. `$9.9K`.
    #[must_use]
    pub fn compact(self) -> String {
        format!("${}", format_thousands(self.0))
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Display for Currency {
    // Negative amounts render as `$-1,250` so the output parses back under `parse`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "${sign}{}", group_thousands(self.0.unsigned_abs()))
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed currency {text:?}")))
    }
}

/// Non-negative count shown with a `K`/`M` suffix (`"125K"`, `"2.4K"`, `"1.5M"`).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Magnitude(pub u64);

impl Magnitude {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub fn count(self) -> u64 {
        self.0
    }

    /// Parse a decimal number with an optional `K` (thousand) or `M` (million) suffix.
    ///
    /// Fractional digits are only accepted when the suffix scales them to a whole
    /// count: `"2.4K"` is 2400, `"2.4"` is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let (number, scale) = match value.chars().last()? {
            'K' | 'k' => (&value[..value.len() - 1], 1_000_u64),
            'M' | 'm' => (&value[..value.len() - 1], 1_000_000_u64),
            _ => (value, 1_u64),
        };

        let (whole, fraction) = match number.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (number, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if number.contains('.') && fraction.is_empty() {
            return None;
        }

        let whole_value = whole.parse::<u64>().ok()?.checked_mul(scale)?;
        if fraction.is_empty() {
            return Some(Self(whole_value));
        }

        let fraction_len = u32::try_from(fraction.len()).ok()?;
        let divisor = 10_u64.checked_pow(fraction_len)?;
        if divisor > scale {
            return None;
        }
        let fraction_value = fraction.parse::<u64>().ok()?.checked_mul(scale / divisor)?;
        whole_value.checked_add(fraction_value).map(Self)
    }

    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let count = self.0;
        if count < 1_000 {
            return write!(f, "{count}");
        }

        let thousand_tenths = round_half_up(count, 100);
        if count < 1_000_000 && thousand_tenths < 10_000 {
            return write_tenths(f, thousand_tenths, "K");
        }
        write_tenths(f, round_half_up(count, 100_000), "M")
    }
}

impl Serialize for Magnitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Magnitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed magnitude {text:?}")))
    }
}

fn round_half_up(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit / 2)
}

fn write_tenths(f: &mut Formatter<'_>, tenths: u64, suffix: &str) -> std::fmt::Result {
    if tenths % 10 == 0 {
        write!(f, "{}{suffix}", tenths / 10)
    } else {
        write!(f, "{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// `round(value / 1000, 1)` with half-away-from-zero rounding, suffixed with `K`.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let value = i128::from(value);
    let mut tenths = value / 100;
    if (value % 100).abs() >= 50 {
        tenths += value.signum();
    }
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();
    format!("{sign}{}.{}K", tenths / 10, tenths % 10)
}

/// Percentage of `whole` represented by `part`; `None` when `whole` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share_of_total(part: i64, whole: i64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

/// Percentage of `whole` counts represented by `part`; `None` when `whole` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share_of_count(part: Magnitude, whole: Magnitude) -> Option<f64> {
    if whole.0 == 0 {
        return None;
    }
    Some(part.0 as f64 / whole.0 as f64 * 100.0)
}

#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}
