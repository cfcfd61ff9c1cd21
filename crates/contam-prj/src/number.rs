//! The real-number representation used by every physical field.
//!
//! PRJ files are an interchange format with external tools, and those tools
//! are sensitive to the numeric text they wrote: a field read as `30.0` must
//! be written back as `30.0`, not `30`. [`Rx`] therefore keeps the validated
//! token text verbatim and exposes the parsed value separately. Keeping the
//! representation behind this one type also means the precision of the whole
//! format can change without touching per-record code.

use std::fmt;

/// A real-valued field, stored as its exact decimal token.
#[derive(Debug, Clone)]
pub struct Rx {
    text: String,
    value: f64,
}

impl Rx {
    /// Build a value from a wire token. Returns `None` when the token is not
    /// a valid decimal number.
    pub fn parse(token: &str) -> Option<Self> {
        let value = token.parse::<f64>().ok()?;
        Some(Self {
            text: token.to_owned(),
            value,
        })
    }

    /// The parsed numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The exact token text, as it appears on the wire.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for Rx {
    fn default() -> Self {
        Self {
            text: "0".to_owned(),
            value: 0.0,
        }
    }
}

impl From<f64> for Rx {
    /// Canonical rendering: the shortest text that re-parses to the same
    /// value, which is what `f64`'s `Display` produces.
    fn from(value: f64) -> Self {
        Self {
            text: format!("{value}"),
            value,
        }
    }
}

impl fmt::Display for Rx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Equality is textual: two values that render differently are different
/// for round-trip purposes even when they parse to the same `f64`.
impl PartialEq for Rx {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Rx {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_token_text() {
        let rx = Rx::parse("30.0").unwrap();
        assert_eq!(rx.as_str(), "30.0");
        assert_eq!(rx.value(), 30.0);
        assert_eq!(rx.to_string(), "30.0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rx::parse("abc").is_none());
        assert!(Rx::parse("1.2.3").is_none());
        assert!(Rx::parse("").is_none());
    }

    #[test]
    fn test_scientific_notation() {
        let rx = Rx::parse("1e-05").unwrap();
        assert_eq!(rx.as_str(), "1e-05");
        assert_eq!(rx.value(), 1e-5);
    }

    #[test]
    fn test_default_is_zero() {
        let rx = Rx::default();
        assert_eq!(rx.as_str(), "0");
        assert_eq!(rx.value(), 0.0);
    }

    #[test]
    fn test_from_f64_reparses_to_same_value() {
        for v in [0.0, 1.5, -273.15, 101325.0, 1.0e-9] {
            let rx = Rx::from(v);
            assert_eq!(rx.as_str().parse::<f64>().unwrap(), v);
        }
    }

    #[test]
    fn test_equality_is_textual() {
        let a = Rx::parse("30.0").unwrap();
        let b = Rx::parse("30").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.value(), b.value());
    }
}
