//! The wind pressure profile record.

use std::fmt::Write as _;

use crate::error::Result;
use crate::reader::Reader;
use crate::subobjects::PressureCoefficientPoint;

/// A wind pressure profile: pressure coefficient as a function of wind
/// azimuth. The coefficient count on the wire is recomputed on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindPressureProfile {
    pub nr: i32,
    /// 1 linear, 2 cubic spline, 3 trigonometric.
    pub kind: i32,
    pub name: String,
    pub desc: String,
    pub coeffs: Vec<PressureCoefficientPoint>,
}

impl WindPressureProfile {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let nr = input.read_int()?;
        let npts = input.read_int()?;
        let kind = input.read_int()?;
        let name = input.read_string()?;
        let desc = input.read_line()?;
        // Wire counts are untrusted; never preallocate from them.
        let mut coeffs = Vec::new();
        for _ in 0..npts {
            coeffs.push(PressureCoefficientPoint::read(input)?);
        }
        Ok(Self {
            nr,
            kind,
            name,
            desc,
            coeffs,
        })
    }

    pub fn write(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {} {}",
            self.nr,
            self.coeffs.len(),
            self.kind,
            self.name
        );
        let _ = writeln!(out, "{}", self.desc);
        for coeff in &self.coeffs {
            out.push_str(&coeff.write());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_roundtrip() {
        let text = "1 4 1 Uniform\nFlat profile\n0 0.6\n90 -0.3\n180 -0.3\n270 -0.3\n";
        let mut reader = Reader::new(text);
        let profile = WindPressureProfile::read(&mut reader).unwrap();
        assert_eq!(profile.coeffs.len(), 4);
        assert_eq!(profile.coeffs[1].azm.value(), 90.0);
        assert_eq!(profile.coeffs[1].coef.as_str(), "-0.3");
        assert_eq!(profile.write(), text);
    }

    #[test]
    fn test_huge_coeff_count_is_a_parse_error() {
        let text = "1 2000000000 1 Broken\n\n0 0.6\n";
        let mut reader = Reader::new(text);
        assert!(matches!(
            WindPressureProfile::read(&mut reader),
            Err(crate::error::PrjError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_coeff_count_recomputed() {
        let text = "2 1 1 Single\n\n0 1\n";
        let mut reader = Reader::new(text);
        let mut profile = WindPressureProfile::read(&mut reader).unwrap();
        profile.coeffs.clear();
        assert!(profile.write().starts_with("2 0 1 Single\n"));
    }
}
