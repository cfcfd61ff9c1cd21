//! The air-handling system record.

use crate::error::Result;
use crate::reader::Reader;

/// An air-handling system: a supply/return/recirculation grouping of zones
/// and paths, referenced by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ahs {
    pub nr: i32,
    /// Return zone index.
    pub zone_r: i32,
    /// Supply zone index.
    pub zone_s: i32,
    /// Recirculation path index.
    pub path_r: i32,
    /// Outdoor-air path index.
    pub path_s: i32,
    /// Exhaust path index.
    pub path_x: i32,
    pub name: String,
    pub desc: String,
}

impl Ahs {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            nr: input.read_int()?,
            zone_r: input.read_int()?,
            zone_s: input.read_int()?,
            path_r: input.read_int()?,
            path_s: input.read_int()?,
            path_x: input.read_int()?,
            name: input.read_string()?,
            desc: input.read_line()?,
        })
    }

    pub fn write(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}\n{}\n",
            self.nr,
            self.zone_r,
            self.zone_s,
            self.path_r,
            self.path_s,
            self.path_x,
            self.name,
            self.desc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahs_roundtrip() {
        let text = "1 2 3 4 5 6 AHS1\nMain air handler\n";
        let mut reader = Reader::new(text);
        let ahs = Ahs::read(&mut reader).unwrap();
        assert_eq!(ahs.zone_r, 2);
        assert_eq!(ahs.path_x, 6);
        assert_eq!(ahs.write(), text);
    }
}
