//! The building level record and its icon list.

use std::fmt::Write as _;

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;
use crate::subobjects::Icon;

/// A building level: a reference height, a delta height, and the icons
/// drawn on its sketchpad. The icon count on the wire is recomputed from
/// the live icon list on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    pub nr: i32,
    pub refht: Rx,
    pub delht: Rx,
    pub u_rfht: i32,
    pub u_dlht: i32,
    pub name: String,
    pub icons: Vec<Icon>,
}

impl Level {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let nr = input.read_int()?;
        let refht = input.read_number()?;
        let delht = input.read_number()?;
        let nicon = input.read_int()?;
        let u_rfht = input.read_int()?;
        let u_dlht = input.read_int()?;
        let name = input.read_string()?;
        // Wire counts are untrusted; never preallocate from them.
        let mut icons = Vec::new();
        for _ in 0..nicon {
            icons.push(Icon::read(input)?);
        }
        Ok(Self {
            nr,
            refht,
            delht,
            u_rfht,
            u_dlht,
            name,
            icons,
        })
    }

    pub fn write(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {}",
            self.nr,
            self.refht,
            self.delht,
            self.icons.len(),
            self.u_rfht,
            self.u_dlht,
            self.name
        );
        for icon in &self.icons {
            out.push_str(&icon.write());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        let text = "1 0 3.0 2 0 0 <1>\n23 5 8 1\n14 9 8 0\n";
        let mut reader = Reader::new(text);
        let level = Level::read(&mut reader).unwrap();
        assert_eq!(level.name, "<1>");
        assert_eq!(level.icons.len(), 2);
        assert_eq!(level.icons[0].nr, 1);
        assert_eq!(level.write(), text);
    }

    #[test]
    fn test_huge_icon_count_is_a_parse_error() {
        let text = "1 0 3.0 2000000000 0 0 <1>\n23 5 8 1\n";
        let mut reader = Reader::new(text);
        assert!(matches!(
            Level::read(&mut reader),
            Err(crate::error::PrjError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_icon_count_recomputed() {
        let mut level = Level {
            nr: 2,
            delht: Rx::parse("3.0").unwrap(),
            name: "<2>".to_owned(),
            ..Level::default()
        };
        level.icons.push(Icon {
            icon: 23,
            col: 1,
            row: 2,
            nr: 1,
        });
        let text = level.write();
        assert!(text.starts_with("2 0 3.0 1 0 0 <2>\n"));
        let mut reader = Reader::new(&text);
        assert_eq!(Level::read(&mut reader).unwrap(), level);
    }
}
