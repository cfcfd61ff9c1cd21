//! The species record: a simulated or tracked contaminant.

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;

/// A contaminant with its physical constants and display metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Species {
    pub nr: i32,
    /// Simulated flag.
    pub sflag: i32,
    /// Non-trace flag.
    pub ntflag: i32,
    pub molwt: Rx,
    pub mdiam: Rx,
    pub edens: Rx,
    pub decay: Rx,
    pub dm: Rx,
    pub ccdef: Rx,
    /// Specific heat. Unused by the simulation but round-trippable.
    pub cp: Rx,
    pub ucc: i32,
    pub umd: i32,
    pub ued: i32,
    pub udm: i32,
    pub ucp: i32,
    pub name: String,
    pub desc: String,
}

impl Species {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            nr: input.read_int()?,
            sflag: input.read_int()?,
            ntflag: input.read_int()?,
            molwt: input.read_number()?,
            mdiam: input.read_number()?,
            edens: input.read_number()?,
            decay: input.read_number()?,
            dm: input.read_number()?,
            ccdef: input.read_number()?,
            cp: input.read_number()?,
            ucc: input.read_int()?,
            umd: input.read_int()?,
            ued: input.read_int()?,
            udm: input.read_int()?,
            ucp: input.read_int()?,
            name: input.read_string()?,
            desc: input.read_line()?,
        })
    }

    pub fn write(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}\n{}\n",
            self.nr,
            self.sflag,
            self.ntflag,
            self.molwt,
            self.mdiam,
            self.edens,
            self.decay,
            self.dm,
            self.ccdef,
            self.cp,
            self.ucc,
            self.umd,
            self.ued,
            self.udm,
            self.ucp,
            self.name,
            self.desc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_roundtrip() {
        let text = "1 1 0 44.01 0 0 0 2e-05 0 0 0 0 0 0 0 CO2\nCarbon dioxide tracer\n";
        let mut reader = Reader::new(text);
        let species = Species::read(&mut reader).unwrap();
        assert_eq!(species.nr, 1);
        assert_eq!(species.molwt.as_str(), "44.01");
        assert_eq!(species.name, "CO2");
        assert_eq!(species.desc, "Carbon dioxide tracer");
        assert_eq!(species.write(), text);
    }

    #[test]
    fn test_empty_description() {
        let text = "2 0 0 28.96 0 0 0 0 0 0 0 0 0 0 0 Air\n\n";
        let mut reader = Reader::new(text);
        let species = Species::read(&mut reader).unwrap();
        assert_eq!(species.desc, "");
        assert_eq!(species.write(), text);
    }

    #[test]
    fn test_unused_cp_preserved() {
        let text = "1 1 0 44.01 0 0 0 2e-05 0 1.2345 0 0 0 0 0 CO2\n\n";
        let mut reader = Reader::new(text);
        let species = Species::read(&mut reader).unwrap();
        assert_eq!(species.cp.as_str(), "1.2345");
        assert_eq!(species.write(), text);
    }
}
