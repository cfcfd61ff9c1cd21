//! The zone record: a modeled airspace.

use bitflags::bitflags;

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;

/// Marker token introducing the 1-D convection/diffusion axis tail.
const AXIS_MARKER: &str = "1D:";

bitflags! {
    /// Zone flag bits. The bit positions are part of the wire format: the
    /// whole set is embedded directly as the integer `flags` field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ZoneFlags: u32 {
        /// Variable pressure.
        const VAR_P = 0x0001;
        /// Variable contaminant concentrations.
        const VAR_C = 0x0002;
        /// Variable temperature.
        const VAR_T = 0x0004;
        /// System (air-handling) zone.
        const SYS_N = 0x0008;
        /// Unconditioned zone.
        const UNCZN = 0x0010;
        /// Conditioned-state set by user.
        const SETCZN = 0x0020;
        /// CFD zone.
        const CFDZN = 0x0040;
    }
}

/// A building airspace: room, shaft, or ambient.
///
/// The `cfd` and `cdaxis` flags gate two mutually exclusive optional tails,
/// with `cfd` taking priority; see [`Zone::read`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zone {
    pub nr: i32,
    /// Raw flag word; see [`ZoneFlags`] for the named bits.
    pub flags: u32,
    /// Week schedule index.
    pub ps: i32,
    /// Control node index.
    pub pc: i32,
    /// Kinetic reaction index.
    pub pk: i32,
    /// Building level index.
    pub pl: i32,
    pub rel_ht: Rx,
    pub vol: Rx,
    pub t0: Rx,
    pub p0: Rx,
    pub name: String,
    pub color: i32,
    pub u_ht: i32,
    pub u_v: i32,
    pub u_t: i32,
    pub u_p: i32,
    pub cdaxis: i32,
    pub cfd: i32,
    /// CFD zone id, present only when `cfd` is set.
    pub cfd_name: String,
    pub x1: Rx,
    pub y1: Rx,
    pub h1: Rx,
    pub x2: Rx,
    pub y2: Rx,
    pub h2: Rx,
    pub celldx: Rx,
    pub axial_d: Rx,
    pub u_ad: i32,
    pub u_l: i32,
}

impl Zone {
    /// Read a zone record. When `cfd` is set exactly one CFD zone id token
    /// follows; otherwise when `cdaxis` is set a literal `1D:` marker and
    /// ten axis fields follow; otherwise the record ends with `cfd`.
    pub fn read(input: &mut Reader) -> Result<Self> {
        let mut zone = Self {
            nr: input.read_int()?,
            flags: input.read_uint()?,
            ps: input.read_int()?,
            pc: input.read_int()?,
            pk: input.read_int()?,
            pl: input.read_int()?,
            rel_ht: input.read_number()?,
            vol: input.read_number()?,
            t0: input.read_number()?,
            p0: input.read_number()?,
            name: input.read_string()?,
            color: input.read_int()?,
            u_ht: input.read_int()?,
            u_v: input.read_int()?,
            u_t: input.read_int()?,
            u_p: input.read_int()?,
            cdaxis: input.read_int()?,
            cfd: input.read_int()?,
            ..Self::default()
        };
        if zone.cfd != 0 {
            zone.cfd_name = input.read_string()?;
        } else if zone.cdaxis != 0 {
            input.expect(AXIS_MARKER)?;
            zone.x1 = input.read_number()?;
            zone.y1 = input.read_number()?;
            zone.h1 = input.read_number()?;
            zone.x2 = input.read_number()?;
            zone.y2 = input.read_number()?;
            zone.h2 = input.read_number()?;
            zone.celldx = input.read_number()?;
            zone.axial_d = input.read_number()?;
            zone.u_ad = input.read_int()?;
            zone.u_l = input.read_int()?;
        }
        Ok(zone)
    }

    /// Render the record, mirroring the tail gating in [`Zone::read`].
    pub fn write(&self) -> String {
        let mut out = format!(
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            self.nr,
            self.flags,
            self.ps,
            self.pc,
            self.pk,
            self.pl,
            self.rel_ht,
            self.vol,
            self.t0,
            self.p0,
            self.name,
            self.color,
            self.u_ht,
            self.u_v,
            self.u_t,
            self.u_p,
            self.cdaxis,
            self.cfd
        );
        if self.cfd != 0 {
            out.push(' ');
            out.push_str(&self.cfd_name);
        } else if self.cdaxis != 0 {
            out.push_str(&format!(
                " {AXIS_MARKER} {} {} {} {} {} {} {} {} {} {}",
                self.x1,
                self.y1,
                self.h1,
                self.x2,
                self.y2,
                self.h2,
                self.celldx,
                self.axial_d,
                self.u_ad,
                self.u_l
            ));
        }
        out.push('\n');
        out
    }

    pub fn zone_flags(&self) -> ZoneFlags {
        ZoneFlags::from_bits_retain(self.flags)
    }

    fn set_flag(&mut self, flag: ZoneFlags, on: bool) {
        let mut flags = self.zone_flags();
        flags.set(flag, on);
        self.flags = flags.bits();
    }

    pub fn variable_pressure(&self) -> bool {
        self.zone_flags().contains(ZoneFlags::VAR_P)
    }

    pub fn set_variable_pressure(&mut self, on: bool) {
        self.set_flag(ZoneFlags::VAR_P, on);
    }

    pub fn variable_contaminants(&self) -> bool {
        self.zone_flags().contains(ZoneFlags::VAR_C)
    }

    pub fn set_variable_contaminants(&mut self, on: bool) {
        self.set_flag(ZoneFlags::VAR_C, on);
    }

    pub fn system_zone(&self) -> bool {
        self.zone_flags().contains(ZoneFlags::SYS_N)
    }

    pub fn set_system_zone(&mut self, on: bool) {
        self.set_flag(ZoneFlags::SYS_N, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "1 0 0 0 0 0 2.5 30.0 293.15 101325.0 Zone1 0 0 0 0 0 0 0\n";

    #[test]
    fn test_plain_zone_roundtrip() {
        let mut reader = Reader::new(PLAIN);
        let zone = Zone::read(&mut reader).unwrap();
        assert_eq!(zone.nr, 1);
        assert_eq!(zone.vol.value(), 30.0);
        assert_eq!(zone.name, "Zone1");
        assert_eq!(zone.cfd, 0);
        assert_eq!(zone.cdaxis, 0);
        assert_eq!(zone.write(), PLAIN);
    }

    #[test]
    fn test_cdaxis_tail_roundtrip() {
        let text =
            "2 3 0 0 0 1 0 24.0 293.15 0 Shaft -1 0 0 0 0 1 0 1D: 0 0 0 0 0 3.0 0.1 1e-05 0 0\n";
        let mut reader = Reader::new(text);
        let zone = Zone::read(&mut reader).unwrap();
        assert_eq!(zone.cdaxis, 1);
        assert_eq!(zone.celldx.as_str(), "0.1");
        assert_eq!(zone.axial_d.as_str(), "1e-05");
        assert_eq!(zone.write(), text);
    }

    #[test]
    fn test_cdaxis_requires_marker() {
        let text = "2 3 0 0 0 1 0 24.0 293.15 0 Shaft -1 0 0 0 0 1 0 0 0 0 0 0 3.0 0.1 1e-05 0 0\n";
        let mut reader = Reader::new(text);
        assert!(Zone::read(&mut reader).is_err());
    }

    #[test]
    fn test_cfd_takes_priority_over_cdaxis() {
        // Both flags set: only the CFD zone id is expected and emitted.
        let text = "3 0 0 0 0 1 0 24.0 293.15 0 Lab -1 0 0 0 0 1 1 cfdzone\n";
        let mut reader = Reader::new(text);
        let zone = Zone::read(&mut reader).unwrap();
        assert_eq!(zone.cfd_name, "cfdzone");
        assert_eq!(zone.celldx, Rx::default());
        assert_eq!(zone.write(), text);
    }

    #[test]
    fn test_flag_accessors_preserve_unknown_bits() {
        let mut zone = Zone {
            flags: 0x1000 | 0x0002,
            ..Zone::default()
        };
        assert!(zone.variable_contaminants());
        assert!(!zone.variable_pressure());
        zone.set_variable_pressure(true);
        zone.set_variable_contaminants(false);
        assert_eq!(zone.flags, 0x1000 | 0x0001);
    }
}
