//! The path record: an airflow connection between two zones.

use bitflags::bitflags;

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;

bitflags! {
    /// Path flag bits, embedded directly as the integer `flags` field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PathFlags: u32 {
        /// Wind pressure applies to this path.
        const WIND = 0x0001;
        /// WPC file pressure.
        const WPC_P = 0x0002;
        /// WPC file contaminants.
        const WPC_C = 0x0004;
        /// AHS supply path.
        const AHS_S = 0x0008;
        /// AHS recirculation path.
        const AHS_R = 0x0010;
        /// AHS outside-air path.
        const AHS_O = 0x0020;
        /// AHS exhaust path.
        const AHS_X = 0x0040;
        /// Pressure-limited.
        const LIM_P = 0x0080;
        /// Flow-limited.
        const LIM_F = 0x0100;
        /// Constant-flow fan element.
        const FAN_F = 0x0200;
    }
}

/// A directed airflow connection between two zones (or zone and ambient)
/// via a flow element, with an optional CFD-coupling tail gated by `cfd`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub nr: i32,
    /// Raw flag word; see [`PathFlags`] for the named bits.
    pub flags: u32,
    /// Zone n index.
    pub pzn: i32,
    /// Zone m index.
    pub pzm: i32,
    /// Flow element index.
    pub pe: i32,
    /// Filter index.
    pub pf: i32,
    /// Wind coefficients index.
    pub pw: i32,
    /// AHS index.
    pub pa: i32,
    /// Schedule index.
    pub ps: i32,
    /// Control node index.
    pub pc: i32,
    /// Level index.
    pub pld: i32,
    pub x: Rx,
    pub y: Rx,
    pub rel_ht: Rx,
    pub mult: Rx,
    pub w_pset: Rx,
    pub w_pmod: Rx,
    pub wazm: Rx,
    pub fahs: Rx,
    pub xmax: Rx,
    pub xmin: Rx,
    pub icon: u32,
    pub dir: u32,
    pub u_ht: i32,
    pub u_xy: i32,
    pub u_dp: i32,
    pub u_f: i32,
    pub cfd: i32,
    pub cfd_name: String,
    pub cfd_ptype: i32,
    pub cfd_btype: i32,
    pub cfd_capp: i32,
}

impl Path {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let mut path = Self {
            nr: input.read_int()?,
            flags: input.read_uint()?,
            pzn: input.read_int()?,
            pzm: input.read_int()?,
            pe: input.read_int()?,
            pf: input.read_int()?,
            pw: input.read_int()?,
            pa: input.read_int()?,
            ps: input.read_int()?,
            pc: input.read_int()?,
            pld: input.read_int()?,
            x: input.read_number()?,
            y: input.read_number()?,
            rel_ht: input.read_number()?,
            mult: input.read_number()?,
            w_pset: input.read_number()?,
            w_pmod: input.read_number()?,
            wazm: input.read_number()?,
            fahs: input.read_number()?,
            xmax: input.read_number()?,
            xmin: input.read_number()?,
            icon: input.read_uint()?,
            dir: input.read_uint()?,
            u_ht: input.read_int()?,
            u_xy: input.read_int()?,
            u_dp: input.read_int()?,
            u_f: input.read_int()?,
            cfd: input.read_int()?,
            ..Self::default()
        };
        if path.cfd != 0 {
            path.cfd_name = input.read_string()?;
            path.cfd_ptype = input.read_int()?;
            path.cfd_btype = input.read_int()?;
            path.cfd_capp = input.read_int()?;
        }
        Ok(path)
    }

    pub fn write(&self) -> String {
        let mut out = format!(
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            self.nr,
            self.flags,
            self.pzn,
            self.pzm,
            self.pe,
            self.pf,
            self.pw,
            self.pa,
            self.ps,
            self.pc,
            self.pld,
            self.x,
            self.y,
            self.rel_ht,
            self.mult,
            self.w_pset,
            self.w_pmod,
            self.wazm,
            self.fahs,
            self.xmax,
            self.xmin,
            self.icon,
            self.dir,
            self.u_ht,
            self.u_xy,
            self.u_dp,
            self.u_f,
            self.cfd
        );
        if self.cfd != 0 {
            out.push_str(&format!(
                " {} {} {} {}",
                self.cfd_name, self.cfd_ptype, self.cfd_btype, self.cfd_capp
            ));
        }
        out.push('\n');
        out
    }

    pub fn path_flags(&self) -> PathFlags {
        PathFlags::from_bits_retain(self.flags)
    }

    fn set_flag(&mut self, flag: PathFlags, on: bool) {
        let mut flags = self.path_flags();
        flags.set(flag, on);
        self.flags = flags.bits();
    }

    pub fn wind_pressure(&self) -> bool {
        self.path_flags().contains(PathFlags::WIND)
    }

    pub fn set_wind_pressure(&mut self, on: bool) {
        self.set_flag(PathFlags::WIND, on);
    }

    pub fn system_supply(&self) -> bool {
        self.path_flags().contains(PathFlags::AHS_S)
    }

    pub fn set_system_supply(&mut self, on: bool) {
        self.set_flag(PathFlags::AHS_S, on);
    }

    pub fn recirculation(&self) -> bool {
        self.path_flags().contains(PathFlags::AHS_R)
    }

    pub fn set_recirculation(&mut self, on: bool) {
        self.set_flag(PathFlags::AHS_R, on);
    }

    pub fn outside_air(&self) -> bool {
        self.path_flags().contains(PathFlags::AHS_O)
    }

    pub fn set_outside_air(&mut self, on: bool) {
        self.set_flag(PathFlags::AHS_O, on);
    }

    pub fn exhaust(&self) -> bool {
        self.path_flags().contains(PathFlags::AHS_X)
    }

    pub fn set_exhaust(&mut self, on: bool) {
        self.set_flag(PathFlags::AHS_X, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str =
        "1 0 1 -1 1 0 0 0 0 0 1 0 0 1.5 1 0 0 0 0 0 0 23 4 0 0 0 0 0\n";

    #[test]
    fn test_plain_path_roundtrip() {
        let mut reader = Reader::new(PLAIN);
        let path = Path::read(&mut reader).unwrap();
        assert_eq!(path.pzn, 1);
        assert_eq!(path.pzm, -1);
        assert_eq!(path.rel_ht.as_str(), "1.5");
        assert_eq!(path.icon, 23);
        assert_eq!(path.cfd, 0);
        assert_eq!(path.write(), PLAIN);
    }

    #[test]
    fn test_cfd_tail_roundtrip() {
        let text = "2 1 1 2 1 0 0 0 0 0 1 0 0 1.5 1 0 0 0 0 0 0 23 4 0 0 0 0 1 opening 0 1 2\n";
        let mut reader = Reader::new(text);
        let path = Path::read(&mut reader).unwrap();
        assert_eq!(path.cfd_name, "opening");
        assert_eq!(path.cfd_capp, 2);
        assert_eq!(path.write(), text);
    }

    #[test]
    fn test_ahs_role_accessors() {
        let mut path = Path::default();
        path.set_system_supply(true);
        assert_eq!(path.flags, 0x0008);
        path.set_exhaust(true);
        assert_eq!(path.flags, 0x0048);
        path.set_system_supply(false);
        assert_eq!(path.flags, 0x0040);
        assert!(path.exhaust());
        assert!(!path.recirculation());
        assert!(!path.outside_air());
    }

    #[test]
    fn test_wind_bit() {
        let mut path = Path { flags: 0x0200, ..Path::default() };
        assert!(!path.wind_pressure());
        path.set_wind_pressure(true);
        assert_eq!(path.flags, 0x0201);
    }
}
