//! The run control record: the single project-header record.
//!
//! This is by far the widest record in the format: simulation mode
//! selection, convergence criteria for four distinct solvers, the date/time
//! window, output-file enables, a fixed 16-slot save-flags array, and a
//! count-prefixed list of extra values. Field order follows the file layout
//! exactly; several fields (such as `ccrelax`) are unused by current
//! simulators but still round-trip.

use std::fmt::Write as _;

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;
use crate::subobjects::WeatherData;

/// Project header and simulation run controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunControl {
    pub name: String,
    pub version: String,
    pub echo: i32,
    pub prjdesc: String,
    pub skheight: i32,
    pub skwidth: i32,
    pub def_units: i32,
    pub def_flows: i32,
    pub def_t: Rx,
    pub udef_t: i32,
    pub rel_n: Rx,
    pub wind_h: Rx,
    pub uw_h: i32,
    pub wind_ao: Rx,
    pub wind_a: Rx,
    pub scale: Rx,
    pub u_scale: i32,
    pub org_row: i32,
    pub org_col: i32,
    pub inv_yaxis: i32,
    pub show_geom: i32,
    pub ss_weather: WeatherData,
    pub wpt_weather: WeatherData,
    pub wth_path: String,
    pub ctm_path: String,
    pub cvf_path: String,
    pub dvf_path: String,
    pub wpc_file: String,
    pub ewc_file: String,
    pub wpc_desc: String,
    pub x0: Rx,
    pub y0: Rx,
    pub z0: Rx,
    pub angle: Rx,
    pub u_xyz: i32,
    pub eps_path: Rx,
    pub eps_spcs: Rx,
    pub t_shift: String,
    pub d_start: String,
    pub d_end: String,
    pub use_wpc_wp: i32,
    pub use_wpc_mf: i32,
    pub wpc_trig: i32,
    pub latd: Rx,
    pub lgtd: Rx,
    pub tznr: Rx,
    pub altd: Rx,
    pub tgrnd: Rx,
    pub utg: i32,
    pub u_a: i32,
    pub sim_af: i32,
    pub afcalc: i32,
    pub afmaxi: i32,
    pub afrcnvg: Rx,
    pub afacnvg: Rx,
    pub afrelax: Rx,
    pub uac2: i32,
    pub pres: Rx,
    pub u_pres: i32,
    pub afslae: i32,
    pub afrseq: i32,
    pub aflmaxi: i32,
    pub aflcnvg: Rx,
    pub aflinit: i32,
    pub tadj: i32,
    pub sim_mf: i32,
    pub ccmaxi: i32,
    pub ccrcnvg: Rx,
    pub ccacnvg: Rx,
    /// Unused by the solver but preserved on the wire.
    pub ccrelax: Rx,
    pub uccc: i32,
    pub mfnmthd: i32,
    pub mfnrseq: i32,
    pub mfnmaxi: i32,
    pub mfnrcnvg: Rx,
    pub mfnacnvg: Rx,
    pub mfnrelax: Rx,
    pub mfngamma: Rx,
    pub uccn: i32,
    pub mftmthd: i32,
    pub mftrseq: i32,
    pub mftmaxi: i32,
    pub mftrcnvg: Rx,
    pub mftacnvg: Rx,
    pub mftrelax: Rx,
    pub mftgamma: Rx,
    pub ucct: i32,
    pub mfvmthd: i32,
    pub mfvrseq: i32,
    pub mfvmaxi: i32,
    pub mfvrcnvg: Rx,
    pub mfvacnvg: Rx,
    pub mfvrelax: Rx,
    pub uccv: i32,
    pub mf_solver: i32,
    pub sim_1dz: i32,
    pub sim_1dd: i32,
    pub celldx: Rx,
    pub sim_vjt: i32,
    pub udx: i32,
    pub cvode_mth: i32,
    pub cvode_rcnvg: Rx,
    pub cvode_acnvg: Rx,
    pub cvode_dtmax: Rx,
    pub tsdens: i32,
    pub tsrelax: Rx,
    pub tsmaxi: i32,
    pub cnvg_ss: i32,
    pub dens_zp: i32,
    pub stack_d: i32,
    pub dod_mdt: i32,
    pub date_st: String,
    pub time_st: String,
    pub date_0: String,
    pub time_0: String,
    pub date_1: String,
    pub time_1: String,
    pub time_step: String,
    pub time_list: String,
    pub time_scrn: String,
    pub restart: i32,
    pub rstdate: String,
    pub rsttime: String,
    pub list: i32,
    pub do_dlg: i32,
    pub pfsave: i32,
    pub zfsave: i32,
    pub zcsave: i32,
    pub achvol: i32,
    pub achsave: i32,
    pub abwsave: i32,
    pub cbwsave: i32,
    pub expsave: i32,
    pub ebwsave: i32,
    pub zaasave: i32,
    pub zbwsave: i32,
    pub rzfsave: i32,
    pub rzmsave: i32,
    pub rz1save: i32,
    pub csmsave: i32,
    pub srfsave: i32,
    pub logsave: i32,
    /// Fixed 16-slot save-flags array; the format never counts it.
    pub save: [i32; 16],
    /// Extra values, count-prefixed on the wire. The count is recomputed
    /// from this vector on write, never cached from a previous read.
    pub rvals: Vec<Rx>,
    pub bldg_flow_z: i32,
    pub bldg_flow_d: i32,
    pub bldg_flow_c: i32,
    pub cfd_ctype: i32,
    pub cfd_convcpl: Rx,
    pub cfd_var: i32,
    pub cfd_zref: i32,
    pub cfd_imax: i32,
    pub cfd_dtcmo: i32,
}

impl RunControl {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let mut rc = Self {
            name: input.read_string()?,
            version: input.read_string()?,
            echo: input.read_int()?,
            prjdesc: input.read_line()?,
            skheight: input.read_int()?,
            skwidth: input.read_int()?,
            def_units: input.read_int()?,
            def_flows: input.read_int()?,
            def_t: input.read_number()?,
            udef_t: input.read_int()?,
            rel_n: input.read_number()?,
            wind_h: input.read_number()?,
            uw_h: input.read_int()?,
            wind_ao: input.read_number()?,
            wind_a: input.read_number()?,
            scale: input.read_number()?,
            u_scale: input.read_int()?,
            org_row: input.read_int()?,
            org_col: input.read_int()?,
            inv_yaxis: input.read_int()?,
            show_geom: input.read_int()?,
            ..Self::default()
        };
        rc.ss_weather = WeatherData::read(input)?;
        rc.wpt_weather = WeatherData::read(input)?;
        rc.wth_path = input.read_line()?;
        rc.ctm_path = input.read_line()?;
        rc.cvf_path = input.read_line()?;
        rc.dvf_path = input.read_line()?;
        rc.wpc_file = input.read_line()?;
        rc.ewc_file = input.read_line()?;
        rc.wpc_desc = input.read_line()?;
        rc.x0 = input.read_number()?;
        rc.y0 = input.read_number()?;
        rc.z0 = input.read_number()?;
        rc.angle = input.read_number()?;
        rc.u_xyz = input.read_int()?;
        rc.eps_path = input.read_number()?;
        rc.eps_spcs = input.read_number()?;
        rc.t_shift = input.read_string()?;
        rc.d_start = input.read_string()?;
        rc.d_end = input.read_string()?;
        rc.use_wpc_wp = input.read_int()?;
        rc.use_wpc_mf = input.read_int()?;
        rc.wpc_trig = input.read_int()?;
        rc.latd = input.read_number()?;
        rc.lgtd = input.read_number()?;
        rc.tznr = input.read_number()?;
        rc.altd = input.read_number()?;
        rc.tgrnd = input.read_number()?;
        rc.utg = input.read_int()?;
        rc.u_a = input.read_int()?;
        rc.sim_af = input.read_int()?;
        rc.afcalc = input.read_int()?;
        rc.afmaxi = input.read_int()?;
        rc.afrcnvg = input.read_number()?;
        rc.afacnvg = input.read_number()?;
        rc.afrelax = input.read_number()?;
        rc.uac2 = input.read_int()?;
        rc.pres = input.read_number()?;
        rc.u_pres = input.read_int()?;
        rc.afslae = input.read_int()?;
        rc.afrseq = input.read_int()?;
        rc.aflmaxi = input.read_int()?;
        rc.aflcnvg = input.read_number()?;
        rc.aflinit = input.read_int()?;
        rc.tadj = input.read_int()?;
        rc.sim_mf = input.read_int()?;
        rc.ccmaxi = input.read_int()?;
        rc.ccrcnvg = input.read_number()?;
        rc.ccacnvg = input.read_number()?;
        rc.ccrelax = input.read_number()?;
        rc.uccc = input.read_int()?;
        rc.mfnmthd = input.read_int()?;
        rc.mfnrseq = input.read_int()?;
        rc.mfnmaxi = input.read_int()?;
        rc.mfnrcnvg = input.read_number()?;
        rc.mfnacnvg = input.read_number()?;
        rc.mfnrelax = input.read_number()?;
        rc.mfngamma = input.read_number()?;
        rc.uccn = input.read_int()?;
        rc.mftmthd = input.read_int()?;
        rc.mftrseq = input.read_int()?;
        rc.mftmaxi = input.read_int()?;
        rc.mftrcnvg = input.read_number()?;
        rc.mftacnvg = input.read_number()?;
        rc.mftrelax = input.read_number()?;
        rc.mftgamma = input.read_number()?;
        rc.ucct = input.read_int()?;
        rc.mfvmthd = input.read_int()?;
        rc.mfvrseq = input.read_int()?;
        rc.mfvmaxi = input.read_int()?;
        rc.mfvrcnvg = input.read_number()?;
        rc.mfvacnvg = input.read_number()?;
        rc.mfvrelax = input.read_number()?;
        rc.uccv = input.read_int()?;
        rc.mf_solver = input.read_int()?;
        rc.sim_1dz = input.read_int()?;
        rc.sim_1dd = input.read_int()?;
        rc.celldx = input.read_number()?;
        rc.sim_vjt = input.read_int()?;
        rc.udx = input.read_int()?;
        rc.cvode_mth = input.read_int()?;
        rc.cvode_rcnvg = input.read_number()?;
        rc.cvode_acnvg = input.read_number()?;
        rc.cvode_dtmax = input.read_number()?;
        rc.tsdens = input.read_int()?;
        rc.tsrelax = input.read_number()?;
        rc.tsmaxi = input.read_int()?;
        rc.cnvg_ss = input.read_int()?;
        rc.dens_zp = input.read_int()?;
        rc.stack_d = input.read_int()?;
        rc.dod_mdt = input.read_int()?;
        rc.date_st = input.read_string()?;
        rc.time_st = input.read_string()?;
        rc.date_0 = input.read_string()?;
        rc.time_0 = input.read_string()?;
        rc.date_1 = input.read_string()?;
        rc.time_1 = input.read_string()?;
        rc.time_step = input.read_string()?;
        rc.time_list = input.read_string()?;
        rc.time_scrn = input.read_string()?;
        rc.restart = input.read_int()?;
        rc.rstdate = input.read_string()?;
        rc.rsttime = input.read_string()?;
        rc.list = input.read_int()?;
        rc.do_dlg = input.read_int()?;
        rc.pfsave = input.read_int()?;
        rc.zfsave = input.read_int()?;
        rc.zcsave = input.read_int()?;
        rc.achvol = input.read_int()?;
        rc.achsave = input.read_int()?;
        rc.abwsave = input.read_int()?;
        rc.cbwsave = input.read_int()?;
        rc.expsave = input.read_int()?;
        rc.ebwsave = input.read_int()?;
        rc.zaasave = input.read_int()?;
        rc.zbwsave = input.read_int()?;
        rc.rzfsave = input.read_int()?;
        rc.rzmsave = input.read_int()?;
        rc.rz1save = input.read_int()?;
        rc.csmsave = input.read_int()?;
        rc.srfsave = input.read_int()?;
        rc.logsave = input.read_int()?;
        for slot in rc.save.iter_mut() {
            *slot = input.read_int()?;
        }
        let nrvals = input.read_int()?;
        for _ in 0..nrvals {
            rc.rvals.push(input.read_number()?);
        }
        rc.bldg_flow_z = input.read_int()?;
        rc.bldg_flow_d = input.read_int()?;
        rc.bldg_flow_c = input.read_int()?;
        rc.cfd_ctype = input.read_int()?;
        rc.cfd_convcpl = input.read_number()?;
        rc.cfd_var = input.read_int()?;
        rc.cfd_zref = input.read_int()?;
        rc.cfd_imax = input.read_int()?;
        rc.cfd_dtcmo = input.read_int()?;
        Ok(rc)
    }

    pub fn write(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {} {}", self.name, self.version, self.echo);
        let _ = writeln!(out, "{}", self.prjdesc);
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {} {} {} {}",
            self.skheight,
            self.skwidth,
            self.def_units,
            self.def_flows,
            self.def_t,
            self.udef_t,
            self.rel_n,
            self.wind_h,
            self.uw_h,
            self.wind_ao,
            self.wind_a
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.scale, self.u_scale, self.org_row, self.org_col, self.inv_yaxis, self.show_geom
        );
        out.push_str(&self.ss_weather.write());
        out.push_str(&self.wpt_weather.write());
        let _ = writeln!(out, "{}", self.wth_path);
        let _ = writeln!(out, "{}", self.ctm_path);
        let _ = writeln!(out, "{}", self.cvf_path);
        let _ = writeln!(out, "{}", self.dvf_path);
        let _ = writeln!(out, "{}", self.wpc_file);
        let _ = writeln!(out, "{}", self.ewc_file);
        let _ = writeln!(out, "{}", self.wpc_desc);
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            self.x0, self.y0, self.z0, self.angle, self.u_xyz
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            self.eps_path,
            self.eps_spcs,
            self.t_shift,
            self.d_start,
            self.d_end,
            self.use_wpc_wp,
            self.use_wpc_mf,
            self.wpc_trig
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {}",
            self.latd, self.lgtd, self.tznr, self.altd, self.tgrnd, self.utg, self.u_a
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            self.sim_af,
            self.afcalc,
            self.afmaxi,
            self.afrcnvg,
            self.afacnvg,
            self.afrelax,
            self.uac2,
            self.pres,
            self.u_pres
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.afslae, self.afrseq, self.aflmaxi, self.aflcnvg, self.aflinit, self.tadj
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.sim_mf, self.ccmaxi, self.ccrcnvg, self.ccacnvg, self.ccrelax, self.uccc
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            self.mfnmthd,
            self.mfnrseq,
            self.mfnmaxi,
            self.mfnrcnvg,
            self.mfnacnvg,
            self.mfnrelax,
            self.mfngamma,
            self.uccn
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            self.mftmthd,
            self.mftrseq,
            self.mftmaxi,
            self.mftrcnvg,
            self.mftacnvg,
            self.mftrelax,
            self.mftgamma,
            self.ucct
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {}",
            self.mfvmthd,
            self.mfvrseq,
            self.mfvmaxi,
            self.mfvrcnvg,
            self.mfvacnvg,
            self.mfvrelax,
            self.uccv
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.mf_solver, self.sim_1dz, self.sim_1dd, self.celldx, self.sim_vjt, self.udx
        );
        let _ = writeln!(
            out,
            "{} {} {} {}",
            self.cvode_mth, self.cvode_rcnvg, self.cvode_acnvg, self.cvode_dtmax
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {}",
            self.tsdens,
            self.tsrelax,
            self.tsmaxi,
            self.cnvg_ss,
            self.dens_zp,
            self.stack_d,
            self.dod_mdt
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            self.date_st,
            self.time_st,
            self.date_0,
            self.time_0,
            self.date_1,
            self.time_1,
            self.time_step,
            self.time_list,
            self.time_scrn
        );
        let _ = writeln!(out, "{} {} {}", self.restart, self.rstdate, self.rsttime);
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            self.list, self.do_dlg, self.pfsave, self.zfsave, self.zcsave
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            self.achvol,
            self.achsave,
            self.abwsave,
            self.cbwsave,
            self.expsave,
            self.ebwsave,
            self.zaasave,
            self.zbwsave
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.rzfsave, self.rzmsave, self.rz1save, self.csmsave, self.srfsave, self.logsave
        );
        for slot in &self.save {
            let _ = write!(out, "{slot} ");
        }
        out.push('\n');
        let _ = writeln!(out, "{}", self.rvals.len());
        for rval in &self.rvals {
            let _ = write!(out, "{rval} ");
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "{} {} {}",
            self.bldg_flow_z, self.bldg_flow_d, self.bldg_flow_c
        );
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.cfd_ctype,
            self.cfd_convcpl,
            self.cfd_var,
            self.cfd_zref,
            self.cfd_imax,
            self.cfd_dtcmo
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reparse_stability() {
        let rc = RunControl {
            name: "prj".to_owned(),
            version: "1.0".to_owned(),
            prjdesc: "Test project".to_owned(),
            def_t: Rx::parse("293.15").unwrap(),
            save: [1; 16],
            rvals: vec![Rx::parse("0.5").unwrap(), Rx::parse("1.5").unwrap()],
            date_st: "Jan01".to_owned(),
            time_st: "00:00:00".to_owned(),
            date_0: "Jan01".to_owned(),
            time_0: "00:00:00".to_owned(),
            date_1: "Dec31".to_owned(),
            time_1: "24:00:00".to_owned(),
            time_step: "00:05:00".to_owned(),
            time_list: "01:00:00".to_owned(),
            time_scrn: "01:00:00".to_owned(),
            rstdate: "Jan01".to_owned(),
            rsttime: "00:00:00".to_owned(),
            t_shift: "00:00:00".to_owned(),
            d_start: "Jan01".to_owned(),
            d_end: "Dec31".to_owned(),
            ..RunControl::default()
        };
        let text = rc.write();
        let mut reader = Reader::new(&text);
        let back = RunControl::read(&mut reader).unwrap();
        assert_eq!(back, rc);
        assert_eq!(back.write(), text);
    }

    #[test]
    fn test_rvals_count_recomputed() {
        let rc = minimal();
        let text = rc.write();
        let mut reader = Reader::new(&text);
        let mut back = RunControl::read(&mut reader).unwrap();
        assert!(back.rvals.is_empty());

        // Appending after a read must emit the new count, not the old one.
        back.rvals.push(Rx::from(1.0));
        back.rvals.push(Rx::from(2.0));
        back.rvals.push(Rx::from(3.0));
        let written = back.write();
        assert!(written.contains("\n3\n1 2 3 \n"));

        let mut reader = Reader::new(&written);
        assert_eq!(RunControl::read(&mut reader).unwrap().rvals.len(), 3);
    }

    fn minimal() -> RunControl {
        RunControl {
            name: "prj".to_owned(),
            version: "1.0".to_owned(),
            t_shift: "00:00:00".to_owned(),
            d_start: "Jan01".to_owned(),
            d_end: "Dec31".to_owned(),
            date_st: "Jan01".to_owned(),
            time_st: "00:00:00".to_owned(),
            date_0: "Jan01".to_owned(),
            time_0: "00:00:00".to_owned(),
            date_1: "Dec31".to_owned(),
            time_1: "24:00:00".to_owned(),
            time_step: "00:05:00".to_owned(),
            time_list: "01:00:00".to_owned(),
            time_scrn: "01:00:00".to_owned(),
            rstdate: "Jan01".to_owned(),
            rsttime: "00:00:00".to_owned(),
            ..RunControl::default()
        }
    }
}
