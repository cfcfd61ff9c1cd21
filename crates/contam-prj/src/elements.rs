//! Airflow elements: the flow models paths refer to.
//!
//! Each element record carries a common header (number, icon, tag, name,
//! description) followed by a tag-selected data section. Several tags share
//! one layout (the three `plr_leak*` tags, the two backdraft tags, the
//! four cubic-spline tags); those payload structs carry the tag they were
//! read with so it round-trips exactly.

use std::fmt::Write as _;

use crate::error::{PrjError, Result};
use crate::number::Rx;
use crate::reader::Reader;
use crate::subobjects::{AirflowSubelementData, DataPoint, FanDataPoint};

/// All recognized airflow-element tags.
pub const AIRFLOW_ELEMENT_TAGS: [&str; 28] = [
    "plr_orfc",
    "plr_leak1",
    "plr_leak2",
    "plr_leak3",
    "plr_conn",
    "plr_qcn",
    "plr_fcn",
    "plr_test1",
    "plr_test2",
    "plr_crack",
    "plr_stair",
    "plr_shaft",
    "plr_bdq",
    "plr_bdf",
    "qfr_qab",
    "qfr_fab",
    "qfr_crack",
    "qfr_test2",
    "dor_door",
    "dor_pl2",
    "fan_cmf",
    "fan_cvf",
    "fan_fan",
    "csf_fsp",
    "csf_qsp",
    "csf_psf",
    "csf_psq",
    "sup_afe",
];

/// Fields common to every airflow element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementHeader {
    pub nr: i32,
    pub icon: i32,
    pub name: String,
    pub desc: String,
}

impl ElementHeader {
    fn read_tail(input: &mut Reader, nr: i32, icon: i32) -> Result<Self> {
        Ok(Self {
            nr,
            icon,
            name: input.read_string()?,
            desc: input.read_line()?,
        })
    }

    fn write(&self, tag: &str) -> String {
        format!(
            "{} {} {} {}\n{}\n",
            self.nr, self.icon, tag, self.name, self.desc
        )
    }
}

/// `plr_orfc`: powerlaw orifice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrOrifice {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub area: Rx,
    pub dia: Rx,
    pub coef: Rx,
    pub re: Rx,
    pub u_a: i32,
    pub u_d: i32,
}

/// `plr_leak1`/`plr_leak2`/`plr_leak3`: leakage area per item, per unit
/// length, or per unit area. Same layout for all three tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrLeak {
    pub base: ElementHeader,
    pub tag: String,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub coef: Rx,
    pub pres: Rx,
    pub area1: Rx,
    pub area2: Rx,
    pub area3: Rx,
    pub u_a1: i32,
    pub u_a2: i32,
    pub u_a3: i32,
    pub u_dp: i32,
}

/// `plr_conn`: ASCOS connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrConnection {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub area: Rx,
    pub coef: Rx,
    pub u_a: i32,
}

/// `plr_qcn`/`plr_fcn`: bare powerlaw in volume or mass flow form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrGeneral {
    pub base: ElementHeader,
    pub tag: String,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
}

/// `plr_test1`: powerlaw fitted to a single test point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrTest1 {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub dp: Rx,
    pub flow: Rx,
    pub u_p: i32,
    pub u_f: i32,
}

/// `plr_test2`: powerlaw fitted to two test points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrTest2 {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub dp1: Rx,
    pub f1: Rx,
    pub dp2: Rx,
    pub f2: Rx,
    pub u_p1: i32,
    pub u_f1: i32,
    pub u_p2: i32,
    pub u_f2: i32,
}

/// `plr_crack`: crack described by length and width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrCrack {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub length: Rx,
    pub width: Rx,
    pub u_l: i32,
    pub u_w: i32,
}

/// `plr_stair`: stairwell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrStair {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub ht: Rx,
    pub area: Rx,
    /// People per unit area.
    pub peo: Rx,
    /// 1 open tread, 0 closed.
    pub tread: i32,
    pub u_a: i32,
    pub u_d: i32,
}

/// `plr_shaft`: shaft described by its duct geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrShaft {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    pub ht: Rx,
    pub area: Rx,
    pub perim: Rx,
    pub rough: Rx,
    pub u_a: i32,
    pub u_d: i32,
    pub u_p: i32,
    pub u_r: i32,
}

/// `plr_bdq`/`plr_bdf`: backdraft damper in volume or mass flow form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlrBackdraft {
    pub base: ElementHeader,
    pub tag: String,
    pub lam: Rx,
    /// Forward coefficient.
    pub cp: Rx,
    /// Forward exponent.
    pub xp: Rx,
    /// Reverse coefficient.
    pub cn: Rx,
    /// Reverse exponent.
    pub xn: Rx,
}

/// `qfr_qab`/`qfr_fab`: quadratic model in volume or mass flow form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QfrGeneral {
    pub base: ElementHeader,
    pub tag: String,
    pub a: Rx,
    pub b: Rx,
}

/// `qfr_crack`: quadratic crack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QfrCrack {
    pub base: ElementHeader,
    pub a: Rx,
    pub b: Rx,
    pub length: Rx,
    pub width: Rx,
    pub depth: Rx,
    /// Number of bends.
    pub nb: i32,
    pub u_l: i32,
    pub u_w: i32,
    pub u_d: i32,
}

/// `qfr_test2`: quadratic model fitted to two test points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QfrTest2 {
    pub base: ElementHeader,
    pub a: Rx,
    pub b: Rx,
    pub dp1: Rx,
    pub f1: Rx,
    pub dp2: Rx,
    pub f2: Rx,
    pub u_p1: i32,
    pub u_f1: i32,
    pub u_p2: i32,
    pub u_f2: i32,
}

/// `dor_door`: two-way single-opening door.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoWayDoor {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    /// Minimum temperature difference for two-way flow.
    pub dtmin: Rx,
    pub ht: Rx,
    pub wd: Rx,
    pub cd: Rx,
    pub u_t: i32,
    pub u_h: i32,
    pub u_w: i32,
}

/// `dor_pl2`: two-layer powerlaw door.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerlawDoor {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    /// Distance above/below midpoint of the neutral layer.
    pub dh: Rx,
    pub ht: Rx,
    pub wd: Rx,
    pub cd: Rx,
    pub u_h: i32,
    pub u_w: i32,
}

/// `fan_cmf`/`fan_cvf`: constant mass or volume flow fan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanConstant {
    pub base: ElementHeader,
    pub tag: String,
    pub flow: Rx,
    pub u_f: i32,
}

/// `fan_fan`: performance-curve fan with its polynomial coefficients and
/// measured data points. The point count on the wire is recomputed from
/// the data list on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanCurve {
    pub base: ElementHeader,
    pub lam: Rx,
    pub turb: Rx,
    pub expt: Rx,
    /// Reference fluid density.
    pub rdens: Rx,
    /// Free-delivery flow.
    pub fdf: Rx,
    /// Shutoff pressure.
    pub sop: Rx,
    /// Minimum speed fraction.
    pub off: Rx,
    /// Polynomial coefficients.
    pub fpc: [Rx; 4],
    /// Shutoff orifice area.
    pub sarea: Rx,
    pub u_sa: i32,
    pub data: Vec<FanDataPoint>,
}

/// `csf_fsp`/`csf_qsp`/`csf_psf`/`csf_psq`: cubic-spline fit over a
/// counted list of x/y data points. The tag names which quantities the
/// axes carry; the layout is identical for all four.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicSplineFit {
    pub base: ElementHeader,
    pub tag: String,
    pub u_x: i32,
    pub u_y: i32,
    pub data: Vec<DataPoint>,
}

/// `sup_afe`: super element built from a counted list of subelements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuperElement {
    pub base: ElementHeader,
    pub sched: i32,
    pub u_h: i32,
    pub subelements: Vec<AirflowSubelementData>,
}

/// An airflow element, dispatched on its tag.
#[derive(Debug, Clone, PartialEq)]
pub enum AirflowElement {
    Orifice(PlrOrifice),
    Leak(PlrLeak),
    Connection(PlrConnection),
    General(PlrGeneral),
    Test1(PlrTest1),
    Test2(PlrTest2),
    Crack(PlrCrack),
    Stair(PlrStair),
    Shaft(PlrShaft),
    Backdraft(PlrBackdraft),
    QfrGeneral(QfrGeneral),
    QfrCrack(QfrCrack),
    QfrTest2(QfrTest2),
    Door(TwoWayDoor),
    PowerlawDoor(PowerlawDoor),
    FanConstant(FanConstant),
    FanCurve(FanCurve),
    SplineFit(CubicSplineFit),
    Super(SuperElement),
}

impl AirflowElement {
    /// Read one element record: the shared header first, then the data
    /// section the tag selects. An unrecognized tag fails with the token
    /// and its line.
    pub fn read(input: &mut Reader) -> Result<Self> {
        let nr = input.read_int()?;
        let icon = input.read_int()?;
        let tag = input.read_string()?;
        let tag_line = input.line();
        let base = ElementHeader::read_tail(input, nr, icon)?;
        let element = match tag.as_str() {
            "plr_orfc" => Self::Orifice(PlrOrifice {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                area: input.read_number()?,
                dia: input.read_number()?,
                coef: input.read_number()?,
                re: input.read_number()?,
                u_a: input.read_int()?,
                u_d: input.read_int()?,
            }),
            "plr_leak1" | "plr_leak2" | "plr_leak3" => Self::Leak(PlrLeak {
                base,
                tag,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                coef: input.read_number()?,
                pres: input.read_number()?,
                area1: input.read_number()?,
                area2: input.read_number()?,
                area3: input.read_number()?,
                u_a1: input.read_int()?,
                u_a2: input.read_int()?,
                u_a3: input.read_int()?,
                u_dp: input.read_int()?,
            }),
            "plr_conn" => Self::Connection(PlrConnection {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                area: input.read_number()?,
                coef: input.read_number()?,
                u_a: input.read_int()?,
            }),
            "plr_qcn" | "plr_fcn" => Self::General(PlrGeneral {
                base,
                tag,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
            }),
            "plr_test1" => Self::Test1(PlrTest1 {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                dp: input.read_number()?,
                flow: input.read_number()?,
                u_p: input.read_int()?,
                u_f: input.read_int()?,
            }),
            "plr_test2" => Self::Test2(PlrTest2 {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                dp1: input.read_number()?,
                f1: input.read_number()?,
                dp2: input.read_number()?,
                f2: input.read_number()?,
                u_p1: input.read_int()?,
                u_f1: input.read_int()?,
                u_p2: input.read_int()?,
                u_f2: input.read_int()?,
            }),
            "plr_crack" => Self::Crack(PlrCrack {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                length: input.read_number()?,
                width: input.read_number()?,
                u_l: input.read_int()?,
                u_w: input.read_int()?,
            }),
            "plr_stair" => Self::Stair(PlrStair {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                ht: input.read_number()?,
                area: input.read_number()?,
                peo: input.read_number()?,
                tread: input.read_int()?,
                u_a: input.read_int()?,
                u_d: input.read_int()?,
            }),
            "plr_shaft" => Self::Shaft(PlrShaft {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                ht: input.read_number()?,
                area: input.read_number()?,
                perim: input.read_number()?,
                rough: input.read_number()?,
                u_a: input.read_int()?,
                u_d: input.read_int()?,
                u_p: input.read_int()?,
                u_r: input.read_int()?,
            }),
            "plr_bdq" | "plr_bdf" => Self::Backdraft(PlrBackdraft {
                base,
                tag,
                lam: input.read_number()?,
                cp: input.read_number()?,
                xp: input.read_number()?,
                cn: input.read_number()?,
                xn: input.read_number()?,
            }),
            "qfr_qab" | "qfr_fab" => Self::QfrGeneral(QfrGeneral {
                base,
                tag,
                a: input.read_number()?,
                b: input.read_number()?,
            }),
            "qfr_crack" => Self::QfrCrack(QfrCrack {
                base,
                a: input.read_number()?,
                b: input.read_number()?,
                length: input.read_number()?,
                width: input.read_number()?,
                depth: input.read_number()?,
                nb: input.read_int()?,
                u_l: input.read_int()?,
                u_w: input.read_int()?,
                u_d: input.read_int()?,
            }),
            "qfr_test2" => Self::QfrTest2(QfrTest2 {
                base,
                a: input.read_number()?,
                b: input.read_number()?,
                dp1: input.read_number()?,
                f1: input.read_number()?,
                dp2: input.read_number()?,
                f2: input.read_number()?,
                u_p1: input.read_int()?,
                u_f1: input.read_int()?,
                u_p2: input.read_int()?,
                u_f2: input.read_int()?,
            }),
            "dor_door" => Self::Door(TwoWayDoor {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                dtmin: input.read_number()?,
                ht: input.read_number()?,
                wd: input.read_number()?,
                cd: input.read_number()?,
                u_t: input.read_int()?,
                u_h: input.read_int()?,
                u_w: input.read_int()?,
            }),
            "dor_pl2" => Self::PowerlawDoor(PowerlawDoor {
                base,
                lam: input.read_number()?,
                turb: input.read_number()?,
                expt: input.read_number()?,
                dh: input.read_number()?,
                ht: input.read_number()?,
                wd: input.read_number()?,
                cd: input.read_number()?,
                u_h: input.read_int()?,
                u_w: input.read_int()?,
            }),
            "fan_cmf" | "fan_cvf" => Self::FanConstant(FanConstant {
                base,
                tag,
                flow: input.read_number()?,
                u_f: input.read_int()?,
            }),
            "fan_fan" => {
                let mut fan = FanCurve {
                    base,
                    lam: input.read_number()?,
                    turb: input.read_number()?,
                    expt: input.read_number()?,
                    rdens: input.read_number()?,
                    fdf: input.read_number()?,
                    sop: input.read_number()?,
                    off: input.read_number()?,
                    ..FanCurve::default()
                };
                for coef in fan.fpc.iter_mut() {
                    *coef = input.read_number()?;
                }
                let npts = input.read_int()?;
                fan.sarea = input.read_number()?;
                fan.u_sa = input.read_int()?;
                for _ in 0..npts {
                    fan.data.push(FanDataPoint::read(input)?);
                }
                Self::FanCurve(fan)
            }
            "csf_fsp" | "csf_qsp" | "csf_psf" | "csf_psq" => {
                let npts = input.read_int()?;
                let u_x = input.read_int()?;
                let u_y = input.read_int()?;
                // Wire counts are untrusted; never preallocate from them.
                let mut data = Vec::new();
                for _ in 0..npts {
                    data.push(DataPoint::read(input)?);
                }
                Self::SplineFit(CubicSplineFit {
                    base,
                    tag,
                    u_x,
                    u_y,
                    data,
                })
            }
            "sup_afe" => {
                let nse = input.read_int()?;
                let sched = input.read_int()?;
                let u_h = input.read_int()?;
                let mut subelements = Vec::new();
                for _ in 0..nse {
                    subelements.push(AirflowSubelementData::read(input)?);
                }
                Self::Super(SuperElement {
                    base,
                    sched,
                    u_h,
                    subelements,
                })
            }
            _ => {
                return Err(PrjError::UnknownAirflowElement {
                    tag,
                    line: tag_line,
                });
            }
        };
        Ok(element)
    }

    pub fn write(&self) -> String {
        let mut out = self.base().write(self.tag());
        match self {
            Self::Orifice(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.area, el.dia, el.coef, el.re, el.u_a, el.u_d
                );
            }
            Self::Leak(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {} {} {}",
                    el.lam,
                    el.turb,
                    el.expt,
                    el.coef,
                    el.pres,
                    el.area1,
                    el.area2,
                    el.area3,
                    el.u_a1,
                    el.u_a2,
                    el.u_a3,
                    el.u_dp
                );
            }
            Self::Connection(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.area, el.coef, el.u_a
                );
            }
            Self::General(el) => {
                let _ = writeln!(out, "{} {} {}", el.lam, el.turb, el.expt);
            }
            Self::Test1(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.dp, el.flow, el.u_p, el.u_f
                );
            }
            Self::Test2(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {} {}",
                    el.lam,
                    el.turb,
                    el.expt,
                    el.dp1,
                    el.f1,
                    el.dp2,
                    el.f2,
                    el.u_p1,
                    el.u_f1,
                    el.u_p2,
                    el.u_f2
                );
            }
            Self::Crack(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.length, el.width, el.u_l, el.u_w
                );
            }
            Self::Stair(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.ht, el.area, el.peo, el.tread, el.u_a, el.u_d
                );
            }
            Self::Shaft(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {} {}",
                    el.lam,
                    el.turb,
                    el.expt,
                    el.ht,
                    el.area,
                    el.perim,
                    el.rough,
                    el.u_a,
                    el.u_d,
                    el.u_p,
                    el.u_r
                );
            }
            Self::Backdraft(el) => {
                let _ = writeln!(out, "{} {} {} {} {}", el.lam, el.cp, el.xp, el.cn, el.xn);
            }
            Self::QfrGeneral(el) => {
                let _ = writeln!(out, "{} {}", el.a, el.b);
            }
            Self::QfrCrack(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {}",
                    el.a, el.b, el.length, el.width, el.depth, el.nb, el.u_l, el.u_w, el.u_d
                );
            }
            Self::QfrTest2(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {}",
                    el.a, el.b, el.dp1, el.f1, el.dp2, el.f2, el.u_p1, el.u_f1, el.u_p2, el.u_f2
                );
            }
            Self::Door(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.dtmin, el.ht, el.wd, el.cd, el.u_t, el.u_h,
                    el.u_w
                );
            }
            Self::PowerlawDoor(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.dh, el.ht, el.wd, el.cd, el.u_h, el.u_w
                );
            }
            Self::FanConstant(el) => {
                let _ = writeln!(out, "{} {}", el.flow, el.u_f);
            }
            Self::FanCurve(el) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {}",
                    el.lam, el.turb, el.expt, el.rdens, el.fdf, el.sop, el.off
                );
                for coef in &el.fpc {
                    let _ = write!(out, "{coef} ");
                }
                out.push('\n');
                let _ = writeln!(out, "{} {} {}", el.data.len(), el.sarea, el.u_sa);
                for point in &el.data {
                    out.push_str(&point.write());
                }
            }
            Self::SplineFit(el) => {
                let _ = writeln!(out, "{} {} {}", el.data.len(), el.u_x, el.u_y);
                for point in &el.data {
                    out.push_str(&point.write());
                }
            }
            Self::Super(el) => {
                let _ = writeln!(out, "{} {} {}", el.subelements.len(), el.sched, el.u_h);
                for sub in &el.subelements {
                    out.push_str(&sub.write());
                }
            }
        }
        out
    }

    /// The tag this element is written with.
    pub fn tag(&self) -> &str {
        match self {
            Self::Orifice(_) => "plr_orfc",
            Self::Leak(el) => &el.tag,
            Self::Connection(_) => "plr_conn",
            Self::General(el) => &el.tag,
            Self::Test1(_) => "plr_test1",
            Self::Test2(_) => "plr_test2",
            Self::Crack(_) => "plr_crack",
            Self::Stair(_) => "plr_stair",
            Self::Shaft(_) => "plr_shaft",
            Self::Backdraft(el) => &el.tag,
            Self::QfrGeneral(el) => &el.tag,
            Self::QfrCrack(_) => "qfr_crack",
            Self::QfrTest2(_) => "qfr_test2",
            Self::Door(_) => "dor_door",
            Self::PowerlawDoor(_) => "dor_pl2",
            Self::FanConstant(el) => &el.tag,
            Self::FanCurve(_) => "fan_fan",
            Self::SplineFit(el) => &el.tag,
            Self::Super(_) => "sup_afe",
        }
    }

    pub fn base(&self) -> &ElementHeader {
        match self {
            Self::Orifice(el) => &el.base,
            Self::Leak(el) => &el.base,
            Self::Connection(el) => &el.base,
            Self::General(el) => &el.base,
            Self::Test1(el) => &el.base,
            Self::Test2(el) => &el.base,
            Self::Crack(el) => &el.base,
            Self::Stair(el) => &el.base,
            Self::Shaft(el) => &el.base,
            Self::Backdraft(el) => &el.base,
            Self::QfrGeneral(el) => &el.base,
            Self::QfrCrack(el) => &el.base,
            Self::QfrTest2(el) => &el.base,
            Self::Door(el) => &el.base,
            Self::PowerlawDoor(el) => &el.base,
            Self::FanConstant(el) => &el.base,
            Self::FanCurve(el) => &el.base,
            Self::SplineFit(el) => &el.base,
            Self::Super(el) => &el.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ElementHeader {
        match self {
            Self::Orifice(el) => &mut el.base,
            Self::Leak(el) => &mut el.base,
            Self::Connection(el) => &mut el.base,
            Self::General(el) => &mut el.base,
            Self::Test1(el) => &mut el.base,
            Self::Test2(el) => &mut el.base,
            Self::Crack(el) => &mut el.base,
            Self::Stair(el) => &mut el.base,
            Self::Shaft(el) => &mut el.base,
            Self::Backdraft(el) => &mut el.base,
            Self::QfrGeneral(el) => &mut el.base,
            Self::QfrCrack(el) => &mut el.base,
            Self::QfrTest2(el) => &mut el.base,
            Self::Door(el) => &mut el.base,
            Self::PowerlawDoor(el) => &mut el.base,
            Self::FanConstant(el) => &mut el.base,
            Self::FanCurve(el) => &mut el.base,
            Self::SplineFit(el) => &mut el.base,
            Self::Super(el) => &mut el.base,
        }
    }

    pub fn nr(&self) -> i32 {
        self.base().nr
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orifice_roundtrip() {
        let text = "1 23 plr_orfc Orifice-1\nSharp-edged orifice\n\
                    1.2e-05 0.0006 0.5 0.001 0.0357 0.6 30 0 0\n";
        let mut reader = Reader::new(text);
        let element = AirflowElement::read(&mut reader).unwrap();
        let AirflowElement::Orifice(ref orifice) = element else {
            panic!("expected an orifice");
        };
        assert_eq!(orifice.coef.as_str(), "0.6");
        assert_eq!(orifice.re.value(), 30.0);
        assert_eq!(element.write(), text);
    }

    #[test]
    fn test_shared_leak_tags_keep_their_tag() {
        for tag in ["plr_leak1", "plr_leak2", "plr_leak3"] {
            let text = format!(
                "2 25 {tag} Leak\n\n6.7e-06 0.0001 0.65 0.6 4 0.0001 0 0 0 0 0 0\n"
            );
            let mut reader = Reader::new(&text);
            let element = AirflowElement::read(&mut reader).unwrap();
            assert_eq!(element.tag(), tag);
            assert_eq!(element.write(), text);
        }
    }

    #[test]
    fn test_fan_curve_counted_data() {
        let text = "3 20 fan_fan SupplyFan\nMeasured fan\n\
                    1.2e-05 0.0006 0.5 1.2041 2 250 0.1\n\
                    250 -15 0 0 \n\
                    2 0.01 0\n\
                    0.5 0 100 0 0 0\n1.5 0 50 0 0 0\n";
        let mut reader = Reader::new(text);
        let element = AirflowElement::read(&mut reader).unwrap();
        let AirflowElement::FanCurve(mut fan) = element else {
            panic!("expected a fan curve");
        };
        assert_eq!(fan.fpc[0].value(), 250.0);
        assert_eq!(fan.data.len(), 2);
        fan.data.pop();
        let written = AirflowElement::FanCurve(fan).write();
        assert!(written.contains("\n1 0.01 0\n"));
    }

    #[test]
    fn test_spline_fit_roundtrip() {
        let text = "4 26 csf_psf FilterCurve\n\n3 0 0\n0 0\n50 0.04\n100 0.15\n";
        let mut reader = Reader::new(text);
        let element = AirflowElement::read(&mut reader).unwrap();
        let AirflowElement::SplineFit(ref csf) = element else {
            panic!("expected a spline fit");
        };
        assert_eq!(csf.tag, "csf_psf");
        assert_eq!(csf.data[2].y.as_str(), "0.15");
        assert_eq!(element.write(), text);
    }

    #[test]
    fn test_super_element_roundtrip() {
        let text = "5 27 sup_afe Combined\nLeak plus fan\n2 0 0\n1 0 0\n2 1.5 1\n";
        let mut reader = Reader::new(text);
        let element = AirflowElement::read(&mut reader).unwrap();
        let AirflowElement::Super(ref sup) = element else {
            panic!("expected a super element");
        };
        assert_eq!(sup.subelements.len(), 2);
        assert_eq!(sup.subelements[1].rel_ht.as_str(), "1.5");
        assert_eq!(element.write(), text);
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let text = "6 23 plr_nope Bad\n\n0 0 0\n";
        let mut reader = Reader::new(text);
        let err = AirflowElement::read(&mut reader).unwrap_err();
        match err {
            PrjError::UnknownAirflowElement { tag, line } => {
                assert_eq!(tag, "plr_nope");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_mutation_through_base_mut() {
        let text = "1 23 plr_orfc Orifice-1\n\n0 0 0.5 0 0 0.6 30 0 0\n";
        let mut reader = Reader::new(text);
        let mut element = AirflowElement::read(&mut reader).unwrap();
        element.base_mut().nr = 7;
        element.base_mut().name = "Orifice-7".to_owned();
        assert_eq!(element.nr(), 7);
        assert_eq!(
            element.write(),
            "7 23 plr_orfc Orifice-7\n\n0 0 0.5 0 0 0.6 30 0 0\n"
        );
    }

    #[test]
    fn test_every_tag_dispatches() {
        for tag in AIRFLOW_ELEMENT_TAGS {
            let payload = match tag {
                "plr_orfc" => "0 0 0.5 0 0 0.6 30 0 0\n",
                "plr_leak1" | "plr_leak2" | "plr_leak3" => "0 0 0.65 0.6 4 0 0 0 0 0 0 0\n",
                "plr_conn" => "0 0 0.5 0 0.6 0\n",
                "plr_qcn" | "plr_fcn" => "0 0 0.5\n",
                "plr_test1" => "0 0 0.5 4 0.0001 0 0\n",
                "plr_test2" => "0 0 0.5 1 0.0001 10 0.001 0 0 0 0\n",
                "qfr_test2" => "0.5 2 1 0.0001 10 0.001 0 0 0 0\n",
                "plr_crack" => "0 0 0.5 2 0.001 0 0\n",
                "plr_stair" => "0 0 0.5 3 4 0 1 0 0\n",
                "plr_shaft" => "0 0 0.5 3 4 8 0.001 0 0 0 0\n",
                "plr_bdq" | "plr_bdf" => "0 0.5 0.5 0.2 0.5\n",
                "qfr_qab" | "qfr_fab" => "0.5 2\n",
                "qfr_crack" => "0.5 2 2 0.001 0.1 0 0 0 0\n",
                "dor_door" => "0 0 0.5 0.01 2 0.8 0.78 0 0 0\n",
                "dor_pl2" => "0 0 0.5 0.8 2 0.8 0.78 0 0\n",
                "fan_cmf" | "fan_cvf" => "0.1 0\n",
                "fan_fan" => "0 0 0.5 1.2 2 250 0.1\n250 -15 0 0 \n0 0.01 0\n",
                "csf_fsp" | "csf_qsp" | "csf_psf" | "csf_psq" => "1 0 0\n0 0\n",
                "sup_afe" => "1 0 0\n1 0 0\n",
                _ => unreachable!(),
            };
            let text = format!("9 23 {tag} n\n\n{payload}");
            let mut reader = Reader::new(&text);
            let element = AirflowElement::read(&mut reader)
                .unwrap_or_else(|e| panic!("tag {tag} failed: {e}"));
            assert_eq!(element.tag(), tag);
            assert_eq!(element.write(), text);
        }
    }

    #[test]
    fn test_huge_data_count_is_a_parse_error() {
        // A corrupt count token must surface as an ordinary parse failure
        // when the input runs out, not exhaust memory up front.
        let text = "4 26 csf_psf FilterCurve\n\n2000000000 0 0\n0 0\n";
        let mut reader = Reader::new(text);
        let err = AirflowElement::read(&mut reader).unwrap_err();
        assert!(matches!(err, PrjError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_qfr_test2_payload_shape() {
        // qfr_test2 has no lam/turb/expt triple: a b dP1 F1 dP2 F2 then
        // four unit fields.
        let text = "7 24 qfr_test2 Fitted\n\n0.5 2 1 0.0001 10 0.001 0 0 0 0\n";
        let mut reader = Reader::new(text);
        let element = AirflowElement::read(&mut reader).unwrap();
        let AirflowElement::QfrTest2(ref qfr) = element else {
            panic!("expected a qfr_test2");
        };
        assert_eq!(qfr.a.as_str(), "0.5");
        assert_eq!(qfr.f2.as_str(), "0.001");
        assert_eq!(element.write(), text);
    }
}
