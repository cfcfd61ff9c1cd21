//! Small flat records nested inside the primary records.
//!
//! None of these carry identity of their own; they are embedded by value in
//! an owning record and written one per physical line inside its body (or,
//! for [`WeatherData`], as a single line inside the project header). Each
//! reads its fields in fixed order and writes the exact inverse.

use crate::error::Result;
use crate::number::Rx;
use crate::reader::Reader;

/// Ambient weather snapshot, embedded twice in the run control record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherData {
    pub tambt: Rx,
    pub barpres: Rx,
    pub windspd: Rx,
    pub winddir: Rx,
    pub relhum: Rx,
    pub daytyp: i32,
    pub u_ta: i32,
    pub u_bp: i32,
    pub u_ws: i32,
    pub u_wd: i32,
}

impl WeatherData {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            tambt: input.read_number()?,
            barpres: input.read_number()?,
            windspd: input.read_number()?,
            winddir: input.read_number()?,
            relhum: input.read_number()?,
            daytyp: input.read_int()?,
            u_ta: input.read_int()?,
            u_bp: input.read_int()?,
            u_ws: input.read_int()?,
            u_wd: input.read_int()?,
        })
    }

    pub fn write(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {}\n",
            self.tambt,
            self.barpres,
            self.windspd,
            self.winddir,
            self.relhum,
            self.daytyp,
            self.u_ta,
            self.u_bp,
            self.u_ws,
            self.u_wd
        )
    }
}

/// North-facing wall bit of a wall glyph code.
pub const WALL_BIT_N: i32 = 0x01;
/// East-facing wall bit.
pub const WALL_BIT_E: i32 = 0x02;
/// South-facing wall bit.
pub const WALL_BIT_S: i32 = 0x04;
/// West-facing wall bit.
pub const WALL_BIT_W: i32 = 0x08;

/// A sketch-pad glyph placement owned by a level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    /// Glyph code. For wall-segment glyphs the low four bits encode which
    /// directions the segment runs in.
    pub icon: i32,
    pub col: i32,
    pub row: i32,
    /// Id of the entity this glyph stands for, 0 when decorative.
    pub nr: i32,
}

impl Icon {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            icon: input.read_int()?,
            col: input.read_int()?,
            row: input.read_int()?,
            nr: input.read_int()?,
        })
    }

    pub fn write(&self) -> String {
        format!("{} {} {} {}\n", self.icon, self.col, self.row, self.nr)
    }

    /// The direction bits of a wall-segment glyph code.
    pub fn wall_bits(&self) -> i32 {
        self.icon & (WALL_BIT_N | WALL_BIT_E | WALL_BIT_S | WALL_BIT_W)
    }

    pub fn runs_north(&self) -> bool {
        self.icon & WALL_BIT_N != 0
    }

    pub fn runs_east(&self) -> bool {
        self.icon & WALL_BIT_E != 0
    }

    pub fn runs_south(&self) -> bool {
        self.icon & WALL_BIT_S != 0
    }

    pub fn runs_west(&self) -> bool {
        self.icon & WALL_BIT_W != 0
    }
}

/// One point of a day schedule: time of day plus control value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulePoint {
    /// Time of day, kept as the opaque `HH:MM:SS` token.
    pub time: String,
    pub ctrl: Rx,
}

impl SchedulePoint {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            time: input.read_string()?,
            ctrl: input.read_number()?,
        })
    }

    pub fn write(&self) -> String {
        format!("{} {}\n", self.time, self.ctrl)
    }
}

/// One point of a wind pressure profile: azimuth plus coefficient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureCoefficientPoint {
    pub azm: Rx,
    pub coef: Rx,
}

impl PressureCoefficientPoint {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            azm: input.read_number()?,
            coef: input.read_number()?,
        })
    }

    pub fn write(&self) -> String {
        format!("{} {}\n", self.azm, self.coef)
    }
}

/// One measured point of a fan performance curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanDataPoint {
    pub m_f: Rx,
    pub u_mf: i32,
    pub dp: Rx,
    pub u_dp: i32,
    pub rp: Rx,
    pub u_rp: i32,
}

impl FanDataPoint {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            m_f: input.read_number()?,
            u_mf: input.read_int()?,
            dp: input.read_number()?,
            u_dp: input.read_int()?,
            rp: input.read_number()?,
            u_rp: input.read_int()?,
        })
    }

    pub fn write(&self) -> String {
        format!(
            "{} {} {} {} {} {}\n",
            self.m_f, self.u_mf, self.dp, self.u_dp, self.rp, self.u_rp
        )
    }
}

/// A plain `(x, y)` lookup point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPoint {
    pub x: Rx,
    pub y: Rx,
}

impl DataPoint {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            x: input.read_number()?,
            y: input.read_number()?,
        })
    }

    pub fn write(&self) -> String {
        format!("{} {}\n", self.x, self.y)
    }
}

/// One member of a composite supply element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirflowSubelementData {
    /// Id of the member airflow element.
    pub nr: i32,
    pub rel_ht: Rx,
    pub filt: i32,
}

impl AirflowSubelementData {
    pub fn read(input: &mut Reader) -> Result<Self> {
        Ok(Self {
            nr: input.read_int()?,
            rel_ht: input.read_number()?,
            filt: input.read_int()?,
        })
    }

    pub fn write(&self) -> String {
        format!("{} {} {}\n", self.nr, self.rel_ht, self.filt)
    }
}
