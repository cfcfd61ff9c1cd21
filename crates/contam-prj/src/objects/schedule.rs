//! Day and week schedule records.

use std::fmt::Write as _;

use crate::error::Result;
use crate::reader::Reader;
use crate::subobjects::SchedulePoint;

/// A single-day control schedule: a shape flag and a list of time/value
/// points. The point count on the wire is recomputed on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    pub nr: i32,
    /// 0 rectangular, 1 trapezoidal.
    pub shape: i32,
    pub utyp: i32,
    pub ucnv: i32,
    pub name: String,
    pub desc: String,
    pub points: Vec<SchedulePoint>,
}

impl DaySchedule {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let nr = input.read_int()?;
        let npts = input.read_int()?;
        let shape = input.read_int()?;
        let utyp = input.read_int()?;
        let ucnv = input.read_int()?;
        let name = input.read_string()?;
        let desc = input.read_line()?;
        // Wire counts are untrusted; never preallocate from them.
        let mut points = Vec::new();
        for _ in 0..npts {
            points.push(SchedulePoint::read(input)?);
        }
        Ok(Self {
            nr,
            shape,
            utyp,
            ucnv,
            name,
            desc,
            points,
        })
    }

    pub fn write(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {} {} {} {}",
            self.nr,
            self.points.len(),
            self.shape,
            self.utyp,
            self.ucnv,
            self.name
        );
        let _ = writeln!(out, "{}", self.desc);
        for point in &self.points {
            out.push_str(&point.write());
        }
        out
    }
}

/// A week schedule: exactly twelve day-schedule references, one for each
/// CONTAM day type. The reference block is fixed width, never counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSchedule {
    pub nr: i32,
    pub utyp: i32,
    pub ucnv: i32,
    pub name: String,
    pub desc: String,
    pub j: [i32; 12],
}

impl WeekSchedule {
    pub fn read(input: &mut Reader) -> Result<Self> {
        let mut week = Self {
            nr: input.read_int()?,
            utyp: input.read_int()?,
            ucnv: input.read_int()?,
            name: input.read_string()?,
            desc: input.read_line()?,
            ..Self::default()
        };
        for day in week.j.iter_mut() {
            *day = input.read_int()?;
        }
        Ok(week)
    }

    pub fn write(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} {} {}",
            self.nr, self.utyp, self.ucnv, self.name
        );
        let _ = writeln!(out, "{}", self.desc);
        for day in &self.j {
            let _ = write!(out, "{day} ");
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_schedule_roundtrip() {
        let text = "1 2 0 0 0 OnOff\nOccupied hours\n00:00:00 0\n24:00:00 1\n";
        let mut reader = Reader::new(text);
        let day = DaySchedule::read(&mut reader).unwrap();
        assert_eq!(day.points.len(), 2);
        assert_eq!(day.points[1].time, "24:00:00");
        assert_eq!(day.points[1].ctrl.value(), 1.0);
        assert_eq!(day.write(), text);
    }

    #[test]
    fn test_day_schedule_count_recomputed() {
        let text = "1 1 0 0 0 Constant\n\n00:00:00 0.5\n";
        let mut reader = Reader::new(text);
        let mut day = DaySchedule::read(&mut reader).unwrap();
        day.points.push(SchedulePoint::read(&mut Reader::new("24:00:00 0.5\n")).unwrap());
        assert!(day.write().starts_with("1 2 0 0 0 Constant\n"));
    }

    #[test]
    fn test_huge_point_count_is_a_parse_error() {
        let text = "1 2000000000 0 0 0 OnOff\n\n00:00:00 0\n";
        let mut reader = Reader::new(text);
        assert!(matches!(
            DaySchedule::read(&mut reader),
            Err(crate::error::PrjError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_week_schedule_roundtrip() {
        let text = "1 0 0 Typical\nWeekday/weekend split\n1 1 1 1 1 2 2 1 1 2 2 2 \n";
        let mut reader = Reader::new(text);
        let week = WeekSchedule::read(&mut reader).unwrap();
        assert_eq!(week.j, [1, 1, 1, 1, 1, 2, 2, 1, 1, 2, 2, 2]);
        assert_eq!(week.write(), text);
    }

    #[test]
    fn test_week_schedule_requires_twelve_refs() {
        let text = "1 0 0 Short\n\n1 1 1 1 1\n";
        let mut reader = Reader::new(text);
        assert!(WeekSchedule::read(&mut reader).is_err());
    }
}
