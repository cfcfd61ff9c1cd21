//! CONTAM PRJ airflow-network project file record reader and writer.
//!
//! This crate parses and renders the record layer of the CONTAM PRJ format:
//! a whitespace-delimited positional text format in which every record is a
//! fixed sequence of tokens, with optional tails gated by earlier flag
//! fields and sub-collections prefixed by a count.
//!
//! # Features
//!
//! - Tokenizing reader with line tracking for error reporting
//! - All primary records: run control, zones, species, levels, schedules,
//!   air-handling systems, paths, and wind pressure profiles
//! - The full tag-dispatched control-node and airflow-element families
//! - Numeric fields preserve their source spelling, so an unmodified
//!   record writes back byte for byte
//!
//! # Example
//!
//! ```
//! use contam_prj::{Reader, Zone};
//!
//! let line = "1 0 0 0 0 0 2.5 30.0 293.15 101325.0 Zone1 0 0 0 0 0 0 0\n";
//! let mut reader = Reader::new(line);
//! let zone = Zone::read(&mut reader).unwrap();
//! assert_eq!(zone.name, "Zone1");
//! assert_eq!(zone.vol.value(), 30.0);
//! assert_eq!(zone.write(), line);
//! ```
//!
//! # Collection counts
//!
//! Counted lists (level icons, schedule points, fan data, extra run-control
//! values) live in plain `Vec`s on their records. The count written to the
//! file is always the live length of that vector, so records edited after a
//! read stay self-consistent.

mod controls;
mod elements;
mod error;
mod number;
mod objects;
mod reader;
mod subobjects;

pub use error::{PrjError, Result};

pub use number::Rx;
pub use reader::Reader;

pub use objects::{
    Ahs, DaySchedule, Level, Path, PathFlags, RunControl, Species, WeekSchedule,
    WindPressureProfile, Zone, ZoneFlags,
};

pub use subobjects::{
    AirflowSubelementData, DataPoint, FanDataPoint, Icon, PressureCoefficientPoint, SchedulePoint,
    WeatherData,
};

pub use controls::{
    BandNode, BasicNode, CONTROL_NODE_TAGS, ConstantNode, ControlHeader, ControlNode,
    DelayExpNode, DelaySchedNode, FileValueNode, HysteresisNode, LogNode, ModifierNode,
    MultiInputNode, PiNode, ProportionalNode, RunningAvgNode, ScheduleNode, SensorNode, SuperNode,
};

pub use elements::{
    AIRFLOW_ELEMENT_TAGS, AirflowElement, CubicSplineFit, ElementHeader, FanConstant, FanCurve,
    PlrBackdraft, PlrConnection, PlrCrack, PlrGeneral, PlrLeak, PlrOrifice, PlrShaft, PlrStair,
    PlrTest1, PlrTest2, PowerlawDoor, QfrCrack, QfrGeneral, QfrTest2, SuperElement, TwoWayDoor,
};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
