//! Primary PRJ records: top-level entities identified by a sequence number.
//!
//! Each record reads its fields in the fixed order the format prescribes and
//! writes the exact inverse token sequence. Cross-references between records
//! (schedule, control node, level, flow element ids) stay as raw integers;
//! resolving them is the job of a later linking pass, not this layer.

mod ahs;
mod level;
mod path;
mod run_control;
mod schedule;
mod species;
mod wind;
mod zone;

pub use ahs::Ahs;
pub use level::Level;
pub use path::{Path, PathFlags};
pub use run_control::RunControl;
pub use schedule::{DaySchedule, WeekSchedule};
pub use species::Species;
pub use wind::WindPressureProfile;
pub use zone::{Zone, ZoneFlags};
