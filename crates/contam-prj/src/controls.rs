//! Control network nodes.
//!
//! Every node record shares a common header (number, tag, sequence, flags,
//! input links, name, description); the tag selects which payload follows.
//! Tags are exact and case sensitive; an unrecognized tag is a hard error
//! that names the offending token and line.

use std::fmt::Write as _;

use crate::error::{PrjError, Result};
use crate::number::Rx;
use crate::reader::Reader;

/// All recognized control-node tags.
pub const CONTROL_NODE_TAGS: [&str; 37] = [
    "sns", "sch", "set", "cvf", "dvf", "log", "pas", "mod", "hys", "abs", "bin", "dls", "dlx",
    "int", "rav", "inv", "and", "od", "xor", "add", "sub", "mul", "div", "sum", "avg", "max",
    "min", "lls", "uls", "lbs", "ubs", "llc", "ulc", "pc1", "pi1", "sup", "sph",
];

/// Fields common to every control node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlHeader {
    pub nr: i32,
    pub seqnr: i32,
    pub flags: u32,
    /// Number of required inputs.
    pub inreq: i32,
    /// First input node index.
    pub n1: i32,
    /// Second input node index.
    pub n2: i32,
    pub name: String,
    pub desc: String,
}

impl ControlHeader {
    fn read_tail(input: &mut Reader, nr: i32) -> Result<Self> {
        Ok(Self {
            nr,
            seqnr: input.read_int()?,
            flags: input.read_uint()?,
            inreq: input.read_int()?,
            n1: input.read_int()?,
            n2: input.read_int()?,
            name: input.read_string()?,
            desc: input.read_line()?,
        })
    }

    fn write(&self, tag: &str) -> String {
        format!(
            "{} {}\n{} {} {} {} {} {}\n{}\n",
            self.nr, tag, self.seqnr, self.flags, self.inreq, self.n1, self.n2, self.name,
            self.desc
        )
    }
}

/// A node with no payload beyond the header: the pass-through, logic,
/// arithmetic, and switch tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicNode {
    pub base: ControlHeader,
    pub tag: String,
}

/// `sns`: a sensor sampling a zone, path, or junction quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorNode {
    pub base: ControlHeader,
    pub offset: Rx,
    pub scale: Rx,
    /// Time constant.
    pub tau: Rx,
    pub oldsig: Rx,
    /// Index of the sensed element.
    pub source: i32,
    /// Source category.
    pub kind: i32,
    /// Which quantity of the source is measured.
    pub measure: i32,
    pub x: Rx,
    pub y: Rx,
    pub rel_ht: Rx,
    pub units: String,
    pub species: String,
}

/// `sch`: a node driven by a week schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleNode {
    pub base: ControlHeader,
    /// Week schedule index.
    pub ps: i32,
}

/// `set`: a constant-value node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantNode {
    pub base: ControlHeader,
    pub value: Rx,
}

/// `cvf`/`dvf`: a node driven by a continuous or discrete values file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileValueNode {
    pub base: ControlHeader,
    pub tag: String,
    /// Column name in the values file; occupies its own line.
    pub value_name: String,
}

/// `log`: a signal logger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogNode {
    pub base: ControlHeader,
    pub offset: Rx,
    pub scale: Rx,
    pub udef: i32,
    /// Column header in the log output.
    pub col_header: String,
    pub units: String,
}

/// `mod`: a linear offset/scale modifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierNode {
    pub base: ControlHeader,
    pub offset: Rx,
    pub scale: Rx,
}

/// `hys`: hysteresis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HysteresisNode {
    pub base: ControlHeader,
    pub slack: Rx,
    pub slope: Rx,
    pub oldsig: Rx,
}

/// `dls`: delay gated by day schedules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelaySchedNode {
    pub base: ControlHeader,
    /// Day schedule index for increase.
    pub dsincr: i32,
    /// Day schedule index for decrease.
    pub dsdecr: i32,
}

/// `dlx`: exponential delay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayExpNode {
    pub base: ControlHeader,
    pub tauincr: i32,
    pub taudecr: i32,
}

/// `rav`: running average over a time span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningAvgNode {
    pub base: ControlHeader,
    pub tspan: i32,
}

/// `sum`/`avg`/`max`/`min`: an aggregate over a counted list of input
/// nodes. The count on the wire is recomputed from the list on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiInputNode {
    pub base: ControlHeader,
    pub tag: String,
    pub inputs: Vec<i32>,
}

/// `lbs`/`ubs`: a band switch around the control signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandNode {
    pub base: ControlHeader,
    pub tag: String,
    pub band: Rx,
}

/// `pc1`: proportional control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProportionalNode {
    pub base: ControlHeader,
    pub kp: Rx,
}

/// `pi1`: proportional-integral control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiNode {
    pub base: ControlHeader,
    pub kp: Rx,
    pub ki: Rx,
    pub oldsig: Rx,
    pub olderr: Rx,
}

/// `sup`: a super-element controller referencing a node sub-network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuperNode {
    pub base: ControlHeader,
    /// Super-element definition index.
    pub def: i32,
    /// Sub-element index.
    pub se: i32,
    pub n_in: i32,
    pub n_out: i32,
}

/// A control network node, dispatched on its tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlNode {
    Basic(BasicNode),
    Sensor(SensorNode),
    Schedule(ScheduleNode),
    Constant(ConstantNode),
    FileValue(FileValueNode),
    Log(LogNode),
    Modifier(ModifierNode),
    Hysteresis(HysteresisNode),
    DelaySched(DelaySchedNode),
    DelayExp(DelayExpNode),
    RunningAvg(RunningAvgNode),
    MultiInput(MultiInputNode),
    Band(BandNode),
    Proportional(ProportionalNode),
    ProportionalIntegral(PiNode),
    Super(SuperNode),
}

impl ControlNode {
    /// Read one node record: the shared header first, then the payload the
    /// tag selects. An unrecognized tag fails with the token and its line.
    pub fn read(input: &mut Reader) -> Result<Self> {
        let nr = input.read_int()?;
        let tag = input.read_string()?;
        let tag_line = input.line();
        let base = ControlHeader::read_tail(input, nr)?;
        let node = match tag.as_str() {
            "sns" => Self::Sensor(SensorNode {
                base,
                offset: input.read_number()?,
                scale: input.read_number()?,
                tau: input.read_number()?,
                oldsig: input.read_number()?,
                source: input.read_int()?,
                kind: input.read_int()?,
                measure: input.read_int()?,
                x: input.read_number()?,
                y: input.read_number()?,
                rel_ht: input.read_number()?,
                units: input.read_string()?,
                species: input.read_string()?,
            }),
            "sch" => Self::Schedule(ScheduleNode {
                base,
                ps: input.read_int()?,
            }),
            "set" => Self::Constant(ConstantNode {
                base,
                value: input.read_number()?,
            }),
            "cvf" | "dvf" => Self::FileValue(FileValueNode {
                base,
                tag,
                value_name: input.read_line()?,
            }),
            "log" => Self::Log(LogNode {
                base,
                offset: input.read_number()?,
                scale: input.read_number()?,
                udef: input.read_int()?,
                col_header: input.read_string()?,
                units: input.read_string()?,
            }),
            "mod" => Self::Modifier(ModifierNode {
                base,
                offset: input.read_number()?,
                scale: input.read_number()?,
            }),
            "hys" => Self::Hysteresis(HysteresisNode {
                base,
                slack: input.read_number()?,
                slope: input.read_number()?,
                oldsig: input.read_number()?,
            }),
            "dls" => Self::DelaySched(DelaySchedNode {
                base,
                dsincr: input.read_int()?,
                dsdecr: input.read_int()?,
            }),
            "dlx" => Self::DelayExp(DelayExpNode {
                base,
                tauincr: input.read_int()?,
                taudecr: input.read_int()?,
            }),
            "rav" => Self::RunningAvg(RunningAvgNode {
                base,
                tspan: input.read_int()?,
            }),
            "sum" | "avg" | "max" | "min" => {
                let npcs = input.read_int()?;
                // No preallocation from the wire count: a corrupt count
                // must fail on the missing element, not in the allocator.
                let mut inputs = Vec::new();
                for _ in 0..npcs {
                    inputs.push(input.read_int()?);
                }
                Self::MultiInput(MultiInputNode { base, tag, inputs })
            }
            "lbs" | "ubs" => Self::Band(BandNode {
                base,
                tag,
                band: input.read_number()?,
            }),
            "pc1" => Self::Proportional(ProportionalNode {
                base,
                kp: input.read_number()?,
            }),
            "pi1" => Self::ProportionalIntegral(PiNode {
                base,
                kp: input.read_number()?,
                ki: input.read_number()?,
                oldsig: input.read_number()?,
                olderr: input.read_number()?,
            }),
            "sup" => Self::Super(SuperNode {
                base,
                def: input.read_int()?,
                se: input.read_int()?,
                n_in: input.read_int()?,
                n_out: input.read_int()?,
            }),
            "pas" | "abs" | "bin" | "int" | "inv" | "and" | "od" | "xor" | "add" | "sub"
            | "mul" | "div" | "lls" | "uls" | "llc" | "ulc" | "sph" => {
                Self::Basic(BasicNode { base, tag })
            }
            _ => {
                return Err(PrjError::UnknownControlNode {
                    tag,
                    line: tag_line,
                });
            }
        };
        Ok(node)
    }

    pub fn write(&self) -> String {
        let mut out = self.base().write(self.tag());
        match self {
            Self::Basic(_) => {}
            Self::Sensor(node) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {} {} {} {} {} {} {} {}",
                    node.offset,
                    node.scale,
                    node.tau,
                    node.oldsig,
                    node.source,
                    node.kind,
                    node.measure,
                    node.x,
                    node.y,
                    node.rel_ht,
                    node.units,
                    node.species
                );
            }
            Self::Schedule(node) => {
                let _ = writeln!(out, "{}", node.ps);
            }
            Self::Constant(node) => {
                let _ = writeln!(out, "{}", node.value);
            }
            Self::FileValue(node) => {
                let _ = writeln!(out, "{}", node.value_name);
            }
            Self::Log(node) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {} {}",
                    node.offset, node.scale, node.udef, node.col_header, node.units
                );
            }
            Self::Modifier(node) => {
                let _ = writeln!(out, "{} {}", node.offset, node.scale);
            }
            Self::Hysteresis(node) => {
                let _ = writeln!(out, "{} {} {}", node.slack, node.slope, node.oldsig);
            }
            Self::DelaySched(node) => {
                let _ = writeln!(out, "{} {}", node.dsincr, node.dsdecr);
            }
            Self::DelayExp(node) => {
                let _ = writeln!(out, "{} {}", node.tauincr, node.taudecr);
            }
            Self::RunningAvg(node) => {
                let _ = writeln!(out, "{}", node.tspan);
            }
            Self::MultiInput(node) => {
                let _ = writeln!(out, "{}", node.inputs.len());
                for nr in &node.inputs {
                    let _ = write!(out, "{nr} ");
                }
                out.push('\n');
            }
            Self::Band(node) => {
                let _ = writeln!(out, "{}", node.band);
            }
            Self::Proportional(node) => {
                let _ = writeln!(out, "{}", node.kp);
            }
            Self::ProportionalIntegral(node) => {
                let _ = writeln!(
                    out,
                    "{} {} {} {}",
                    node.kp, node.ki, node.oldsig, node.olderr
                );
            }
            Self::Super(node) => {
                let _ = writeln!(out, "{} {} {} {}", node.def, node.se, node.n_in, node.n_out);
            }
        }
        out
    }

    /// The tag this node is written with.
    pub fn tag(&self) -> &str {
        match self {
            Self::Basic(node) => &node.tag,
            Self::Sensor(_) => "sns",
            Self::Schedule(_) => "sch",
            Self::Constant(_) => "set",
            Self::FileValue(node) => &node.tag,
            Self::Log(_) => "log",
            Self::Modifier(_) => "mod",
            Self::Hysteresis(_) => "hys",
            Self::DelaySched(_) => "dls",
            Self::DelayExp(_) => "dlx",
            Self::RunningAvg(_) => "rav",
            Self::MultiInput(node) => &node.tag,
            Self::Band(node) => &node.tag,
            Self::Proportional(_) => "pc1",
            Self::ProportionalIntegral(_) => "pi1",
            Self::Super(_) => "sup",
        }
    }

    pub fn base(&self) -> &ControlHeader {
        match self {
            Self::Basic(node) => &node.base,
            Self::Sensor(node) => &node.base,
            Self::Schedule(node) => &node.base,
            Self::Constant(node) => &node.base,
            Self::FileValue(node) => &node.base,
            Self::Log(node) => &node.base,
            Self::Modifier(node) => &node.base,
            Self::Hysteresis(node) => &node.base,
            Self::DelaySched(node) => &node.base,
            Self::DelayExp(node) => &node.base,
            Self::RunningAvg(node) => &node.base,
            Self::MultiInput(node) => &node.base,
            Self::Band(node) => &node.base,
            Self::Proportional(node) => &node.base,
            Self::ProportionalIntegral(node) => &node.base,
            Self::Super(node) => &node.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ControlHeader {
        match self {
            Self::Basic(node) => &mut node.base,
            Self::Sensor(node) => &mut node.base,
            Self::Schedule(node) => &mut node.base,
            Self::Constant(node) => &mut node.base,
            Self::FileValue(node) => &mut node.base,
            Self::Log(node) => &mut node.base,
            Self::Modifier(node) => &mut node.base,
            Self::Hysteresis(node) => &mut node.base,
            Self::DelaySched(node) => &mut node.base,
            Self::DelayExp(node) => &mut node.base,
            Self::RunningAvg(node) => &mut node.base,
            Self::MultiInput(node) => &mut node.base,
            Self::Band(node) => &mut node.base,
            Self::Proportional(node) => &mut node.base,
            Self::ProportionalIntegral(node) => &mut node.base,
            Self::Super(node) => &mut node.base,
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
    fn test_sensor_roundtrip() {
        let text = "1 sns\n1 0 0 0 0 T_room\nRoom temperature sensor\n0 1 0 0 1 0 0 5 5 1.5 C CO2\n";
        let mut reader = Reader::new(text);
        let node = ControlNode::read(&mut reader).unwrap();
        let ControlNode::Sensor(ref sensor) = node else {
            panic!("expected a sensor node");
        };
        assert_eq!(sensor.source, 1);
        assert_eq!(sensor.rel_ht.as_str(), "1.5");
        assert_eq!(sensor.species, "CO2");
        assert_eq!(node.write(), text);
    }

    #[test]
    fn test_pass_through_roundtrip() {
        let text = "2 pas\n2 0 1 1 0 relay\n\n";
        let mut reader = Reader::new(text);
        let node = ControlNode::read(&mut reader).unwrap();
        assert_eq!(node.tag(), "pas");
        assert_eq!(node.base().n1, 1);
        assert_eq!(node.write(), text);
    }

    #[test]
    fn test_file_value_name_on_own_line() {
        let text = "3 cvf\n3 0 0 0 0 outdoor\n\nOutdoorTemp\n";
        let mut reader = Reader::new(text);
        let node = ControlNode::read(&mut reader).unwrap();
        let ControlNode::FileValue(ref cvf) = node else {
            panic!("expected a file-value node");
        };
        assert_eq!(cvf.value_name, "OutdoorTemp");
        assert_eq!(node.write(), text);
    }

    #[test]
    fn test_multi_input_count_recomputed() {
        let text = "4 avg\n4 0 2 0 0 mean\n\n3\n1 2 3 \n";
        let mut reader = Reader::new(text);
        let node = ControlNode::read(&mut reader).unwrap();
        let ControlNode::MultiInput(mut avg) = node else {
            panic!("expected a multi-input node");
        };
        assert_eq!(avg.inputs, vec![1, 2, 3]);
        avg.inputs.push(7);
        let written = ControlNode::MultiInput(avg).write();
        assert!(written.ends_with("4\n1 2 3 7 \n"));
    }

    #[test]
    fn test_huge_input_count_is_a_parse_error() {
        let text = "4 sum\n4 0 2 0 0 total\n\n2000000000\n1 2 \n";
        let mut reader = Reader::new(text);
        let err = ControlNode::read(&mut reader).unwrap_err();
        assert!(matches!(err, PrjError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let text = "5 zzz\n5 0 0 0 0 what\n\n";
        let mut reader = Reader::new(text);
        let err = ControlNode::read(&mut reader).unwrap_err();
        match err {
            PrjError::UnknownControlNode { tag, line } => {
                assert_eq!(tag, "zzz");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_mutation_through_base_mut() {
        let text = "2 pas\n2 0 1 1 0 relay\n\n";
        let mut reader = Reader::new(text);
        let mut node = ControlNode::read(&mut reader).unwrap();
        node.base_mut().name = "bypass".to_owned();
        node.base_mut().desc = "Renamed relay".to_owned();
        assert_eq!(node.name(), "bypass");
        assert_eq!(node.write(), "2 pas\n2 0 1 1 0 bypass\nRenamed relay\n");
    }

    #[test]
    fn test_every_tag_dispatches() {
        for tag in CONTROL_NODE_TAGS {
            let payload = match tag {
                "sns" => "0 1 0 0 1 0 0 0 0 0 K <none>\n",
                "sch" | "set" | "rav" | "lbs" | "ubs" | "pc1" => "1\n",
                "cvf" | "dvf" => "column\n",
                "log" => "0 1 0 col K\n",
                "mod" | "dls" | "dlx" => "0 1\n",
                "hys" => "0 1 0\n",
                "sum" | "avg" | "max" | "min" => "2\n1 2 \n",
                "pi1" => "1 1 0 0\n",
                "sup" => "1 1 2 1\n",
                _ => "",
            };
            let text = format!("9 {tag}\n9 0 0 0 0 n\n\n{payload}");
            let mut reader = Reader::new(&text);
            let node = ControlNode::read(&mut reader)
                .unwrap_or_else(|e| panic!("tag {tag} failed: {e}"));
            assert_eq!(node.tag(), tag);
            assert_eq!(node.write(), text);
        }
    }
}
