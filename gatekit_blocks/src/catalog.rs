//! Port interfaces of the HDL blocks.
//!
//! Each `BlockKind` carries the module name and port list of the hardware
//! block it models, so a caller composing blocks into a larger circuit can
//! check wiring widths without evaluating anything.

use std::fmt;
use std::str::FromStr;

use gatekit_common::LogicError;

/// Direction of a block port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// Input port (receives signal).
    Input,
    /// Output port (drives signal).
    Output,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// A named, fixed-width port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port {
    /// Port name as it appears in the HDL block.
    pub name: &'static str,
    /// Signal direction.
    pub direction: PortDirection,
    /// Width in bits.
    pub width: u32,
}

impl Port {
    /// An input port of `width` bits.
    const fn input(name: &'static str, width: u32) -> Self {
        Self {
            name,
            direction: PortDirection::Input,
            width,
        }
    }

    /// An output port of `width` bits.
    const fn output(name: &'static str, width: u32) -> Self {
        Self {
            name,
            direction: PortDirection::Output,
            width,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 1 {
            write!(f, "{} {}", self.direction, self.name)
        } else {
            write!(f, "{} [{}:0] {}", self.direction, self.width - 1, self.name)
        }
    }
}

/// Every block in the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    /// 16-bit AND.
    And16,
    /// Eight-input OR.
    Or8Way,
    /// OR-reduction of a 16-bit word.
    OrNWay,
    /// 16-bit logical barrel shifter.
    BarrelShifter,
    /// Two-way 16-bit mux.
    Mux2,
    /// Four-way 16-bit mux.
    Mux4,
    /// Eight-way 16-bit mux.
    Mux8,
    /// Two-way 16-bit demux.
    DeMux2,
    /// Four-way 16-bit demux.
    DeMux4,
    /// Eight-way 16-bit demux.
    DeMux8,
    /// Seven-segment hex decoder.
    Bin2Hex,
    /// Binary to two-digit BCD.
    Bin2Bcd,
}

const AND16_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("b", 16),
    Port::output("q", 16),
];

const OR8WAY_PORTS: &[Port] = &[
    Port::input("a", 1),
    Port::input("b", 1),
    Port::input("c", 1),
    Port::input("d", 1),
    Port::input("e", 1),
    Port::input("f", 1),
    Port::input("g", 1),
    Port::input("h", 1),
    Port::output("q", 1),
];

const ORNWAY_PORTS: &[Port] = &[Port::input("a", 16), Port::output("q", 1)];

const BARREL_SHIFTER_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("dir", 1),
    Port::input("size", 4),
    Port::output("q", 16),
];

const MUX2_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("b", 16),
    Port::input("sel", 2),
    Port::output("q", 16),
];

const MUX4_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("b", 16),
    Port::input("c", 16),
    Port::input("d", 16),
    Port::input("sel", 4),
    Port::output("q", 16),
];

const MUX8_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("b", 16),
    Port::input("c", 16),
    Port::input("d", 16),
    Port::input("e", 16),
    Port::input("f", 16),
    Port::input("g", 16),
    Port::input("h", 16),
    Port::input("sel", 3),
    Port::output("q", 16),
];

const DEMUX2_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("sel", 2),
    Port::output("q0", 16),
    Port::output("q1", 16),
];

const DEMUX4_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("sel", 4),
    Port::output("q0", 16),
    Port::output("q1", 16),
    Port::output("q2", 16),
    Port::output("q3", 16),
];

const DEMUX8_PORTS: &[Port] = &[
    Port::input("a", 16),
    Port::input("sel", 3),
    Port::output("q0", 16),
    Port::output("q1", 16),
    Port::output("q2", 16),
    Port::output("q3", 16),
    Port::output("q4", 16),
    Port::output("q5", 16),
    Port::output("q6", 16),
    Port::output("q7", 16),
];

const BIN2HEX_PORTS: &[Port] = &[Port::input("sw", 5), Port::output("hex0", 7)];

const BIN2BCD_PORTS: &[Port] = &[
    Port::input("b", 8),
    Port::output("bcd1", 4),
    Port::output("bcd0", 4),
];

impl BlockKind {
    /// Every block, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::And16,
        Self::Or8Way,
        Self::OrNWay,
        Self::BarrelShifter,
        Self::Mux2,
        Self::Mux4,
        Self::Mux8,
        Self::DeMux2,
        Self::DeMux4,
        Self::DeMux8,
        Self::Bin2Hex,
        Self::Bin2Bcd,
    ];

    /// HDL module name of the block.
    #[must_use]
    pub const fn module_name(&self) -> &'static str {
        match self {
            Self::And16 => "and16",
            Self::Or8Way => "or8way",
            Self::OrNWay => "orNway",
            Self::BarrelShifter => "barrelShifter",
            Self::Mux2 => "mux2way",
            Self::Mux4 => "mux4way",
            Self::Mux8 => "mux8way",
            Self::DeMux2 => "deMux2way",
            Self::DeMux4 => "deMux4way",
            Self::DeMux8 => "deMux8way",
            Self::Bin2Hex => "bin2hex",
            Self::Bin2Bcd => "bin2bcd",
        }
    }

    /// All ports, inputs first.
    #[must_use]
    pub const fn ports(&self) -> &'static [Port] {
        match self {
            Self::And16 => AND16_PORTS,
            Self::Or8Way => OR8WAY_PORTS,
            Self::OrNWay => ORNWAY_PORTS,
            Self::BarrelShifter => BARREL_SHIFTER_PORTS,
            Self::Mux2 => MUX2_PORTS,
            Self::Mux4 => MUX4_PORTS,
            Self::Mux8 => MUX8_PORTS,
            Self::DeMux2 => DEMUX2_PORTS,
            Self::DeMux4 => DEMUX4_PORTS,
            Self::DeMux8 => DEMUX8_PORTS,
            Self::Bin2Hex => BIN2HEX_PORTS,
            Self::Bin2Bcd => BIN2BCD_PORTS,
        }
    }

    /// Looks up a port by name.
    #[must_use]
    pub fn port(&self, name: &str) -> Option<&'static Port> {
        self.ports().iter().find(|p| p.name == name)
    }

    /// Input ports.
    pub fn inputs(&self) -> impl Iterator<Item = &'static Port> {
        self.ports()
            .iter()
            .filter(|p| p.direction == PortDirection::Input)
    }

    /// Output ports.
    pub fn outputs(&self) -> impl Iterator<Item = &'static Port> {
        self.ports()
            .iter()
            .filter(|p| p.direction == PortDirection::Output)
    }

    /// Total number of input wires.
    #[must_use]
    pub fn input_width(&self) -> u32 {
        self.inputs().map(|p| p.width).sum()
    }

    /// Total number of output wires.
    #[must_use]
    pub fn output_width(&self) -> u32 {
        self.outputs().map(|p| p.width).sum()
    }

    /// Resolves an HDL module name.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::UnknownBlock` when no block has that name.
    pub fn from_module_name(name: &str) -> Result<Self, LogicError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.module_name() == name)
            .ok_or_else(|| LogicError::UnknownBlock(name.to_string()))
    }
}

impl FromStr for BlockKind {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_module_name(s)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_name())
    }
}
