//! Binary operators and the pending-operator marker

/// An operator that folds the displayed value into the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Pow,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '%' => Some(BinaryOp::Mod),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Mod => '%',
            BinaryOp::Pow => '^',
        }
    }
}

/// What the next commit will do with the accumulator.
///
/// `Sqrt`, `Ln` and `Equals` are markers left behind by the presses that set
/// them; they carry no arithmetic and commit as the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOp {
    #[default]
    None,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Sqrt,
    Ln,
    Equals,
}

impl From<BinaryOp> for PendingOp {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => PendingOp::Add,
            BinaryOp::Sub => PendingOp::Sub,
            BinaryOp::Mul => PendingOp::Mul,
            BinaryOp::Div => PendingOp::Div,
            BinaryOp::Mod => PendingOp::Mod,
            BinaryOp::Pow => PendingOp::Pow,
        }
    }
}

/// Fold `b` into `a` with `op`.
///
/// Plain IEEE-754 arithmetic: division by zero gives an infinity or NaN and
/// `%` is the truncated remainder (sign of the dividend). Markers that are not
/// arithmetic return `b` unchanged, which is what the first commit after
/// startup or clear relies on.
pub fn apply(a: f64, b: f64, op: PendingOp) -> f64 {
    match op {
        PendingOp::Add => a + b,
        PendingOp::Sub => a - b,
        PendingOp::Mul => a * b,
        PendingOp::Div => a / b,
        PendingOp::Mod => a % b,
        PendingOp::Pow => a.powf(b),
        PendingOp::None | PendingOp::Sqrt | PendingOp::Ln | PendingOp::Equals => b,
    }
}
