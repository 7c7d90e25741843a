//! Digit runs: headerless payload fragments produced by the string codecs

/// A run of payload digits plus the length of its integer part
///
/// The fractional length is the remainder: `digits.len() - int_len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitRun {
    pub digits: Vec<u8>,
    pub int_len: u16,
}

impl DigitRun {
    pub fn len(&self) -> u16 {
        self.digits.len() as u16
    }

    pub fn frac_len(&self) -> u16 {
        self.len() - self.int_len
    }
}

/// Result of converting a decimal string into a digit run
///
/// Malformed or empty input deliberately produces `Zero` rather than an
/// error: the codec's contract is "never return nothing". Keeping the
/// fallback as its own variant lets callers (and tests) tell a substituted
/// zero apart from a genuine zero parsed out of valid input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    /// Digits parsed from valid input
    Value(DigitRun),
    /// The canonical safe default substituted for bad input
    Zero,
}

impl Parsed {
    /// Whether the safe-default path was taken
    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Zero)
    }

    /// Materialize the run; `Zero` becomes the length-1 zero run with
    /// `int_len == 1`
    pub fn into_run(self) -> DigitRun {
        match self {
            Parsed::Value(run) => run,
            Parsed::Zero => DigitRun { digits: vec![0], int_len: 1 },
        }
    }
}
