use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// Operand text reached the evaluator without being a numeral.
    #[error("operand {text:?} is not a valid numeral")]
    Parse {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("digit {0} is out of range 0-9")]
    InvalidDigit(u8),
    #[error("unknown key or button tag {0:?}")]
    UnknownInput(String),
}
