use anchor_lang::prelude::*;

#[error_code]
pub enum ArithmeticError {
    #[msg("Arithmetic overflow: result is above the int256 range")]
    Overflow,
    #[msg("Arithmetic underflow: result is below the int256 range")]
    Underflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Negative value cannot be converted to an unsigned integer")]
    NegativeValue,
}

#[cfg(test)]
pub(crate) fn assert_arithmetic_error(err: anchor_lang::error::Error, kind: ArithmeticError) {
    let name = format!("{:?}", kind);
    let code = anchor_lang::error::ERROR_CODE_OFFSET + kind as u32;
    match err {
        anchor_lang::error::Error::AnchorError(e) => assert_eq!(
            e.error_code_number, code,
            "expected {}, got {}",
            name, e.error_name
        ),
        other => panic!("expected {}, got {:?}", name, other),
    }
}
