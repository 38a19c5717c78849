//! Overflow-checked signed 256-bit integer arithmetic.
//!
//! [`I256`] is a two's complement integer with the same range as Solidity's
//! `int256`, and [`SafeMathInt256`] is the set of operations over it that fail
//! with an [`ArithmeticError`] instead of wrapping.

pub mod error;
pub mod math;

pub use error::ArithmeticError;
pub use math::i256::I256;
pub use math::safe_math_int256::SafeMathInt256;
