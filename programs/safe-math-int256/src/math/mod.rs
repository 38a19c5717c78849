pub mod i256;
pub mod safe_math_int256;
