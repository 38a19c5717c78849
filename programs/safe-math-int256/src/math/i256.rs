// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use primitive_types::U256;
use static_assertions::const_assert_eq;
use std::mem::{align_of, size_of};

use crate::error::ArithmeticError;

/**
 * @dev A 256-bit signed integer implementation using U256 as underlying storage.
 * Uses two's complement representation, same as Solidity's int256.
 *
 * Range: -2^255 to 2^255 - 1
 */
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct I256 {
    /// Internal storage as unsigned 256-bit integer (two's complement)
    pub value: U256,
}

// Four little-endian u64 limbs, usable inside zero-copy accounts
const_assert_eq!(size_of::<I256>(), 32);
const_assert_eq!(align_of::<I256>(), 8);

// SAFETY: I256 is repr(transparent) over U256, a repr(C) [u64; 4] with no
// padding, and every bit pattern is a valid two's complement value.
unsafe impl Zeroable for I256 {}
unsafe impl Pod for I256 {}

/// Two's complement negation on the raw bits. Wraps for 0 and 2^255.
fn negate_bits(value: U256) -> U256 {
    (!value).overflowing_add(U256::one()).0
}

/// Error for a result that left the range on the given side.
fn out_of_range(negative: bool) -> ArithmeticError {
    if negative {
        ArithmeticError::Underflow
    } else {
        ArithmeticError::Overflow
    }
}

impl I256 {
    /// Zero value
    pub const ZERO: I256 = I256 {
        value: U256([0, 0, 0, 0]),
    };

    pub const ONE: I256 = I256 {
        value: U256([1, 0, 0, 0]),
    };

    pub const MINUS_ONE: I256 = I256 {
        value: U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX]),
    };

    /// Minimum value: -2^255
    pub const MIN: I256 = I256 {
        value: U256([0, 0, 0, 0x8000000000000000]),
    };

    /// Maximum value: 2^255 - 1
    pub const MAX: I256 = I256 {
        value: U256([0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x7FFFFFFFFFFFFFFF]),
    };

    /**
     * @dev Creates a new I256 from a U256 value (assumes two's complement representation)
     */
    pub const fn from_raw(value: U256) -> Self {
        I256 { value }
    }

    /**
     * @dev Returns the raw U256 value (two's complement representation)
     */
    pub fn as_raw(&self) -> U256 {
        self.value
    }

    /**
     * @dev Sign-extends an i128 into 256 bits. Usable for compile-time constants.
     */
    pub const fn from_i128(value: i128) -> Self {
        let bits = value as u128;
        let fill = if value < 0 { u64::MAX } else { 0 };
        I256 {
            value: U256([bits as u64, (bits >> 64) as u64, fill, fill]),
        }
    }

    /**
     * @dev Checks if the value is negative (sign bit set)
     */
    pub fn is_negative(&self) -> bool {
        self.value.bit(255)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /**
     * @dev Returns the magnitude. Never fails: |MIN| = 2^255 still fits in a U256.
     */
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            negate_bits(self.value)
        } else {
            self.value
        }
    }

    /**
     * @dev Rebuilds a signed value from sign and magnitude, rejecting magnitudes
     * outside [-2^255, 2^255 - 1].
     */
    fn from_sign_magnitude(negative: bool, magnitude: U256) -> Result<Self> {
        if negative {
            // |MIN| has the same bits as MIN
            require!(magnitude <= Self::MIN.value, ArithmeticError::Underflow);
            Ok(I256 {
                value: negate_bits(magnitude),
            })
        } else {
            require!(magnitude <= Self::MAX.value, ArithmeticError::Overflow);
            Ok(I256 { value: magnitude })
        }
    }

    /**
     * @dev Checked addition. Adds the raw bits and rejects the result when both
     * operands share a sign the sum does not.
     */
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let result = I256 {
            value: self.value.overflowing_add(other.value).0,
        };
        let self_neg = self.is_negative();
        if self_neg == other.is_negative() && result.is_negative() != self_neg {
            return Err(out_of_range(self_neg).into());
        }
        Ok(result)
    }

    /**
     * @dev Checked subtraction. Works on the raw bits so `a - MIN` never has to
     * negate MIN.
     */
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let result = I256 {
            value: self.value.overflowing_sub(other.value).0,
        };
        let self_neg = self.is_negative();
        if self_neg != other.is_negative() && result.is_negative() != self_neg {
            return Err(out_of_range(self_neg).into());
        }
        Ok(result)
    }

    /**
     * @dev Checked multiplication. The magnitudes are multiplied into a U512 so the
     * range check never sees a wrapped product.
     */
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let negative = self.is_negative() != other.is_negative();
        let wide = self.unsigned_abs().full_mul(other.unsigned_abs());
        let magnitude = U256::try_from(wide).map_err(|_| out_of_range(negative))?;
        Self::from_sign_magnitude(negative, magnitude)
    }

    /**
     * @dev Checked division, truncating toward zero.
     */
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        require!(!other.is_zero(), ArithmeticError::DivisionByZero);
        // -2^255 / -1 = 2^255 is not representable
        require!(
            !(*self == Self::MIN && *other == Self::MINUS_ONE),
            ArithmeticError::Overflow
        );

        let quotient = self.unsigned_abs() / other.unsigned_abs();
        Self::from_sign_magnitude(self.is_negative() != other.is_negative(), quotient)
    }

    /**
     * @dev Checked negation, fails only for MIN
     */
    pub fn checked_neg(&self) -> Result<Self> {
        require!(*self != Self::MIN, ArithmeticError::Overflow);
        Ok(I256 {
            value: negate_bits(self.value),
        })
    }

    /**
     * @dev Converts I256 to U256 (only works for non-negative values)
     */
    pub fn to_u256(&self) -> Result<U256> {
        require!(!self.is_negative(), ArithmeticError::NegativeValue);
        Ok(self.value)
    }
}

impl Default for I256 {
    fn default() -> Self {
        Self::ZERO
    }
}

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/**
 * @dev Negation operator
 */
impl Neg for I256 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|_| panic!("I256: negation overflow"))
    }
}

/**
 * @dev Addition operator, panics on overflow like the primitive integers
 */
impl Add for I256 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(&other)
            .unwrap_or_else(|_| panic!("I256: addition overflow"))
    }
}

/**
 * @dev Subtraction operator
 */
impl Sub for I256 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(&other)
            .unwrap_or_else(|_| panic!("I256: subtraction overflow"))
    }
}

/**
 * @dev Multiplication operator
 */
impl Mul for I256 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.checked_mul(&other)
            .unwrap_or_else(|_| panic!("I256: multiplication overflow"))
    }
}

/**
 * @dev Division operator
 */
impl Div for I256 {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        if other.is_zero() {
            panic!("I256: division by zero");
        }
        self.checked_div(&other)
            .unwrap_or_else(|_| panic!("I256: division overflow"))
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<u64> for I256 {
    fn from(value: u64) -> Self {
        I256 { value: U256::from(value) }
    }
}

impl From<u128> for I256 {
    fn from(value: u128) -> Self {
        I256 { value: U256::from(value) }
    }
}

/**
 * @dev From U256 (only works for values <= 2^255 - 1)
 */
impl TryFrom<U256> for I256 {
    type Error = anchor_lang::error::Error;

    fn try_from(value: U256) -> Result<Self> {
        require!(value <= Self::MAX.value, ArithmeticError::Overflow);
        Ok(I256 { value })
    }
}

/**
 * @dev Into U256 (only works for non-negative values)
 */
impl TryFrom<I256> for U256 {
    type Error = anchor_lang::error::Error;

    fn try_from(value: I256) -> Result<Self> {
        value.to_u256()
    }
}

/**
 * @dev Into i128, fails when the value does not survive truncation to the low 128 bits
 */
impl TryFrom<I256> for i128 {
    type Error = anchor_lang::error::Error;

    fn try_from(value: I256) -> Result<Self> {
        let low = value.value.low_u128() as i128;
        require!(
            I256::from_i128(low) == value,
            out_of_range(value.is_negative())
        );
        Ok(low)
    }
}

/**
 * @dev Partial ordering for signed integers
 */
impl PartialOrd for I256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/**
 * @dev Total ordering for signed integers
 */
impl Ord for I256 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Same sign: two's complement order matches unsigned order
            _ => self.value.cmp(&other.value),
        }
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/**
 * @dev Borsh encoding: the four limbs, least significant first (32 bytes)
 */
impl AnchorSerialize for I256 {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.value.0.serialize(writer)
    }
}

impl AnchorDeserialize for I256 {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let limbs = <[u64; 4]>::deserialize_reader(reader)?;
        Ok(I256 { value: U256(limbs) })
    }
}
