// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;

use super::i256::I256;

/**
 * @dev Wrappers over int256 arithmetic with added overflow checks.
 * Every fallible operation returns an ArithmeticError instead of wrapping.
 */
pub struct SafeMathInt256;

impl SafeMathInt256 {
    /**
     * @dev Returns a + b, failing outside [-2^255, 2^255 - 1].
     */
    pub fn add(a: I256, b: I256) -> Result<I256> {
        a.checked_add(&b)
    }

    /**
     * @dev Returns a - b. Unlike add(a, -b) this is defined for b == MIN.
     */
    pub fn sub(a: I256, b: I256) -> Result<I256> {
        a.checked_sub(&b)
    }

    /**
     * @dev Returns a * b. 0 * MIN is 0.
     */
    pub fn mul(a: I256, b: I256) -> Result<I256> {
        a.checked_mul(&b)
    }

    /**
     * @dev Returns a / b truncated toward zero. Fails for b == 0 and MIN / -1.
     */
    pub fn div(a: I256, b: I256) -> Result<I256> {
        a.checked_div(&b)
    }

    pub fn min(a: I256, b: I256) -> I256 {
        // Equivalent to `result = (a < b) ? a : b`
        if a < b {
            a
        } else {
            b
        }
    }

    pub fn max(a: I256, b: I256) -> I256 {
        // Equivalent to `result = (a < b) ? b : a`
        if a < b {
            b
        } else {
            a
        }
    }

    /// -2^255
    pub fn get_min() -> I256 {
        I256::MIN
    }

    /// 2^255 - 1
    pub fn get_max() -> I256 {
        I256::MAX
    }

    /**
     * @dev Fixed point multiplication: a * b / base, truncated toward zero.
     * The product itself must fit in int256 before it is scaled down.
     */
    pub fn fxp_mul(a: I256, b: I256, base: I256) -> Result<I256> {
        let result = Self::mul(a, b).and_then(|product| Self::div(product, base));
        if result.is_err() {
            msg!("fxp_mul failed: a={}, b={}, base={}", a, b, base);
        }
        result
    }

    /**
     * @dev Fixed point division: a * base / b, truncated toward zero.
     * a * base must fit in int256 before it is divided.
     */
    pub fn fxp_div(a: I256, b: I256, base: I256) -> Result<I256> {
        let result = Self::mul(a, base).and_then(|scaled| Self::div(scaled, b));
        if result.is_err() {
            msg!("fxp_div failed: a={}, b={}, base={}", a, b, base);
        }
        result
    }
}
