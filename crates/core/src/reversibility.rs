//! Reversibility validators
//!
//! Stateless property checks that the kernel's arithmetic round-trips:
//! addition/subtraction exactly under 64-bit wraparound, multiplication
//! and division within a relative tolerance (wraparound and truncation can
//! lose precision), residue reconstruction exactly.
//!
//! These are diagnostic tools for property-based testing, not runtime
//! guards: each validator recomputes the round trip and raises
//! [`Error::Reversibility`] carrying the operands and the observed
//! mismatch.

use crate::arithmetic::{wrap_add, wrap_mul, wrap_sub};
use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::residue::compute_residue;

/// Default relative tolerance for the lossy (multiplicative) round trips
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

fn within_tolerance(expected: u64, observed: u64, tolerance: f64) -> bool {
    if expected == observed {
        return true;
    }
    let diff = expected.abs_diff(observed) as f64;
    let scale = (expected.max(1)) as f64;
    diff / scale <= tolerance
}

/// Check `(x + y) - y == x` under 64-bit wraparound (exact)
pub fn validate_addition(x: u64, y: u64) -> Result<()> {
    let observed = wrap_sub(wrap_add(x, y), y);
    if observed != x {
        return Err(Error::Reversibility {
            operation: "addition",
            lhs: x,
            rhs: y,
            expected: x,
            observed,
        });
    }
    Ok(())
}

/// Check `(x - y) + y == x` under 64-bit wraparound (exact)
pub fn validate_subtraction(x: u64, y: u64) -> Result<()> {
    let observed = wrap_add(wrap_sub(x, y), y);
    if observed != x {
        return Err(Error::Reversibility {
            operation: "subtraction",
            lhs: x,
            rhs: y,
            expected: x,
            observed,
        });
    }
    Ok(())
}

/// Check `(x * y) / y ≈ x` within a relative tolerance
///
/// Wraparound during the multiplication loses high bits, so the recovered
/// value can differ; the check passes when the relative difference stays
/// inside `tolerance`. A zero multiplier has no inverse and passes
/// trivially.
pub fn validate_multiplication(x: u64, y: u64, tolerance: f64) -> Result<()> {
    if y == 0 {
        return Ok(());
    }
    let observed = wrap_mul(x, y) / y;
    if !within_tolerance(x, observed, tolerance) {
        return Err(Error::Reversibility {
            operation: "multiplication",
            lhs: x,
            rhs: y,
            expected: x,
            observed,
        });
    }
    Ok(())
}

/// Check `(x / y) * y ≈ x` within a relative tolerance
///
/// Integer division truncates, so the recovered value can fall short of
/// `x` by up to `y - 1`; the check passes when the relative difference
/// stays inside `tolerance`.
///
/// ## Errors
///
/// `Error::Validation` when the divisor is zero.
pub fn validate_division(x: u64, y: u64, tolerance: f64) -> Result<()> {
    if y == 0 {
        return Err(Error::Validation(
            "division round trip requires a non-zero divisor".to_string(),
        ));
    }
    let observed = (x / y).wrapping_mul(y);
    if !within_tolerance(x, observed, tolerance) {
        return Err(Error::Reversibility {
            operation: "division",
            lhs: x,
            rhs: y,
            expected: x,
            observed,
        });
    }
    Ok(())
}

/// Check `expressed + residue.value == value` exactly
pub fn validate_residue(value: u64, modulus: u64) -> Result<()> {
    let (expressed, residue) = compute_residue(value, modulus, Identity::new(0))?;
    let observed = expressed + residue.value;
    if observed != value {
        return Err(Error::Reversibility {
            operation: "residue",
            lhs: value,
            rhs: modulus,
            expected: value,
            observed,
        });
    }
    Ok(())
}
