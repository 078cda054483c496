//! The operator catalogue
//!
//! Pure 64-bit projections as an enumerable type: every operator is a
//! variant, `apply` dispatches by exhaustive match, and the name catalogue
//! is a registered handler map. There is no string-keyed fallback; an
//! unknown name resolves to `None`, never to an implicit default.
//!
//! Operators carry a canonical byte encoding so that a lens built from an
//! operator gets a stable, content-derived identity.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use substratum_core::arithmetic::{wrap_add, wrap_mul, wrap_sub};

/// A pure, named 64-bit projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// XOR with the operand
    Xor(u64),
    /// Wrapping addition of the operand
    Add(u64),
    /// Wrapping subtraction of the operand
    Sub(u64),
    /// Wrapping multiplication by the operand
    Mul(u64),
    /// Left shift (shift amount taken modulo 64)
    ShiftLeft(u32),
    /// Right shift (shift amount taken modulo 64)
    ShiftRight(u32),
    /// AND with the operand
    Mask(u64),
    /// Left rotation (rotation amount taken modulo 64)
    RotateLeft(u32),
}

impl Operator {
    /// Apply the projection to a value
    pub fn apply(&self, value: u64) -> u64 {
        match *self {
            Operator::Xor(operand) => value ^ operand,
            Operator::Add(operand) => wrap_add(value, operand),
            Operator::Sub(operand) => wrap_sub(value, operand),
            Operator::Mul(operand) => wrap_mul(value, operand),
            Operator::ShiftLeft(bits) => value.wrapping_shl(bits),
            Operator::ShiftRight(bits) => value.wrapping_shr(bits),
            Operator::Mask(operand) => value & operand,
            Operator::RotateLeft(bits) => value.rotate_left(bits % 64),
        }
    }

    /// Catalogue name of this operator
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::Xor(_) => "xor",
            Operator::Add(_) => "add",
            Operator::Sub(_) => "sub",
            Operator::Mul(_) => "mul",
            Operator::ShiftLeft(_) => "shift_left",
            Operator::ShiftRight(_) => "shift_right",
            Operator::Mask(_) => "mask",
            Operator::RotateLeft(_) => "rotate_left",
        }
    }

    /// Canonical encoding: one tag byte followed by the operand in
    /// little-endian
    ///
    /// Stable across runs; the content a derived lens identity is hashed
    /// from.
    pub fn encode(&self) -> [u8; 9] {
        let (tag, operand): (u8, u64) = match *self {
            Operator::Xor(operand) => (0x01, operand),
            Operator::Add(operand) => (0x02, operand),
            Operator::Sub(operand) => (0x03, operand),
            Operator::Mul(operand) => (0x04, operand),
            Operator::ShiftLeft(bits) => (0x05, bits as u64),
            Operator::ShiftRight(bits) => (0x06, bits as u64),
            Operator::Mask(operand) => (0x07, operand),
            Operator::RotateLeft(bits) => (0x08, bits as u64),
        };
        let mut encoded = [0u8; 9];
        encoded[0] = tag;
        encoded[1..].copy_from_slice(&operand.to_le_bytes());
        encoded
    }
}

/// The registered handler map: catalogue name → constructor
static CATALOGUE: Lazy<FxHashMap<&'static str, fn(u64) -> Operator>> = Lazy::new(|| {
    let mut map: FxHashMap<&'static str, fn(u64) -> Operator> = FxHashMap::default();
    map.insert("xor", Operator::Xor as fn(u64) -> Operator);
    map.insert("add", Operator::Add as fn(u64) -> Operator);
    map.insert("sub", Operator::Sub as fn(u64) -> Operator);
    map.insert("mul", Operator::Mul as fn(u64) -> Operator);
    map.insert("shift_left", |operand| Operator::ShiftLeft(operand as u32));
    map.insert("shift_right", |operand| Operator::ShiftRight(operand as u32));
    map.insert("mask", Operator::Mask as fn(u64) -> Operator);
    map.insert("rotate_left", |operand| Operator::RotateLeft(operand as u32));
    map
});

/// Resolve a catalogue name to an operator with the given operand
///
/// Unknown names resolve to `None`; the catalogue never falls back to a
/// default projection.
pub fn lookup_operator(name: &str, operand: u64) -> Option<Operator> {
    CATALOGUE.get(name).map(|construct| construct(operand))
}

/// All registered catalogue names, sorted
pub fn operator_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATALOGUE.keys().copied().collect();
    names.sort_unstable();
    names
}
