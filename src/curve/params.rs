//! Named domain parameters for standard binary curves

use std::collections::HashMap;

use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::curve::{BinaryCurve, CurveError, CurvePoint, CurveResult};
use crate::util::parse_hex;

/// Domain parameters of a named curve, stored as hex literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainParams {
    pub name: &'static str,
    /// Irreducible polynomial defining GF(2^m)
    pub modulus: &'static str,
    pub a: &'static str,
    pub b: &'static str,
    pub gx: &'static str,
    pub gy: &'static str,
    /// Order of the base point
    pub order: &'static str,
    pub cofactor: u32,
}

/// NIST K-163 / SEC 2 sect163k1, modulus `x^163 + x^7 + x^6 + x^3 + 1`
pub const SECT163K1: DomainParams = DomainParams {
    name: "sect163k1",
    modulus: "0x800000000000000000000000000000000000000c9",
    a: "0x1",
    b: "0x1",
    gx: "0x2fe13c0537bbc11acaa07d793de4e6d5e5c94eee8",
    gy: "0x289070fb05d38ff58321f2e800536d538ccdaa3d9",
    order: "0x4000000000000000000020108a2e0cc0d99f8a5ef",
    cofactor: 2,
};

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static DomainParams> = {
        let mut registry = HashMap::new();
        for alias in ["sect163k1", "k-163", "nist-k163"] {
            registry.insert(alias, &SECT163K1);
        }
        registry
    };
}

/// Resolves a curve by name or alias, ignoring ASCII case.
pub fn lookup(name: &str) -> CurveResult<&'static DomainParams> {
    REGISTRY
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| CurveError::UnknownCurve(name.to_string()))
}

fn hex_field(field: &'static str, literal: &str) -> CurveResult<BigUint> {
    parse_hex(literal).ok_or_else(|| CurveError::InvalidParameter(field.to_string()))
}

impl DomainParams {
    pub fn modulus(&self) -> CurveResult<BigUint> {
        hex_field("modulus", self.modulus)
    }

    pub fn order(&self) -> CurveResult<BigUint> {
        hex_field("order", self.order)
    }

    /// Builds the validated curve descriptor.
    pub fn curve(&self) -> CurveResult<BinaryCurve> {
        BinaryCurve::new(
            hex_field("a", self.a)?,
            hex_field("b", self.b)?,
            self.modulus()?,
        )
    }

    /// Builds the base point on `curve`, checking it against the curve equation.
    pub fn generator<'c>(&self, curve: &'c BinaryCurve) -> CurveResult<CurvePoint<'c>> {
        curve.checked_point(hex_field("gx", self.gx)?, hex_field("gy", self.gy)?)
    }
}
