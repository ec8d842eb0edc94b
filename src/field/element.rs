use std::fmt;
use std::sync::Arc;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::arithmetic::gf2m;
use crate::field::{FieldError, FieldResult};

/// An element of GF(2^m) together with the polynomial defining the field.
///
/// Elements are immutable; arithmetic returns new elements. Operands of a
/// binary operation must share the same modulus.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: Arc<BigUint>,
}

impl FieldElement {
    /// Wraps `value` into the field defined by `modulus`, reducing it first.
    pub fn new(value: BigUint, modulus: Arc<BigUint>) -> FieldResult<Self> {
        check_modulus(&modulus)?;
        let value = gf2m::remainder(&value, &modulus)?;
        Ok(Self { value, modulus })
    }

    pub fn from_u64(value: u64, modulus: Arc<BigUint>) -> FieldResult<Self> {
        Self::new(BigUint::from(value), modulus)
    }

    pub fn zero(modulus: Arc<BigUint>) -> FieldResult<Self> {
        check_modulus(&modulus)?;
        Ok(Self { value: BigUint::zero(), modulus })
    }

    pub fn one(modulus: Arc<BigUint>) -> FieldResult<Self> {
        check_modulus(&modulus)?;
        Ok(Self { value: BigUint::one(), modulus })
    }

    /// Uniformly random element of the field.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, modulus: Arc<BigUint>) -> FieldResult<Self> {
        check_modulus(&modulus)?;
        let value = rng.gen_biguint(gf2m::degree(&modulus));
        Ok(Self { value, modulus })
    }

    /// The zero element of the same field.
    pub fn zero_like(&self) -> Self {
        self.with_value(BigUint::zero())
    }

    /// The multiplicative identity of the same field.
    pub fn one_like(&self) -> Self {
        self.with_value(BigUint::one())
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    /// Extension degree `m` of the field.
    pub fn degree(&self) -> u64 {
        gf2m::degree(&self.modulus)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Returns true when `other` lives in the same field.
    pub fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }

    fn ensure_same_field(&self, other: &Self) -> FieldResult<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            modulus: Arc::clone(&self.modulus),
        }
    }

    pub fn add(&self, other: &Self) -> FieldResult<Self> {
        self.ensure_same_field(other)?;
        Ok(self.with_value(gf2m::add(&self.value, &other.value)))
    }

    pub fn multiply(&self, other: &Self) -> FieldResult<Self> {
        self.ensure_same_field(other)?;
        Ok(self.with_value(gf2m::multiply(&self.value, &other.value, &self.modulus)))
    }

    pub fn square(&self) -> Self {
        self.with_value(gf2m::multiply(&self.value, &self.value, &self.modulus))
    }

    /// Raises the element to `exponent`. Only squaring is supported.
    pub fn pow(&self, exponent: u32) -> FieldResult<Self> {
        if exponent != 2 {
            return Err(FieldError::ContractViolation(format!(
                "only exponent 2 is supported, got {exponent}"
            )));
        }
        Ok(self.square())
    }

    pub fn divide(&self, other: &Self) -> FieldResult<Self> {
        self.ensure_same_field(other)?;
        let quotient = gf2m::divide(&self.value, &other.value, &self.modulus)?;
        Ok(self.with_value(quotient))
    }

    pub fn inverse(&self) -> FieldResult<Self> {
        let inv = gf2m::multiplicative_inverse(&self.value, &self.modulus)?;
        Ok(self.with_value(inv))
    }

    /// Computes `dividend / self`. Only a dividend of 1 is supported.
    pub fn rdiv(&self, dividend: &BigUint) -> FieldResult<Self> {
        if !dividend.is_one() {
            return Err(FieldError::ContractViolation(format!(
                "reciprocal shortcut requires a dividend of 1, got {dividend:#x}"
            )));
        }
        self.inverse()
    }
}

fn check_modulus(modulus: &BigUint) -> FieldResult<()> {
    if gf2m::degree(modulus) == 0 {
        return Err(FieldError::InvalidModulus);
    }
    Ok(())
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.value)
    }
}
