//! Affine points and the group law

use std::fmt;
use std::ptr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;

use crate::curve::{BinaryCurve, CurveError, CurveResult};
use crate::field::FieldElement;

/// A point on a [`BinaryCurve`] in affine coordinates.
///
/// The identity is the point `(0, 0)`. Points hold a shared borrow of their
/// curve and are never mutated; every operation returns a new point.
#[derive(Clone, Debug)]
pub struct CurvePoint<'c> {
    curve: &'c BinaryCurve,
    x: FieldElement,
    y: FieldElement,
}

impl<'c> CurvePoint<'c> {
    pub(crate) fn from_parts(curve: &'c BinaryCurve, x: FieldElement, y: FieldElement) -> Self {
        Self { curve, x, y }
    }

    pub fn curve(&self) -> &'c BinaryCurve {
        self.curve
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Affine coordinates as integers.
    pub fn coordinates(&self) -> (BigUint, BigUint) {
        (self.x.value().clone(), self.y.value().clone())
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    fn same_curve(&self, other: &Self) -> bool {
        ptr::eq(self.curve, other.curve) || self.curve == other.curve
    }

    fn ensure_same_curve(&self, other: &Self) -> CurveResult<()> {
        if self.same_curve(other) {
            Ok(())
        } else {
            Err(CurveError::CurveMismatch)
        }
    }

    /// Group addition.
    ///
    /// Inputs are assumed to lie on the curve; they are not re-validated.
    pub fn add(&self, other: &Self) -> CurveResult<Self> {
        self.ensure_same_curve(other)?;

        if self.is_identity() {
            return Ok(other.clone());
        }
        if other.is_identity() {
            return Ok(self.clone());
        }

        let a = self.curve.a();
        let (x3, y3) = if self.x == other.x {
            // Q = -P exactly when y_P + y_Q = x
            if self.y.add(&other.y)? == self.x {
                return Ok(self.curve.identity());
            }
            // lambda = x + y / x
            // x3 = lambda^2 + lambda + a
            // y3 = x^2 + (lambda + 1) * x3
            let lambda = other.x.add(&other.y.divide(&other.x)?)?;
            let x3 = lambda.square().add(&lambda)?.add(a)?;
            let lambda_plus_one = lambda.add(&lambda.one_like())?;
            let y3 = other.x.square().add(&lambda_plus_one.multiply(&x3)?)?;
            (x3, y3)
        } else {
            // lambda = (y1 + y2) / (x1 + x2)
            // x3 = lambda^2 + lambda + x1 + x2 + a
            // y3 = (x2 + x3) * lambda + x3 + y2
            let lambda = self.y.add(&other.y)?.divide(&self.x.add(&other.x)?)?;
            let x3 = lambda
                .square()
                .add(&lambda)?
                .add(&self.x)?
                .add(&other.x)?
                .add(a)?;
            let y3 = other.x.add(&x3)?.multiply(&lambda)?.add(&x3)?.add(&other.y)?;
            (x3, y3)
        };

        Ok(Self::from_parts(self.curve, x3, y3))
    }

    pub fn double(&self) -> CurveResult<Self> {
        self.add(self)
    }

    /// `-(x, y) = (x, x + y)`. The identity is its own negation.
    pub fn negate(&self) -> CurveResult<Self> {
        let y = self.x.add(&self.y)?;
        Ok(Self::from_parts(self.curve, self.x.clone(), y))
    }

    /// Computes `self - other`.
    pub fn subtract(&self, other: &Self) -> CurveResult<Self> {
        self.ensure_same_curve(other)?;
        let negated = Self::from_parts(other.curve, other.x.clone(), other.x.add(&other.y)?);
        negated.add(self)
    }

    /// Scalar multiplication `n * self`.
    ///
    /// Scans `n` from the low end with signed digits in {-1, 0, 1}: an odd
    /// `n` takes the digit `u = 2 - (n mod 4)` so that `n - u` is divisible
    /// by 4. The scalar is used as given, without reduction by the group order.
    #[tracing::instrument(skip_all, name = "CurvePoint::multiply", fields(bits = scalar.bits()))]
    pub fn multiply(&self, scalar: &BigUint) -> CurveResult<Self> {
        let mut n = scalar.clone();
        let mut acc = self.curve.identity();
        let mut base = self.clone();

        while !n.is_zero() {
            if n.is_odd() {
                // n ≡ 3 (mod 4) takes the negative digit
                if n.bit(1) {
                    trace!("digit -1");
                    n += 1u32;
                    acc = acc.subtract(&base)?;
                } else {
                    trace!("digit +1");
                    n -= 1u32;
                    acc = acc.add(&base)?;
                }
            }
            n >>= 1u32;
            if !n.is_zero() {
                base = base.double()?;
            }
        }
        Ok(acc)
    }

    pub fn multiply_u64(&self, scalar: u64) -> CurveResult<Self> {
        self.multiply(&BigUint::from(scalar))
    }
}

impl PartialEq for CurvePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_curve(other) && self.x == other.x && self.y == other.y
    }
}

impl Eq for CurvePoint<'_> {}

impl fmt::Display for CurvePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "O")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
