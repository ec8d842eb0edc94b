use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use tracing::debug;

use crate::arithmetic::gf2m;
use crate::curve::{CurveError, CurvePoint, CurveResult};
use crate::field::{FieldElement, FieldError, FieldResult};
use crate::util::format_polynomial;

/// Non-supersingular binary curve `y^2 + xy = x^3 + ax^2 + b` over GF(2^m).
///
/// The descriptor is immutable. Points borrow it, so it must outlive every
/// point created from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryCurve {
    a: FieldElement,
    b: FieldElement,
    modulus: Arc<BigUint>,
}

impl BinaryCurve {
    /// Creates a curve after validating the domain parameters.
    ///
    /// The modulus must be irreducible and `b` must be nonzero once reduced.
    pub fn new(a: BigUint, b: BigUint, modulus: BigUint) -> CurveResult<Self> {
        if !gf2m::is_irreducible(&modulus) {
            return Err(CurveError::ReducibleModulus);
        }
        let curve = Self::new_unchecked(a, b, modulus)?;
        if curve.b.is_zero() {
            return Err(CurveError::SingularCurve);
        }
        debug!(
            degree = curve.degree(),
            modulus = %format_polynomial(&curve.modulus),
            "validated binary curve"
        );
        Ok(curve)
    }

    /// Creates a curve without checking irreducibility or singularity.
    pub fn new_unchecked(a: BigUint, b: BigUint, modulus: BigUint) -> CurveResult<Self> {
        let modulus = Arc::new(modulus);
        let a = FieldElement::new(a, Arc::clone(&modulus))?;
        let b = FieldElement::new(b, Arc::clone(&modulus))?;
        Ok(Self { a, b, modulus })
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    pub fn modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    /// Extension degree `m`.
    pub fn degree(&self) -> u64 {
        gf2m::degree(&self.modulus)
    }

    /// Wraps an integer into this curve's field.
    pub fn element(&self, value: BigUint) -> FieldResult<FieldElement> {
        FieldElement::new(value, Arc::clone(&self.modulus))
    }

    /// Builds a point from integer coordinates. The point is not validated.
    pub fn point_from_ints(&self, x: BigUint, y: BigUint) -> CurveResult<CurvePoint<'_>> {
        let x = self.element(x)?;
        let y = self.element(y)?;
        Ok(CurvePoint::from_parts(self, x, y))
    }

    /// Builds a point from field elements, which must belong to this curve's field.
    /// The point is not validated.
    pub fn point_from_elements(
        &self,
        x: FieldElement,
        y: FieldElement,
    ) -> CurveResult<CurvePoint<'_>> {
        if !x.same_field(&self.a) || !y.same_field(&self.a) {
            return Err(FieldError::FieldMismatch.into());
        }
        Ok(CurvePoint::from_parts(self, x, y))
    }

    /// Builds a point from integer coordinates and rejects it unless it lies on the curve.
    pub fn checked_point(&self, x: BigUint, y: BigUint) -> CurveResult<CurvePoint<'_>> {
        let point = self.point_from_ints(x, y)?;
        if !self.is_on_curve(&point) {
            return Err(CurveError::PointNotOnCurve);
        }
        Ok(point)
    }

    /// The point at infinity, encoded as `(0, 0)`.
    pub fn identity(&self) -> CurvePoint<'_> {
        let zero = self.a.zero_like();
        CurvePoint::from_parts(self, zero.clone(), zero)
    }

    /// Returns true when the point belongs to this curve and satisfies
    /// `y^2 + xy = x^3 + ax^2 + b`. The identity is a member of the group.
    pub fn is_on_curve(&self, point: &CurvePoint<'_>) -> bool {
        if point.curve() != self {
            return false;
        }
        if point.is_identity() {
            return true;
        }
        self.satisfies_equation(point.x(), point.y()).unwrap_or(false)
    }

    fn satisfies_equation(&self, x: &FieldElement, y: &FieldElement) -> FieldResult<bool> {
        let x2 = x.square();
        let lhs = y.square().add(&x.multiply(y)?)?;
        let rhs = x2.multiply(x)?.add(&self.a.multiply(&x2)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

impl fmt::Display for BinaryCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 + xy = x^3 + ax^2 + b, a = {}, b = {}, p = {}",
            self.a,
            self.b,
            format_polynomial(&self.modulus)
        )
    }
}
