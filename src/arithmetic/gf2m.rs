//! Bit-polynomial arithmetic over GF(2^m)
//!
//! Every value is a `BigUint` whose bit `i` is the coefficient of `x^i`.
//! The modulus `p` is an irreducible polynomial of degree `m`; reduced
//! values satisfy `value < 2^m`.

use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::field::{FieldError, FieldResult};

/// Degree of a bit-polynomial. `degree(0)` is defined as 0.
#[inline]
pub fn degree(x: &BigUint) -> u64 {
    if x.is_zero() {
        0
    } else {
        x.bits() - 1
    }
}

/// Field addition is XOR.
#[inline]
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    a ^ b
}

/// Shift-and-reduce multiplication of two reduced values modulo `p`.
pub fn multiply(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let m = degree(p);
    let mut shifted = a.clone();
    let mut acc = BigUint::zero();

    for i in 0..scan_width(b, p) {
        if b.bit(i) {
            acc ^= &shifted;
        }
        shifted <<= 1u32;
        if shifted.bit(m) {
            shifted ^= p;
        }
    }
    acc
}

/// Same accumulation as [`multiply`] without folding the shifted copy back
/// under `p`. The caller owns the reduction.
pub fn multiply_no_reduce(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let mut shifted = a.clone();
    let mut acc = BigUint::zero();

    for i in 0..scan_width(b, p) {
        if b.bit(i) {
            acc ^= &shifted;
        }
        shifted <<= 1u32;
    }
    acc
}

// Bits of `b` to scan: at least the width of `p`, never truncating `b`.
#[inline]
fn scan_width(b: &BigUint, p: &BigUint) -> u64 {
    p.bits().max(b.bits())
}

/// Long division returning `(quotient, remainder)`.
fn long_division(a: &BigUint, b: &BigUint) -> FieldResult<(BigUint, BigUint)> {
    if b.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let divisor_degree = degree(b);
    let mut rem = a.clone();
    let mut quot = BigUint::zero();

    while !rem.is_zero() && degree(&rem) >= divisor_degree {
        let shift = degree(&rem) - divisor_degree;
        quot.set_bit(shift, true);
        rem ^= b << shift;
    }
    Ok((quot, rem))
}

/// Quotient of the polynomial division `a / b`.
pub fn quotient(a: &BigUint, b: &BigUint) -> FieldResult<BigUint> {
    if b.is_zero() {
        return Err(FieldError::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(BigUint::zero());
    }
    long_division(a, b).map(|(quot, _)| quot)
}

/// Remainder of the polynomial division `a / b`.
pub fn remainder(a: &BigUint, b: &BigUint) -> FieldResult<BigUint> {
    long_division(a, b).map(|(_, rem)| rem)
}

/// Polynomial gcd by repeated remainders.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut r0 = a.clone();
    let mut r1 = b.clone();
    while !r1.is_zero() {
        // r1 is nonzero, so the division cannot fail
        let next = match remainder(&r0, &r1) {
            Ok(rem) => rem,
            Err(_) => break,
        };
        r0 = mem::replace(&mut r1, next);
    }
    r0
}

/// Inverse of `a` modulo `p` by the extended Euclidean algorithm.
///
/// Tracks the remainder pair `(r, newr)` from `(p, a)` and the Bézout
/// coefficient pair `(t, newt)` from `(0, 1)`. When `newr` reaches zero,
/// `r` is `gcd(p, a)` and `t` satisfies `a * t ≡ r (mod p)`.
pub fn multiplicative_inverse(a: &BigUint, p: &BigUint) -> FieldResult<BigUint> {
    if a.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let mut t = BigUint::zero();
    let mut newt = BigUint::one();
    let mut r = p.clone();
    let mut newr = a.clone();

    while !newr.is_zero() {
        let q = quotient(&r, &newr)?;

        let next_r = add(&r, &multiply_no_reduce(&q, &newr, p));
        r = mem::replace(&mut newr, next_r);

        let next_t = add(&t, &multiply_no_reduce(&q, &newt, p));
        t = mem::replace(&mut newt, next_t);
    }

    if !r.is_one() {
        return Err(FieldError::NotInvertible);
    }
    Ok(t)
}

/// `a / b` modulo `p`.
pub fn divide(a: &BigUint, b: &BigUint, p: &BigUint) -> FieldResult<BigUint> {
    let inv = multiplicative_inverse(b, p)?;
    Ok(multiply(a, &inv, p))
}

/// Ben-Or irreducibility test.
///
/// `p` of degree `m` is irreducible iff `gcd(p, x^(2^i) - x) = 1` for every
/// `1 <= i <= m/2`.
pub fn is_irreducible(p: &BigUint) -> bool {
    let m = degree(p);
    if m == 0 {
        return false;
    }
    if m == 1 {
        return true;
    }

    let x = BigUint::from(2u32);
    let mut power = x.clone();
    for _ in 0..m / 2 {
        power = multiply(&power, &power, p);
        if !gcd(p, &add(&power, &x)).is_one() {
            return false;
        }
    }
    true
}
