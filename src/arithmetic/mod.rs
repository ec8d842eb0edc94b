pub mod gf2m;

pub use gf2m::{
    add, degree, divide, gcd, is_irreducible, multiplicative_inverse, multiply,
    multiply_no_reduce, quotient, remainder,
};
