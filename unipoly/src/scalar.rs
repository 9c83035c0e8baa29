#![allow(non_upper_case_globals)]

use std::ops::{Add, Sub, Mul};
use num_bigint::BigInt;
use unipoly_core::FF;
use crate::Poly;

// Scalars on the left: `a op P` is `from_const(a) op P`.

macro_rules! impl_scalar_lhs {
    (@op $trait:ident, $method:ident, $t:ty $(, const $p:ident: $pt:ty)?) => {
        impl<$(const $p: $pt)?> $trait<Poly<$t>> for $t {
            type Output = Poly<$t>;
            fn $method(self, rhs: Poly<$t>) -> Self::Output {
                Poly::from_const(self).$method(rhs)
            }
        }

        impl<$(const $p: $pt)?> $trait<&Poly<$t>> for $t {
            type Output = Poly<$t>;
            fn $method(self, rhs: &Poly<$t>) -> Self::Output {
                Poly::from_const(self).$method(rhs)
            }
        }

        impl<$(const $p: $pt)?> $trait<Poly<$t>> for &$t {
            type Output = Poly<$t>;
            fn $method(self, rhs: Poly<$t>) -> Self::Output {
                Poly::from_const(self.clone()).$method(rhs)
            }
        }

        impl<$(const $p: $pt)?> $trait<&Poly<$t>> for &$t {
            type Output = Poly<$t>;
            fn $method(self, rhs: &Poly<$t>) -> Self::Output {
                Poly::from_const(self.clone()).$method(rhs)
            }
        }
    };

    ($t:ty $(, const $p:ident: $pt:ty)?) => {
        impl_scalar_lhs!(@op Add, add, $t $(, const $p: $pt)?);
        impl_scalar_lhs!(@op Sub, sub, $t $(, const $p: $pt)?);
        impl_scalar_lhs!(@op Mul, mul, $t $(, const $p: $pt)?);

        impl<$(const $p: $pt)?> PartialEq<Poly<$t>> for $t {
            fn eq(&self, other: &Poly<$t>) -> bool {
                other == self
            }
        }
    };
}

impl_scalar_lhs!(i32);
impl_scalar_lhs!(i64);
impl_scalar_lhs!(i128);
impl_scalar_lhs!(BigInt);
impl_scalar_lhs!(f64);
impl_scalar_lhs!(FF<p>, const p: i32);
