#![allow(non_upper_case_globals)]

use std::ops::{Add, Neg, Sub, Mul, Div, Rem, AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;

use crate::{Elem, AddMonOps, AddGrpOps, MonOps, RingOps, FieldOps, EucRingOps, AddMon, AddGrp, Mon, Ring, EucRing, Field};

type I = i32;

// `FF<p>` : integers mod `p`. A field when `p` is prime.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub struct FF<const p: I>(I);

impl<const p: I> FF<p> { 
    pub fn new(a: I) -> Self { 
        assert!(p > 0);
        Self(a.rem_euclid(p))
    }

    pub fn rep(&self) -> &I { 
        &self.0
    }
}

impl<const p: I> From<I> for FF<p> {
    fn from(a: I) -> Self {
        Self::new(a)
    }
}

impl<const p: I> From<FF<p>> for I {
    fn from(a: FF<p>) -> Self {
        a.0
    }
}

impl<const p: I> FromStr for FF<p> {
    type Err = <I as FromStr>::Err;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let a = s.parse::<I>()?;
        Ok(Self::from(a))
    }
}

impl<const p: I> Zero for FF<p> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const p: I> One for FF<p> {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self == &Self::one()
    }
}

impl<const p: I> Neg for FF<p> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<const p: I> Neg for &FF<p> {
    type Output = FF<p>;
    fn neg(self) -> Self::Output {
        FF::new(-self.0)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<'a, 'b, const p: I> $trait<&'b FF<p>> for &'a FF<p> {
            type Output = FF<p>;
            fn $method(self, rhs: &'b FF<p>) -> Self::Output {
                // widen to avoid overflow for large `p`.
                let a = (self.0 as i64).$method(rhs.0 as i64);
                FF::new(a.rem_euclid(p as i64) as I)
            }
        }
    }
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);

#[auto_ops]
impl<'a, 'b, const p: I> Div<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn div(self, rhs: &'b FF<p>) -> Self::Output {
        match rhs.inv() { 
            Some(inv) => self * inv,
            None => panic!("{rhs} is not invertible in {}.", FF::<p>::math_symbol())
        }
    }
}

#[auto_ops]
impl<'a, 'b, const p: I> Rem<&'b FF<p>> for &'a FF<p> {
    type Output = FF<p>;
    fn rem(self, rhs: &'b FF<p>) -> Self::Output {
        assert!(!rhs.is_zero());
        FF::zero() // FF<p> is a field. 
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<const p: I> $trait for FF<p> {}
        impl<'a, const p: I> $trait<FF<p>> for &'a FF<p> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);
impl_alg_ops!(MonOps);
impl_alg_ops!(RingOps);
impl_alg_ops!(EucRingOps);
impl_alg_ops!(FieldOps);

impl<const p: I> Elem for FF<p> {
    fn math_symbol() -> String {
        use crate::util::format::subscript;
        format!("F{}", subscript(p))
    }
}

impl<const p: I> AddMon for FF<p> {}
impl<const p: I> AddGrp for FF<p> {}
impl<const p: I> Mon for FF<p> {}

impl<const p: I> Ring for FF<p> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            return None
        }

        // 1 = ax + py  ->  ax = 1 mod p. 
        let (d, x, _y) = I::gcdx(&self.0, &p);
        
        if d.is_one() { 
            Some(Self::new(x))
        } else { 
            None
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero() && I::gcd(&self.0, &p).is_one()
    }

    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }
}

impl<const p: I> EucRing for FF<p> {
    fn divides(&self, _y: &Self) -> bool { 
        self.is_unit()
    }
}

impl<const p: I> Field for FF<p> {}
