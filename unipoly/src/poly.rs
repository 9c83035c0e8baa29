use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use delegate::delegate;
use itertools::{EitherOrBoth, Itertools};
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use unipoly_core::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Mon, MonOps, Ring, RingOps};
use unipoly_core::util::format::paren_expr;

// A univariate polynomial c₀ + c₁x + ... + cₙxⁿ over R, stored densely
// as [c₀, ..., cₙ] with cₙ ≠ 0. The zero polynomial is [].

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<R>", into = "Vec<R>"))]
pub struct Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R>
{
    coeffs: Vec<R>,
    zero: R
}

impl<R> Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new(mut coeffs: Vec<R>) -> Self {
        Self::normalize(&mut coeffs);
        Self { coeffs, zero: R::zero() }
    }

    fn normalize(coeffs: &mut Vec<R>) {
        while coeffs.last().is_some_and(|a| a.is_zero()) {
            coeffs.pop();
        }
    }

    pub fn from_const(r: R) -> Self {
        Self::new(vec![r])
    }

    // r xᵏ
    pub fn mono(r: R, k: usize) -> Self {
        if r.is_zero() {
            return Self::zero()
        }
        let mut coeffs = vec![R::zero(); k];
        coeffs.push(r);
        Self::new(coeffs)
    }

    pub fn variable() -> Self {
        Self::mono(R::one(), 1)
    }

    // -1 for the zero polynomial.
    pub fn deg(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    pub fn coeff(&self, i: usize) -> &R {
        self.coeffs.get(i).unwrap_or(&self.zero)
    }

    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    delegate! {
        to self.coeffs {
            pub fn iter(&self) -> std::slice::Iter<'_, R>;
        }
    }

    pub fn nterms(&self) -> usize {
        self.iter().filter(|a| !a.is_zero()).count()
    }

    pub fn is_const(&self) -> bool {
        self.coeffs.len() <= 1
    }

    pub fn const_term(&self) -> &R {
        self.coeff(0)
    }

    pub fn lead_coeff(&self) -> &R {
        self.coeffs.last().unwrap_or(&self.zero)
    }

    pub fn is_monic(&self) -> bool {
        self.lead_coeff().is_one()
    }

    pub fn map_coeffs<R2, F>(&self, f: F) -> Poly<R2>
    where
        R2: Ring, for<'x> &'x R2: RingOps<R2>,
        F: Fn(&R) -> R2
    {
        Poly::new(self.iter().map(f).collect())
    }

    // Horner's scheme: (..((cₙ)x + cₙ₋₁)x + ..)x + c₀.
    pub fn eval(&self, x: &R) -> R {
        let mut y = R::zero();
        for (i, a) in self.iter().enumerate().rev() {
            y += a;
            if i > 0 {
                y *= x;
            }
        }
        y
    }

    // self(q(x))
    pub fn compose(&self, q: &Self) -> Self {
        self.iter().rev().fold(Self::zero(), |mut res, a| {
            res *= q;
            res += a;
            res
        })
    }
}

impl<R> From<Vec<R>> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R> From<Poly<R>> for Vec<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(p: Poly<R>) -> Self {
        p.coeffs
    }
}

impl<R> From<i32> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from(i: i32) -> Self {
        Self::from_const(R::from(i))
    }
}

impl<R> FromIterator<R> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<R> Default for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R> PartialEq for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<R> Eq for Poly<R>
where R: Ring + Eq, for<'x> &'x R: RingOps<R> {}

impl<R> PartialEq<R> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn eq(&self, other: &R) -> bool {
        self == &Self::from_const(other.clone())
    }
}

// e.g. [4, 0, -4] -> "-4*x^2+4"
impl<R> Display for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0")
        }

        let mut first = true;

        for (k, a) in self.iter().enumerate().rev() {
            if a.is_zero() {
                continue
            }

            let (neg, body) = if k > 0 && a.is_one() {
                (false, String::from("x"))
            } else if k > 0 && *a == -R::one() {
                (true, String::from("x"))
            } else {
                let c = paren_expr(a);
                let (neg, c) = match c.strip_prefix('-') {
                    Some(c) => (true, c.to_owned()),
                    None    => (false, c)
                };
                if k > 0 {
                    (neg, format!("{c}*x"))
                } else {
                    (neg, c)
                }
            };

            if neg {
                f.write_str("-")?;
            } else if !first {
                f.write_str("+")?;
            }

            f.write_str(&body)?;

            if k > 1 {
                write!(f, "^{k}")?;
            }

            first = false;
        }

        Ok(())
    }
}

impl<R> Debug for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::new(vec![])
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl<R> One for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.const_term().is_one()
    }
}

impl<R> Neg for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Poly<R>;
    fn neg(self) -> Self::Output {
        Poly::new(self.iter().map(|a| -a).collect())
    }
}

// Pointwise, missing coefficients read as 0.
macro_rules! impl_add_assop {
    ($trait:ident, $method:ident, $op:tt) => {
        #[auto_ops]
        impl<R> $trait<&Poly<R>> for Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: &Poly<R>) {
                let coeffs = self.iter().zip_longest(rhs.iter()).map(|e|
                    match e {
                        EitherOrBoth::Both(a, b) => a $op b,
                        EitherOrBoth::Left(a)    => a.clone(),
                        EitherOrBoth::Right(b)   => &R::zero() $op b
                    }
                ).collect();
                *self = Self::new(coeffs)
            }
        }

        #[auto_ops]
        impl<R> $trait<&R> for Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: &R) {
                let rhs = Poly::from_const(rhs.clone());
                self.$method(&rhs)
            }
        }
    };
}

impl_add_assop!(AddAssign, add_assign, +);
impl_add_assop!(SubAssign, sub_assign, -);

// Convolution: cₖ = Σ_{i+j=k} aᵢbⱼ.
#[auto_ops]
impl<R> MulAssign<&Poly<R>> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &Poly<R>) {
        if self.is_zero() || rhs.is_zero() {
            *self = Self::zero();
            return
        }

        let (n, m) = (self.coeffs.len(), rhs.coeffs.len());
        let mut coeffs = vec![R::zero(); n + m];

        for (i, a) in self.iter().enumerate() {
            for (j, b) in rhs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        *self = Self::new(coeffs)
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        let rhs = Poly::from_const(rhs.clone());
        *self *= &rhs
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<R> Pow<$t> for &Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = Poly<R>;
            fn pow(self, n: $t) -> Self::Output {
                let mut res = Poly::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }

        impl<R> Pow<$t> for Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = Poly<R>;
            fn pow(self, n: $t) -> Self::Output {
                (&self).pow(n)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(usize);

macro_rules! impl_alg_op {
    ($trait:ident) => {
        impl<R> $trait<Self> for Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<R> $trait<Poly<R>> for &Poly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_op!(AddMonOps);
impl_alg_op!(AddGrpOps);
impl_alg_op!(MonOps);
impl_alg_op!(RingOps);

impl<R> Elem for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn math_symbol() -> String {
        format!("{}[x]", R::math_symbol())
    }
}

impl<R> AddMon for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {}

impl<R> AddGrp for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {}

impl<R> Mon for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {}

// Units of R[x] are the constant units of R.
impl<R> Ring for Poly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn inv(&self) -> Option<Self> {
        if self.is_const() {
            self.const_term().inv().map(Self::from_const)
        } else {
            None
        }
    }

    fn is_unit(&self) -> bool {
        self.is_const() && self.const_term().is_unit()
    }

    fn normalizing_unit(&self) -> Self {
        let u = self.lead_coeff().normalizing_unit();
        Self::from_const(u)
    }
}
