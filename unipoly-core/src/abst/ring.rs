use std::ops::{DivAssign, RemAssign};
use crate::{AddGrp, Mon, RingOps, EucRingOps, FieldOps};

// Commutative rings with 1: enough for `Poly<R>` to add, multiply, evaluate
// and compose. `From<i32>` lets literals be lifted into `R`.
pub trait Ring: AddGrp + Mon + RingOps + From<i32>
where for<'a> &'a Self: RingOps<Self> {
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;

    // `u` such that `x * u` is the canonical representative of `x` up to units.
    // For polynomials this is the inverse of the leading coefficient, if any.
    fn normalizing_unit(&self) -> Self;

    // Compares instead of negating, so `i32::MIN` is fine.
    fn is_pm_one(&self) -> bool {
        self.is_one() || *self == -Self::one()
    }
}

// Rings with `/` and `%`. Polynomial long division only needs `/` on leading
// coefficients; it is exact when the divisor's leading coefficient is a unit.
pub trait EucRing: Ring + EucRingOps + DivAssign + for<'a> DivAssign<&'a Self> + RemAssign + for<'a> RemAssign<&'a Self>
where for<'a> &'a Self: EucRingOps<Self> {
    fn divides(&self, y: &Self) -> bool {
        !self.is_zero() && (y % self).is_zero()
    }

    // Normalized by `normalizing_unit`. gcd(0, 0) = 0.
    fn gcd(x: &Self, y: &Self) -> Self {
        let (mut a, mut b) = (x.clone(), y.clone());
        while !b.is_zero() {
            let r = &a % &b;
            a = std::mem::replace(&mut b, r);
        }
        let u = a.normalizing_unit();
        a * u
    }

    // (d, s, t) with d = sx + ty and d = gcd(x, y).
    fn gcdx(x: &Self, y: &Self) -> (Self, Self, Self) {
        let (mut a, mut b) = (x.clone(), y.clone());
        let (mut s, mut s1) = (Self::one(), Self::zero());
        let (mut t, mut t1) = (Self::zero(), Self::one());

        while !b.is_zero() {
            let q = &a / &b;
            let r = &a % &b;
            a = std::mem::replace(&mut b, r);

            let s2 = &s - &q * &s1;
            s = std::mem::replace(&mut s1, s2);

            let t2 = &t - &q * &t1;
            t = std::mem::replace(&mut t1, t2);
        }

        if a.is_zero() {
            return (a, Self::zero(), Self::zero())
        }

        let u = a.normalizing_unit();
        (a * &u, s * &u, t * &u)
    }

    fn lcm(x: &Self, y: &Self) -> Self {
        if x.is_zero() || y.is_zero() {
            return Self::zero()
        }
        let l = x * (y / Self::gcd(x, y));
        let u = l.normalizing_unit();
        l * u
    }
}

// Every non-zero element is a unit. Over a field, polynomial division always
// lowers the degree and `gcd` can be made monic, which is why `Poly<R>`
// implements `EucRing` only for `R: Field`.
pub trait Field: EucRing + FieldOps
where for<'a> &'a Self: FieldOps<Self> {}
