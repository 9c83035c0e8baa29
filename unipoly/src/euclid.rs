use std::ops::{Div, DivAssign, Rem, RemAssign};
use auto_impl_ops::auto_ops;
use log::{debug, trace};
use num_traits::Zero;

use unipoly_core::{EucRing, EucRingOps, Field, FieldOps};
use crate::{Poly, PolyError, Result};

impl<R> Poly<R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    // (q, r) with self = rhs * q + r and deg(r) < deg(rhs).
    //
    // The degree bound holds when the division on R is exact, e.g. over a field.
    // Otherwise the reduction stops at the first term it fails to eliminate,
    // and only the identity is guaranteed.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(PolyError::DivisionByZero)
        }

        debug!("div_rem: deg {} by deg {}", self.deg(), rhs.deg());

        let (q, r) = self.div_rem_nonzero(rhs);

        debug!("div_rem: quot deg {}, rem deg {}", q.deg(), r.deg());

        Ok((q, r))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    fn div_rem_nonzero(&self, rhs: &Self) -> (Self, Self) {
        let j = rhs.deg();
        let b = rhs.lead_coeff();
        let exact = b.is_unit();

        let mut q = Self::zero();
        let mut r = self.clone();

        while r.deg() >= j {
            let i = r.deg();
            let k = (i - j) as usize;
            let c = r.lead_coeff() / b;
            let t = Self::mono(c, k); // (a/b) x^{i-j}
            let mut next = &r - &(&t * rhs);

            // cancel rounding residue at the eliminated position.
            if exact && next.deg() == i {
                let mut coeffs = Vec::from(next);
                coeffs.pop();
                next = Self::new(coeffs);
            }

            if next.deg() >= i {
                debug!("div_rem: {} is not divisible by {}, stop at deg {i}.", r.lead_coeff(), b);
                break
            }

            trace!("div_rem: deg {i} -> {}", next.deg());

            q += t;
            r = next;
        }

        (q, r)
    }
}

#[auto_ops]
impl<R> DivAssign<&Poly<R>> for Poly<R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn div_assign(&mut self, rhs: &Poly<R>) {
        match self.checked_div(rhs) {
            Ok(q)  => *self = q,
            Err(e) => panic!("{e}")
        }
    }
}

#[auto_ops]
impl<R> RemAssign<&Poly<R>> for Poly<R>
where R: EucRing, for<'x> &'x R: EucRingOps<R> {
    fn rem_assign(&mut self, rhs: &Poly<R>) {
        match self.checked_rem(rhs) {
            Ok(r)  => *self = r,
            Err(e) => panic!("{e}")
        }
    }
}

// Poly over R: Field

impl<R> Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    // Monic gcd. gcd(0, 0) = 0.
    pub fn gcd(&self, rhs: &Self) -> Self {
        debug!("gcd: deg {}, deg {}", self.deg(), rhs.deg());

        let (mut f, mut g) = (self.clone(), rhs.clone());

        while !g.is_zero() {
            let (_, r) = f.div_rem_nonzero(&g);
            trace!("gcd: deg {} mod deg {} -> deg {}", f.deg(), g.deg(), r.deg());
            (f, g) = (g, r);
        }

        let d = f.monic();

        debug!("gcd: {d}");

        d
    }

    pub fn monic(&self) -> Self {
        let a = self.lead_coeff().clone();
        self.map_coeffs(|c| c / &a)
    }
}

impl<R> EucRingOps<Poly<R>> for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> EucRingOps<Poly<R>> for &Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {}

impl<R> EucRing for Poly<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn gcd(x: &Self, y: &Self) -> Self {
        x.gcd(y)
    }
}
