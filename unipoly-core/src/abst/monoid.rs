use std::fmt::{Debug, Display};
use std::ops::{AddAssign, SubAssign, MulAssign};
use num_traits::{Zero, One};
use crate::{AddMonOps, AddGrpOps, MonOps};

// What a polynomial needs from a coefficient value: it is stored in a `Vec`,
// compared for normalization, printed term by term and shared across threads.
// `Eq` is not required, so `f64` qualifies.
pub trait ElemBase: Default + PartialEq + Clone + Send + Sync + Display + Debug + 'static {}

impl<T> ElemBase for T
where T: Default + PartialEq + Clone + Send + Sync + Display + Debug + 'static {}

pub trait Elem: ElemBase {
    // e.g. "Z", "F₇". `Poly<R>` reports "{R}[x]".
    fn math_symbol() -> String;
}

// Additive monoid: `+` and `0`. Trailing coefficients equal to `zero()` are
// dropped from every polynomial.
pub trait AddMon: Elem + Zero + AddMonOps + AddAssign + for<'a> AddAssign<&'a Self>
where for<'a> &'a Self: AddMonOps<Self> {
    fn sum<A, I>(itr: I) -> Self
    where Self: AddAssign<A>, I: IntoIterator<Item = A> {
        let mut res = Self::zero();
        for a in itr {
            res += a;
        }
        res
    }
}

// Additive group: adds `-` and negation, needed for `P - Q` and remainders.
pub trait AddGrp: AddMon + AddGrpOps + SubAssign + for<'a> SubAssign<&'a Self>
where for<'a> &'a Self: AddGrpOps<Self> {}

// Multiplicative monoid: `*` and `1`.
pub trait Mon: Elem + One + MonOps + MulAssign + for<'a> MulAssign<&'a Self>
where for<'a> &'a Self: MonOps<Self> {
    fn product<A, I>(itr: I) -> Self
    where Self: MulAssign<A>, I: IntoIterator<Item = A> {
        let mut res = Self::one();
        for a in itr {
            res *= a;
        }
        res
    }
}
