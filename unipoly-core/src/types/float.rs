use num_traits::{Zero, One};
use crate::*;
use super::int::impl_ops;

// `f64` is treated as a field. Rounding is the caller's concern; 
// a coefficient is zero only when it compares equal to `0.0`.

macro_rules! impl_float {
    ($type:ident) => {
        impl_ops!(AddMonOps, $type);
        impl_ops!(AddGrpOps, $type);
        impl_ops!(MonOps, $type);
        impl_ops!(RingOps, $type);
        impl_ops!(EucRingOps, $type);
        impl_ops!(FieldOps, $type);

        impl Elem for $type {
            fn math_symbol() -> String { 
                String::from("R")
            }
        }

        impl AddMon for $type {}
        impl AddGrp for $type {}
        impl Mon for $type {}
        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_zero() { 
                    None
                } else { 
                    Some(self.recip())
                }
            }

            fn is_unit(&self) -> bool {
                !self.is_zero()
            }

            fn normalizing_unit(&self) -> Self {
                self.inv().unwrap_or_else(Self::one)
            }
        }

        // `%` on floats is `fmod`, which is not the field remainder. 
        impl EucRing for $type {
            fn divides(&self, _y: &Self) -> bool { 
                !self.is_zero()
            }

            fn gcd(x: &Self, y: &Self) -> Self {
                if x.is_zero() && y.is_zero() { 
                    Self::zero()
                } else { 
                    Self::one()
                }
            }

            fn gcdx(x: &Self, y: &Self) -> (Self, Self, Self) {
                if !x.is_zero() { 
                    (Self::one(), x.recip(), Self::zero())
                } else if !y.is_zero() { 
                    (Self::one(), Self::zero(), y.recip())
                } else { 
                    (Self::zero(), Self::zero(), Self::zero())
                }
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                if x.is_zero() || y.is_zero() { 
                    Self::zero()
                } else { 
                    Self::one()
                }
            }
        }

        impl Field for $type {}
    };
}

impl_float!(f64);

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn check_type() {
        fn check<T>() where T: Field, for<'a> &'a T: FieldOps<T> {}
        check::<f64>();
    }

    #[test]
    fn inv() { 
        assert_eq!(2f64.inv(), Some(0.5));
        assert_eq!(0f64.inv(), None);
        assert!(!0f64.is_unit());
    }

    #[test]
    fn normalizing_unit() { 
        assert_eq!((-4f64).normalizing_unit(), -0.25);
        assert_eq!(0f64.normalizing_unit(), 1.0);
    }

    #[test]
    fn gcd() { 
        assert_eq!(f64::gcd(&3.0, &0.5), 1.0);
        assert_eq!(f64::gcd(&0.0, &0.0), 0.0);
        assert!(2f64.divides(&3.0));
    }

    #[test]
    fn gcdx() { 
        let (d, s, t) = f64::gcdx(&4.0, &3.0);
        assert_eq!(d, 1.0);
        assert_eq!(s * 4.0 + t * 3.0, d);
    }
}
