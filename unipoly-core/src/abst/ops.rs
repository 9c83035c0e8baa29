use std::ops::{Add, Sub, Mul, Div, Rem, Neg};

// Operator bundles. `S: XOps<T>` gives `S op T -> T` and `S op &T -> T` for
// every `op` of the bundle. A coefficient type `R` implements them both for
// `R` and for `&R`, so generic code can write `&a * &b` without cloning.

macro_rules! decl_ops {
    ($name:ident [$($base:tt)*] $($op:ident),*) => {
        pub trait $name<T = Self>:
            $($base)*
            $(+ $op<T, Output = T> + for<'a> $op<&'a T, Output = T>)*
        {}
    };
}

decl_ops!(AddMonOps [Sized] Add);
decl_ops!(AddGrpOps [AddMonOps<T> + Neg<Output = T>] Sub);
decl_ops!(MonOps [Sized] Mul);
decl_ops!(RingOps [AddGrpOps<T> + MonOps<T>]);
decl_ops!(EucRingOps [RingOps<T>] Div, Rem);
decl_ops!(FieldOps [EucRingOps<T>]);

#[cfg(test)]
mod tests {
    use super::*;

    fn double<T>(a: &T) -> T where for<'a> &'a T: RingOps<T> {
        a + a
    }

    #[test]
    fn ref_ops() {
        assert_eq!(double(&3i32), 6);
        assert_eq!(double(&1.5f64), 3.0);
    }
}
