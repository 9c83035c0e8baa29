use num_traits::{Zero, One, Pow};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use unipoly::{Poly, PolyError, FF, EucRing};
use unipoly::util::log::init_simple_logger;

type F = FF<7>;
type PF = Poly<F>;
type PZ = Poly<i64>;

const TRIALS: usize = 200;

fn init() -> StdRng {
    let _ = init_simple_logger(log::LevelFilter::Off);
    StdRng::seed_from_u64(2024)
}

fn rand_ff(rng: &mut StdRng, max_deg: usize) -> PF {
    let n = rng.gen_range(0..=max_deg + 1);
    (0..n).map(|_| F::new(rng.gen_range(0..7))).collect()
}

fn rand_int(rng: &mut StdRng, max_deg: usize) -> PZ {
    let n = rng.gen_range(0..=max_deg + 1);
    (0..n).map(|_| rng.gen_range(-9..=9)).collect()
}

fn is_normalized<R>(f: &Poly<R>) -> bool
where R: unipoly::Ring, for<'x> &'x R: unipoly::RingOps<R> {
    f.coeffs().last().map_or(true, |a| !a.is_zero())
}

#[test]
fn ring_axioms() {
    let mut rng = init();

    for _ in 0..TRIALS {
        let f = rand_int(&mut rng, 5);
        let g = rand_int(&mut rng, 5);
        let h = rand_int(&mut rng, 5);

        assert_eq!(&f + PZ::zero(), f);
        assert_eq!(&f * PZ::one(), f);
        assert_eq!(&f + &g, &g + &f);
        assert_eq!(&f * &g, &g * &f);
        assert_eq!((&f * &g) * &h, &f * (&g * &h));
        assert_eq!(&f * (&g + &h), &f * &g + &f * &h);
        assert_eq!(&f - &f, PZ::zero());

        for p in [&f + &g, &f - &g, &f * &g, -&f] {
            assert!(is_normalized(&p));
        }
    }
}

#[test]
fn degree() {
    let mut rng = init();

    assert_eq!(PZ::zero().deg(), -1);

    for _ in 0..TRIALS {
        let f = rand_int(&mut rng, 5);
        let g = rand_int(&mut rng, 5);

        assert!((&f + &g).deg() <= f.deg().max(g.deg()));
        if !f.is_zero() && !g.is_zero() {
            assert_eq!((&f * &g).deg(), f.deg() + g.deg());
        }
    }
}

#[test]
fn division_law() {
    let mut rng = init();

    for _ in 0..TRIALS {
        let f = rand_ff(&mut rng, 8);
        let g = rand_ff(&mut rng, 4);

        if g.is_zero() {
            assert_eq!(f.div_rem(&g), Err(PolyError::DivisionByZero));
            continue
        }

        let q = &f / &g;
        let r = &f % &g;
        assert_eq!(&q * &g + &r, f);
        assert!(r.deg() < g.deg());
        assert!(is_normalized(&q));
        assert!(is_normalized(&r));
        assert_eq!(f.div_rem(&g), Ok((q, r)));
    }
}

#[test]
fn division_law_int() {
    let mut rng = init();

    // the identity survives truncating division.
    for _ in 0..TRIALS {
        let f = rand_int(&mut rng, 6);
        let g = rand_int(&mut rng, 3);

        if let Ok((q, r)) = f.div_rem(&g) {
            assert_eq!(&q * &g + &r, f);
        } else {
            assert!(g.is_zero());
        }
    }
}

#[test]
fn gcd() {
    let mut rng = init();

    for _ in 0..TRIALS {
        let h = rand_ff(&mut rng, 2);
        let f = &h * rand_ff(&mut rng, 3);
        let g = &h * rand_ff(&mut rng, 3);
        let d = f.gcd(&g);

        if f.is_zero() && g.is_zero() {
            assert!(d.is_zero());
            continue
        }

        assert!(d.is_monic());
        assert!((&f % &d).is_zero());
        assert!((&g % &d).is_zero());
        assert!(h.is_zero() || (&d % h.monic()).is_zero());
        assert_eq!(d, g.gcd(&f));
        assert_eq!(d, EucRing::gcd(&f, &g));
    }
}

#[test]
fn eval_compose() {
    let mut rng = init();

    for _ in 0..TRIALS {
        let f = rand_ff(&mut rng, 4);
        let g = rand_ff(&mut rng, 3);
        let a = F::new(rng.gen_range(0..7));

        assert_eq!(PF::variable().eval(&a), a);
        assert_eq!(f.compose(&PF::variable()), f);
        assert_eq!(f.compose(&g).eval(&a), f.eval(&g.eval(&a)));
        assert_eq!((&f * &g).eval(&a), f.eval(&a) * g.eval(&a));
        assert_eq!((&f + &g).eval(&a), f.eval(&a) + g.eval(&a));
    }
}

#[test]
fn pow() {
    let mut rng = init();

    for _ in 0..20 {
        let f = rand_int(&mut rng, 2);
        let f3 = (&f).pow(3u32);
        assert_eq!(f3, &f * &f * &f);
        assert_eq!(f3.eval(&2), f.eval(&2).pow(3));
    }
}

#[test]
fn scalar_symmetry() {
    let mut rng = init();

    for _ in 0..TRIALS {
        let f = rand_int(&mut rng, 4);
        let a: i64 = rng.gen_range(-9..=9);
        let c = PZ::from_const(a);

        assert_eq!(&f + a, &f + &c);
        assert_eq!(a + &f, &c + &f);
        assert_eq!(&f - a, &f - &c);
        assert_eq!(a - &f, &c - &f);
        assert_eq!(&f * a, &f * &c);
        assert_eq!(a * &f, &c * &f);
        assert_eq!(c == a, a == c);
    }
}

#[test]
fn scenarios() {
    let _ = init();

    let f = PZ::new(vec![1, 2, 3]);
    assert_eq!(f.eval(&2), 17);

    let f = PZ::new(vec![0, 0, 0, 1]);
    assert_eq!(f.deg(), 3);

    let f = PZ::new(vec![4, 0, -4]);
    let g = PZ::new(vec![2, 0, -2]);
    assert_eq!(&f / &g, PZ::new(vec![2]));
    assert!((&f % &g).is_zero());

    let f = Poly::<f64>::new(vec![-1.0, 0.0, 1.0]);
    let g = Poly::<f64>::new(vec![-1.0, 1.0]);
    assert_eq!(f.gcd(&g), Poly::new(vec![-1.0, 1.0]));

    let z = Poly::<f64>::zero();
    assert_eq!(z.gcd(&z).deg(), -1);

    assert_eq!(f.div_rem(&z), Err(PolyError::DivisionByZero));
}
