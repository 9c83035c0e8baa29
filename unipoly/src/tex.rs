use unipoly_core::{Ring, RingOps, TeX, tex_lc};
use unipoly_core::util::format::paren_expr;
use crate::Poly;

impl<R> TeX for Poly<R>
where R: Ring + TeX, for<'x> &'x R: RingOps<R> {
    fn tex_math_symbol() -> String {
        format!("{}[x]", R::tex_math_symbol())
    }

    fn tex_string(&self) -> String {
        let terms = self.iter().enumerate().rev().filter(|(_, a)| !a.is_zero()).map(|(k, a)| {
            let x = match k {
                0 => String::new(),
                1 => String::from("x"),
                _ => format!("x^{{{k}}}")
            };
            let r = if k > 0 {
                paren_expr(a.tex_string())
            } else {
                a.tex_string()
            };
            (r, x)
        });
        tex_lc(terms)
    }
}
