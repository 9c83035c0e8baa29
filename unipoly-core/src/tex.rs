#![allow(non_upper_case_globals)]

use itertools::Itertools;
use num_bigint::BigInt;
use crate::FF;

pub trait TeX { 
    fn tex_math_symbol() -> String;
    fn tex_string(&self) -> String;
}

macro_rules! impl_tex {
    ($type:ident, $symbol:literal) => {
        impl TeX for $type {
            fn tex_math_symbol() -> String { 
                String::from($symbol)
            }

            fn tex_string(&self) -> String {
                self.to_string()
            }
        }
    }
}

impl_tex!(i32, "\\mathbb{Z}");
impl_tex!(i64, "\\mathbb{Z}");
impl_tex!(i128, "\\mathbb{Z}");
impl_tex!(BigInt, "\\mathbb{Z}");
impl_tex!(f64, "\\mathbb{R}");

impl<const p: i32> TeX for FF<p> {
    fn tex_math_symbol() -> String { 
        format!("\\mathbb{{F}}_{{{p}}}")
    }

    fn tex_string(&self) -> String {
        self.to_string()
    }
}

// Joins `(coeff, monomial)` strings into a signed sum, e.g. `-x^{2} + 3`.
pub fn tex_lc<I>(terms: I) -> String
where I: IntoIterator<Item = (String, String)> { 
    let terms = terms.into_iter().enumerate().map(|(k, (r, x))| { 
        let (neg, r) = match r.strip_prefix('-') { 
            Some(r) => (true, r.to_owned()),
            None => (false, r)
        };
        let term = match (r.as_str(), x.as_str()) { 
            (r, "") => r.to_owned(),
            ("1", x) => x.to_owned(),
            (r, x) => format!("{r}{x}")
        };
        match (k, neg) { 
            (0, false) => term,
            (0, true)  => format!("-{term}"),
            (_, false) => format!("+ {term}"),
            (_, true)  => format!("- {term}")
        }
    }).collect_vec();

    if terms.is_empty() { 
        String::from("0")
    } else { 
        terms.join(" ")
    }
}

#[cfg(test)]
mod tests { 
    use crate::Elem;
    use super::*;

    #[test]
    fn symbols() { 
        assert_eq!(i32::tex_math_symbol(), "\\mathbb{Z}");
        assert_eq!(FF::<5>::tex_math_symbol(), "\\mathbb{F}_{5}");
        assert_eq!(FF::<5>::math_symbol(), "F₅");
    }

    #[test]
    fn lc() { 
        let terms = [
            ("-1".to_string(), "x^{2}".to_string()), 
            ("3".to_string(), "x".to_string()), 
            ("-4".to_string(), "".to_string())
        ];
        assert_eq!(tex_lc(terms), "-x^{2} + 3x - 4");
        assert_eq!(tex_lc(Vec::<(String, String)>::new()), "0");
    }
}
