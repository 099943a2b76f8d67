//! Asymptotic approximation of the logarithmic integral.
//!
//! li(x) ≈ (x / ln x) · Σ k! / (ln x)<sup>k</sup>
//!
//! The series diverges for every `x`, so it is cut at its smallest term once
//! the first few terms have settled. Accuracy improves as `x` grows and is
//! poor below about e<sup>2</sup>.

/// Hard cap on the number of terms.
const MAX_TERMS: u8 = 64;

/// Terms at or below this index are always summed.
const SETTLE_TERMS: u8 = 3;

trait AsymptoticFloat:
    Copy
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
{
    const ONE: Self;
    const MAX: Self;

    fn ln(self) -> Self;
    fn from_u8(k: u8) -> Self;
}

macro_rules! impl_asymptotic_float {
    ($($t:ty),*) => {$(
        impl AsymptoticFloat for $t {
            const ONE: Self = 1.0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn ln(self) -> Self {
                <$t>::ln(self)
            }

            #[inline]
            fn from_u8(k: u8) -> Self {
                Self::from(k)
            }
        }
    )*};
}

impl_asymptotic_float!(f32, f64);

fn li_asym_generic<F: AsymptoticFloat>(x: F) -> F {
    let log_x = x.ln();

    let mut sum = F::ONE;
    let mut term = F::ONE;
    let mut min_term = F::MAX;

    for k in 1..=MAX_TERMS {
        term = term * F::from_u8(k) / log_x;

        if k > SETTLE_TERMS && term > min_term {
            break;
        }
        if term < min_term {
            min_term = term;
        }
        sum = sum + term;
    }

    (sum * x) / log_x
}

/// Asymptotic estimate of li(`x`) in single precision.
///
/// - `x` must be finite and greater than 1
pub fn li_asym(x: f32) -> f32 {
    debug_assert!(x > 1.0, "li_asym needs x > 1, got {x}");
    li_asym_generic(x)
}

/// Asymptotic estimate of li(`x`) in double precision.
///
/// - `x` must be finite and greater than 1
pub fn li_asym_f64(x: f64) -> f64 {
    debug_assert!(x > 1.0, "li_asym_f64 needs x > 1, got {x}");
    li_asym_generic(x)
}

/// Capacity hint for the number of primes below `n`, never more than `n`.
pub fn prime_count_bound(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let estimate = li_asym_f64(n as f64).ceil();
    if estimate >= n as f64 {
        n
    } else {
        estimate as usize
    }
}
