use crate::poly_commit::errors::{PolyComSchemeError, Result};
use misc_algebra::prelude::*;

/// A multiplicative subgroup `{ω^0, ..., ω^(n-1)}` of power-of-two order `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain<F> {
    elements: Vec<F>,
    size_inv: F,
}

impl<F: Scalar> EvaluationDomain<F> {
    /// Build the domain of `size` roots of unity.
    /// # Example
    /// ```
    /// use misc_plonk::poly_commit::domain::EvaluationDomain;
    /// use misc_algebra::toy::F337;
    /// let domain = EvaluationDomain::<F337>::new(8).unwrap();
    /// assert_eq!(domain.size(), 8);
    /// assert_eq!(domain.element(1), F337::from(85u32));
    /// assert!(EvaluationDomain::<F337>::new(6).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        let elements = F::roots_of_unity(size)?;
        let size_inv = F::from(size as u64).inv()?;
        Ok(Self { elements, size_inv })
    }

    /// The number of elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// The inverse of the size as a field element.
    pub fn size_inv(&self) -> F {
        self.size_inv
    }

    /// The generator `ω`.
    pub fn generator(&self) -> F {
        self.element(1)
    }

    /// `ω^i`, with `i` taken modulo the size.
    pub fn element(&self, i: usize) -> F {
        self.elements[i % self.elements.len()]
    }

    /// All elements in order.
    pub fn elements(&self) -> &[F] {
        &self.elements
    }

    /// Evaluate `Z_H(x) = x^n - 1`.
    pub fn vanishing_eval(&self, x: &F) -> F {
        x.pow(&[self.size() as u64]).sub(&F::one())
    }

    /// Evaluate the coefficient vector on every domain element.
    /// Shorter input is padded with zeros.
    pub fn fft(&self, coefs: &[F]) -> Result<Vec<F>> {
        if coefs.len() > self.size() {
            return Err(PolyComSchemeError::DomainError);
        }
        let mut padded = coefs.to_vec();
        padded.resize(self.size(), F::zero());
        Ok(fft_recursive(&padded, &self.elements))
    }

    /// Interpolate the coefficients from evaluations on the domain.
    pub fn inverse_fft(&self, evals: &[F]) -> Result<Vec<F>> {
        let mut res = self.fft(evals)?;
        res[1..].reverse();
        for v in res.iter_mut() {
            v.mul_assign(&self.size_inv);
        }
        Ok(res)
    }

    /// Evaluate on the coset `k·H`, `k` the multiplicative generator of the field.
    pub fn coset_fft(&self, coefs: &[F]) -> Result<Vec<F>> {
        let k = F::multiplicative_generator();
        let mut shifted = coefs.to_vec();
        let mut power = F::one();
        for c in shifted.iter_mut() {
            c.mul_assign(&power);
            power.mul_assign(&k);
        }
        self.fft(&shifted)
    }

    /// Interpolate the coefficients from evaluations on the coset `k·H`.
    pub fn coset_inverse_fft(&self, evals: &[F]) -> Result<Vec<F>> {
        let k_inv = F::multiplicative_generator().inv()?;
        let mut coefs = self.inverse_fft(evals)?;
        let mut power = F::one();
        for c in coefs.iter_mut() {
            c.mul_assign(&power);
            power.mul_assign(&k_inv);
        }
        Ok(coefs)
    }
}

fn fft_recursive<F: Scalar>(coefs: &[F], domain: &[F]) -> Vec<F> {
    let n = coefs.len();
    if n == 1 {
        return coefs.to_vec();
    }
    let sub_domain: Vec<F> = domain.iter().step_by(2).copied().collect();
    let even: Vec<F> = coefs.iter().step_by(2).copied().collect();
    let odd: Vec<F> = coefs.iter().skip(1).step_by(2).copied().collect();

    #[cfg(feature = "parallel")]
    let (left, right) = rayon::join(
        || fft_recursive(&even, &sub_domain),
        || fft_recursive(&odd, &sub_domain),
    );
    #[cfg(not(feature = "parallel"))]
    let (left, right) = (
        fft_recursive(&even, &sub_domain),
        fft_recursive(&odd, &sub_domain),
    );

    let half = n / 2;
    let mut out = vec![F::zero(); n];
    for i in 0..half {
        let y_times_root = right[i].mul(&domain[i]);
        out[i] = left[i].add(&y_times_root);
        out[i + half] = left[i].sub(&y_times_root);
    }
    out
}
