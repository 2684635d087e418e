use crate::poly_commit::domain::EvaluationDomain;
use crate::poly_commit::errors::{PolyComSchemeError, Result};
use misc_algebra::prelude::*;

/// Field polynomial in coefficient form, lowest order coefficient first.
///
/// High order zero coefficients are always trimmed; the zero polynomial keeps a single
/// zero coefficient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use misc_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use misc_algebra::toy::F13;
    /// use misc_algebra::{One, Zero};
    /// let poly = FpPolynomial::<F13>::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&F13::one()), F13::zero());
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use misc_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use misc_algebra::toy::F337;
    /// let coefs = vec![F337::from(1u32), F337::from(0u32), F337::from(1u32), F337::from(0u32)];
    /// let poly = FpPolynomial::from_coefs(coefs);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.len(), 3);
    /// assert_eq!(poly.eval(&F337::from(2u32)), F337::from(5u32));
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build a polynomial from signed integer coefficients.
    pub fn from_i64s(coefs: &[i64]) -> Self {
        Self::from_coefs(coefs.iter().map(|c| F::from_i64(*c)).collect())
    }

    /// Build the monic polynomial `(X - z_0)(X - z_1)...` from its zeroes.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero());
            p.mul_scalar_assign(root);
            r.sub_assign(&p);
        }
        r
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..=degree).map(|_| F::random(prng)).collect();
        Self::from_coefs(coefs)
    }

    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return the mathematical degree of the polynomial, 0 for constants.
    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// Return the number of coefficients.
    pub fn len(&self) -> usize {
        self.coefs.len()
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate a polynomial on a point with Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg(&self) -> Self {
        Self::from_coefs(self.coefs.iter().map(|c| c.neg()).collect())
    }

    /// Add `coef` to the coefficient of order `order`.
    pub fn add_coef_assign(&mut self, coef: &F, order: usize) {
        if self.coefs.len() <= order {
            self.coefs.resize(order + 1, F::zero());
        }
        self.coefs[order].add_assign(coef);
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Schoolbook multiplication.
    /// # Example
    /// ```
    /// use misc_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use misc_algebra::toy::F337;
    /// let p = FpPolynomial::<F337>::from_i64s(&[1, 1]);
    /// assert_eq!(p.mul(&p), FpPolynomial::from_i64s(&[1, 2, 1]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Multiplication through evaluation on a domain of roots of unity.
    /// Agrees with [`FpPolynomial::mul`], fails if the field has no large enough domain.
    pub fn fft_mul(&self, other: &Self) -> Result<Self> {
        let size = (self.coefs.len() + other.coefs.len() - 1).next_power_of_two();
        let domain = EvaluationDomain::<F>::new(size)?;
        let a = domain.fft(&self.coefs)?;
        let b = domain.fft(&other.coefs)?;
        let prod: Vec<F> = a.iter().zip(b.iter()).map(|(x, y)| x.mul(y)).collect();
        Ok(Self::from_coefs(domain.inverse_fft(&prod)?))
    }

    /// Interpolate the unique polynomial of degree below `xs.len()` through `(xs[i], ys[i])`.
    /// # Example
    /// ```
    /// use misc_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use misc_algebra::toy::F337;
    /// let xs = [F337::from(0u32), F337::from(1u32), F337::from(2u32)];
    /// let ys = [F337::from(0u32), F337::from(1u32), F337::from(8u32)];
    /// let p = FpPolynomial::lagrange(&xs, &ys).unwrap();
    /// assert_eq!(p, FpPolynomial::from_i64s(&[0, -2, 3]));
    /// ```
    pub fn lagrange(xs: &[F], ys: &[F]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PolyComSchemeError::LengthMismatch);
        }
        let mut result = Self::zero();
        for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
            let mut basis = Self::one();
            let mut denominator = F::one();
            for (j, xx) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                let diff = x.sub(xx);
                if diff.is_zero() {
                    return Err(PolyComSchemeError::DuplicatePoints);
                }
                basis = basis.mul(&Self::from_coefs(vec![xx.neg(), F::one()]));
                denominator.mul_assign(&diff);
            }
            basis.mul_scalar_assign(&y.mul(&denominator.inv()?));
            result.add_assign(&basis);
        }
        Ok(result)
    }

    /// Divide polynomial to produce the quotient and remainder polynomials.
    /// # Example:
    /// ```
    /// use misc_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use misc_algebra::toy::F337;
    /// let poly = FpPolynomial::<F337>::from_i64s(&[1, 1, 1]);
    /// let divisor = FpPolynomial::from_i64s(&[1, 1]);
    /// let (q, r) = poly.div_rem(&divisor).unwrap();
    /// assert_eq!(q, FpPolynomial::from_i64s(&[0, 1]));
    /// assert_eq!(r, FpPolynomial::from_i64s(&[1]));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(PolyComSchemeError::DivisionByZero);
        }
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return Ok((Self::zero(), self.clone()));
        }
        let bl_inv = divisor.coefs[l - 1].inv()?;
        let mut rem = self.coefs.clone();
        let mut quo = vec![F::zero(); k - l + 1];
        for i in (0..(k - l + 1)).rev() {
            let qi = bl_inv.mul(&rem[i + l - 1]);
            for (j, d) in divisor.coefs.iter().enumerate() {
                rem[i + j].sub_assign(&qi.mul(d));
            }
            quo[i] = qi;
        }
        rem.truncate(l - 1);
        Ok((Self::from_coefs(quo), Self::from_coefs(rem)))
    }

    /// Divide exactly, failing with `NotExactlyDivisible` when a remainder is left.
    pub fn exact_div(&self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        if !r.is_zero() {
            return Err(PolyComSchemeError::NotExactlyDivisible);
        }
        Ok(q)
    }

    /// Divide by `X - point`, also returning the remainder `self(point)`.
    pub fn div_by_linear(&self, point: &F) -> (Self, F) {
        let n = self.coefs.len();
        if n == 1 {
            return (Self::zero(), self.coefs[0]);
        }
        let mut quo = vec![F::zero(); n - 1];
        let mut carry = F::zero();
        for i in (1..n).rev() {
            carry = self.coefs[i].add(&carry.mul(point));
            quo[i - 1] = carry;
        }
        let rem = self.coefs[0].add(&carry.mul(point));
        (Self::from_coefs(quo), rem)
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::errors::PolyComSchemeError;
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use misc_algebra::{bls12_381::BLSScalar, prelude::*, toy::F13, toy::F337};

    #[test]
    fn from_zeroes() {
        let mut prng = test_rng();
        let zeroes: Vec<BLSScalar> = (0..10).map(|_| BLSScalar::random(&mut prng)).collect();
        let poly = FpPolynomial::from_zeroes(&zeroes[..]);
        assert_eq!(poly.degree(), 10);
        for root in zeroes.iter() {
            assert_eq!(BLSScalar::zero(), poly.eval(root));
        }
    }

    #[test]
    fn evaluation() {
        let p = FpPolynomial::<F337>::from_i64s(&[1, 1, 1]);
        assert_eq!(p.eval(&F337::from(2u32)), F337::from(7u32));
        let q = FpPolynomial::<F337>::from_i64s(&[-2, 7, -5, 1]);
        let expected = [-2i64, 1, 0, 1];
        for (x, y) in expected.iter().enumerate() {
            assert_eq!(q.eval(&F337::from(x as u32)), F337::from_i64(*y));
        }
    }

    #[test]
    fn add_and_sub() {
        let p1 = FpPolynomial::<F337>::from_i64s(&[0, 1, 2, 3]);
        let p2 = FpPolynomial::<F337>::from_i64s(&[3, 2, 1, 0, 1]);
        assert_eq!(p1.add(&p2), FpPolynomial::from_i64s(&[3, 3, 3, 3, 1]));
        assert_eq!(p1.add(&p2), p2.add(&p1));
        assert_eq!(p1.sub(&p1), FpPolynomial::zero());
        assert!(p1.sub(&p1).is_zero());
        assert_eq!(p1.sub(&p2).add(&p2), p1);
        assert_eq!(p1.neg().add(&p1), FpPolynomial::zero());

        let mut p = FpPolynomial::<F337>::from_i64s(&[0, 1, 1]);
        p.add_coef_assign(&F337::one(), 3);
        assert_eq!(p, FpPolynomial::from_i64s(&[0, 1, 1, 1]));
        p.add_coef_assign(&F337::one().neg(), 3);
        assert_eq!(p, FpPolynomial::from_i64s(&[0, 1, 1]));
    }

    #[test]
    fn naive_and_fft_multiplication_agree() {
        let mut prng = test_rng();
        for (da, db) in [(0usize, 0usize), (1, 1), (3, 7), (15, 16), (20, 3)] {
            let a = FpPolynomial::<BLSScalar>::random(&mut prng, da);
            let b = FpPolynomial::<BLSScalar>::random(&mut prng, db);
            assert_eq!(a.mul(&b), a.fft_mul(&b).unwrap());
        }
        let a = FpPolynomial::<F337>::from_i64s(&[3, 1, 4]);
        let b = FpPolynomial::<F337>::from_i64s(&[1, 5, 9, 2]);
        assert_eq!(a.mul(&b), a.fft_mul(&b).unwrap());
        assert!(a.mul(&FpPolynomial::zero()).is_zero());
    }

    #[test]
    fn lagrange_interpolation() {
        let xs: Vec<F337> = [0u32, 1, 2].iter().map(|x| F337::from(*x)).collect();
        let ys: Vec<F337> = [0u32, 1, 8].iter().map(|x| F337::from(*x)).collect();
        let p = FpPolynomial::lagrange(&xs, &ys).unwrap();
        assert_eq!(p, FpPolynomial::from_i64s(&[0, -2, 3]));

        assert_eq!(
            FpPolynomial::lagrange(&xs, &ys[..2]),
            Err(PolyComSchemeError::LengthMismatch)
        );
        let dup = [F337::from(4u32), F337::from(4u32)];
        assert_eq!(
            FpPolynomial::lagrange(&dup, &ys[..2]),
            Err(PolyComSchemeError::DuplicatePoints)
        );
    }

    #[test]
    fn division() {
        let p = FpPolynomial::<F337>::from_i64s(&[-288, 0, 2, 1]);
        let d = FpPolynomial::from_i64s(&[-6, 1]);
        let q = p.exact_div(&d).unwrap();
        assert_eq!(q, FpPolynomial::from_i64s(&[48, 8, 1]));
        assert_eq!(q.mul(&d), p);
        let (q2, r2) = p.div_by_linear(&F337::from(6u32));
        assert_eq!(q2, q);
        assert!(r2.is_zero());

        let cube = FpPolynomial::<F337>::from_i64s(&[1, 3, 3, 1]);
        let square = FpPolynomial::from_i64s(&[1, 2, 1]);
        assert_eq!(cube.exact_div(&square).unwrap(), FpPolynomial::from_i64s(&[1, 1]));

        // (X^4 - 1) / (4(X - 1)) over F13
        let num = FpPolynomial::<F13>::from_i64s(&[-1, 0, 0, 0, 1]);
        let den = FpPolynomial::from_i64s(&[-4, 4]);
        assert_eq!(num.exact_div(&den).unwrap(), FpPolynomial::from_i64s(&[10, 10, 10, 10]));

        assert_eq!(
            cube.exact_div(&FpPolynomial::from_i64s(&[1, 0, 1])),
            Err(PolyComSchemeError::NotExactlyDivisible)
        );
        assert_eq!(
            cube.div_rem(&FpPolynomial::zero()),
            Err(PolyComSchemeError::DivisionByZero)
        );
        let (q, r) = square.div_rem(&cube).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, square);
    }
}
