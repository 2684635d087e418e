use crate::errors::{PlonkError, Result};
use misc_algebra::prelude::*;
use prover_input::public_input_evaluations;

/// Module for the arithmetic circuit builder.
pub mod circuit;

/// Module for the compiled, witness-carrying constraint system.
pub mod prover_input;

pub use circuit::{Circuit, GateId, GateKind, Selector, WireId};
pub use prover_input::ProverInput;

/// Trait for PLONK constraint systems with three wires per gate and the selectors
/// `q_L, q_R, q_O, q_M, q_C`, in this order.
pub trait ConstraintSystem: Sized {
    /// The field of the circuit.
    type Field: Scalar;

    /// Return the number of constraints in the system.
    /// `size` must divide `q-1` where `q` is the size of the prime field.
    fn size(&self) -> usize;

    /// Return the size of the evaluation domain for computing the quotient polynomial.
    /// It is a power of two larger than the degree of the blinded quotient numerator.
    fn quot_eval_dom_size(&self) -> usize {
        (4 * self.size() + 6).next_power_of_two()
    }

    /// Return the number of wires in a single gate.
    fn n_wires_per_gate() -> usize {
        3
    }

    /// Return the number of selectors.
    fn num_selectors(&self) -> usize {
        5
    }

    /// Borrow the (index)-th selector vector.
    fn selector(&self, index: usize) -> Result<&[Self::Field]>;

    /// The copy constraint permutation, over the positions `j * size + i` of wire `j` on gate `i`.
    fn permutation(&self) -> &[usize];

    /// The indices of the constraints holding public inputs.
    fn public_vars_constraint_indices(&self) -> &[usize];

    /// Check that `witness`, the wire values column by column, satisfies every gate and
    /// every copy constraint. The public values are read from the first column.
    fn verify_witness(&self, witness: &[Self::Field]) -> Result<()> {
        let n = self.size();
        if witness.len() != Self::n_wires_per_gate() * n {
            return Err(PlonkError::FuncParamsError);
        }
        let positions = self.public_vars_constraint_indices();
        if positions.iter().any(|p| *p >= n) {
            return Err(PlonkError::FuncParamsError);
        }
        let pi_values: Vec<Self::Field> = positions.iter().map(|p| witness[*p]).collect();
        let pi = public_input_evaluations(n, positions, &pi_values);

        let selectors = (0..self.num_selectors())
            .map(|i| self.selector(i))
            .collect::<Result<Vec<&[Self::Field]>>>()?;
        if selectors.iter().any(|s| s.len() != n) || self.permutation().len() != witness.len() {
            return Err(PlonkError::FuncParamsError);
        }
        for (i, pi_value) in pi.iter().enumerate() {
            let wire_vals: Vec<&Self::Field> = (0..Self::n_wires_per_gate())
                .map(|j| &witness[j * n + i])
                .collect();
            let sel_vals: Vec<&Self::Field> = selectors.iter().map(|s| &s[i]).collect();
            if !Self::eval_gate_func(&wire_vals, &sel_vals, pi_value)?.is_zero() {
                return Err(PlonkError::GateNotSatisfied(i));
            }
        }

        for (i, p) in self.permutation().iter().enumerate() {
            if witness.get(*p) != Some(&witness[i]) {
                return Err(PlonkError::PermutationMismatch(i));
            }
        }
        Ok(())
    }

    /// Evaluate the constraint equation given public input and the values of the wires and the selectors.
    fn eval_gate_func(
        wire_vals: &[&Self::Field],
        sel_vals: &[&Self::Field],
        pub_input: &Self::Field,
    ) -> Result<Self::Field> {
        if wire_vals.len() != 3 || sel_vals.len() != 5 {
            return Err(PlonkError::FuncParamsError);
        }
        let (a, b, c) = (wire_vals[0], wire_vals[1], wire_vals[2]);
        let mut res = a.mul(sel_vals[0]);
        res.add_assign(&b.mul(sel_vals[1]));
        res.add_assign(&c.mul(sel_vals[2]));
        res.add_assign(&a.mul(b).mul(sel_vals[3]));
        res.add_assign(sel_vals[4]);
        res.add_assign(pub_input);
        Ok(res)
    }

    /// Given the wires values of a gate, evaluate the coefficients of the selectors in the
    /// constraint equation.
    fn eval_selector_multipliers(wire_vals: &[&Self::Field]) -> Result<Vec<Self::Field>> {
        if wire_vals.len() != 3 {
            return Err(PlonkError::FuncParamsError);
        }
        Ok(vec![
            *wire_vals[0],
            *wire_vals[1],
            *wire_vals[2],
            wire_vals[0].mul(wire_vals[1]),
            Self::Field::one(),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::{ConstraintSystem, ProverInput};
    use misc_algebra::{prelude::*, toy::F13};

    #[test]
    fn gate_function() {
        let v = |x: u32| F13::from(x);
        // 2·a + 3·b + 4·c + 5·ab + 6 + pi with a=1, b=2, c=3
        let res = ProverInput::<F13>::eval_gate_func(
            &[&v(1), &v(2), &v(3)],
            &[&v(2), &v(3), &v(4), &v(5), &v(6)],
            &v(7),
        )
        .unwrap();
        assert_eq!(res, v((2 + 6 + 12 + 10 + 6 + 7) % 13));

        let mults = ProverInput::<F13>::eval_selector_multipliers(&[&v(4), &v(5), &v(6)]).unwrap();
        assert_eq!(mults, vec![v(4), v(5), v(6), v(7), v(1)]);

        assert!(ProverInput::<F13>::eval_gate_func(&[&v(1)], &[], &v(0)).is_err());
    }
}
