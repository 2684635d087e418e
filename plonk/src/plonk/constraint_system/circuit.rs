use crate::errors::{PlonkError, Result};
use crate::plonk::constraint_system::prover_input::{compute_permutation, ProverInput};
use ark_std::collections::BTreeMap;
use misc_algebra::prelude::*;

/// Handle of a wire inside a [`Circuit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireId(usize);

impl WireId {
    /// The position of the wire in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle of a gate inside a [`Circuit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GateId(usize);

impl GateId {
    /// The position of the gate in creation order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The kinds of fan-in-2 gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateKind {
    /// `out = left + right`
    Add,
    /// `out = left * right`
    Mul,
    /// `out` is a named public value
    PublicInput,
    /// Padding, constrains nothing
    Dummy,
}

/// The five selector coefficients of a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector<F> {
    /// Multiplier of `a`.
    pub left: F,
    /// Multiplier of `b`.
    pub right: F,
    /// Multiplier of `c`.
    pub output: F,
    /// Multiplier of `a * b`.
    pub mul: F,
    /// Constant term.
    pub constant: F,
}

impl<F: Scalar> Selector<F> {
    /// The selector enforcing the semantics of `kind`.
    pub fn for_kind(kind: GateKind) -> Self {
        let (zero, one) = (F::zero(), F::one());
        match kind {
            GateKind::Add => Selector {
                left: one,
                right: one,
                output: one.neg(),
                mul: zero,
                constant: zero,
            },
            GateKind::Mul => Selector {
                left: zero,
                right: zero,
                output: one.neg(),
                mul: one,
                constant: zero,
            },
            GateKind::PublicInput => Selector {
                left: one,
                right: zero,
                output: zero,
                mul: zero,
                constant: zero,
            },
            GateKind::Dummy => Selector {
                left: zero,
                right: zero,
                output: zero,
                mul: zero,
                constant: zero,
            },
        }
    }
}

/// A write-once value holder.
#[derive(Clone, Debug, Default)]
struct Wire<F> {
    value: Option<F>,
}

impl<F: Scalar> Wire<F> {
    fn set_once(&mut self, id: usize, value: F) -> Result<()> {
        match self.value {
            Some(_) => Err(PlonkError::WireContradiction(id)),
            None => {
                self.value = Some(value);
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Gate {
    kind: GateKind,
    left: Option<WireId>,
    right: Option<WireId>,
    out: WireId,
    name: Option<String>,
}

impl Gate {
    /// The wires in the `a`, `b` and `c` slots.
    fn slots(&self) -> [Option<WireId>; 3] {
        match self.kind {
            GateKind::Add | GateKind::Mul => [self.left, self.right, Some(self.out)],
            GateKind::PublicInput => [Some(self.out), None, Some(self.out)],
            GateKind::Dummy => [None, None, None],
        }
    }
}

/// An arithmetic circuit of fan-in-2 gates over `F`.
///
/// Wires and gates live in arenas owned by the circuit and are addressed by
/// [`WireId`] and [`GateId`]. Once [`Circuit::calculate_witness`] succeeds the
/// circuit is frozen and can be exported with [`Circuit::get_prover_input`].
/// # Example
/// ```
/// use misc_plonk::plonk::constraint_system::Circuit;
/// use misc_algebra::{bn254::BN254Scalar, prelude::*};
/// use ark_std::collections::BTreeMap;
///
/// // y = x^2 + x
/// let mut circuit = Circuit::<BN254Scalar>::new();
/// let x = circuit.new_input("x").unwrap();
/// let sq = circuit.gate_mul(x, x).unwrap();
/// let sum = circuit.gate_add(circuit.output(sq).unwrap(), x).unwrap();
/// let y = circuit.gate_public_input("y").unwrap();
/// circuit.output_eq(sum, y).unwrap();
///
/// let mut mapping = BTreeMap::new();
/// mapping.insert(String::from("x"), BN254Scalar::from(4u32));
/// mapping.insert(String::from("y"), BN254Scalar::from(20u32));
/// circuit.calculate_witness(&mapping).unwrap();
/// let input = circuit.get_prover_input().unwrap();
/// assert_eq!(input.size(), 4);
/// assert!(input.pre_proving_check().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Circuit<F> {
    wires: Vec<Wire<F>>,
    gates: Vec<Gate>,
    inputs: Vec<(String, WireId)>,
    equalities: Vec<(WireId, WireId)>,
    /// Equality group index of every wire, present once the witness is calculated.
    groups: Option<Vec<usize>>,
}

impl<F: Scalar> Circuit<F> {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Circuit {
            wires: Vec::new(),
            gates: Vec::new(),
            inputs: Vec::new(),
            equalities: Vec::new(),
            groups: None,
        }
    }

    /// The number of gates, including padding once the witness is calculated.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// The number of wires.
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    /// The value of a wire, if assigned.
    pub fn value(&self, wire: WireId) -> Option<F> {
        self.wires.get(wire.0).and_then(|w| w.value)
    }

    fn check_building(&self) -> Result<()> {
        if self.groups.is_some() {
            Err(PlonkError::CircuitFinalized)
        } else {
            Ok(())
        }
    }

    fn check_wire(&self, wire: WireId) -> Result<()> {
        if wire.0 < self.wires.len() {
            Ok(())
        } else {
            Err(PlonkError::InvalidHandle(wire.0))
        }
    }

    fn new_wire(&mut self) -> WireId {
        self.wires.push(Wire { value: None });
        WireId(self.wires.len() - 1)
    }

    fn push_gate(
        &mut self,
        kind: GateKind,
        left: Option<WireId>,
        right: Option<WireId>,
        name: Option<String>,
    ) -> GateId {
        let out = self.new_wire();
        self.gates.push(Gate {
            kind,
            left,
            right,
            out,
            name,
        });
        GateId(self.gates.len() - 1)
    }

    /// Declare a secret input wire, fed from the mapping under `name`.
    pub fn new_input(&mut self, name: &str) -> Result<WireId> {
        self.check_building()?;
        let wire = self.new_wire();
        self.inputs.push((String::from(name), wire));
        Ok(wire)
    }

    /// Add a gate computing `left + right`.
    pub fn gate_add(&mut self, left: WireId, right: WireId) -> Result<GateId> {
        self.binary_gate(GateKind::Add, left, right)
    }

    /// Add a gate computing `left * right`.
    pub fn gate_mul(&mut self, left: WireId, right: WireId) -> Result<GateId> {
        self.binary_gate(GateKind::Mul, left, right)
    }

    fn binary_gate(&mut self, kind: GateKind, left: WireId, right: WireId) -> Result<GateId> {
        self.check_building()?;
        self.check_wire(left)?;
        self.check_wire(right)?;
        Ok(self.push_gate(kind, Some(left), Some(right), None))
    }

    /// Add a gate whose output is the public value named `name`.
    pub fn gate_public_input(&mut self, name: &str) -> Result<GateId> {
        self.check_building()?;
        Ok(self.push_gate(GateKind::PublicInput, None, None, Some(String::from(name))))
    }

    /// Return the output wire of a gate.
    pub fn output(&self, gate: GateId) -> Result<WireId> {
        self.gates
            .get(gate.0)
            .map(|g| g.out)
            .ok_or(PlonkError::InvalidHandle(gate.0))
    }

    /// Constrain the outputs of two gates to be equal.
    pub fn output_eq(&mut self, gate_1: GateId, gate_2: GateId) -> Result<()> {
        self.check_building()?;
        let out_1 = self.output(gate_1)?;
        let out_2 = self.output(gate_2)?;
        self.equalities.push((out_1, out_2));
        Ok(())
    }

    /// Assign every wire from the named inputs, pad the circuit to a power of two
    /// and check the equality constraints.
    ///
    /// On failure the circuit is restored to its state before the call, so it can be
    /// fed again.
    pub fn calculate_witness(&mut self, mapping: &BTreeMap<String, F>) -> Result<()> {
        self.check_building()?;
        if self.gates.is_empty() {
            return Err(PlonkError::EmptyCircuit);
        }

        let (n_wires, n_gates) = (self.wires.len(), self.gates.len());
        let res = self.fill_witness(mapping);
        if res.is_err() {
            self.gates.truncate(n_gates);
            self.wires.truncate(n_wires);
            self.wires.iter_mut().for_each(|w| w.value = None);
        }
        res
    }

    fn fill_witness(&mut self, mapping: &BTreeMap<String, F>) -> Result<()> {
        // 1. feed the named values
        let mut used_names: Vec<&str> = Vec::new();
        for (name, wire) in self.inputs.iter() {
            let value = mapping
                .get(name)
                .ok_or_else(|| PlonkError::MissingInput(name.clone()))?;
            self.wires[wire.0].set_once(wire.0, *value)?;
            used_names.push(name);
        }
        let mut public_values = Vec::new();
        for gate in self.gates.iter() {
            if let Some(name) = &gate.name {
                let value = mapping
                    .get(name)
                    .ok_or_else(|| PlonkError::MissingInput(name.clone()))?;
                public_values.push(*value);
                used_names.push(name);
            }
        }
        if let Some(name) = mapping.keys().find(|k| !used_names.contains(&k.as_str())) {
            return Err(PlonkError::UnknownInput(name.clone()));
        }

        // 2. pad with dummy gates
        let padded = self.gates.len().next_power_of_two();
        while self.gates.len() < padded {
            self.push_gate(GateKind::Dummy, None, None, None);
        }

        // 3. one index per equality group, in wire creation order
        let groups = self.equality_groups();

        // 4. propagate
        let mut public_values = public_values.into_iter();
        for i in 0..self.gates.len() {
            let gate = &self.gates[i];
            let out = gate.out;
            let value = match gate.kind {
                GateKind::Add => self.operand(gate.left)?.add(&self.operand(gate.right)?),
                GateKind::Mul => self.operand(gate.left)?.mul(&self.operand(gate.right)?),
                GateKind::PublicInput => public_values
                    .next()
                    .ok_or(PlonkError::UnassignedWire(out.0))?,
                GateKind::Dummy => F::zero(),
            };
            self.wires[out.0].set_once(out.0, value)?;
        }

        // 5. every group holds a single value
        let mut group_values: Vec<Option<F>> = vec![None; self.wires.len()];
        for (wire, group) in self.wires.iter().zip(groups.iter()) {
            let value = wire.value;
            match group_values[*group] {
                None => group_values[*group] = value,
                Some(v) if Some(v) != value => return Err(PlonkError::EqualityMismatch(*group)),
                _ => {}
            }
        }

        self.groups = Some(groups);
        Ok(())
    }

    fn operand(&self, wire: Option<WireId>) -> Result<F> {
        let wire = wire.ok_or(PlonkError::InvalidHandle(usize::MAX))?;
        self.wires[wire.0]
            .value
            .ok_or(PlonkError::UnassignedWire(wire.0))
    }

    /// Union the wires along the equality constraints and number the groups.
    fn equality_groups(&self) -> Vec<usize> {
        let mut parent: Vec<usize> = (0..self.wires.len()).collect();
        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for (w1, w2) in self.equalities.iter() {
            let r1 = find(&mut parent, w1.0);
            let r2 = find(&mut parent, w2.0);
            if r1 != r2 {
                parent[r1.max(r2)] = r1.min(r2);
            }
        }

        let mut index_of_root: BTreeMap<usize, usize> = BTreeMap::new();
        let mut groups = Vec::with_capacity(self.wires.len());
        for w in 0..self.wires.len() {
            let root = find(&mut parent, w);
            let next = index_of_root.len();
            groups.push(*index_of_root.entry(root).or_insert(next));
        }
        groups
    }

    /// Export the gate vectors, selectors, public inputs and permutation.
    pub fn get_prover_input(&self) -> Result<ProverInput<F>> {
        let groups = self
            .groups
            .as_ref()
            .ok_or(PlonkError::WitnessNotCalculated)?;
        let n = self.gates.len();

        let mut values = [
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        ];
        let mut indices = [
            Vec::with_capacity(n),
            Vec::with_capacity(n),
            Vec::with_capacity(n),
        ];
        let mut selectors = Vec::with_capacity(n);
        let mut public_inputs = Vec::new();
        let mut public_input_positions = Vec::new();

        for (i, gate) in self.gates.iter().enumerate() {
            for (slot, wire) in gate.slots().iter().enumerate() {
                match wire {
                    Some(w) => {
                        values[slot].push(self.wires[w.0].value.unwrap_or_default());
                        indices[slot].push(Some(groups[w.0]));
                    }
                    None => {
                        values[slot].push(F::zero());
                        indices[slot].push(None);
                    }
                }
            }
            selectors.push(Selector::for_kind(gate.kind));
            if gate.kind == GateKind::PublicInput {
                public_inputs.push(self.wires[gate.out.0].value.unwrap_or_default());
                public_input_positions.push(i);
            }
        }

        let [a_indices, b_indices, c_indices] = indices;
        let permutation = compute_permutation(&[&a_indices[..], &b_indices[..], &c_indices[..]]);
        let [a, b, c] = values;

        Ok(ProverInput {
            a,
            b,
            c,
            a_indices,
            b_indices,
            c_indices,
            q_left: selectors.iter().map(|s| s.left).collect(),
            q_right: selectors.iter().map(|s| s.right).collect(),
            q_output: selectors.iter().map(|s| s.output).collect(),
            q_mul: selectors.iter().map(|s| s.mul).collect(),
            q_const: selectors.iter().map(|s| s.constant).collect(),
            public_inputs,
            public_input_positions,
            permutation,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Circuit, GateId, Wire};
    use crate::errors::PlonkError;
    use ark_std::collections::BTreeMap;
    use misc_algebra::{bls12_381::BLSScalar, prelude::*};

    type F = BLSScalar;

    fn mapping(entries: &[(&str, i64)]) -> BTreeMap<String, F> {
        entries
            .iter()
            .map(|(k, v)| (String::from(*k), F::from_i64(*v)))
            .collect()
    }

    fn f(v: &[i64]) -> Vec<F> {
        v.iter().map(|x| F::from_i64(*x)).collect()
    }

    /// y = x^3 + x + 5
    fn cubic() -> (Circuit<F>, GateId) {
        let mut cs = Circuit::new();
        let x = cs.new_input("x").unwrap();
        let x2 = cs.gate_mul(x, x).unwrap();
        let x3 = cs.gate_mul(cs.output(x2).unwrap(), x).unwrap();
        let x3_x = cs.gate_add(cs.output(x3).unwrap(), x).unwrap();
        let five = cs.gate_public_input("const").unwrap();
        let sum = cs
            .gate_add(cs.output(x3_x).unwrap(), cs.output(five).unwrap())
            .unwrap();
        let y = cs.gate_public_input("y").unwrap();
        cs.output_eq(sum, y).unwrap();
        (cs, sum)
    }

    #[test]
    fn cubic_gate_vectors() {
        let (mut cs, sum) = cubic();
        assert_eq!(cs.num_gates(), 6);
        cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 35)]))
            .unwrap();
        assert_eq!(cs.num_gates(), 8);
        assert_eq!(cs.value(cs.output(sum).unwrap()), Some(F::from(35u32)));

        let input = cs.get_prover_input().unwrap();
        assert_eq!(input.a, f(&[3, 9, 27, 5, 30, 35, 0, 0]));
        assert_eq!(input.b, f(&[3, 3, 3, 0, 5, 0, 0, 0]));
        assert_eq!(input.c, f(&[9, 27, 30, 5, 35, 35, 0, 0]));

        let n = None;
        assert_eq!(
            input.a_indices,
            vec![Some(0), Some(1), Some(2), Some(4), Some(3), Some(5), n, n]
        );
        assert_eq!(
            input.b_indices,
            vec![Some(0), Some(0), Some(0), n, Some(4), n, n, n]
        );
        assert_eq!(
            input.c_indices,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(5), n, n]
        );

        assert_eq!(input.public_input_positions, vec![3, 5]);
        assert_eq!(input.public_inputs, f(&[5, 35]));
        assert_eq!(
            input.public_input_evaluations(),
            f(&[0, 0, 0, -5, 0, -35, 0, 0])
        );
        assert_eq!(
            input.permutation,
            vec![
                10, 16, 17, 19, 18, 21, 6, 7, // a
                0, 8, 9, 11, 3, 13, 14, 15, // b
                1, 2, 4, 12, 5, 20, 22, 23, // c
            ]
        );
        assert!(input.pre_proving_check().is_ok());
    }

    #[test]
    fn witness_errors() {
        let (mut cs, _) = cubic();
        assert_eq!(
            cs.calculate_witness(&mapping(&[("x", 3), ("const", 5)])),
            Err(PlonkError::MissingInput(String::from("y")))
        );

        let (mut cs, _) = cubic();
        assert_eq!(
            cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 35), ("z", 1)])),
            Err(PlonkError::UnknownInput(String::from("z")))
        );

        let (mut cs, _) = cubic();
        assert_eq!(
            cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 36)])),
            Err(PlonkError::EqualityMismatch(5))
        );

        let mut empty = Circuit::<F>::new();
        assert_eq!(
            empty.calculate_witness(&BTreeMap::new()),
            Err(PlonkError::EmptyCircuit)
        );
    }

    #[test]
    fn failed_witness_can_be_retried() {
        let (mut cs, sum) = cubic();
        assert_eq!(
            cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 36)])),
            Err(PlonkError::EqualityMismatch(5))
        );
        assert_eq!(cs.num_gates(), 6);
        assert_eq!(cs.value(cs.output(sum).unwrap()), None);
        assert_eq!(
            cs.get_prover_input().err(),
            Some(PlonkError::WitnessNotCalculated)
        );

        // x * x == y
        let mut square = Circuit::<F>::new();
        let x = square.new_input("x").unwrap();
        let sq = square.gate_mul(x, x).unwrap();
        let y = square.gate_public_input("y").unwrap();
        square.output_eq(sq, y).unwrap();
        assert_eq!(
            square.calculate_witness(&mapping(&[("x", 3), ("y", 10)])),
            Err(PlonkError::EqualityMismatch(1))
        );
        assert_eq!(square.num_gates(), 2);
        assert_eq!(
            square.calculate_witness(&mapping(&[("x", 3)])),
            Err(PlonkError::MissingInput(String::from("y")))
        );
        square
            .calculate_witness(&mapping(&[("x", 3), ("y", 9)]))
            .unwrap();
        assert_eq!(square.num_gates(), 2);
        assert!(square.get_prover_input().unwrap().pre_proving_check().is_ok());

        cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 35)]))
            .unwrap();
        assert_eq!(cs.num_gates(), 8);
    }

    #[test]
    fn wires_are_written_once() {
        let mut wire = Wire::<F>::default();
        wire.set_once(4, F::from(2u32)).unwrap();
        assert_eq!(
            wire.set_once(4, F::from(3u32)),
            Err(PlonkError::WireContradiction(4))
        );
        assert_eq!(wire.value, Some(F::from(2u32)));
    }

    #[test]
    fn lifecycle_errors() {
        let (mut cs, sum) = cubic();
        assert_eq!(
            cs.get_prover_input().err(),
            Some(PlonkError::WitnessNotCalculated)
        );
        cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 35)]))
            .unwrap();
        let out = cs.output(sum).unwrap();
        assert_eq!(cs.gate_add(out, out), Err(PlonkError::CircuitFinalized));
        assert_eq!(cs.new_input("w").err(), Some(PlonkError::CircuitFinalized));
        assert_eq!(
            cs.calculate_witness(&mapping(&[("x", 3), ("const", 5), ("y", 35)])),
            Err(PlonkError::CircuitFinalized)
        );

        let mut other = Circuit::<F>::new();
        let x = other.new_input("x").unwrap();
        let g = other.gate_mul(x, x).unwrap();
        let foreign = cs.output(sum).unwrap();
        assert_eq!(
            other.gate_add(x, foreign),
            Err(PlonkError::InvalidHandle(foreign.index()))
        );
        assert_eq!(
            other.output(GateId(7)),
            Err(PlonkError::InvalidHandle(7))
        );
        assert_eq!(other.output(g).unwrap().index(), 1);
    }
}
