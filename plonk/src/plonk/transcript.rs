use crate::plonk::indexer::PlonkVerifierParams;
use crate::poly_commit::{pcs::ToBytes, transcript::PolyComTranscript};
use merlin::Transcript;
use misc_algebra::prelude::*;

/// Initialize the transcript when compute PLONK proof.
pub(crate) fn transcript_init_plonk<C: ToBytes, F: Scalar>(
    transcript: &mut Transcript,
    params: &PlonkVerifierParams<C, F>,
    pi_values: &[F],
) {
    transcript.append_message(b"New Domain", b"PLONK");

    transcript.append_u64(b"CS size", params.cs_size as u64);
    for q in params.cm_q_vec.iter() {
        transcript.append_commitment(q);
    }
    for p in params.cm_s_vec.iter() {
        transcript.append_commitment(p);
    }
    transcript.append_field_elem(&params.root);
    for generator in params.k.iter() {
        transcript.append_field_elem(generator);
    }

    for pi_value in pi_values.iter() {
        transcript.append_field_elem(pi_value);
    }
}

/// Return the challenge result by label: "beta".
pub(crate) fn transcript_get_plonk_challenge_beta<F: Scalar>(transcript: &mut Transcript) -> F {
    transcript.get_challenge_field_elem(b"beta")
}

/// Return the challenge result by label: "gamma".
pub(crate) fn transcript_get_plonk_challenge_gamma<F: Scalar>(transcript: &mut Transcript) -> F {
    transcript.get_challenge_field_elem(b"gamma")
}

/// Return the challenge result by label: "alpha".
pub(crate) fn transcript_get_plonk_challenge_alpha<F: Scalar>(transcript: &mut Transcript) -> F {
    transcript.get_challenge_field_elem(b"alpha")
}

/// Return the challenge result by label: "zeta", squeezed again while it lies in
/// the subgroup of order `group_order`.
pub(crate) fn transcript_get_plonk_challenge_zeta<F: Scalar>(
    transcript: &mut Transcript,
    group_order: usize,
) -> F {
    loop {
        let zeta: F = transcript.get_challenge_field_elem(b"zeta");
        if zeta.pow(&[group_order as u64]) != F::one() {
            return zeta;
        }
    }
}

/// Return the challenge result by label: "v".
pub(crate) fn transcript_get_plonk_challenge_v<F: Scalar>(transcript: &mut Transcript) -> F {
    transcript.get_challenge_field_elem(b"v")
}
