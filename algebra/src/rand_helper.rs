use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

fn fixed_seed_rng() -> ChaChaRng {
    let seed = [
        7, 0, 0, 0, 19, 0, 0, 0, 101, 3, 0, 0, 45, 16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Return a prng for tests and benches, never for setup of real parameters.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    fixed_seed_rng()
}

/// Return a prng for tests and benches, never for setup of real parameters.
///
/// Setting `DETERMINISTIC_TEST_RNG=1` makes every call return the same stream.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let deterministic = std::env::var("DETERMINISTIC_TEST_RNG")
        .map(|v| v == "1")
        .unwrap_or(false);
    if deterministic {
        fixed_seed_rng()
    } else {
        ChaChaRng::from_entropy()
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use ark_std::UniformRand;

    #[test]
    fn fixed_seed_is_reproducible() {
        let a = u128::rand(&mut super::fixed_seed_rng());
        let b = u128::rand(&mut super::fixed_seed_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_streams_differ() {
        if std::env::var("DETERMINISTIC_TEST_RNG").is_ok() {
            return;
        }
        let a = u128::rand(&mut super::test_rng());
        let b = u128::rand(&mut super::test_rng());
        assert_ne!(a, b);
    }
}
