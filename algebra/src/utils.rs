use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Convert a u64 into its 8-byte big-endian encoding
pub fn u64_to_be_bytes(n: u64) -> [u8; 8] {
    n.to_be_bytes()
}

/// Concatenate the fixed-width big-endian encodings of a list of scalars.
pub fn scalars_to_bytes<S: Scalar>(scalars: &[S]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(scalars.len() * S::bytes_len());
    for s in scalars {
        bytes.extend_from_slice(&s.to_bytes());
    }
    bytes
}

#[cfg(test)]
mod test {
    use crate::bn254::BN254Scalar;
    use crate::prelude::*;

    #[test]
    fn b64_round_trip() {
        let data = [0u8, 255, 17, 42, 3];
        assert_eq!(b64dec(&b64enc(&data)).unwrap(), data.to_vec());
        assert!(b64dec("not base64!").is_err());
    }

    #[test]
    fn scalars_are_concatenated_big_endian() {
        let bytes = scalars_to_bytes(&[BN254Scalar::from(1u32), BN254Scalar::from(258u32)]);
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(&bytes[62..], &[1, 2]);
        assert_eq!(u64_to_be_bytes(258), [0, 0, 0, 0, 0, 0, 1, 2]);
    }
}
