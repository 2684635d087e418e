use crate::prelude::*;

/// Helper trait to serialize objects that implement from/to bytes.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn to_bytes_repr(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn from_bytes_repr(bytes: &[u8]) -> Result<Self>;
}

/// Module for serialization for field elements and group elements, usable with
/// `#[serde(with = "obj_serde")]`.
pub mod obj_serde {
    use crate::serialization::FromToBytes;
    use crate::utils::{b64dec, b64enc};
    use ark_std::vec::Vec;
    use serde::de::{SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};

    /// The visitor collecting the bytes of an object.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> core::fmt::Result {
            formatter.write_str("a byte string or its base64 encoding")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = Vec::new();
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }

    /// Serialize through the byte representation.
    pub fn serialize<S, T>(obj: &T, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: FromToBytes,
    {
        let bytes = obj.to_bytes_repr();
        if serializer.is_human_readable() {
            serializer.serialize_str(&b64enc(&bytes))
        } else {
            serializer.serialize_bytes(&bytes[..])
        }
    }

    /// Deserialize from the byte representation.
    pub fn deserialize<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromToBytes,
    {
        let bytes = if deserializer.is_human_readable() {
            deserializer.deserialize_str(BytesVisitor)?
        } else {
            deserializer.deserialize_bytes(BytesVisitor)?
        };
        T::from_bytes_repr(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}
