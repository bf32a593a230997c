use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::{DecodeError, Engine};
use rand::TryRngCore;
use rand::rngs::OsRng;
use std::fmt::Display;
use std::str::FromStr;
use std::{fmt, str};

/// An opaque session identifier handed out by login and presented back as a
/// bearer credential on every listing call.
///
/// 128 bits of OS randomness, rendered as 22 characters of unpadded
/// URL-safe base64. Anything that does not decode back to exactly 16 bytes
/// is rejected at parse time.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Id([u8; 16]);

impl Default for Id {
    fn default() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes).unwrap();
        Self(bytes)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoded = [0; 22];
        BASE64_URL_SAFE_NO_PAD
            .encode_slice(self.0, &mut encoded)
            .expect("Encoded ID must be exactly 22 bytes");
        let encoded = str::from_utf8(&encoded).expect("Encoded ID must be valid UTF-8");

        f.write_str(encoded)
    }
}

impl FromStr for Id {
    type Err = base64::DecodeSliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut decoded = [0; 16];
        let bytes_decoded = BASE64_URL_SAFE_NO_PAD.decode_slice(s.as_bytes(), &mut decoded)?;
        if bytes_decoded != 16 {
            let err = DecodeError::InvalidLength(bytes_decoded);
            return Err(base64::DecodeSliceError::DecodeError(err));
        }

        Ok(Self(decoded))
    }
}
