//! HKDF sha256.

use crate::hmac::HmacSha256;

pub type Kdf = super::Kdf<HmacSha256>;
