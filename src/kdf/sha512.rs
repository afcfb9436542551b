//! HKDF sha512.

use crate::hmac::HmacSha512;

pub type Kdf = super::Kdf<HmacSha512>;
