//! HKDF sha1.

use crate::hmac::HmacSha1;

pub type Kdf = super::Kdf<HmacSha1>;
