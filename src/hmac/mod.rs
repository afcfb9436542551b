//! HMAC over any fixed-output hash function.

use hmac::{
    digest::{core_api::BlockSizeUser, typenum::Unsigned, Digest, OutputSizeUser},
    Mac, SimpleHmac,
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::errors::HmacError;

/// HMAC keyed with the hash function `D`.
///
/// Any RustCrypto digest with a fixed output and a known block size can back it,
/// including legacy hashes such as MD5.
pub struct Hmac<D>(SimpleHmac<D>)
where
    D: Digest + BlockSizeUser;

/// SHA-1 based HMAC.
pub type HmacSha1 = Hmac<sha1::Sha1>;

/// SHA-256 based HMAC.
pub type HmacSha256 = Hmac<sha2::Sha256>;

/// SHA-512 based HMAC.
pub type HmacSha512 = Hmac<sha2::Sha512>;

impl<D> Clone for Hmac<D>
where
    D: Digest + BlockSizeUser + Clone,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// The MAC state is opaque and owned by `hmac`; there is nothing reachable to wipe.
impl<D> Zeroize for Hmac<D>
where
    D: Digest + BlockSizeUser,
{
    fn zeroize(&mut self) {}
}

impl<D> cryptraits::hmac::Hmac for Hmac<D>
where
    D: Digest + BlockSizeUser,
{
    type E = HmacError;

    fn new_from_slice(key: &[u8]) -> Result<Self, Self::E>
    where
        Self: Sized,
    {
        let hmac = SimpleHmac::<D>::new_from_slice(key).or(Err(HmacError::InvalidLength))?;
        Ok(Self(hmac))
    }

    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn verify_slice(self, tag: &[u8]) -> Result<(), Self::E> {
        self.0.verify_slice(tag).or(Err(HmacError::MacError))
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().into_bytes().to_vec()
    }
}

impl<D> cryptraits::convert::Len for Hmac<D>
where
    D: Digest + BlockSizeUser,
{
    const LEN: usize = <<D as OutputSizeUser>::OutputSize as Unsigned>::USIZE;
}
