//! HKDF key derivation.

use core::marker::PhantomData;

use cryptraits::{convert::Len, hmac::Hmac, kdf::Kdf as KdfTrait};
use zeroize::{Zeroize, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::KdfError;

mod engine;
mod reader;
pub mod sha1;
pub mod sha256;
pub mod sha512;

pub use engine::{HashFunction, Hkdf, MAX_BLOCKS};
pub use reader::Reader;

/// HKDF behind the `cryptraits` KDF interface.
///
/// `new` runs the extract step and keeps only the PRK, which is wiped on drop.
pub struct Kdf<PRF>
where
    PRF: Hmac + Len,
{
    prk: Zeroizing<Vec<u8>>,

    _prf: PhantomData<PRF>,
}

impl<PRF> Zeroize for Kdf<PRF>
where
    PRF: Hmac + Len,
{
    fn zeroize(&mut self) {
        self.prk.zeroize();
    }
}

impl<PRF> KdfTrait for Kdf<PRF>
where
    PRF: Hmac + Len,
{
    type E = KdfError;

    fn new(salt: Option<&[u8]>, data: &[u8]) -> Self {
        Self {
            prk: Self::engine().extract(salt.unwrap_or_default(), data),
            _prf: PhantomData::default(),
        }
    }

    fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), Self::E> {
        Self::engine().expand_into(&self.prk, info, okm)
    }
}

impl<PRF> Kdf<PRF>
where
    PRF: Hmac + Len,
{
    /// Streams `length` bytes of expand output for `info`.
    pub fn reader(&self, info: &[u8], length: usize) -> Result<Reader, KdfError> {
        Self::engine().reader(&self.prk, info, length)
    }

    fn engine() -> Hkdf {
        Hkdf::with_hmac::<PRF>()
    }
}
