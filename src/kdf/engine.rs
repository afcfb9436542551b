//! HKDF extract-and-expand engine (RFC 5869).

use core::{any, fmt, str::FromStr};

use cryptraits::{convert::Len, hmac::Hmac as HmacTrait};
use hmac::digest::{core_api::BlockSizeUser, Digest};
use log::debug;
use zeroize::Zeroizing;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use super::Reader;
use crate::{
    errors::KdfError,
    hmac::{Hmac, HmacSha1, HmacSha256, HmacSha512},
};

/// Upper bound on expand blocks. The block counter is a single byte.
pub const MAX_BLOCKS: usize = 255;

/// Hash functions an [`Hkdf`] engine can be selected with.
///
/// Numeric ids follow declaration order: `0` is SHA-1, `1` is SHA-256, `2` is SHA-512.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
pub enum HashFunction {
    Sha1,
    Sha256,
    Sha512,
}

impl HashFunction {
    /// Output size of the hash in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Sha1 => <HmacSha1 as Len>::LEN,
            Self::Sha256 => <HmacSha256 as Len>::LEN,
            Self::Sha512 => <HmacSha512 as Len>::LEN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for HashFunction {
    type Error = KdfError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Sha1),
            1 => Ok(Self::Sha256),
            2 => Ok(Self::Sha512),
            _ => Err(KdfError::UnsupportedHash),
        }
    }
}

impl FromStr for HashFunction {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        [Self::Sha1, Self::Sha256, Self::Sha512]
            .into_iter()
            .find(|hash| {
                let name = hash.name();
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(&name.replace('-', ""))
            })
            .ok_or(KdfError::UnsupportedHash)
    }
}

impl TryFrom<&str> for HashFunction {
    type Error = KdfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Computes `HMAC(key, parts[0] || parts[1] || ...)`.
type MacFn = fn(&[u8], &[&[u8]]) -> Vec<u8>;

fn mac<H>(key: &[u8], parts: &[&[u8]]) -> Vec<u8>
where
    H: HmacTrait,
{
    let mut mac = H::new_from_slice(key)
        .ok()
        .expect("HMAC can take key of any size");

    for part in parts {
        mac.update(part);
    }

    mac.finalize()
}

/// HKDF engine bound to one hash function.
///
/// The engine carries no secret or mutable state, so one instance can serve any
/// number of concurrent derivations.
#[derive(Clone, Copy)]
pub struct Hkdf {
    mac: MacFn,
    hash_size: usize,
    hash_name: &'static str,
}

impl fmt::Debug for Hkdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hkdf")
            .field("hash", &self.hash_name)
            .field("hash_size", &self.hash_size)
            .finish()
    }
}

impl Hkdf {
    pub fn new(hash: HashFunction) -> Self {
        let hkdf = match hash {
            HashFunction::Sha1 => Self::with_hmac::<HmacSha1>(),
            HashFunction::Sha256 => Self::with_hmac::<HmacSha256>(),
            HashFunction::Sha512 => Self::with_hmac::<HmacSha512>(),
        };

        debug!("hkdf engine bound to {} ({} byte blocks)", hash, hkdf.hash_size);

        Self {
            hash_name: hash.name(),
            ..hkdf
        }
    }

    /// Builds an engine from an untyped selector such as a numeric id or a hash name.
    ///
    /// Fails with [`KdfError::UnsupportedHash`] when the selector names no known hash.
    pub fn from_selector<S>(selector: S) -> Result<Self, KdfError>
    where
        HashFunction: TryFrom<S, Error = KdfError>,
    {
        match HashFunction::try_from(selector) {
            Ok(hash) => Ok(Self::new(hash)),
            Err(e) => {
                debug!("rejected unsupported hash selector");
                Err(e)
            }
        }
    }

    /// Builds an engine over any keyed hash exposing a fixed output length.
    ///
    /// # Panics
    ///
    /// Derivations panic if `H` refuses a key, which HMAC never does.
    pub fn with_hmac<H>() -> Self
    where
        H: HmacTrait + Len,
    {
        Self {
            mac: mac::<H>,
            hash_size: H::LEN,
            hash_name: any::type_name::<H>(),
        }
    }

    /// Builds an engine over HMAC with an arbitrary RustCrypto digest, e.g. MD5.
    pub fn with_digest<D>() -> Self
    where
        D: Digest + BlockSizeUser,
    {
        Self::with_hmac::<Hmac<D>>()
    }

    /// Output size of the bound hash; also the PRK length.
    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// Longest output expand can produce: `255 * hash_size`.
    pub fn max_length(&self) -> usize {
        MAX_BLOCKS * self.hash_size
    }

    /// HKDF-Extract: `PRK = HMAC(salt, ikm)`.
    ///
    /// An empty salt is replaced with `hash_size` zero bytes. The PRK is wiped on drop.
    pub fn extract(&self, salt: &[u8], ikm: &[u8]) -> Zeroizing<Vec<u8>> {
        if salt.is_empty() {
            let zeros = vec![0u8; self.hash_size];
            return Zeroizing::new((self.mac)(&zeros, &[ikm]));
        }

        Zeroizing::new((self.mac)(salt, &[ikm]))
    }

    /// HKDF-Expand into a freshly allocated buffer of `length` bytes.
    pub fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>, KdfError> {
        self.check_length(length)?;

        let mut okm = vec![0u8; length];
        self.expand_into(prk, info, &mut okm)?;

        Ok(okm)
    }

    /// HKDF-Expand filling the whole of `okm`.
    ///
    /// `okm` is left untouched on error.
    pub fn expand_into(&self, prk: &[u8], info: &[u8], okm: &mut [u8]) -> Result<(), KdfError> {
        self.check_length(okm.len())?;

        // T(0) is the empty string, not a zeroed block.
        let mut t = Zeroizing::new(Vec::<u8>::new());

        for (i, chunk) in okm.chunks_mut(self.hash_size).enumerate() {
            let next = Zeroizing::new(self.block(prk, &t, info, (i + 1) as u8));
            chunk.copy_from_slice(&next[..chunk.len()]);
            t = next;
        }

        Ok(())
    }

    /// Extract followed by expand. Length is validated before any hashing.
    pub fn extract_and_expand(
        &self,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, KdfError> {
        self.check_length(length)?;

        let prk = self.extract(salt, ikm);
        self.expand(&prk, info, length)
    }

    /// Streaming expand producing `length` bytes on demand.
    ///
    /// A zero `length` yields a reader that is already exhausted.
    pub fn reader(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Reader, KdfError> {
        if length > self.max_length() {
            debug!(
                "rejected reader of {} bytes, maximum is {}",
                length,
                self.max_length()
            );
            return Err(KdfError::LengthTooLong);
        }

        Ok(Reader::new(*self, prk, info, length))
    }

    /// `T(counter) = HMAC(prk, previous || info || counter)`.
    pub(crate) fn block(&self, prk: &[u8], previous: &[u8], info: &[u8], counter: u8) -> Vec<u8> {
        (self.mac)(prk, &[previous, info, &[counter][..]])
    }

    fn check_length(&self, length: usize) -> Result<(), KdfError> {
        if length == 0 {
            debug!("rejected expand of zero bytes");
            return Err(KdfError::InvalidLength);
        }

        if length > self.max_length() {
            debug!(
                "rejected expand of {} bytes, maximum for {} is {}",
                length,
                self.hash_name,
                self.max_length()
            );
            return Err(KdfError::LengthTooLong);
        }

        Ok(())
    }
}
