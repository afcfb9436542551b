//! HMAC-based Extract-and-Expand Key Derivation Function (HKDF, RFC 5869).
//!
//! ```
//! use hkdfkit::kdf::{HashFunction, Hkdf};
//!
//! let hkdf = Hkdf::new(HashFunction::Sha256);
//! let prk = hkdf.extract(b"salt", b"shared secret");
//!
//! let okm = hkdf.expand(&prk, b"session keys", 64).unwrap();
//!
//! let mut reader = hkdf.reader(&prk, b"session keys", 64).unwrap();
//! let (client_key, _) = reader.read(32);
//! let (server_key, exhausted) = reader.read(32);
//!
//! assert!(exhausted);
//! assert_eq!(client_key[..], okm[..32]);
//! assert_eq!(server_key[..], okm[32..]);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod errors;
pub mod hmac;
pub mod kdf;
