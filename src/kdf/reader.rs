//! Streaming HKDF-Expand.

use core::fmt;

use log::trace;
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use super::Hkdf;

/// Lazily produces the output of [`Hkdf::expand`], one request at a time.
///
/// At most one hash block is buffered. Reading in any chunking yields the same
/// bytes as a single batch expand of the same length.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Reader {
    #[zeroize(skip)]
    hkdf: Hkdf,
    prk: Vec<u8>,
    info: Vec<u8>,
    length: usize,
    remaining: usize,
    /// Most recent block `T(counter - 1)`.
    block: Vec<u8>,
    /// Bytes of `block` already handed out.
    offset: usize,
    counter: u8,
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("hkdf", &self.hkdf)
            .field("length", &self.length)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl Reader {
    /// Callers go through [`Hkdf::reader`], which bounds `length`.
    pub(crate) fn new(hkdf: Hkdf, prk: &[u8], info: &[u8], length: usize) -> Self {
        Self {
            hkdf,
            prk: Vec::from(prk),
            info: Vec::from(info),
            length,
            remaining: length,
            block: Vec::new(),
            offset: 0,
            counter: 1,
        }
    }

    /// Total number of bytes this reader produces.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Returns up to `count` bytes and whether the reader is now exhausted.
    ///
    /// Once exhausted every call returns no bytes.
    pub fn read(&mut self, count: usize) -> (Vec<u8>, bool) {
        let mut out = vec![0u8; count.min(self.remaining)];
        self.fill(&mut out);

        (out, self.is_exhausted())
    }

    /// Fills the front of `buf` and returns how many bytes were written.
    pub fn fill(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.remaining);
        let mut written = 0;

        while written < n {
            if self.offset == self.block.len() {
                self.next_block();
            }

            let take = (n - written).min(self.block.len() - self.offset);
            buf[written..written + take]
                .copy_from_slice(&self.block[self.offset..self.offset + take]);

            self.offset += take;
            written += take;
        }

        self.remaining -= n;

        if n > 0 && self.remaining == 0 {
            trace!("hkdf reader exhausted after {} bytes", self.length);
            self.prk.zeroize();
            self.block.zeroize();
            self.offset = 0;
        }

        n
    }

    fn next_block(&mut self) {
        let next = self
            .hkdf
            .block(&self.prk, &self.block, &self.info, self.counter);

        self.block.zeroize();
        self.block = next;
        self.offset = 0;
        // Wraps only after block 255, which the length bound never asks for.
        self.counter = self.counter.wrapping_add(1);
    }
}

#[cfg(feature = "std")]
impl std::io::Read for Reader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.fill(buf))
    }
}
