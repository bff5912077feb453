use crate::artifacts::index::CHECKSUM_SIZE;
use crate::artifacts::objects::object_type::invalid_data;
use sha1::{Digest, Sha1};
use std::io::{self, Read, Write};

/// SHA-1 over every byte passing through the wrapped reader or writer
///
/// The index file ends with this digest; [`Checksum::verify`] checks it on load.
pub struct Checksum<S> {
    inner: S,
    digest: Sha1,
}

impl<S> Checksum<S> {
    pub fn new(inner: S) -> Self {
        Checksum {
            inner,
            digest: Sha1::new(),
        }
    }
}

impl<S: Read> Read for Checksum<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.digest.update(&buf[..read]);

        Ok(read)
    }
}

impl<S: Read> Checksum<S> {
    /// Read the trailing checksum and compare it to everything read so far
    ///
    /// Fails if the trailer is missing or anything follows it.
    pub fn verify(mut self) -> io::Result<()> {
        let mut expected_checksum = [0u8; CHECKSUM_SIZE];
        self.inner
            .read_exact(&mut expected_checksum)
            .map_err(|_| invalid_data("unexpected end-of-file while reading index checksum"))?;

        let actual_checksum = self.digest.finalize();
        if expected_checksum != actual_checksum.as_slice() {
            return Err(invalid_data("checksum does not match value stored on disk"));
        }

        let mut trailing = [0u8; 1];
        if self.inner.read(&mut trailing)? != 0 {
            return Err(invalid_data("trailing bytes after index checksum"));
        }

        Ok(())
    }
}

impl<S: Write> Write for Checksum<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.digest.update(&buf[..written]);

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Write> Checksum<S> {
    /// Append the checksum of everything written so far and hand back the writer
    pub fn write_checksum(mut self) -> io::Result<S> {
        let checksum = self.digest.finalize();
        self.inner.write_all(checksum.as_slice())?;

        Ok(self.inner)
    }
}
