//! Blob object
//!
//! Blobs hold the raw bytes of one file, without a name or any metadata (names live
//! in trees).
//!
//! ## Format
//!
//! Canonical: the content bytes, unmodified.
//! Stored: `blob 1\0<content>`

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> io::Result<Bytes> {
        let mut blob_bytes = Vec::with_capacity(self.content.len() + 8);
        blob_bytes.write_all(self.object_type().header().as_bytes())?;
        blob_bytes.write_all(&self.content)?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> io::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn canonical_bytes(&self) -> Bytes {
        self.content.clone()
    }
}
