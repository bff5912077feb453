use crate::artifacts::index::{SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_type::invalid_data;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub marker: String,
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    pub fn empty() -> Self {
        IndexHeader::new(String::from(SIGNATURE), VERSION, 0)
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> io::Result<Bytes> {
        let mut header_bytes = Vec::new();
        header_bytes.write_all(self.marker.as_bytes())?;
        header_bytes.write_u32::<BigEndian>(self.version)?;
        header_bytes.write_u32::<BigEndian>(self.entries_count)?;

        Ok(Bytes::from(header_bytes))
    }
}

impl Unpackable for IndexHeader {
    fn deserialize(mut reader: impl BufRead) -> io::Result<Self> {
        let mut marker = [0u8; 4];
        reader.read_exact(&mut marker)?;
        let marker = String::from_utf8(marker.to_vec())
            .map_err(|_| invalid_data("invalid index file signature"))?;

        let version = reader.read_u32::<BigEndian>()?;
        let entries_count = reader.read_u32::<BigEndian>()?;

        Ok(IndexHeader::new(marker, version, entries_count))
    }
}
