//! Index entry representation
//!
//! Each entry records a staged file: its path, the digest of the blob staged for it,
//! and the file's modification time when it was staged. The modification time is what
//! `add` compares to reject re-staging an unchanged file.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::invalid_data;
use crate::artifacts::snapshot::tree_path::TreePath;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{self, BufRead, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Modification time with nanosecond precision, relative to the Unix epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct EntryTime {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl From<SystemTime> for EntryTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => EntryTime::new(since.as_secs() as i64, since.subsec_nanos()),
            Err(before) => {
                let before = before.duration();
                if before.subsec_nanos() == 0 {
                    EntryTime::new(-(before.as_secs() as i64), 0)
                } else {
                    EntryTime::new(
                        -(before.as_secs() as i64) - 1,
                        1_000_000_000 - before.subsec_nanos(),
                    )
                }
            }
        }
    }
}

impl From<EntryTime> for SystemTime {
    fn from(time: EntryTime) -> Self {
        let nanos = Duration::from_nanos(u64::from(time.nanoseconds));
        if time.seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(time.seconds as u64) + nanos
        } else {
            UNIX_EPOCH - Duration::from_secs(time.seconds.unsigned_abs()) + nanos
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub path: TreePath,
    pub oid: ObjectId,
    pub mtime: EntryTime,
}

impl Packable for IndexEntry {
    fn serialize(&self) -> io::Result<Bytes> {
        let mut entry_bytes = Vec::new();

        entry_bytes.write_i64::<BigEndian>(self.mtime.seconds)?;
        entry_bytes.write_u32::<BigEndian>(self.mtime.nanoseconds)?;
        self.oid.write_h40_to(&mut entry_bytes)?;

        let path = self.path.as_str();
        let path_len = u16::try_from(path.len())
            .map_err(|_| invalid_data(format!("path too long for the index: {path}")))?;
        entry_bytes.write_u16::<BigEndian>(path_len)?;
        entry_bytes.write_all(path.as_bytes())?;

        Ok(Bytes::from(entry_bytes))
    }
}

impl Unpackable for IndexEntry {
    fn deserialize(mut reader: impl BufRead) -> io::Result<Self> {
        let seconds = reader.read_i64::<BigEndian>()?;
        let nanoseconds = reader.read_u32::<BigEndian>()?;
        if nanoseconds >= 1_000_000_000 {
            return Err(invalid_data("invalid entry modification time"));
        }
        let oid = ObjectId::read_h40_from(&mut reader)?;

        let path_len = reader.read_u16::<BigEndian>()?;
        let mut path = vec![0u8; path_len as usize];
        reader.read_exact(&mut path)?;
        let path =
            String::from_utf8(path).map_err(|_| invalid_data("index path is not valid UTF-8"))?;
        let path = TreePath::try_parse(&path)
            .map_err(|_| invalid_data(format!("malformed index path '{path}'")))?;

        Ok(IndexEntry::new(path, oid, EntryTime::new(seconds, nanoseconds)))
    }
}
