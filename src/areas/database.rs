//! Object store
//!
//! Objects live under `.twig/objects/<2 hex>/<38 hex>`, zlib-compressed. The key is
//! the digest of the canonical encoding, so writing the same content twice stores it
//! once, and an object file is never rewritten once it exists.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::error::{IoContext, RepositoryError, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Storage location of an object: a 2-character partition and the remaining name
    pub fn locate(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.locate(object_id).is_file()
    }

    /// Persist an object unless it is already present, returning its digest either way
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_id = object.object_id();
        let object_path = self.locate(&object_id);

        if object_path.exists() {
            tracing::trace!(oid = %object_id, kind = %object.object_type(), "object already stored");
            return Ok(object_id);
        }

        let object_content = object
            .serialize()
            .io_context(|| format!("unable to encode {} {object_id}", object.object_type()))?;
        self.write_object(&object_path, object_content)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    /// Read and decode an object, verifying that it hashes back to `object_id`
    pub fn load(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let object_content = self.read_object(object_id)?;

        let object = ObjectBox::unpack(Cursor::new(object_content)).map_err(|source| {
            RepositoryError::corrupt_with(object_id, "unable to decode object", source)
        })?;

        let actual_id = object.object_id();
        if &actual_id != object_id {
            return Err(RepositoryError::corrupt(
                object_id,
                format!("content hashes to {actual_id}"),
            ));
        }

        Ok(object)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        match self.load(object_id)? {
            ObjectBox::Blob(blob) => Ok(*blob),
            other => Err(Self::unexpected_kind(object_id, ObjectType::Blob, &other)),
        }
    }

    pub fn load_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        match self.load(object_id)? {
            ObjectBox::Tree(tree) => Ok(*tree),
            other => Err(Self::unexpected_kind(object_id, ObjectType::Tree, &other)),
        }
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        match self.load(object_id)? {
            ObjectBox::Commit(commit) => Ok(*commit),
            other => Err(Self::unexpected_kind(object_id, ObjectType::Commit, &other)),
        }
    }

    pub fn object_type(&self, object_id: &ObjectId) -> Result<ObjectType> {
        Ok(self.load(object_id)?.object_type())
    }

    /// Modification time of the stored object file
    pub fn object_mtime(&self, object_id: &ObjectId) -> Result<SystemTime> {
        let object_path = self.locate(object_id);

        std::fs::metadata(&object_path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => RepositoryError::ObjectNotFound(object_id.clone()),
                _ => RepositoryError::Io {
                    context: format!("unable to stat object file {}", object_path.display()),
                    source,
                },
            })
    }

    /// Every stored object whose digest starts with `prefix` (lowercase hex)
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        let partitions = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for dir_name in partitions {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            let entries = std::fs::read_dir(&dir_path)
                .io_context(|| format!("unable to list objects in {}", dir_path.display()))?;
            for entry in entries {
                let entry =
                    entry.io_context(|| format!("unable to list objects in {}", dir_path.display()))?;
                let full_oid = format!("{dir_name}{}", entry.file_name().to_string_lossy());

                if full_oid.starts_with(prefix)
                    && let Some(oid) = ObjectId::try_parse(&full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn unexpected_kind(object_id: &ObjectId, expected: ObjectType, found: &ObjectBox) -> RepositoryError {
        RepositoryError::corrupt(
            object_id,
            format!("expected {expected}, found {}", found.object_type()),
        )
    }

    fn read_object(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.locate(object_id);

        let object_content = std::fs::read(&object_path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::ObjectNotFound(object_id.clone()),
            _ => RepositoryError::Io {
                context: format!("unable to read object file {}", object_path.display()),
                source,
            },
        })?;

        Self::decompress(object_content.into()).map_err(|source| {
            RepositoryError::corrupt_with(object_id, "unable to decompress object", source)
        })
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> Result<()> {
        let object_dir = object_path.parent().ok_or_else(|| RepositoryError::Io {
            context: format!("invalid object path {}", object_path.display()),
            source: std::io::ErrorKind::InvalidInput.into(),
        })?;
        std::fs::create_dir_all(object_dir)
            .io_context(|| format!("unable to create object directory {}", object_dir.display()))?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let object_content = Self::compress(object_content)
            .io_context(|| format!("unable to compress object {}", object_path.display()))?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .io_context(|| format!("unable to open object file {}", temp_object_path.display()))?;
        file.write_all(&object_content)
            .io_context(|| format!("unable to write object file {}", temp_object_path.display()))?;

        // rename so readers never observe a partially written object
        std::fs::rename(&temp_object_path, object_path)
            .io_context(|| format!("unable to rename object file to {}", object_path.display()))
    }

    fn compress(data: Bytes) -> std::io::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&data)?;

        encoder.finish().map(Bytes::from)
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
