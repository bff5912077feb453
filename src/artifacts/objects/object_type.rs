use crate::artifacts::objects::OBJECT_FORMAT_VERSION;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Header that prefixes every stored object: `<kind> <format-version>\0`
    pub fn header(&self) -> String {
        format!("{} {}\0", self.as_str(), OBJECT_FORMAT_VERSION)
    }

    /// Read the stored object header, leaving the reader positioned at the body
    pub fn parse_object_type(data_reader: &mut impl BufRead) -> io::Result<ObjectType> {
        let mut object_type = Vec::new();
        data_reader.read_until(b' ', &mut object_type)?;
        if object_type.pop() != Some(b' ') {
            return Err(invalid_data("missing object kind"));
        }

        let mut version = Vec::new();
        data_reader.read_until(b'\0', &mut version)?;
        if version.pop() != Some(b'\0') {
            return Err(invalid_data("missing object format version"));
        }

        let version = std::str::from_utf8(&version)
            .ok()
            .and_then(|version| version.parse::<u32>().ok())
            .ok_or_else(|| invalid_data("invalid object format version"))?;
        if version != OBJECT_FORMAT_VERSION {
            return Err(invalid_data(format!(
                "unsupported object format version {version}"
            )));
        }

        let object_type =
            std::str::from_utf8(&object_type).map_err(|_| invalid_data("invalid object kind"))?;

        ObjectType::try_from(object_type)
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = io::Error;

    fn try_from(value: &str) -> io::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            other => Err(invalid_data(format!("invalid object kind '{other}'"))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn invalid_data(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}
