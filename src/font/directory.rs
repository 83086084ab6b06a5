//! The sfnt table directory

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use super::cursor::Cursor;

/// Size of the fixed sfnt header preceding the table records
const HEADER_LEN: usize = 12;
/// Size of one table record
const RECORD_LEN: usize = 16;

/// A four byte table identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Naming table
    pub const NAME: Tag = Tag(*b"name");
    /// OS/2 and Windows specific metrics
    pub const OS2: Tag = Tag(*b"OS/2");

    pub const fn new(bytes: [u8; 4]) -> Self {
        Tag(bytes)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// Key of a directory entry: a real table, or the header region itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKey {
    /// The sfnt header and table records, `[0, headerEnd)`
    Directory,
    Table(Tag),
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKey::Directory => f.write_str("tableDirectory"),
            TableKey::Table(tag) => fmt::Display::fmt(tag, f),
        }
    }
}

impl From<Tag> for TableKey {
    fn from(tag: Tag) -> Self {
        TableKey::Table(tag)
    }
}

/// Location of one table in the file, always within its bounds. The record
/// checksum is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub tag: TableKey,
    pub offset: u32,
    pub length: u32,
}

impl TableEntry {
    /// Offset one past the last byte of the table.
    pub fn end(&self) -> u64 {
        self.offset as u64 + self.length as u64
    }
}

/// All tables listed in the sfnt header.
///
/// Well-formed fonts never repeat a tag. If one does, the later record wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDirectory {
    entries: HashMap<TableKey, TableEntry>,
}

impl TableDirectory {
    /// Read the directory starting at the cursor's current position.
    ///
    /// Every record must lie within the data. On success the cursor sits just
    /// past the last table record.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        let start = cursor.position();
        cursor.skip(4)?; // sfnt version
        let num_tables = cursor.read_u16()?;
        cursor.skip(6)?; // searchRange, entrySelector, rangeShift

        let required = start + HEADER_LEN + RECORD_LEN * num_tables as usize;
        if required > cursor.len() {
            return Err(Error::MalformedDirectory {
                num_tables,
                required,
                available: cursor.len(),
            });
        }

        let mut entries = HashMap::with_capacity(num_tables as usize + 1);
        for _ in 0..num_tables {
            let tag = cursor.read_tag()?;
            cursor.skip(4)?; // checksum
            let offset = cursor.read_u32()?;
            let length = cursor.read_u32()?;
            let key = TableKey::Table(tag);
            let entry = TableEntry {
                tag: key,
                offset,
                length,
            };
            if entry.end() > cursor.len() as u64 {
                return Err(Error::UnexpectedEof {
                    requested: length as usize,
                    available: cursor.len().saturating_sub(offset as usize),
                });
            }
            if let Some(prev) = entries.insert(key, entry) {
                debug!("Duplicate table record for '{}', replacing {:?}", tag, prev);
            }
        }

        entries.insert(
            TableKey::Directory,
            TableEntry {
                tag: TableKey::Directory,
                offset: 0,
                length: cursor.position() as u32,
            },
        );

        debug!("Read table directory with {} tables", num_tables);
        Ok(TableDirectory { entries })
    }

    pub fn get(&self, key: impl Into<TableKey>) -> Option<&TableEntry> {
        self.entries.get(&key.into())
    }

    /// Look up an entry by its display name, e.g. `"name"` or `"tableDirectory"`.
    pub fn get_by_name(&self, name: &str) -> Option<&TableEntry> {
        self.entries.values().find(|entry| entry.tag.to_string() == name)
    }

    pub fn header(&self) -> Option<&TableEntry> {
        self.entries.get(&TableKey::Directory)
    }

    /// Number of entries, including the synthetic header entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
