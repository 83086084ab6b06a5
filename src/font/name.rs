//! Decoding of the `name` table

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::error::Result;
use super::cursor::Cursor;

/// Size of the table header: format, count, stringOffset
const HEADER_LEN: usize = 6;
/// Size of one name record
const RECORD_LEN: usize = 12;

const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;

const COPYRIGHT_NOTICE: u16 = 0;
const FAMILY_NAME: u16 = 1;
const SUBFAMILY_NAME: u16 = 2;
const FULL_NAME: u16 = 4;
const POSTSCRIPT_NAME: u16 = 6;
const TYPOGRAPHIC_FAMILY_NAME: u16 = 16;

/// Locale tag used for full names that match no entry in [`FULL_NAME_LOCALES`].
pub const DEFAULT_LOCALE: &str = "en";

/// `(platform_id, language_id)` pairs that identify the locale of a full name.
const FULL_NAME_LOCALES: &[(u16, u16, &str)] = &[
    (PLATFORM_WINDOWS, 1033, "en"), // en-US
    (PLATFORM_MACINTOSH, 0, "en"),  // English
    (PLATFORM_WINDOWS, 2052, "zh"), // zh-CN
    (PLATFORM_MACINTOSH, 33, "zh"), // Simplified Chinese
    (PLATFORM_WINDOWS, 1028, "zh"), // zh-TW
    (PLATFORM_MACINTOSH, 19, "zh"), // Traditional Chinese
];

fn locale_for(platform_id: u16, language_id: u16) -> Option<&'static str> {
    FULL_NAME_LOCALES
        .iter()
        .find(|(p, l, _)| *p == platform_id && *l == language_id)
        .map(|(_, _, tag)| *tag)
}

#[derive(Debug, Clone, Copy)]
struct NameRecord {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    length: u16,
    offset: u16,
}

impl NameRecord {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(NameRecord {
            platform_id: cursor.read_u16()?,
            encoding_id: cursor.read_u16()?,
            language_id: cursor.read_u16()?,
            name_id: cursor.read_u16()?,
            length: cursor.read_u16()?,
            offset: cursor.read_u16()?,
        })
    }

    /// Only Macintosh and Windows records with encoding 0 or 1 are decoded.
    fn is_supported(&self) -> bool {
        matches!(self.platform_id, PLATFORM_MACINTOSH | PLATFORM_WINDOWS)
            && matches!(self.encoding_id, 0 | 1)
    }

    fn read_string(&self, cursor: &mut Cursor<'_>) -> Result<String> {
        if self.platform_id == PLATFORM_WINDOWS {
            cursor.read_utf16_string(self.length as usize)
        } else {
            cursor.read_string(self.length as usize)
        }
    }
}

/// Strings collected from a `name` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    pub family_names: BTreeSet<String>,
    pub preferred_family_name: String,
    pub full_names: BTreeMap<String, String>,
    pub sub_family_name: String,
    pub notice: String,
    pub postscript_name: String,
}

impl NameTable {
    /// Decode a `name` table from its raw bytes.
    ///
    /// Record string offsets are relative to the table's storage area, so the
    /// slice must start at the first byte of the table.
    pub fn decode(table: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(table);
        cursor.skip(2)?; // format
        let count = cursor.read_u16()?;
        let storage_offset = cursor.read_u16()? as usize;

        let mut names = NameTable::default();
        for i in 0..count as usize {
            cursor.seek(HEADER_LEN + i * RECORD_LEN)?;
            let record = NameRecord::read(&mut cursor)?;
            if !record.is_supported() {
                trace!(
                    "Skipping name record {} (platform {}, encoding {})",
                    record.name_id,
                    record.platform_id,
                    record.encoding_id
                );
                continue;
            }
            cursor.seek(storage_offset + record.offset as usize)?;
            let text = record.read_string(&mut cursor)?;
            names.insert(&record, text);
        }
        Ok(names)
    }

    fn insert(&mut self, record: &NameRecord, text: String) {
        match record.name_id {
            COPYRIGHT_NOTICE => set_if_empty(&mut self.notice, text),
            FAMILY_NAME => {
                self.family_names.insert(text);
            }
            SUBFAMILY_NAME => set_if_empty(&mut self.sub_family_name, text),
            FULL_NAME => match locale_for(record.platform_id, record.language_id) {
                Some(locale) => {
                    self.full_names.insert(locale.to_string(), text);
                }
                None if self.full_names.is_empty() => {
                    self.full_names.insert(DEFAULT_LOCALE.to_string(), text);
                }
                None => {}
            },
            POSTSCRIPT_NAME => set_if_empty(&mut self.postscript_name, text),
            TYPOGRAPHIC_FAMILY_NAME => self.preferred_family_name = text,
            _ => {}
        }
    }
}

fn set_if_empty(slot: &mut String, text: String) {
    if slot.is_empty() {
        *slot = text;
    }
}
