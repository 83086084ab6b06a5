use std::fs;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::models::FontMetadata;
use super::cursor::Cursor;
use super::directory::{TableDirectory, TableEntry, Tag};
use super::name::NameTable;
use super::weight::read_weight_class;

lazy_static! {
    static ref FONT_EXTENSION: Regex = Regex::new(r"(?i)\.(ttf|otf)$").unwrap();
}

/// sfnt versions accepted by [`is_font_file`]
const SFNT_MAGIC: [[u8; 4]; 3] = [
    [0x00, 0x01, 0x00, 0x00], // TrueType
    *b"OTTO",                 // CFF outlines
    *b"true",                 // Apple TrueType
];

/// Check if a path names a font file: a `.ttf`/`.otf` extension and an sfnt header
pub fn is_font_file(path: &Path) -> bool {
    let has_extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| FONT_EXTENSION.is_match(name));
    if !has_extension {
        return false;
    }

    let mut header = [0u8; 4];
    match fs::File::open(path).and_then(|mut file| file.read_exact(&mut header)) {
        Ok(()) => SFNT_MAGIC.contains(&header),
        Err(e) => {
            debug!("Cannot read header of {}: {}", path.display(), e);
            false
        }
    }
}

/// Extract metadata from a font file on disk
pub fn parse_font_file(path: &Path) -> Result<FontMetadata> {
    debug!("Extracting metadata from: {}", path.display());
    let data = {
        let mut file = fs::File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        data
    };
    parse_font(&data)
}

/// Extract metadata from a stream holding a complete font file
pub fn parse_font_reader<R: Read>(mut reader: R) -> Result<FontMetadata> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_font(&data)
}

/// Extract metadata from the bytes of a font file.
///
/// Missing `name` or `OS/2` tables leave the corresponding fields empty. Any
/// malformed data fails the whole parse.
pub fn parse_font(data: &[u8]) -> Result<FontMetadata> {
    let mut cursor = Cursor::new(data);
    let directory = TableDirectory::read(&mut cursor)?;

    let name_entry = directory.get(Tag::NAME).copied();
    let os2_entry = directory.get(Tag::OS2).copied();

    let mut names = NameTable::default();
    let mut weight_class = 0;
    match (name_entry, os2_entry) {
        (Some(name), Some(os2)) if name.offset > os2.offset => {
            weight_class = read_os2(&mut cursor, &os2)?;
            names = read_name(&mut cursor, &name)?;
        }
        (Some(name), Some(os2)) => {
            names = read_name(&mut cursor, &name)?;
            weight_class = read_os2(&mut cursor, &os2)?;
        }
        (Some(name), None) => names = read_name(&mut cursor, &name)?,
        (None, Some(os2)) => weight_class = read_os2(&mut cursor, &os2)?,
        (None, None) => debug!("Font has neither a name nor an OS/2 table"),
    }

    Ok(FontMetadata::from_parts(names, weight_class))
}

/// The bytes of one table, so decoders cannot read past its declared length
fn table_data<'a>(cursor: &mut Cursor<'a>, entry: &TableEntry) -> Result<&'a [u8]> {
    cursor.seek(entry.offset as usize)?;
    cursor.read_bytes(entry.length as usize)
}

fn read_name(cursor: &mut Cursor<'_>, entry: &TableEntry) -> Result<NameTable> {
    NameTable::decode(table_data(cursor, entry)?)
}

fn read_os2(cursor: &mut Cursor<'_>, entry: &TableEntry) -> Result<u16> {
    read_weight_class(table_data(cursor, entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// A font with the given tables laid out in order after the directory.
    fn font(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
        let mut data = vec![0x00, 0x01, 0x00, 0x00];
        data.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        data.extend_from_slice(&[0; 6]);
        let mut offset = 12 + 16 * tables.len();
        for (tag, body) in tables {
            data.extend_from_slice(*tag);
            data.extend_from_slice(&[0; 4]);
            data.extend_from_slice(&(offset as u32).to_be_bytes());
            data.extend_from_slice(&(body.len() as u32).to_be_bytes());
            offset += body.len();
        }
        for (_, body) in tables {
            data.extend_from_slice(body);
        }
        data
    }

    fn os2(weight: u16) -> Vec<u8> {
        let mut body = vec![0x00, 0x04, 0x02, 0x00];
        body.extend_from_slice(&weight.to_be_bytes());
        body.extend_from_slice(&[0; 6]);
        body
    }

    fn name_table(family: &str) -> Vec<u8> {
        let text: Vec<u8> = family.encode_utf16().flat_map(u16::to_be_bytes).collect();
        let mut body = Vec::new();
        for field in [0u16, 1, 18, 3, 1, 1033, 1, text.len() as u16, 0] {
            body.extend_from_slice(&field.to_be_bytes());
        }
        body.extend_from_slice(&text);
        body
    }

    #[test]
    fn empty_font_yields_defaults() {
        let data = font(&[(b"glyf", vec![0; 8])]);
        assert_eq!(parse_font(&data).unwrap(), FontMetadata::default());
    }

    #[test]
    fn os2_only() {
        let data = font(&[(b"OS/2", os2(700))]);
        let metadata = parse_font(&data).unwrap();
        assert_eq!(metadata.weight_class, 700);
        assert!(metadata.family_names.is_empty());
    }

    #[test]
    fn both_tables_in_either_order() {
        let forward = font(&[(b"name", name_table("Alpha")), (b"OS/2", os2(300))]);
        let backward = font(&[(b"OS/2", os2(300)), (b"name", name_table("Alpha"))]);
        let a = parse_font(&forward).unwrap();
        let b = parse_font(&backward).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.weight_class, 300);
        assert!(a.family_names.contains("Alpha"));
    }

    #[test]
    fn table_past_end_of_file() {
        let mut data = font(&[(b"name", name_table("Alpha"))]);
        data.truncate(data.len() - 3);
        assert!(matches!(
            parse_font(&data),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn declared_os2_length_past_end_of_file() {
        let mut data = font(&[(b"OS/2", os2(400))]);
        // length field of the first record
        data[24..28].copy_from_slice(&1000u32.to_be_bytes());
        assert!(matches!(
            parse_font(&data),
            Err(Error::UnexpectedEof {
                requested: 1000,
                ..
            })
        ));
    }

    #[test]
    fn short_os2_does_not_read_into_next_table() {
        let mut data = font(&[(b"OS/2", os2(700)), (b"name", name_table("Alpha"))]);
        // shrink the OS/2 record to its version field
        data[24..28].copy_from_slice(&2u32.to_be_bytes());
        assert!(matches!(
            parse_font(&data),
            Err(Error::UnexpectedEof {
                requested: 2,
                available: 0
            })
        ));
    }

    #[test]
    fn reader_entry_point() {
        let data = font(&[(b"OS/2", os2(500))]);
        let metadata = parse_font_reader(std::io::Cursor::new(data)).unwrap();
        assert_eq!(metadata.weight_class, 500);
    }
}
