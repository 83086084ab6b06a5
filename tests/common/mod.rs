//! Synthetic sfnt files for integration tests

#![allow(dead_code)]

pub const WINDOWS: u16 = 3;
pub const MACINTOSH: u16 = 1;
pub const EN_US: u16 = 1033;
pub const ZH_CN: u16 = 2052;

/// One `name` record: platform, encoding, language, name id and text.
///
/// Windows records are encoded as UTF-16BE, everything else as Latin-1.
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub text: String,
}

impl NameEntry {
    pub fn windows(language_id: u16, name_id: u16, text: &str) -> Self {
        NameEntry {
            platform_id: WINDOWS,
            encoding_id: 1,
            language_id,
            name_id,
            text: text.to_string(),
        }
    }

    pub fn mac(language_id: u16, name_id: u16, text: &str) -> Self {
        NameEntry {
            platform_id: MACINTOSH,
            encoding_id: 0,
            language_id,
            name_id,
            text: text.to_string(),
        }
    }

    fn encode(&self) -> Vec<u8> {
        if self.platform_id == WINDOWS {
            self.text.encode_utf16().flat_map(u16::to_be_bytes).collect()
        } else {
            self.text.chars().map(|c| c as u8).collect()
        }
    }
}

pub fn name_table(entries: &[NameEntry]) -> Vec<u8> {
    let storage_offset = 6 + 12 * entries.len();
    let mut data = Vec::new();
    push_u16(&mut data, 0);
    push_u16(&mut data, entries.len() as u16);
    push_u16(&mut data, storage_offset as u16);

    let mut storage = Vec::new();
    for entry in entries {
        let bytes = entry.encode();
        push_u16(&mut data, entry.platform_id);
        push_u16(&mut data, entry.encoding_id);
        push_u16(&mut data, entry.language_id);
        push_u16(&mut data, entry.name_id);
        push_u16(&mut data, bytes.len() as u16);
        push_u16(&mut data, storage.len() as u16);
        storage.extend_from_slice(&bytes);
    }
    data.extend_from_slice(&storage);
    data
}

/// A version 4 `OS/2` table with only the weight class filled in.
pub fn os2_table(weight_class: u16) -> Vec<u8> {
    let mut data = vec![0; 96];
    data[0..2].copy_from_slice(&4u16.to_be_bytes());
    data[2..4].copy_from_slice(&512i16.to_be_bytes());
    data[4..6].copy_from_slice(&weight_class.to_be_bytes());
    data
}

/// Lays out tables after the directory in the order they were added,
/// each padded to a four byte boundary.
#[derive(Debug, Default)]
pub struct FontBuilder {
    tables: Vec<([u8; 4], Vec<u8>)>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, tag: &[u8; 4], data: Vec<u8>) -> Self {
        self.tables.push((*tag, data));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let num_tables = self.tables.len() as u16;
        let entry_selector = if num_tables == 0 {
            0
        } else {
            15 - num_tables.leading_zeros() as u16
        };
        let search_range = (1u16 << entry_selector) * 16;

        let mut data = Vec::new();
        push_u32(&mut data, 0x0001_0000);
        push_u16(&mut data, num_tables);
        push_u16(&mut data, search_range);
        push_u16(&mut data, entry_selector);
        push_u16(&mut data, (num_tables * 16).saturating_sub(search_range));

        let mut offset = 12 + 16 * self.tables.len();
        for (tag, table) in &self.tables {
            data.extend_from_slice(tag);
            push_u32(&mut data, checksum(table));
            push_u32(&mut data, offset as u32);
            push_u32(&mut data, table.len() as u32);
            offset += padded_len(table.len());
        }
        for (_, table) in &self.tables {
            data.extend_from_slice(table);
            data.resize(padded_len(data.len()), 0);
        }
        data
    }
}

/// A font with one Windows English family/full name pair, a sub-family and an `OS/2` table
pub fn simple_font(family: &str, style: &str, weight_class: u16) -> Vec<u8> {
    FontBuilder::new()
        .table(
            b"OS/2",
            os2_table(weight_class),
        )
        .table(
            b"name",
            name_table(&[
                NameEntry::windows(EN_US, 1, family),
                NameEntry::windows(EN_US, 2, style),
                NameEntry::windows(EN_US, 4, &format!("{family} {style}")),
            ]),
        )
        .build()
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn checksum(table: &[u8]) -> u32 {
    table.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn push_u16(data: &mut Vec<u8>, value: u16) {
    data.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(data: &mut Vec<u8>, value: u32) {
    data.extend_from_slice(&value.to_be_bytes());
}
