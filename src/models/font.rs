use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::font::name::NameTable;
use crate::font::weight::{estimate_weight, is_italic_style};

/// Metadata extracted from a font file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMetadata {
    /// Every family name (name ID 1) in the font
    pub family_names: BTreeSet<String>,
    /// Typographic family name (name ID 16), empty if absent
    pub preferred_family_name: String,
    /// Full names (name ID 4) keyed by locale tag, e.g. `"en"` or `"zh"`
    pub full_names: BTreeMap<String, String>,
    /// Sub-family name (name ID 2)
    pub sub_family_name: String,
    /// Copyright notice (name ID 0)
    pub notice: String,
    /// PostScript name (name ID 6)
    pub postscript_name: String,
    /// `usWeightClass` from the `OS/2` table, 0 if the table is missing
    pub weight_class: u16,
}

impl FontMetadata {
    pub(crate) fn from_parts(names: NameTable, weight_class: u16) -> Self {
        let NameTable {
            family_names,
            preferred_family_name,
            full_names,
            sub_family_name,
            notice,
            postscript_name,
        } = names;
        FontMetadata {
            family_names,
            preferred_family_name,
            full_names,
            sub_family_name,
            notice,
            postscript_name,
            weight_class,
        }
    }

    /// The family to group this font under: the typographic family when
    /// present, otherwise the first family name.
    pub fn family(&self) -> Option<&str> {
        if !self.preferred_family_name.is_empty() {
            return Some(&self.preferred_family_name);
        }
        self.family_names.iter().next().map(String::as_str)
    }
}

/// A parsed font file as listed by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    /// Name to show for this font in the configured locale
    pub display_name: String,
    pub file_name: String,
    pub path: PathBuf,
    pub metadata: FontMetadata,
}

impl FontInfo {
    /// Whether the font carries a Chinese full name
    pub fn has_chinese_name(&self) -> bool {
        self.metadata.full_names.contains_key("zh")
    }

    /// Weight class, estimated from the sub-family when there is no `OS/2` table
    pub fn weight(&self) -> u16 {
        match self.metadata.weight_class {
            0 => estimate_weight(&self.metadata.sub_family_name),
            w => w,
        }
    }

    pub fn is_italic(&self) -> bool {
        is_italic_style(&self.metadata.sub_family_name)
    }
}
