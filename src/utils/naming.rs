use std::path::Path;

use crate::font::name::DEFAULT_LOCALE;
use crate::models::FontMetadata;

/// Reduce a locale such as `zh-CN`, `zh_TW` or `EN` to its language subtag.
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Pick the name to show for a font.
///
/// Tries the full name for `locale`, then the English full name, then any full
/// name, then the family name, and finally the file stem.
pub fn display_name(metadata: &FontMetadata, locale: &str, path: &Path) -> String {
    let locale = normalize_locale(locale);
    metadata
        .full_names
        .get(&locale)
        .or_else(|| metadata.full_names.get(DEFAULT_LOCALE))
        .or_else(|| metadata.full_names.values().next())
        .cloned()
        .or_else(|| metadata.family().map(str::to_string))
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Unknown".to_string())
        })
}
