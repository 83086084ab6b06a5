use std::io::{self, Write};

use crate::font::weight_name;
use crate::models::{FontInfo, OutputFormat};

/// One line: display name, style, weight and file name
pub fn format_summary(info: &FontInfo) -> String {
    let style = match info.metadata.sub_family_name.as_str() {
        "" => "Regular",
        s => s,
    };
    format!(
        "{} ({}, {} {}) [{}]",
        info.display_name,
        style,
        info.weight(),
        weight_name(info.weight()),
        info.file_name
    )
}

/// Every extracted field, one per line, followed by a blank line
pub fn write_full(out: &mut impl Write, info: &FontInfo) -> io::Result<()> {
    let m = &info.metadata;
    writeln!(out, "{}", info.path.display())?;
    writeln!(out, "  display name:     {}", info.display_name)?;
    let families: Vec<&str> = m.family_names.iter().map(String::as_str).collect();
    writeln!(out, "  family names:     {}", families.join(", "))?;
    if !m.preferred_family_name.is_empty() {
        writeln!(out, "  preferred family: {}", m.preferred_family_name)?;
    }
    for (locale, name) in &m.full_names {
        writeln!(out, "  full name [{locale}]:  {name}")?;
    }
    writeln!(out, "  sub-family:       {}", m.sub_family_name)?;
    if !m.postscript_name.is_empty() {
        writeln!(out, "  postscript name:  {}", m.postscript_name)?;
    }
    match m.weight_class {
        0 => writeln!(out, "  weight class:     none (estimated {})", info.weight())?,
        w => writeln!(out, "  weight class:     {} ({})", w, weight_name(w))?,
    }
    if !m.notice.is_empty() {
        writeln!(out, "  notice:           {}", m.notice)?;
    }
    writeln!(out)
}

/// Write a list of fonts to `out` in the requested format
pub fn write_fonts(out: &mut impl Write, fonts: &[FontInfo], format: OutputFormat) -> io::Result<()> {
    for info in fonts {
        match format {
            OutputFormat::Summary => writeln!(out, "{}", format_summary(info))?,
            OutputFormat::Full => write_full(out, info)?,
        }
    }
    Ok(())
}
