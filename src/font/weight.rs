use crate::error::Result;
use super::cursor::Cursor;

/// Read `usWeightClass` from the raw bytes of an `OS/2` table.
///
/// The value is passed through unchecked; fonts are expected to use 100..=900.
pub fn read_weight_class(table: &[u8]) -> Result<u16> {
    let mut cursor = Cursor::new(table);
    cursor.skip(2)?; // version
    cursor.skip(2)?; // xAvgCharWidth
    cursor.read_u16()
}

/// Conventional name for a weight class, rounded to the nearest hundred
pub fn weight_name(weight_class: u16) -> &'static str {
    match weight_class.saturating_add(50) / 100 {
        0 => "Unknown",
        1 => "Thin",
        2 => "Extra Light",
        3 => "Light",
        4 => "Regular",
        5 => "Medium",
        6 => "Semi Bold",
        7 => "Bold",
        8 => "Extra Bold",
        _ => "Black",
    }
}

/// Guess a weight class from a sub-family name, for fonts without an `OS/2` table
pub fn estimate_weight(sub_family: &str) -> u16 {
    let style = sub_family.to_lowercase().replace(['-', '_', ' '], "");

    match style.as_str() {
        s if s.contains("thin") || s.contains("hairline") => 100,
        s if s.contains("extralight") || s.contains("ultralight") => 200,
        s if s.contains("semilight") => 350,
        s if s.contains("light") => 300,
        s if s.contains("medium") => 500,
        s if s.contains("semibold") || s.contains("demibold") => 600,
        s if s.contains("extrabold") || s.contains("ultrabold") => 800,
        s if s.contains("bold") => 700,
        s if s.contains("black") || s.contains("heavy") => 900,
        _ => 400,
    }
}

/// Check if a sub-family name describes an italic style
pub fn is_italic_style(sub_family: &str) -> bool {
    let style = sub_family.to_lowercase();
    style.contains("italic") || style.contains("oblique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reads_third_field() {
        let data = [0x00, 0x04, 0x01, 0xf4, 0x02, 0xbc, 0x00, 0x05];
        assert_eq!(read_weight_class(&data).unwrap(), 700);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let data = [0x00, 0x00, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(read_weight_class(&data).unwrap(), 1);
    }

    #[test]
    fn truncated_table() {
        let data = [0x00, 0x04, 0x01, 0xf4, 0x02];
        let err = read_weight_class(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEof {
                requested: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn names() {
        assert_eq!(weight_name(0), "Unknown");
        assert_eq!(weight_name(400), "Regular");
        assert_eq!(weight_name(700), "Bold");
        assert_eq!(weight_name(950), "Black");
    }

    #[test]
    fn estimates() {
        assert_eq!(estimate_weight("Bold Italic"), 700);
        assert_eq!(estimate_weight("SemiBold"), 600);
        assert_eq!(estimate_weight("Extra-Bold"), 800);
        assert_eq!(estimate_weight("ExtraLight"), 200);
        assert_eq!(estimate_weight("Regular"), 400);
        assert_eq!(estimate_weight("Heavy"), 900);
        assert!(is_italic_style("Bold Oblique"));
        assert!(!is_italic_style("Bold"));
    }
}
