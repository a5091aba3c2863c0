//! Built-in 5x7 bitmap font for the HUD overlay.
//!
//! Column-major glyphs: five bytes per glyph, one per column, least
//! significant bit at the top row. Uppercase letters, digits, and the
//! punctuation the HUD needs; lowercase input is uppercased by the caller
//! and anything without a glyph renders as a blank cell.

/// Horizontal pen advance per character cell (5 columns + 1 gap)
pub(crate) const ADVANCE: i32 = 6;
/// Glyph height in rows
pub(crate) const HEIGHT: i32 = 7;

/// Column bitmap for `c`, or `None` for characters without a glyph.
pub(crate) fn glyph(c: char) -> Option<[u8; 5]> {
    let columns = match c {
        'A' => [0x7e, 0x11, 0x11, 0x11, 0x7e],
        'B' => [0x7f, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3e, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7f, 0x41, 0x41, 0x22, 0x1c],
        'E' => [0x7f, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7f, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3e, 0x41, 0x49, 0x49, 0x7a],
        'H' => [0x7f, 0x08, 0x08, 0x08, 0x7f],
        'I' => [0x00, 0x41, 0x7f, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3f, 0x01],
        'K' => [0x7f, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7f, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7f, 0x02, 0x0c, 0x02, 0x7f],
        'N' => [0x7f, 0x04, 0x08, 0x10, 0x7f],
        'O' => [0x3e, 0x41, 0x41, 0x41, 0x3e],
        'P' => [0x7f, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3e, 0x41, 0x51, 0x21, 0x5e],
        'R' => [0x7f, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7f, 0x01, 0x01],
        'U' => [0x3f, 0x40, 0x40, 0x40, 0x3f],
        'V' => [0x1f, 0x20, 0x40, 0x20, 0x1f],
        'W' => [0x3f, 0x40, 0x38, 0x40, 0x3f],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x07, 0x08, 0x70, 0x08, 0x07],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        '0' => [0x3e, 0x51, 0x49, 0x45, 0x3e],
        '1' => [0x00, 0x42, 0x7f, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4b, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7f, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3c, 0x4a, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1e],
        ':' => [0x00, 0x36, 0x36, 0x00, 0x00],
        '+' => [0x08, 0x08, 0x3e, 0x08, 0x08],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '/' => [0x20, 0x10, 0x08, 0x04, 0x02],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        ',' => [0x00, 0x50, 0x30, 0x00, 0x00],
        _ => return None,
    };
    Some(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_characters_have_glyphs() {
        let hud = format!("{} FPS 0123456789.", crate::render::HINT_TEXT);
        for c in hud.chars() {
            if c != ' ' {
                let c = c.to_ascii_uppercase();
                assert!(glyph(c).is_some(), "missing glyph for {c:?}");
            }
        }
    }

    #[test]
    fn glyphs_fit_seven_rows() {
        for c in ('A'..='Z').chain('0'..='9') {
            let columns = glyph(c).unwrap();
            for column in columns {
                assert_eq!(column & 0x80, 0, "glyph for {c:?} exceeds 7 rows");
            }
        }
    }

    #[test]
    fn space_and_unknowns_are_blank() {
        assert!(glyph(' ').is_none());
        assert!(glyph('~').is_none());
    }
}
