//! Advance widths for the built-in Helvetica-Bold face.
//!
//! Built-in PDF fonts carry no metrics in the file, so alignment has to be
//! computed from the published AFM widths (units per 1000 em).

/// Width used for encodable Latin-1 characters outside the table.
const FALLBACK_WIDTH: u16 = 556;

const BULLET_WIDTH: u16 = 350;

/// Printable ASCII, `' '` (0x20) through `'~'` (0x7E).
#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Advance width of `c` once it has been through [`encode_win_ansi`].
pub fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_BOLD_ASCII[c as usize - 0x20],
        '\u{2022}' => BULLET_WIDTH,
        '\u{2013}' => 556,
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => 278,
        '\u{201C}' | '\u{201D}' => 500,
        c if win_ansi_byte(c).is_some() => FALLBACK_WIDTH,
        _ => HELVETICA_BOLD_ASCII[usize::from(UNMAPPED - 0x20)],
    }
}

/// Width of `text` set in Helvetica-Bold at `size_pt`, in millimetres.
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Byte written for characters the font encoding has no slot for.
const UNMAPPED: u8 = b'?';

fn win_ansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(c as u8),
        '\u{20AC}' => Some(0x80),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        _ => None,
    }
}

/// Encode `text` for a `WinAnsiEncoding` simple font.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| win_ansi_byte(c).unwrap_or(UNMAPPED)).collect()
}
