use quotation_export::metrics::{char_width, encode_win_ansi, text_width_mm};

#[test]
fn digits_share_a_width() {
    assert_eq!(char_width('0'), char_width('9'));
    assert_eq!(char_width('5'), 556);
}

#[test]
fn upper_case_matches_afm() {
    assert_eq!(char_width('A'), 722);
    assert_eq!(char_width('W'), 944);
    assert_eq!(char_width('~'), 584);
}

#[test]
fn width_scales_with_size() {
    let small = text_width_mm("Date : 01-01-2026", 11.0);
    let large = text_width_mm("Date : 01-01-2026", 22.0);
    assert!((large - 2.0 * small).abs() < 1e-4);
}

#[test]
fn units_convert_through_points() {
    // 278 + 278 units at 72pt is 0.556 inch.
    let w = text_width_mm("il", 72.0);
    assert!((w - 0.556 * 25.4).abs() < 1e-3);
}

#[test]
fn bullet_and_punctuation_use_their_own_widths() {
    assert_eq!(char_width('\u{2022}'), 350);
    assert_eq!(char_width('\u{2014}'), 1000);
    assert_eq!(char_width('é'), 556);
}

#[test]
fn unencodable_characters_measure_as_question_mark() {
    assert_eq!(char_width('\u{0928}'), char_width('?'));
}

#[test]
fn win_ansi_keeps_ascii_and_maps_bullet() {
    assert_eq!(encode_win_ansi("Toll & parking"), b"Toll & parking".to_vec());
    assert_eq!(encode_win_ansi("\u{2022} Rs 500"), b"\x95 Rs 500".to_vec());
    assert_eq!(encode_win_ansi("café €5"), b"caf\xe9 \x805".to_vec());
}

#[test]
fn win_ansi_replaces_characters_without_a_slot() {
    assert_eq!(encode_win_ansi("पुणे"), b"????".to_vec());
}
