//! Helvetica text metrics and line wrapping
//!
//! Advance widths come from the Adobe AFM files for the standard 14 fonts,
//! in thousandths of the font size, for printable ASCII and the Latin-1
//! supplement. Builtin fonts are written with WinAnsi encoding, so accented
//! Latin-1 names pass through unchanged. Anything else is drawn (and
//! measured) as `?`.

use domain_quotation::FontWeight;

const FIRST_CHAR: u32 = 32;
const FIRST_LATIN1: u32 = 0xa0;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Replaces characters the standard fonts cannot encode
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a1}'..='\u{ff}' => c,
            '\t' | '\u{a0}' => ' ',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => '?',
        })
        .collect()
}

fn char_width(c: char, weight: FontWeight) -> u16 {
    let (ascii, latin1) = match weight {
        FontWeight::Regular => (&HELVETICA, &HELVETICA_LATIN1),
        FontWeight::Bold => (&HELVETICA_BOLD, &HELVETICA_BOLD_LATIN1),
    };
    let code = c as u32;
    let lookup = |table: &[u16], first: u32| {
        code.checked_sub(first)
            .and_then(|i| table.get(i as usize))
            .copied()
    };
    lookup(&ascii[..], FIRST_CHAR)
        .or_else(|| lookup(&latin1[..], FIRST_LATIN1))
        .unwrap_or(ascii[('?' as u32 - FIRST_CHAR) as usize])
}

/// Width of `text` in points at `size`
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, weight))).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap
///
/// `\n` always starts a new line. A word wider than `max_width` on its own
/// is split between characters.
pub fn wrap(text: &str, max_width: f32, size: f32, weight: FontWeight) -> Vec<String> {
    let mut lines = Vec::new();
    let space = text_width(" ", size, weight);

    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in hard_line.split_whitespace() {
            let word_width = text_width(word, size, weight);

            if current.is_empty() {
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut pieces = split_word(word, max_width, size, weight);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    current_width = text_width(&last, size, weight);
                    current = last;
                }
                continue;
            }

            if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut pieces = split_word(word, max_width, size, weight);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    current_width = text_width(&last, size, weight);
                    current = last;
                }
            }
        }

        lines.push(current);
    }

    lines
}

fn split_word(word: &str, max_width: f32, size: f32, weight: FontWeight) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0;

    for c in word.chars() {
        let w = text_width(c.encode_utf8(&mut [0; 4]), size, weight);
        if !piece.is_empty() && width + w > max_width {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(c);
        width += w;
    }
    pieces.push(piece);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // "Hello" in Helvetica: 722 + 556 + 222 + 222 + 556
        assert!((text_width("Hello", 10.0, FontWeight::Regular) - 22.78).abs() < 0.001);
        assert!(text_width("Hello", 10.0, FontWeight::Bold) > text_width("Hello", 10.0, FontWeight::Regular));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Kes. 35,400/-"), "Kes. 35,400/-");
        assert_eq!(sanitize("Mwangi\u{2019}s car \u{2013} 2018"), "Mwangi's car - 2018");
        assert_eq!(sanitize("\u{4e2d}"), "?");
    }

    #[test]
    fn test_latin1_names_pass_through() {
        assert_eq!(sanitize("Jos\u{e9} M\u{fc}ller"), "Jos\u{e9} M\u{fc}ller");
        assert_eq!(sanitize("Fran\u{e7}oise \u{c5}kesson"), "Fran\u{e7}oise \u{c5}kesson");
    }

    #[test]
    fn test_latin1_widths() {
        assert_eq!(char_width('\u{e9}', FontWeight::Regular), char_width('e', FontWeight::Regular));
        assert_eq!(char_width('\u{fc}', FontWeight::Bold), char_width('u', FontWeight::Bold));
        assert_eq!(char_width('\u{c6}', FontWeight::Regular), 1000);
        assert_eq!(char_width('\u{4e2d}', FontWeight::Regular), char_width('?', FontWeight::Regular));
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap("Basic Premium", 200.0, 7.0, FontWeight::Regular);
        assert_eq!(lines, vec!["Basic Premium"]);
    }

    #[test]
    fn test_wrap_honours_newlines() {
        let lines = wrap("BENEFIT\nSUMMARY", 200.0, 7.0, FontWeight::Bold);
        assert_eq!(lines, vec!["BENEFIT", "SUMMARY"]);
    }

    #[test]
    fn test_wrap_breaks_long_text() {
        let text = "Indemnity against loss of or damage to motor vehicles arising from accidental collision";
        let lines = wrap(text, 100.0, 8.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 8.0, FontWeight::Regular) <= 100.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_splits_oversized_word() {
        let word = "X".repeat(60);
        let lines = wrap(&word, 50.0, 8.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        assert_eq!(wrap("", 50.0, 8.0, FontWeight::Regular), vec![String::new()]);
    }
}
