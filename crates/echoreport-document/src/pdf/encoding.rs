// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text folding for the built-in Type1 fonts.
//
// printpdf writes built-in font text as the raw UTF-8 bytes of the string,
// and the viewer reads them through WinAnsiEncoding one byte at a time. Only
// ASCII survives that unchanged, so every text run is folded to ASCII first.

use std::borrow::Cow;

/// Emitted for characters with no ASCII stand-in.
const UNMAPPED: char = '?';

/// `text` reduced to ASCII. Borrowed when nothing needed folding.
pub fn builtin_text(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold(c) {
            Folded::Char(f) => out.push(f),
            Folded::Str(s) => out.push_str(s),
        }
    }
    Cow::Owned(out)
}

enum Folded {
    Char(char),
    Str(&'static str),
}

fn fold(c: char) -> Folded {
    if c.is_ascii() {
        return Folded::Char(c);
    }
    let folded = match c {
        '\u{2022}' | '\u{2023}' | '\u{25E6}' | '\u{2043}' | '\u{2013}' | '\u{2014}'
        | '\u{2212}' => '-',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
        '\u{00A0}' | '\u{2009}' | '\u{202F}' => ' ',
        '\u{2026}' => return Folded::Str("..."),
        '\u{00B0}' => return Folded::Str(" deg"),
        '\u{00B5}' | '\u{03BC}' => 'u',
        '\u{00D7}' => 'x',
        '\u{2264}' => return Folded::Str("<="),
        '\u{2265}' => return Folded::Str(">="),
        '\u{00DF}' => return Folded::Str("ss"),
        '\u{00C6}' => return Folded::Str("AE"),
        '\u{00E6}' => return Folded::Str("ae"),
        '\u{0152}' => return Folded::Str("OE"),
        '\u{0153}' => return Folded::Str("oe"),
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => UNMAPPED,
    };
    Folded::Char(folded)
}
