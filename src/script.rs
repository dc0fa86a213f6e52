/// Character-level Unicode classification for Tamil text.
///
/// Only the combining marks are enumerated explicitly; independent vowels
/// and consonants are inferred positionally by the segmenter.

pub const VOWEL_SIGN_AA: char = '\u{0BBE}';
pub const VOWEL_SIGN_I: char = '\u{0BBF}';
pub const VOWEL_SIGN_II: char = '\u{0BC0}';
pub const VOWEL_SIGN_U: char = '\u{0BC1}';
pub const VOWEL_SIGN_UU: char = '\u{0BC2}';
pub const VOWEL_SIGN_E: char = '\u{0BC6}';
pub const VOWEL_SIGN_EE: char = '\u{0BC7}';
pub const VOWEL_SIGN_AI: char = '\u{0BC8}';
pub const VOWEL_SIGN_O: char = '\u{0BCA}';
pub const VOWEL_SIGN_OO: char = '\u{0BCB}';
pub const VOWEL_SIGN_AU: char = '\u{0BCC}';

/// The virama: suppresses a consonant's inherent vowel.
pub const PULLI: char = '\u{0BCD}';

pub const VOWEL_SIGNS: [char; 11] = [
    VOWEL_SIGN_AA,
    VOWEL_SIGN_I,
    VOWEL_SIGN_II,
    VOWEL_SIGN_U,
    VOWEL_SIGN_UU,
    VOWEL_SIGN_E,
    VOWEL_SIGN_EE,
    VOWEL_SIGN_AI,
    VOWEL_SIGN_O,
    VOWEL_SIGN_OO,
    VOWEL_SIGN_AU,
];

pub fn is_vowel_sign(c: char) -> bool {
    VOWEL_SIGNS.contains(&c)
}

/// A sign that attaches to the preceding base character rather than
/// standing alone: any dependent-vowel sign, or the pulli.
pub fn is_combining_sign(c: char) -> bool {
    c == PULLI || is_vowel_sign(c)
}

pub fn is_tamil(c: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&c)
}
