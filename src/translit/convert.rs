use tracing::{debug_span, warn};

use super::segment::{split_clusters, trim_clusters};
use super::table::PhonemeTable;
use crate::script::{self, is_vowel_sign};

/// The eleven Tamil dependent-vowel signs.
///
/// The resolver matches exhaustively over this enum, so the unmapped `Au`
/// case is a visible arm rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelSign {
    Aa,
    I,
    Ii,
    U,
    Uu,
    E,
    Ee,
    Ai,
    O,
    Oo,
    Au,
}

impl VowelSign {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            script::VOWEL_SIGN_AA => Some(Self::Aa),
            script::VOWEL_SIGN_I => Some(Self::I),
            script::VOWEL_SIGN_II => Some(Self::Ii),
            script::VOWEL_SIGN_U => Some(Self::U),
            script::VOWEL_SIGN_UU => Some(Self::Uu),
            script::VOWEL_SIGN_E => Some(Self::E),
            script::VOWEL_SIGN_EE => Some(Self::Ee),
            script::VOWEL_SIGN_AI => Some(Self::Ai),
            script::VOWEL_SIGN_O => Some(Self::O),
            script::VOWEL_SIGN_OO => Some(Self::Oo),
            script::VOWEL_SIGN_AU => Some(Self::Au),
            _ => None,
        }
    }
}

/// Romanize one line of Tamil text.
///
/// Pure function of the line plus the global [`PhonemeTable`]; independent
/// lines can be converted concurrently. Anything the table does not cover
/// passes through unchanged, so mixed Tamil/Latin lines are safe and a
/// second pass over the output is a no-op.
pub fn convert(line: &str) -> String {
    let _span = debug_span!("convert", line).entered();
    let table = PhonemeTable::global();
    let clusters = trim_clusters(split_clusters(line));

    let mut out = String::new();
    // One-cluster lookback, empty before the first cluster.
    let mut prev = "";
    for cluster in &clusters {
        if ends_with_vowel_sign(cluster) {
            out.push_str(&resolve_signed(cluster, prev, table));
        } else {
            out.push_str(table.lookup_or_passthrough(cluster));
        }
        prev = cluster;
    }
    out
}

fn ends_with_vowel_sign(cluster: &str) -> bool {
    let mut chars = cluster.chars();
    chars.next().is_some() && chars.next().is_some_and(is_vowel_sign)
}

/// Pure-consonant sound of a base: the pulli-terminated table entry, or the
/// pulli-terminated string itself when the base is unmapped.
fn pure_consonant(base: char, table: &PhonemeTable) -> String {
    let key: String = [base, script::PULLI].iter().collect();
    match table.lookup(&key) {
        Some(phoneme) => phoneme.to_string(),
        None => key,
    }
}

/// Resolve a base + vowel-sign cluster, with the handful of irregular
/// pronunciations the static table cannot express. `prev` is the preceding
/// cluster in the sequence, empty at the start of a line.
fn resolve_signed(cluster: &str, prev: &str, table: &PhonemeTable) -> String {
    let mut parts = cluster.chars();
    let (Some(base), Some(sign_char)) = (parts.next(), parts.next()) else {
        return cluster.to_string();
    };
    let Some(sign) = VowelSign::from_char(sign_char) else {
        return cluster.to_string();
    };

    let prev_starts_with = |c: char| prev.chars().next() == Some(c);

    match sign {
        VowelSign::Aa => {
            // Long "aa" extends the inherent-vowel form, not the pure one.
            let key = base.to_string();
            format!("{}a", table.lookup_or_passthrough(&key))
        }
        VowelSign::I if base == 'ற' => "ri".to_string(),
        VowelSign::I => pure_consonant(base, table) + "i",
        VowelSign::Ii => pure_consonant(base, table) + "ee",
        VowelSign::U if base == 'ச' && !prev_starts_with('ச') => "su".to_string(),
        VowelSign::U if base == 'ற' => "ru".to_string(),
        VowelSign::U => pure_consonant(base, table) + "u",
        VowelSign::Uu => pure_consonant(base, table) + "oo",
        VowelSign::E => pure_consonant(base, table) + "e",
        VowelSign::Ee if base == 'ச' && prev.trim().is_empty() => "sae".to_string(),
        VowelSign::Ee => pure_consonant(base, table) + "ae",
        VowelSign::Ai => pure_consonant(base, table) + "ai",
        VowelSign::O => pure_consonant(base, table) + "o",
        VowelSign::Oo => pure_consonant(base, table) + "oa",
        VowelSign::Au => {
            // Known gap: no agreed romanization for the au sign. Pass the
            // cluster through rather than guess one.
            warn!(cluster, "unmapped au vowel sign");
            cluster.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_signed_clusters() {
        let table = PhonemeTable::global();
        assert_eq!(resolve_signed("பா", "", table), "paa");
        assert_eq!(resolve_signed("மா", "", table), "maa");
        assert_eq!(resolve_signed("கி", "", table), "ki");
        assert_eq!(resolve_signed("தி", "", table), "thi");
        assert_eq!(resolve_signed("மீ", "", table), "mee");
        assert_eq!(resolve_signed("மு", "", table), "mu");
        assert_eq!(resolve_signed("மூ", "", table), "moo");
        assert_eq!(resolve_signed("கொ", "", table), "ko");
        assert_eq!(resolve_signed("யோ", "", table), "yoa");
    }

    #[test]
    fn test_irregular_ra() {
        let table = PhonemeTable::global();
        assert_eq!(resolve_signed("றி", "", table), "ri");
        assert_eq!(resolve_signed("று", "ன்", table), "ru");
    }

    #[test]
    fn test_sa_overrides_depend_on_previous_cluster() {
        let table = PhonemeTable::global();
        // Word-initial ச irregulars.
        assert_eq!(resolve_signed("சு", "", table), "su");
        assert_eq!(resolve_signed("சே", "", table), "sae");
        assert_eq!(resolve_signed("சி", "", table), "chi");
        // After a ச-initial cluster the regular "ch" forms apply.
        assert_eq!(resolve_signed("சு", "ச்", table), "chu");
        assert_eq!(resolve_signed("சே", "ம்", table), "chae");
    }

    #[test]
    fn test_au_sign_passes_through() {
        let table = PhonemeTable::global();
        assert_eq!(resolve_signed("பௌ", "", table), "பௌ");
    }

    #[test]
    fn test_convert_words_starting_with_uyir() {
        assert_eq!(convert("அப்பா"), "appaa");
        assert_eq!(convert("அப்பம்"), "appam");
        assert_eq!(convert("அண்ணன்"), "annan");
        assert_eq!(convert("அக்கா"), "akkaa");
        assert_eq!(convert("ஆப்பம்"), "aappam");
        assert_eq!(convert("ஆமாம்"), "aamaam");
        assert_eq!(convert("இன்பம்"), "inpam");
        assert_eq!(convert("ஈசல்"), "eesal");
        assert_eq!(convert("ஈட்டி"), "eetti");
        assert_eq!(convert("ஈந்தார்"), "eenthaar");
        assert_eq!(convert("ஐயம்"), "aiyam");
        assert_eq!(convert("ஒன்று"), "onru");
        assert_eq!(convert("ஒற்றுமை"), "otrrumai");
    }

    #[test]
    fn test_convert_words_starting_with_mei() {
        assert_eq!(convert("பயம்"), "payam");
        assert_eq!(convert("மீட்டார்"), "meettaar");
        assert_eq!(convert("மீட்பு"), "meetpu");
        assert_eq!(convert("முதல"), "muthala");
        assert_eq!(convert("மூச்சு"), "moochchu");
        assert_eq!(convert("மூன்று"), "moonru");
        assert_eq!(convert("சின்னவன்"), "chinnavan");
        assert_eq!(convert("சீண்டல்"), "cheental");
        assert_eq!(convert("சுண்டல்"), "suntal");
    }

    #[test]
    fn test_convert_phrases() {
        assert_eq!(convert("அம்மா இங்கே வா வா"), "ammaa ingkae vaa vaa");
        assert_eq!(
            convert("அன்பு கூருவேன் இன்னும் அதிகமாய்"),
            "anpu kooruvaen innum athikamaay"
        );
        assert_eq!(
            convert("ஆண்டவர் படைத்த வெற்றியின் நாளிது"),
            "aantavar pataiththa vetrriyin naalithu"
        );
        assert_eq!(
            convert("சேற்றிலிருந்து தூக்கினார்"),
            "saetrrilirunthu thookkinaar"
        );
    }

    #[test]
    fn test_convert_loanword_exceptions() {
        assert_eq!(convert("இயேசு கிறிஸ்துவே ஆண்டவர்"), "yaesu kiristhuvae aantavar");
        assert_eq!(convert("இரத்தம் ஜெயம்"), "raththam jeyam");
    }

    #[test]
    fn test_non_tamil_passes_through() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("hello, world! 42"), "hello, world! 42");
        assert_eq!(convert("10. "), "10. ");
    }

    #[test]
    fn test_second_pass_is_noop() {
        // The output alphabet is disjoint from the input script, so
        // re-converting the Latin output must change nothing.
        for word in ["அப்பா", "ஒன்று", "சேற்றிலிருந்து தூக்கினார்"] {
            let once = convert(word);
            assert_eq!(convert(&once), once);
        }
    }
}
