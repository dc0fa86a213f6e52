use std::collections::HashMap;
use std::sync::OnceLock;

/// Cluster → phoneme mappings, in three groups: uyir (independent vowels),
/// mei (pulli-terminated pure consonants, grantha letters included) and
/// uyirmei (consonant with its inherent "a").
///
/// Romanizations follow pronunciation rather than ISO 15919, so ஈ is "ee"
/// and ஏ is "ae".
static MAPPINGS: &[(&str, &str)] = &[
    // uyir
    ("அ", "a"),
    ("ஆ", "aa"),
    ("இ", "i"),
    ("ஈ", "ee"),
    ("உ", "u"),
    ("ஊ", "oo"),
    ("எ", "e"),
    ("ஏ", "ae"),
    ("ஐ", "ai"),
    ("ஒ", "o"),
    ("ஓ", "oa"),
    // mei
    ("க்", "k"),
    ("ங்", "ng"),
    ("ச்", "ch"),
    ("ஜ்", "j"),
    ("ஞ்", "nj"),
    ("ட்", "t"),
    ("ண்", "n"),
    ("த்", "th"),
    ("ந்", "n"),
    ("ன்", "n"),
    ("ப்", "p"),
    ("ம்", "m"),
    ("ய்", "y"),
    ("ர்", "r"),
    ("ற்", "tr"),
    ("ல்", "l"),
    ("ள்", "l"),
    ("ழ்", "zh"),
    ("வ்", "v"),
    ("ஷ்", "sh"),
    ("ஸ்", "s"),
    // uyirmei
    ("க", "ka"),
    ("ங", "nga"),
    ("ச", "sa"),
    ("ஞ", "nya"),
    ("ட", "ta"),
    ("ண", "na"),
    ("த", "tha"),
    ("ந", "na"),
    ("ன", "na"),
    ("ப", "pa"),
    ("ம", "ma"),
    ("ய", "ya"),
    ("ர", "ra"),
    ("ற", "ra"),
    ("ல", "la"),
    ("ள", "la"),
    ("ழ", "zha"),
    ("வ", "va"),
    ("ஷ", "sha"),
    ("ஸ", "sa"),
    ("ஜ", "ja"),
];

/// Immutable cluster-string → phoneme table, built once per process.
pub struct PhonemeTable {
    map: HashMap<&'static str, &'static str>,
}

impl PhonemeTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhonemeTable {
        static INSTANCE: OnceLock<PhonemeTable> = OnceLock::new();
        INSTANCE.get_or_init(|| PhonemeTable {
            map: MAPPINGS.iter().copied().collect(),
        })
    }

    /// Exact-match lookup; no case folding, no normalization.
    pub fn lookup(&self, cluster: &str) -> Option<&'static str> {
        self.map.get(cluster).copied()
    }

    /// Unmapped clusters pass through unchanged so Latin text, digits and
    /// punctuation survive a conversion pass untouched.
    pub fn lookup_or_passthrough<'a>(&self, cluster: &'a str) -> &'a str {
        self.lookup(cluster).unwrap_or(cluster)
    }
}
