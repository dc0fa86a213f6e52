use tracing::trace;

use crate::script::is_combining_sign;

/// Split a line into grapheme clusters: a base codepoint plus at most one
/// trailing combining sign (dependent-vowel sign or pulli).
///
/// Concatenating the clusters reproduces the input, except that a combining
/// sign with no preceding base is dropped. Non-Tamil codepoints (spaces,
/// digits, punctuation, Latin) come out as ordinary single-codepoint
/// clusters.
pub fn split_clusters(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut clusters = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match chars.get(i + 1) {
            Some(&sign) if is_combining_sign(sign) => {
                let mut cluster = String::with_capacity(ch.len_utf8() + sign.len_utf8());
                cluster.push(ch);
                cluster.push(sign);
                clusters.push(cluster);
                i += 2;
            }
            _ if is_combining_sign(ch) => {
                // A dangling sign with no base to attach to.
                trace!(sign = %ch, "dropping orphan combining sign");
                i += 1;
            }
            _ => {
                clusters.push(ch.to_string());
                i += 1;
            }
        }
    }

    clusters
}

/// Lexical exceptions applied after splitting. Closed list, currently one
/// rule: a leading independent இ is silent before a "யே" or "ர" onset
/// (இயேசு "Iyesu" is pronounced "Yesu"). Sequences shorter than three
/// clusters are returned unmodified.
pub fn trim_clusters(mut clusters: Vec<String>) -> Vec<String> {
    if clusters.len() > 2 && clusters[0] == "இ" && matches!(clusters[1].as_str(), "யே" | "ர")
    {
        trace!("dropping silent leading இ");
        clusters.remove(0);
    }
    clusters
}
