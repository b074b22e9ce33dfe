//! Partial string similarity in [0, 100].

/// Best-aligned substring similarity between `a` and `b`.
///
/// Slides a window the char-length of the shorter string across the longer
/// one and keeps the best normalized Levenshtein score, rounded to an
/// integer percent. A shorter string that appears verbatim inside the
/// longer therefore scores 100 regardless of the length difference.
///
/// Case-sensitive: callers lowercase name inputs before comparing.
/// Symmetric and deterministic.
pub fn partial_similarity(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let pattern: String = short.iter().collect();
    let window = short.len();
    let mut best = 0.0f64;

    for start in 0..=(long.len() - window) {
        let candidate: String = long[start..start + window].iter().collect();
        let score = strsim::normalized_levenshtein(&pattern, &candidate);
        if score > best {
            best = score;
        }
        if best >= 1.0 {
            break;
        }
    }

    (best * 100.0).round() as u8
}
