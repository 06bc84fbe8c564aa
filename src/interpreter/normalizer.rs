/// Display glyphs and the canonical symbols they stand for.
const REPLACEMENTS: &[(char, &str)] = &[('×', "*"), ('÷', "/"), ('^', "**")];

/// Rewrites calculator display glyphs into canonical grammar symbols.
///
/// `×` becomes `*`, `÷` becomes `/` and `^` becomes `**`. Every other
/// character is copied unchanged; this function never fails and knows nothing
/// about whether the result is a valid expression.
///
/// # Example
/// ```
/// use safecalc::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("6 × 7 ÷ 2^3"), "6 * 7 / 2**3");
/// ```
#[must_use]
pub fn normalize(source: &str) -> String {
    let mut normalized = String::with_capacity(source.len() + 1);

    for ch in source.chars() {
        match REPLACEMENTS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, symbol)) => normalized.push_str(symbol),
            None => normalized.push(ch),
        }
    }

    normalized
}
