use unicode_segmentation::UnicodeSegmentation;

/// Suffix that request titles carry in the source data, e.g. `"Meal delivery needed"`
const NEEDED_SUFFIX: &str = " needed";

/// Normalize an identifier-style label into a lowercase, space-separated phrase
///
/// Every uppercase letter starts a new word; any non-alphanumeric character
/// also separates words.
///
/// ```
/// use volunteer_match::core::text::normalize;
///
/// assert_eq!(normalize("MealDelivery"), "meal delivery");
/// assert_eq!(normalize("cooking"), "cooking");
/// ```
pub fn normalize(label: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in label.chars() {
        if !ch.is_alphanumeric() {
            flush_word(&mut current, &mut words);
            continue;
        }
        if ch.is_uppercase() {
            flush_word(&mut current, &mut words);
        }
        current.extend(ch.to_lowercase());
    }
    flush_word(&mut current, &mut words);

    words.join(" ")
}

#[inline]
fn flush_word(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Remove a trailing `" needed"` from a request title
pub fn strip_needed_suffix(title: &str) -> &str {
    title.strip_suffix(NEEDED_SUFFIX).unwrap_or(title)
}

/// Split text into lowercase words, dropping punctuation
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words().map(str::to_lowercase)
}
