// src/extract/keywords.rs
// =============================================================================
// Keyword search over a page's text.
//
// Matching is a plain, case-sensitive substring test. Bangla is often written
// without spaces between joined words, so "আমাদের" must be found inside
// "আমাদেরসফটওয়্যার" too. No tokenizing, no word boundaries.
// =============================================================================

// Returns the target words that occur in `text`, in the same order as `words`
pub fn search<'w>(text: &str, words: &'w [String]) -> Vec<&'w str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty() && text.contains(word))
        .collect()
}
