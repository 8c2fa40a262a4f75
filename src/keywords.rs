//! Brand keyword conventions shared by the content and SEO linters.
//!
//! Every documentation page must mention the product by one of its two
//! accepted spellings. Matching is substring-based over case-folded text.
//!
//! # Example
//!
//! ```
//! use doclint::keywords::contains_any_variant;
//!
//! assert!(contains_any_variant("getting started with spec-kit"));
//! assert!(!contains_any_variant("getting started"));
//! ```

/// Both accepted spellings of the product keyword.
pub const KEYWORD_VARIANTS: [&str; 2] = ["speckit", "spec-kit"];

/// Whether already case-folded `text` contains at least one keyword variant.
pub fn contains_any_variant(text: &str) -> bool {
    KEYWORD_VARIANTS.iter().any(|variant| text.contains(variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_either_variant() {
        assert!(contains_any_variant("speckit rocks"));
        assert!(contains_any_variant("the spec-kit handbook"));
    }

    #[test]
    fn variants_are_distinct_substrings() {
        // The hyphenated spelling does not contain the compact one.
        assert!(!"spec-kit".contains("speckit"));
    }

    #[test]
    fn no_variant_no_match() {
        assert!(!contains_any_variant("generic documentation page"));
        assert!(!contains_any_variant(""));
    }
}
