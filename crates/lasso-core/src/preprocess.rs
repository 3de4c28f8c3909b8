use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to recognized text before it reaches the panel,
/// clipboard or a search query.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC); OCR output is full of compatibility
        // forms (fullwidth digits, ligatures).
        let text: String = text.nfkc().collect();

        // Collapse runs of whitespace inside a line, keep line breaks.
        text.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_inner_whitespace() {
        let out = DefaultPreprocessor.process("  hello   world \n\n second  line ");
        assert_eq!(out, "hello world\nsecond line");
    }

    #[test]
    fn normalizes_fullwidth_forms() {
        let out = DefaultPreprocessor.process("ＡＢＣ　１２３");
        assert_eq!(out, "ABC 123");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }
}
