use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup-query preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC): full-width latin, half-width kana,
        // compatibility ideographs
        text.nfkc().collect::<String>().trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
