use lazy_static::lazy_static;
use regex::Regex;

/// Lowercases `title` and joins its alphanumeric runs with single dashes.
pub fn to_slug(title: &str) -> String {
    lazy_static! {
        static ref NON_WORD_RE: Regex = Regex::new(r"[^a-z\d\s-]").unwrap();
        static ref SEPARATOR_RE: Regex = Regex::new(r"[\s-]+").unwrap();
    }
    let lowered = title.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, " ");
    SEPARATOR_RE
        .replace_all(cleaned.trim(), "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod slug_tests {
    use super::to_slug;

    #[test]
    fn lowercases_and_dashes_words() {
        assert_eq!(to_slug("Lorem"), "lorem");
        assert_eq!(to_slug("Spring Boot is cool"), "spring-boot-is-cool");
    }

    #[test]
    fn collapses_punctuation_and_newlines() {
        assert_eq!(to_slug("Hello,  World!\nAgain"), "hello-world-again");
        assert_eq!(to_slug("--a -- b--"), "a-b");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(to_slug("Rust 2024 Edition"), "rust-2024-edition");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(to_slug("!!!"), "");
        assert_eq!(to_slug(""), "");
    }
}
