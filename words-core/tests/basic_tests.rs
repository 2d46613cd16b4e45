//! Basic tests for words-core

use words_core::*;

fn extract(input: &str, options: &[ExtractOption]) -> Vec<String> {
    Extractor::new(ExtractorConfig::with_options(options)).extract(input)
}

#[test]
fn test_camel_case_split() {
    assert_eq!(extract("YAMLParser", &[]), vec!["YAML", "Parser"]);
    assert_eq!(extract("aeiouAreVowels", &[]), vec!["aeiou", "Are", "Vowels"]);
    assert_eq!(extract("XmlHTTP", &[]), vec!["Xml", "HTTP"]);
}

#[test]
fn test_digit_letter_boundary() {
    assert_eq!(extract("Win2000", &[]), vec!["Win", "2000"]);
    assert_eq!(
        extract("Apple Iphone 12 Pro Max", &[]),
        vec!["Apple", "Iphone", "12", "Pro", "Max"]
    );
}

#[test]
fn test_constant_case() {
    assert_eq!(
        extract("SOME_CONSTANT_STRING_REPRESENTATION", &[]),
        vec!["SOME", "CONSTANT", "STRING", "REPRESENTATION"]
    );
}

#[test]
fn test_default_strips_punctuation_and_spaces() {
    assert_eq!(
        extract("joe, johnathan & john", &[]),
        vec!["joe", "johnathan", "john"]
    );
    assert_eq!(
        extract("a small-town family-owned business", &[]),
        vec!["a", "small", "town", "family", "owned", "business"]
    );
}

#[test]
fn test_hyphenated_words() {
    let options = [ExtractOption::AllowHyphenatedWords];
    assert_eq!(
        extract("a small-sized, dog-friendly, vacation home", &options),
        vec!["a", "small-sized", "dog-friendly", "vacation", "home"]
    );
    assert_eq!(
        extract("a family-SIZED meal", &options),
        vec!["a", "family", "SIZED", "meal"]
    );
}

#[test]
fn test_hyphens_without_letters_collapse() {
    let options = [ExtractOption::AllowHyphenatedWords];
    assert!(extract("----------------", &options).is_empty());
    assert_eq!(extract("----------a-b------------", &options), vec!["a-b"]);
}

#[test]
fn test_include_spaces_keeps_grouping() {
    let options = [ExtractOption::IncludeSpaces];
    assert_eq!(
        extract("So   many   spaces", &options),
        vec!["So", "   ", "many", "   ", "spaces"]
    );
    assert_eq!(extract("the  moon", &options), vec!["the", "  ", "moon"]);
}

#[test]
fn test_include_symbols() {
    let options = [ExtractOption::IncludeSymbols];
    assert_eq!(extract("beer>food", &options), vec!["beer", ">", "food"]);
    assert_eq!(extract("beer>food", &[]), vec!["beer", "food"]);
}

#[test]
fn test_include_punctuation() {
    let options = [ExtractOption::IncludePunctuation];
    assert_eq!(
        extract("a.nested_path", &options),
        vec!["a", ".", "nested", "_", "path"]
    );
}

#[test]
fn test_ignored_runes_glue() {
    let options = [ExtractOption::ignored_runes(['.'])];
    assert_eq!(
        extract("Etc. and so on", &options),
        vec!["Etc.", "and", "so", "on"]
    );
}

#[test]
fn test_ignored_rune_kinds_glue() {
    let options = [ExtractOption::ignored_rune_kinds([RuneKind::Digit])];
    assert_eq!(extract("mp3 player", &options), vec!["mp3", "player"]);
    assert_eq!(extract("Win2000", &options), vec!["Win2000"]);
}

#[test]
fn test_only_excluded_input_is_empty() {
    assert!(extract("", &[]).is_empty());
    assert!(extract("   \t\n", &[]).is_empty());
    assert!(extract("!?,.;:", &[]).is_empty());
    assert!(extract("+-*/=<>", &[]).is_empty());
}

#[test]
fn test_no_option_list_matches_default() {
    let input = "The HTTPServer answered 404, twice.";
    assert_eq!(extract(input, &[]), Extractor::default().extract(input));
}

#[test]
fn test_malformed_bytes_pass_through() {
    let input: &[u8] = &[b'o', b'k', 0xC3, 0x28, b'A', b'b'];
    let words = Extractor::default().extract_bytes(input);
    assert_eq!(words.len(), 1);
    assert_eq!(&*words[0], input);
}

#[test]
fn test_multibyte_text() {
    assert_eq!(extract("ÆbleGrød", &[]), vec!["Æble", "Grød"]);
    assert_eq!(extract("ΑθήναΠόλη", &[]), vec!["Αθήνα", "Πόλη"]);
}
