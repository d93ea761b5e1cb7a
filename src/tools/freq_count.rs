use rustc_hash::FxHashMap;

/// Returns a frequency count of the chars in the input text. Every key present has a count of at least 1.
pub fn freqs(text: &str) -> FxHashMap<char, u32> {
    let mut freqs = FxHashMap::default();
    text.chars().for_each(|ch| *freqs.entry(ch).or_insert(0) += 1);
    freqs
}

#[test]
fn freqs_counts_each_char() {
    let freqs = freqs("aab");
    assert_eq!(freqs.len(), 2);
    assert_eq!(freqs[&'a'], 2);
    assert_eq!(freqs[&'b'], 1);
}

#[test]
fn freqs_empty_input() {
    assert!(freqs("").is_empty());
}

#[test]
fn freqs_multibyte_chars() {
    // Counted per char, not per byte
    let freqs = freqs("ééa");
    assert_eq!(freqs[&'é'], 2);
    assert_eq!(freqs[&'a'], 1);
    assert_eq!(freqs.values().sum::<u32>(), 3);
}
