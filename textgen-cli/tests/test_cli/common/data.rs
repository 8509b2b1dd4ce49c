/// Text snippet shared across integration tests.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog\n";

/// Count whitespace-delimited words the way `wc -w` does.
pub fn count_whitespace_words(data: &[u8]) -> u64 {
    data.split(|b| b.is_ascii_whitespace() || *b == 0x0b)
        .filter(|word| !word.is_empty())
        .count() as u64
}

/// Extract N from the `Word count: N` line printed by `wordcount`.
pub fn parse_word_count(stdout: &str) -> Option<u64> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Word count: "))
        .and_then(|count| count.parse().ok())
}
