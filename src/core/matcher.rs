// src/core/matcher.rs

/// Byte offset of the first ASCII case-insensitive occurrence of `keyword`
pub fn find_keyword(message: &str, keyword: &str) -> Option<usize> {
    let haystack = message.as_bytes();
    let needle = keyword.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
