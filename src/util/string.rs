/// Escape text for use inside markup, attribute values included
pub fn escape_html(s: &str) -> String {
    s.chars().fold(
        String::with_capacity(s.len()),
            |mut acc, chr| {
                match chr {
                    '&' => acc.push_str("&amp;"),
                    '<' => acc.push_str("&lt;"),
                    '>' => acc.push_str("&gt;"),
                    '"' => acc.push_str("&quot;"),
                    '\'' => acc.push_str("&#39;"),
                    c => acc.push(c),
                }
                acc
            })
}

/// Split off the first whitespace delimited word. The remainder
/// keeps its inner whitespace, only the single separating
/// character is consumed.
pub fn split_head<'a>(s: &'a str) -> (&'a str, Option<&'a str>) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => {
            let sep = s[i..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
            (&s[..i], Some(&s[i + sep..]))
        },
        None => (s, None),
    }
}

pub fn check_contents_with<'a, P>(s: &'a str, predicate: P) -> bool
where
    P: Fn(char) -> bool
{
    for c in s.chars() {
        if !(predicate)(c) { return false }
    }
    true
}
