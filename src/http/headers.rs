/// Normalizes a header name to its canonical capitalization.
///
/// Each hyphen-separated segment gets an uppercase first letter and
/// lowercase remainder, so `content-TYPE`, `Content-type` and
/// `CONTENT-TYPE` all collapse to `Content-Type`. Both the request
/// parser and the response builder canonicalize at insertion, which is
/// what keeps header maps free of duplicate semantic keys.
pub fn canonical(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
