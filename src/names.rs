/// Generational suffixes dropped before comparing names, lowercase.
const SUFFIXES: [&str; 4] = ["jr.", "sr.", "iii", "ii"];

/// Canonical form of a person (or team) name for identity comparison.
///
/// Collapses whitespace, drops `Jr.`/`Sr.`/`III`/`II` when they follow the
/// first token, and lowercases. Idempotent.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, token) in name.split_whitespace().enumerate() {
        let lower = token.to_lowercase();
        if i > 0 && SUFFIXES.contains(&lower.as_str()) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&lower);
    }
    out
}

/// True when both names normalize to the same string.
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
