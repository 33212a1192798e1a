// Data-access layer: one module per aggregate root implementing
// get/list/create/update/delete plus child-collection operations as
// `impl Database` blocks, and the shared association resolver.

pub mod accommodation;
pub mod culinary;
pub mod destination;
pub mod lookup;
pub mod photo_spot;
pub mod review;
pub mod transport_route;

/// Builds a `%term%` LIKE pattern with `%`, `_` and `\` escaped, for use
/// with `LIKE ? ESCAPE '\'`. Substring search is case-insensitive: SQLite
/// LIKE ignores ASCII case by default, and that is the documented contract
/// for every resource.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("pantai"), "%pantai%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
