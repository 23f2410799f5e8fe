/*
[INPUT]:  Optional query parameters in declaration order
[OUTPUT]: URL path with the present parameters appended
[POS]:    HTTP layer - query-string assembly
[UPDATE]: When query encoding requirements change
*/

/// Appends the present, non-empty parameters to `url` in order; the first
/// one is introduced with `?`, the rest joined with `&`.
pub(crate) fn append_query_parameters(url: &mut String, params: &[(&str, Option<String>)]) {
    for (key, value) in params {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
}
