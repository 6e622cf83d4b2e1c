/// Sanitizes user-supplied quiz text before it is stored.
///
/// Safe inline markup (<b>, <em>, <p>...) survives; <script>, <iframe> and
/// event-handler attributes are stripped. Surrounding whitespace is trimmed.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input).trim().to_string()
}

/// Like `clean_html`, but maps text that sanitizes to nothing to `None`.
pub fn clean_optional(input: Option<String>) -> Option<String> {
    input.map(|text| clean_html(&text)).filter(|text| !text.is_empty())
}
