//! Presence checks and text helpers.

/// True when the value is absent, empty, or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// The value itself when it is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !is_blank(Some(*s)))
}

/// Make serialized JSON safe to place inside an inline `<script>` element.
pub fn json_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
