//! "Back to results" link for the detail page.

use crate::models::SearchQuery;

/// `/organizations?page=<page>[&keyword=..][&location=..][&radius=..]#<id>`
///
/// `page` is always present, even when empty. The other parameters are
/// left out entirely when blank. Values are percent-encoded.
pub fn search_results_url(id: &str, query: &SearchQuery) -> String {
    let page = query.page().unwrap_or("");
    let mut url = format!("/organizations?page={}", urlencoding::encode(page));

    for (name, value) in [
        ("keyword", query.keyword()),
        ("location", query.location()),
        ("radius", query.radius()),
    ] {
        if let Some(value) = value {
            url.push_str(&format!("&{}={}", name, urlencoding::encode(value)));
        }
    }

    url.push('#');
    url.push_str(&urlencoding::encode(id));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(keyword: Option<&str>, location: Option<&str>, radius: Option<&str>, page: Option<&str>) -> SearchQuery {
        SearchQuery {
            keyword: keyword.map(str::to_string),
            location: location.map(str::to_string),
            radius: radius.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_all_fields() {
        let q = query(Some("food pantries"), Some("Redwood City, CA"), Some("5"), Some("2"));
        assert_eq!(
            search_results_url("abc123", &q),
            "/organizations?page=2&keyword=food%20pantries&location=Redwood%20City%2C%20CA&radius=5#abc123"
        );
    }

    #[test]
    fn test_page_always_present() {
        assert_eq!(
            search_results_url("abc123", &SearchQuery::default()),
            "/organizations?page=#abc123"
        );
        let q = query(Some("food"), None, None, Some("  "));
        assert_eq!(search_results_url("x", &q), "/organizations?page=&keyword=food#x");
    }

    #[test]
    fn test_blank_fields_omitted() {
        let q = query(Some(""), Some("94063"), Some("   "), Some("1"));
        let url = search_results_url("id1", &q);
        assert_eq!(url, "/organizations?page=1&location=94063#id1");
        assert!(!url.contains("keyword="));
        assert!(!url.contains("radius="));
    }

    #[test]
    fn test_special_characters_encoded() {
        let q = query(Some("addiction & recovery"), None, None, None);
        assert_eq!(
            search_results_url("id1", &q),
            "/organizations?page=&keyword=addiction%20%26%20recovery#id1"
        );
    }
}
