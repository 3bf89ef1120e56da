//! Cache-busting suffix removal.

/// Strip the query string from an asset URL.
///
/// Splits on the first `?`: `http://host/style.css?rel=123` becomes
/// `http://host/style.css`, and `http://host/??/style.css` becomes
/// `http://host/`. Input without `?` is returned unchanged.
#[inline]
pub fn normalize(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_query() {
        assert_eq!(
            normalize("http://localhost:8080/style.css?rel=123343"),
            "http://localhost:8080/style.css"
        );
        assert_eq!(normalize("http://host/style.css?rel=123"), "http://host/style.css");
    }

    #[test]
    fn test_without_query() {
        assert_eq!(normalize("/css/style.css"), "/css/style.css");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_multiple_question_marks_split_on_first() {
        assert_eq!(normalize("http://localhost.com/??/style.css"), "http://localhost.com/");
        assert_eq!(normalize("/a.css?x=1?y=2"), "/a.css");
        assert_eq!(normalize("?rel=1"), "");
    }
}
