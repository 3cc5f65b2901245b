//! Tests for status codes, classes and identifiers.

#[cfg(test)]
mod tests {
    use crate::status::{class_of, codes, is_client_error, is_error, is_server_error, reason_phrase, to_identifier};

    #[test]
    fn test_class_of_error_codes() {
        for code in codes().filter(|c| is_error(*c)) {
            let expected = if (400..500).contains(&code) { 400 } else { 500 };
            assert_eq!(class_of(code), expected, "class of {code}");
        }
    }

    #[test]
    fn test_class_of_uses_leading_digit() {
        assert_eq!(class_of(200), 200);
        assert_eq!(class_of(399), 300);
        assert_eq!(class_of(700), 700);
        assert_eq!(class_of(1000), 100);
        assert_eq!(class_of(7), 700);
        assert_eq!(class_of(0), 0);
    }

    #[test]
    fn test_error_ranges() {
        assert!(is_client_error(400));
        assert!(is_client_error(499));
        assert!(!is_client_error(500));
        assert!(is_server_error(500));
        assert!(is_server_error(599));
        assert!(!is_server_error(600));
        assert!(!is_error(399));
    }

    #[test]
    fn test_reason_phrase_lookup() {
        assert_eq!(reason_phrase(200), Some("OK"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(418), Some("I'm a Teapot"));
        assert_eq!(reason_phrase(511), Some("Network Authentication Required"));
        assert_eq!(reason_phrase(306), None);
        assert_eq!(reason_phrase(599), None);
    }

    #[test]
    fn test_codes_are_sorted_and_unique() {
        let all: Vec<u16> = codes().collect();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert!(all.iter().all(|c| reason_phrase(*c).is_some()));
    }

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("Not Found"), "NotFound");
        assert_eq!(to_identifier("Internal Server Error"), "InternalServerError");
        assert_eq!(to_identifier("Non-Authoritative Information"), "NonAuthoritativeInformation");
        assert_eq!(to_identifier("HTTP Version Not Supported"), "HTTPVersionNotSupported");
        assert_eq!(to_identifier("I'm a Teapot"), "ImATeapot");
        assert_eq!(to_identifier("Unavailable For Legal Reasons"), "UnavailableForLegalReasons");
    }

    #[test]
    fn test_to_identifier_odd_input() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("  double  space "), "DoubleSpace");
        assert_eq!(to_identifier("snake_case word"), "Snake_caseWord");
    }
}
