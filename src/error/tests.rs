//! Tests for error classes, the class table and recognition.

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use serde_json::json;

    use crate::error::{classes, is_http_error, recognizes, Category, ClassKey, HttpError, StatusError};
    use crate::status::{codes, is_error, reason_phrase, to_identifier};

    #[test]
    fn test_every_error_code_has_a_class() {
        for code in codes().filter(|c| is_error(*c)) {
            let class = classes().get(code).unwrap();
            let identifier = to_identifier(reason_phrase(code).unwrap());
            assert_eq!(class.status(), code);
            assert_eq!(class.identifier(), identifier);
            assert_eq!(classes().by_name(&identifier).unwrap().status(), code);

            let err = class.new_error();
            assert_eq!(err.message(), reason_phrase(code).unwrap());
            assert_eq!(err.status(), code);
            assert_eq!(err.status_code(), code);
        }
    }

    #[test]
    fn test_non_error_codes_have_no_class() {
        assert!(classes().get(200).is_none());
        assert!(classes().get(302).is_none());
        assert!(classes().get(100).is_none());
        assert!(classes().by_name("OK").is_none());
        assert!(classes().by_name("MovedPermanently").is_none());
        assert_eq!(classes().len(), codes().filter(|c| is_error(*c)).count());
        assert!(!classes().is_empty());
    }

    #[test]
    fn test_class_names_end_in_error() {
        for class in classes().iter() {
            assert!(class.name().ends_with("Error"), "{}", class.name());
            assert!(!class.name().ends_with("ErrorError"), "{}", class.name());
        }
        assert_eq!(classes().get(404).unwrap().name(), "NotFoundError");
        assert_eq!(classes().get(500).unwrap().name(), "InternalServerError");
        assert_eq!(classes().get(418).unwrap().name(), "ImATeapotError");
        assert_eq!(classes().get(505).unwrap().name(), "HTTPVersionNotSupportedError");
    }

    #[test]
    fn test_class_categories() {
        let bad_request = classes().get(400).unwrap();
        assert_eq!(bad_request.category(), Category::Client);
        assert!(bad_request.new_error().expose());

        let bad_gateway = classes().get(502).unwrap();
        assert_eq!(bad_gateway.category(), Category::Server);
        assert!(!bad_gateway.new_error().expose());
    }

    #[test]
    fn test_lookup_by_either_key() {
        let by_code = classes().lookup(409u16).unwrap();
        let by_name = classes().lookup("Conflict").unwrap();
        assert!(std::ptr::eq(by_code, by_name));
        assert!(classes().lookup(ClassKey::Code(499)).is_none());
        assert!(classes().lookup(ClassKey::Name("NotFoundError")).is_none());
    }

    #[test]
    fn test_construct_with_message() {
        let class = classes().get(401).unwrap();
        let err = class.construct(Some("token expired".to_string()));
        assert_eq!(err.message(), "token expired");
        assert_eq!(err.to_string(), "token expired");
        assert_eq!(err.name(), "UnauthorizedError");
        assert!(err.is_instance_of(class));
        assert!(!err.is_instance_of(classes().get(403).unwrap()));
        assert!(err.source().is_none());
        assert!(err.props().is_empty());
    }

    #[test]
    fn test_status_error_trait() {
        let err = classes().get(429).unwrap().new_error();
        let dyn_err: &dyn StatusError = &err;
        assert_eq!(dyn_err.status(), 429);
        assert_eq!(dyn_err.status_code(), 429);
        assert!(dyn_err.expose());
        assert!(recognizes(dyn_err));
    }

    #[test]
    fn test_serialize_shape() {
        let err = classes().get(404).unwrap().new_error();
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "status": 404,
                "statusCode": 404,
                "message": "Not Found",
                "name": "NotFoundError",
                "expose": true,
            })
        );
        assert!(is_http_error(&value));
    }

    #[test]
    fn test_is_http_error_rejects_non_errors() {
        assert!(!is_http_error(&json!(null)));
        assert!(!is_http_error(&()));
        assert!(!is_http_error(&json!({})));
        assert!(!is_http_error(&json!({ "status": 404 })));
        assert!(!is_http_error(&"Not Found"));
        assert!(!is_http_error(&json!("Not Found")));
        assert!(!is_http_error(&404u16));
        assert!(!is_http_error(&std::io::Error::other("boom")));
    }

    #[test]
    fn test_is_http_error_structural() {
        assert!(is_http_error(&json!({ "expose": true, "status": 404, "statusCode": 404 })));
        assert!(is_http_error(&json!({ "expose": false, "status": 500, "statusCode": 500, "extra": 1 })));
        assert!(!is_http_error(&json!({ "expose": "yes", "status": 404, "statusCode": 404 })));
        assert!(!is_http_error(&json!({ "expose": true, "status": 404, "statusCode": 400 })));
        assert!(!is_http_error(&json!({ "expose": true, "status": "404", "statusCode": "404" })));
        assert!(!is_http_error(&json!({ "expose": true, "statusCode": 404 })));
    }

    #[test]
    fn test_is_http_error_compares_numbers_by_value() {
        assert!(is_http_error(&json!({ "expose": true, "status": 404.0, "statusCode": 404 })));
        assert!(is_http_error(&json!({ "expose": false, "status": 500, "statusCode": 500.0 })));
        assert!(!is_http_error(&json!({ "expose": true, "status": 404.5, "statusCode": 404 })));
    }

    #[derive(Debug)]
    struct SplitStatus;

    impl std::fmt::Display for SplitStatus {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("split status")
        }
    }

    impl std::error::Error for SplitStatus {}

    impl StatusError for SplitStatus {
        fn status(&self) -> u16 {
            404
        }

        fn status_code(&self) -> u16 {
            400
        }

        fn expose(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_recognizes_rejects_disagreeing_status_names() {
        assert!(!recognizes(&SplitStatus));
        assert!(recognizes(&classes().get(404).unwrap().new_error()));
    }

    #[test]
    fn test_is_http_error_accepts_instances() {
        let err: HttpError = classes().get(503).unwrap().new_error();
        assert!(is_http_error(&err));
        assert!(is_http_error(&Box::new(err)));
    }
}
