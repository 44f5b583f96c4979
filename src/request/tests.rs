// ═══════════════════════════════════════════════════════════════════════
// Copy-on-write semantics
// ═══════════════════════════════════════════════════════════════════════
mod cow_request_tests {
    use crate::cow_value::CowValue;
    use crate::error::RequestError;
    use crate::headers;
    use crate::request::{HeaderMap, HttpRequest};

    fn make_request(path: &str) -> HttpRequest {
        HttpRequest::new(path, HeaderMap::new())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Sharing before divergence
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_copy_shares_storage() {
        let r1 = make_request("/home");
        let r2 = r1.clone();

        assert!(r1.shares_storage_with(&r2));
        assert_eq!(r1.clone_count(), 0);
        assert_eq!(r2.clone_count(), 0);
    }

    #[test]
    fn test_sharing_composes_transitively() {
        let r1 = make_request("/home");
        let r2 = r1.clone();
        let r3 = r2.clone();

        assert!(r1.shares_storage_with(&r2));
        assert!(r2.shares_storage_with(&r3));
        assert!(r1.shares_storage_with(&r3));
    }

    #[test]
    fn test_copy_of_a_clone_shares_the_clone() {
        let r1 = make_request("/home");
        let mut r2 = r1.clone();
        r2.set_path("/users"); // r2 diverges onto a fresh allocation

        let r3 = r2.clone();
        assert!(r2.shares_storage_with(&r3));
        assert!(!r1.shares_storage_with(&r2));
        assert!(!r1.shares_storage_with(&r3));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Value independence
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_write_through_copy_leaves_original_untouched() {
        let r1 = make_request("/home");
        let mut r2 = r1.clone();

        r2.set_path("/users");

        assert_eq!(r1.path(), "/home");
        assert_eq!(r2.path(), "/users");
        assert!(!r1.shares_storage_with(&r2));
    }

    #[test]
    fn test_header_write_is_private_to_the_writer() {
        let r1 = HttpRequest::new("/home", headers! { "Host" => "example.com" });
        let mut r2 = r1.clone();

        r2.set_header("Accept", "application/json");

        assert_eq!(r1.header("Accept"), None);
        assert_eq!(r2.header("Accept"), Some("application/json"));
        assert_eq!(r1.header("Host"), Some("example.com"));
        assert_eq!(r2.header("Host"), Some("example.com"));
    }

    #[test]
    fn test_divergence_is_structural_not_value_based() {
        let r1 = make_request("/home");
        let mut r2 = r1.clone();
        let mut r3 = r1.clone();

        // Both copies write the same value; equal fields, distinct records.
        r2.set_path("/same");
        r3.set_path("/same");

        assert_eq!(r2.path(), r3.path());
        assert!(!r2.shares_storage_with(&r3));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clone counting
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_no_clone_on_unique_writes() {
        let mut r = make_request("/home");
        for i in 0..10 {
            r.set_path(format!("/page/{i}"));
        }
        assert_eq!(r.clone_count(), 0);
    }

    #[test]
    fn test_exactly_one_clone_per_divergent_write() {
        let r1 = make_request("/home");
        let mut r2 = r1.clone();

        r2.set_path("/users");
        assert_eq!(r2.clone_count(), 1);

        // r2 is now unique; further writes stay in place.
        r2.set_path("/users/42");
        r2.set_header("Host", "example.com");
        assert_eq!(r2.clone_count(), 1);
    }

    /// The full scenario from the original exploration: two rounds of
    /// copy-then-write, each diverging exactly once.
    #[test]
    fn test_copy_write_scenario() {
        let mut r1 = HttpRequest::new("/home", HeaderMap::new());
        let mut r2 = r1.clone();

        r2.set_path("/users");
        assert_eq!(r1.path(), "/home");
        assert_eq!(r2.path(), "/users");
        assert_eq!(r1.clone_count(), 1);

        let r3 = r1.clone();
        r1.set_path("/test");

        assert_eq!(r2.path(), "/users");
        assert_eq!(r3.path(), "/home");
        assert_eq!(r1.path(), "/test");
        assert_eq!(r1.clone_count(), 2);
    }

    /// Five header writes after one copy: only the first should clone.
    #[test]
    fn test_repeated_writes_clone_once() {
        let mut r4 = HttpRequest::new("/home", HeaderMap::new());
        let copy = r4.clone();
        assert_eq!(r4.clone_count(), 0);

        for x in 0..5 {
            r4.set_header(format!("X-Request-{x}"), x.to_string());
        }

        assert_eq!(r4.clone_count(), 1);
        assert!(copy.headers().is_empty());
        assert_eq!(r4.headers().len(), 5);
    }

    #[test]
    fn test_remove_header_diverges_shared_storage() {
        let r1 = HttpRequest::new("/home", headers! { "Host" => "example.com" });
        let mut r2 = r1.clone();

        assert_eq!(r2.remove_header("Host"), Some("example.com".into()));
        assert_eq!(r1.header("Host"), Some("example.com"));
        assert_eq!(r2.header("Host"), None);
        assert_eq!(r2.clone_count(), 1);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Generic CowValue
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_cow_value_sharing_and_divergence() {
        let v1 = CowValue::new(vec![1, 2, 3]);
        let mut v2 = v1.clone();
        let v3 = v2.clone();

        assert!(v1.ptr_eq(&v2));
        assert!(v1.ptr_eq(&v3));
        assert!(!v1.is_unique());

        v2.to_mut().push(4);

        assert_eq!(*v1.get(), vec![1, 2, 3]);
        assert_eq!(*v2.get(), vec![1, 2, 3, 4]);
        assert!(!v1.ptr_eq(&v2));
        assert!(v2.is_unique());
        assert_eq!(v2.clone_count(), 1);
    }

    #[test]
    fn test_cow_value_unique_from_birth() {
        let mut v = CowValue::new(String::from("a"));
        assert!(v.is_unique());
        for _ in 0..5 {
            v.to_mut().push('b');
        }
        assert_eq!(v.clone_count(), 0);
        assert_eq!(v.get(), "abbbbb");
    }

    #[test]
    fn test_cow_value_uniqueness_is_queried_live() {
        let mut v1 = CowValue::new(1u32);
        let v2 = v1.clone();
        assert!(!v1.is_unique());

        drop(v2); // last other referencer gone → unique again, no clone needed
        assert!(v1.is_unique());
        *v1.to_mut() = 2;
        assert_eq!(v1.clone_count(), 0);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // JSON interchange
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_from_json_roundtrip() {
        let req = HttpRequest::from_json(
            r#"{"path": "/home", "headers": {"Host": "example.com"}}"#,
        )
        .unwrap();
        assert_eq!(req.path(), "/home");
        assert_eq!(req.header("Host"), Some("example.com"));

        let json = req.to_json();
        let back = HttpRequest::from_json(&json).unwrap();
        assert_eq!(back.path(), "/home");
        assert_eq!(back.header("Host"), Some("example.com"));
    }

    #[test]
    fn test_from_json_headers_optional() {
        let req = HttpRequest::from_json(r#"{"path": "/home"}"#).unwrap();
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            HttpRequest::from_json("[1, 2]"),
            Err(RequestError::NotAnObject)
        ));
        assert!(matches!(
            HttpRequest::from_json(r#"{"headers": {}}"#),
            Err(RequestError::MissingPath)
        ));
        assert!(matches!(
            HttpRequest::from_json(r#"{"path": "/x", "headers": {"a": 1}}"#),
            Err(RequestError::BadHeaders)
        ));
        assert!(matches!(
            HttpRequest::from_json("not json"),
            Err(RequestError::Json(_))
        ));
    }

    #[test]
    fn test_headers_macro() {
        let map = headers! {
            "Host" => "example.com",
            "Accept" => "*/*",
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Accept").map(|v| v.as_str()), Some("*/*"));
        assert!(headers! {}.is_empty());
    }
}
