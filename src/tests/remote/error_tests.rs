    use super::*;

    use reqwest::StatusCode;

    fn body(msg: &str, code: &str) -> Vec<u8> {
        serde_json::json!({"error": msg, "code": code})
            .to_string()
            .into_bytes()
    }

    #[test]
    fn code_field_wins_over_status() {
        // A tagged conflict arriving under a generic status still classifies.
        let err = map_failure(
            StatusCode::BAD_REQUEST,
            &body("category \"Movies\" already exists", "conflict"),
            "create category",
        );
        assert!(matches!(err, CatalogError::Conflict(_)), "{}", err);

        let err = map_failure(
            StatusCode::BAD_REQUEST,
            &body("selection cancelled", "cancelled"),
            "create folder source",
        );
        assert!(matches!(err, CatalogError::Cancelled), "{}", err);
    }

    #[test]
    fn tagged_codes_map_to_the_taxonomy() {
        let err = map_failure(
            StatusCode::NOT_FOUND,
            &body("category 7 not found", "not_found"),
            "get category",
        );
        match err {
            CatalogError::NotFound(msg) => assert!(msg.contains("category 7"), "{}", msg),
            other => panic!("expected NotFound, got {}", other),
        }

        let err = map_failure(
            StatusCode::BAD_REQUEST,
            &body("category name is required", "invalid_argument"),
            "create category",
        );
        assert!(matches!(err, CatalogError::InvalidArgument(_)), "{}", err);
    }

    #[test]
    fn bare_statuses_fall_back_to_the_obvious_mapping() {
        let err = map_failure(StatusCode::NOT_FOUND, b"", "get category");
        assert!(matches!(err, CatalogError::NotFound(_)), "{}", err);

        let err = map_failure(StatusCode::BAD_REQUEST, b"not json", "create category");
        assert!(matches!(err, CatalogError::InvalidArgument(_)), "{}", err);

        let err = map_failure(StatusCode::CONFLICT, b"", "start server");
        assert!(matches!(err, CatalogError::Conflict(_)), "{}", err);
    }

    #[test]
    fn unrecognized_failures_stay_unknown() {
        let err = map_failure(StatusCode::INTERNAL_SERVER_ERROR, b"", "list categories");
        assert!(matches!(err, CatalogError::Unknown(_)), "{}", err);

        let err = map_failure(
            StatusCode::UNAUTHORIZED,
            &body("unauthorized", "unauthorized"),
            "list categories",
        );
        assert!(matches!(err, CatalogError::Unknown(_)), "{}", err);
    }
