    use super::*;

    #[test]
    fn parses_the_named_screens() {
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(Route::parse("home"), Ok(Route::Home));
        assert_eq!(Route::parse("/home/"), Ok(Route::Home));
        assert_eq!(Route::parse("settings"), Ok(Route::Settings));
    }

    #[test]
    fn parses_category_routes() {
        assert_eq!(Route::parse("category/7"), Ok(Route::Category(7)));
        assert_eq!(Route::parse("/category/42"), Ok(Route::Category(42)));
    }

    #[test]
    fn rejects_garbage_routes() {
        let err = Route::parse("category/x").unwrap_err();
        assert!(err.contains("invalid category id"), "{}", err);

        let err = Route::parse("movies").unwrap_err();
        assert!(err.contains("unknown route"), "{}", err);
    }

    #[test]
    fn display_round_trips() {
        for route in [Route::Home, Route::Settings, Route::Category(3)] {
            assert_eq!(Route::parse(&route.to_string()), Ok(route));
        }
    }
