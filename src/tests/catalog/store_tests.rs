    use super::*;

    fn cat(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn folder(id: i64, category_id: i64, path: &str) -> Folder {
        Folder {
            id,
            category_id,
            path: path.to_string(),
        }
    }

    #[test]
    fn refresh_applies_in_resolve_order() {
        let mut store = CatalogStore::new();

        // Two refreshes resolve out of start order; whichever lands last wins.
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(1, "Movies")])));
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![
            cat(1, "Movies"),
            cat(2, "TV"),
        ])));

        assert_eq!(store.categories(), &[cat(1, "Movies"), cat(2, "TV")]);
        assert!(store.categories_error().is_none());
    }

    #[test]
    fn refresh_failure_keeps_last_good_list() {
        let mut store = CatalogStore::new();
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(1, "Movies")])));

        let notice = store.apply(CatalogEvent::CategoriesRefreshed(Err(
            CatalogError::Unknown(anyhow::anyhow!("connection refused")),
        )));

        assert_eq!(store.categories(), &[cat(1, "Movies")]);
        assert!(store.categories_error().is_some());
        assert_eq!(notice.expect("notice").level, NoticeLevel::Error);

        // A later successful refresh clears the error silently.
        let notice = store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(1, "Movies")])));
        assert!(notice.is_none());
        assert!(store.categories_error().is_none());
    }

    #[test]
    fn stale_select_response_is_discarded() {
        let mut store = CatalogStore::new();

        let first = store.begin_select(1);
        let second = store.begin_select(2);
        assert_eq!(store.view(), &CategoryView::Loading { id: 2 });

        // The superseded response must not repaint the view.
        let notice = store.apply(CatalogEvent::CategorySelected(
            first,
            Ok((cat(1, "Movies"), vec![folder(10, 1, "/mnt/movies")])),
        ));
        assert!(notice.is_none());
        assert_eq!(store.view(), &CategoryView::Loading { id: 2 });

        store.apply(CatalogEvent::CategorySelected(
            second,
            Ok((cat(2, "TV"), vec![folder(11, 2, "/mnt/tv")])),
        ));
        match store.view() {
            CategoryView::Ready { category, folders } => {
                assert_eq!(category.name, "TV");
                assert_eq!(folders, &[folder(11, 2, "/mnt/tv")]);
            }
            other => panic!("expected ready view, got {:?}", other),
        }
    }

    #[test]
    fn navigating_away_invalidates_selection() {
        let mut store = CatalogStore::new();
        let ticket = store.begin_select(1);
        store.clear_view();

        store.apply(CatalogEvent::CategorySelected(
            ticket,
            Ok((cat(1, "Movies"), vec![])),
        ));
        assert_eq!(store.view(), &CategoryView::None);
    }

    #[test]
    fn select_failure_shows_failed_view_without_partial_data() {
        let mut store = CatalogStore::new();
        let ticket = store.begin_select(7);

        let notice = store.apply(CatalogEvent::CategorySelected(
            ticket,
            Err(CatalogError::NotFound("category 7 not found".to_string())),
        ));

        assert_eq!(notice.expect("notice").level, NoticeLevel::Error);
        match store.view() {
            CategoryView::Failed { id, error } => {
                assert_eq!(*id, 7);
                assert!(error.contains("not found"), "{}", error);
            }
            other => panic!("expected failed view, got {:?}", other),
        }
    }

    #[test]
    fn prepare_add_category_rejects_blank_names() {
        let store = CatalogStore::new();
        let err = store.prepare_add_category("   ").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)), "{}", err);

        assert_eq!(store.prepare_add_category("  Movies ").unwrap(), "Movies");
    }

    #[test]
    fn confirmed_add_appends_exactly_one_category() {
        let mut store = CatalogStore::new();
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(1, "Movies")])));

        let notice = store.apply(CatalogEvent::CategoryAdded(Ok(cat(7, "Anime"))));
        assert_eq!(notice.expect("notice").level, NoticeLevel::Info);
        assert_eq!(store.categories(), &[cat(1, "Movies"), cat(7, "Anime")]);

        // The same confirmation delivered twice must not duplicate.
        store.apply(CatalogEvent::CategoryAdded(Ok(cat(7, "Anime"))));
        assert_eq!(store.categories().len(), 2);
    }

    #[test]
    fn failed_add_leaves_list_untouched() {
        let mut store = CatalogStore::new();
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(1, "Movies")])));

        let notice = store.apply(CatalogEvent::CategoryAdded(Err(CatalogError::Conflict(
            "category \"Movies\" already exists".to_string(),
        ))));

        assert_eq!(notice.expect("notice").level, NoticeLevel::Error);
        assert_eq!(store.categories(), &[cat(1, "Movies")]);
    }

    #[test]
    fn failed_remove_leaves_list_untouched() {
        let mut store = CatalogStore::new();
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![
            cat(1, "Movies"),
            cat(2, "TV"),
        ])));

        store.apply(CatalogEvent::CategoryRemoved(
            2,
            Err(CatalogError::NotFound("category 2 not found".to_string())),
        ));
        assert_eq!(store.categories(), &[cat(1, "Movies"), cat(2, "TV")]);
    }

    #[test]
    fn removing_viewed_category_clears_the_view() {
        let mut store = CatalogStore::new();
        store.apply(CatalogEvent::CategoriesRefreshed(Ok(vec![cat(2, "TV")])));
        let ticket = store.begin_select(2);
        store.apply(CatalogEvent::CategorySelected(
            ticket,
            Ok((cat(2, "TV"), vec![])),
        ));

        store.apply(CatalogEvent::CategoryRemoved(2, Ok(())));
        assert!(store.categories().is_empty());
        assert_eq!(store.view(), &CategoryView::None);
    }

    #[test]
    fn folder_added_after_navigation_is_dropped() {
        let mut store = CatalogStore::new();
        let ticket = store.begin_add_folder(1);
        store.clear_view();

        let notice = store.apply(CatalogEvent::FolderAdded(
            ticket,
            Ok(folder(10, 1, "/mnt/movies")),
        ));
        assert!(notice.is_none());
        assert_eq!(store.view(), &CategoryView::None);
    }

    #[test]
    fn folder_added_lands_in_the_active_category() {
        let mut store = CatalogStore::new();
        let select = store.begin_select(1);
        store.apply(CatalogEvent::CategorySelected(
            select,
            Ok((cat(1, "Movies"), vec![])),
        ));

        let ticket = store.begin_add_folder(1);
        store.apply(CatalogEvent::FolderAdded(
            ticket,
            Ok(folder(10, 1, "/mnt/movies")),
        ));

        match store.view() {
            CategoryView::Ready { folders, .. } => {
                assert_eq!(folders, &[folder(10, 1, "/mnt/movies")]);
            }
            other => panic!("expected ready view, got {:?}", other),
        }
    }

    #[test]
    fn cancelled_folder_pick_is_an_info_notice() {
        let mut store = CatalogStore::new();
        let ticket = store.begin_add_folder(1);

        let notice = store
            .apply(CatalogEvent::FolderAdded(ticket, Err(CatalogError::Cancelled)))
            .expect("notice");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.text.contains("cancelled"), "{}", notice.text);
    }

    #[test]
    fn folder_removed_from_ready_view() {
        let mut store = CatalogStore::new();
        let select = store.begin_select(1);
        store.apply(CatalogEvent::CategorySelected(
            select,
            Ok((
                cat(1, "Movies"),
                vec![folder(10, 1, "/mnt/a"), folder(11, 1, "/mnt/b")],
            )),
        ));

        store.apply(CatalogEvent::FolderRemoved(10, Ok(())));
        match store.view() {
            CategoryView::Ready { folders, .. } => {
                assert_eq!(folders, &[folder(11, 1, "/mnt/b")]);
            }
            other => panic!("expected ready view, got {:?}", other),
        }
    }

    #[test]
    fn toggle_targets_the_opposite_state() {
        let mut store = CatalogStore::new();
        assert_eq!(store.server_status(), ServerStatus::Stopped);

        let ticket = store.begin_toggle();
        assert_eq!(ticket.target, ServerStatus::Running);

        // Failure leaves the mirror untouched.
        store.apply(CatalogEvent::ServerToggled(
            ticket,
            Err(CatalogError::Conflict(
                "streaming server already running".to_string(),
            )),
        ));
        assert_eq!(store.server_status(), ServerStatus::Stopped);

        store.apply(CatalogEvent::ServerToggled(ticket, Ok(())));
        assert_eq!(store.server_status(), ServerStatus::Running);

        let ticket = store.begin_toggle();
        assert_eq!(ticket.target, ServerStatus::Stopped);
        store.apply(CatalogEvent::ServerToggled(ticket, Ok(())));
        assert_eq!(store.server_status(), ServerStatus::Stopped);
    }
