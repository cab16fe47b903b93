// src/services/browse_service_tests.rs
//
// Browse service tests over real JSON fixtures.
//
// INVARIANTS TESTED:
// - Filter + paginate worked examples (year range, genre pages, empty)
// - Genre listing is sorted and deduplicated
// - Accessor error taxonomy: missing file vs malformed content

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use crate::domain::{FilterCriterion, PageRequest};
    use crate::error::AppError;
    use crate::repositories::{CatalogRepository, JsonCatalogRepository};
    use crate::services::BrowseService;

    /// Write a films.json fixture and return a service reading it.
    fn service_over(json: &str) -> (tempfile::TempDir, BrowseService) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("films.json");
        fs::write(&path, json).unwrap();
        let repo: Arc<dyn CatalogRepository> = Arc::new(JsonCatalogRepository::new(path));
        (dir, BrowseService::new(repo))
    }

    fn film_json(title: &str, genre: &str, year: i32) -> String {
        format!(
            r#"{{"title":"{}","description":"about {}","genre":"{}","year":{}}}"#,
            title, title, genre, year
        )
    }

    fn fixture(films: &[String]) -> String {
        format!("[{}]", films.join(","))
    }

    #[test]
    fn test_year_range_search_fits_on_one_page() {
        // 12 films, years 1990..=2001
        let films: Vec<String> = (0..12)
            .map(|i| film_json(&format!("Film {}", i), "Drama", 1990 + i))
            .collect();
        let (_dir, service) = service_over(&fixture(&films));

        let page = service
            .search(
                &FilterCriterion::YearRange { from: 1995, to: 1998 },
                PageRequest::for_page(1),
            )
            .unwrap();

        assert_eq!(page.items.len(), 4);
        assert_eq!(
            page.items.iter().map(|f| f.year).collect::<Vec<_>>(),
            vec![1995, 1996, 1997, 1998]
        );
        assert!(!page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_genre_search_third_page_of_twenty_five() {
        let films: Vec<String> = (1..=25)
            .map(|i| film_json(&format!("Drama {:02}", i), "Drama", 2000))
            .collect();
        let (_dir, service) = service_over(&fixture(&films));

        let page = service
            .search(
                &FilterCriterion::Genre {
                    value: "Drama".to_string(),
                },
                PageRequest::for_page(3),
            )
            .unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].title, "Drama 21");
        assert_eq!(page.items[4].title, "Drama 25");
        assert!(page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.offset, 20);
    }

    #[test]
    fn test_empty_catalog_yields_empty_first_page() {
        let (_dir, service) = service_over("[]");

        let page = service
            .search(
                &FilterCriterion::KeywordInTitle {
                    value: "anything".to_string(),
                },
                PageRequest::for_page(1),
            )
            .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_list_genres_sorted_unique() {
        let films = vec![
            film_json("A", "Western", 1960),
            film_json("B", "Comedy", 1970),
            film_json("C", "Western", 1980),
        ];
        let (_dir, service) = service_over(&fixture(&films));

        assert_eq!(service.list_genres().unwrap(), vec!["Comedy", "Western"]);
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let repo: Arc<dyn CatalogRepository> =
            Arc::new(JsonCatalogRepository::new(dir.path().join("nope.json")));
        let service = BrowseService::new(repo);

        let err = service.list_genres().unwrap_err();
        assert!(matches!(err, AppError::DataUnavailable { .. }), "{:?}", err);
    }

    #[test]
    fn test_invalid_json_is_data_malformed() {
        let (_dir, service) = service_over("{not json");
        let err = service.list_genres().unwrap_err();
        assert!(matches!(err, AppError::DataMalformed { .. }), "{:?}", err);
    }

    #[test]
    fn test_missing_required_field_is_data_malformed() {
        // no "year"
        let (_dir, service) =
            service_over(r#"[{"title":"X","description":"","genre":"Drama"}]"#);
        let err = service.list_genres().unwrap_err();
        assert!(matches!(err, AppError::DataMalformed { .. }), "{:?}", err);
    }

    #[test]
    fn test_blank_title_record_still_loads() {
        // A present-but-blank field is valid per the data model; only
        // parse failures and absent fields are malformed.
        let (_dir, service) = service_over(
            r#"[{"title":"","description":"d","genre":"Drama","year":2000},
                {"title":"Named","description":"d","genre":"Drama","year":2001}]"#,
        );

        let page = service
            .search(
                &FilterCriterion::Genre {
                    value: "Drama".to_string(),
                },
                PageRequest::for_page(1),
            )
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].title, "");
    }
}
