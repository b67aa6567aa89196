//! Property-based tests for the input rules
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use todo_app::shared::models::query::{ItemSortField, ListSortField, SortDirection};
use todo_app::shared::models::user::{is_valid_email, is_valid_password, is_valid_username};
use todo_app::shared::models::{Pagination, PaginationQuery, SortDirective, UpdateTodoListDto};

proptest! {
    #[test]
    fn test_sort_parse_only_yields_allow_listed_columns(raw in ".*") {
        if let Some(directive) = SortDirective::<ItemSortField>::parse(&raw) {
            let clause = directive.order_by_clause();
            prop_assert!(
                ["title", "created_at", "deadline"]
                    .iter()
                    .any(|column| clause == format!("{} ASC", column) || clause == format!("{} DESC", column)),
                "unexpected clause {}",
                clause
            );
        }
    }

    #[test]
    fn test_sort_prefix_sets_direction(name in prop::sample::select(vec!["title", "createdAt", "TITLE", "createdat"])) {
        let ascending = SortDirective::<ListSortField>::parse(name).unwrap();
        let descending = SortDirective::<ListSortField>::parse(&format!("-{}", name)).unwrap();

        prop_assert_eq!(ascending.direction, SortDirection::Ascending);
        prop_assert_eq!(descending.direction, SortDirection::Descending);
        prop_assert_eq!(ascending.field, descending.field);
    }

    #[test]
    fn test_well_formed_emails_are_accepted(
        local in "[A-Za-z0-9._%+-]{1,20}",
        domain in "[A-Za-z0-9-]{1,15}",
        tld in "[A-Za-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_emails_without_at_are_rejected(raw in "[^@]*") {
        prop_assert!(!is_valid_email(&raw));
    }

    #[test]
    fn test_short_usernames_are_rejected(name in "[A-Za-z0-9_-]{0,2}") {
        prop_assert!(!is_valid_username(&name));
    }

    #[test]
    fn test_password_length_boundary(password in ".{0,30}") {
        prop_assert_eq!(is_valid_password(&password), password.chars().count() > 8);
    }

    #[test]
    fn test_pagination_is_never_zero(page in proptest::option::of(0u32..1000), limit in proptest::option::of(0u32..1000)) {
        let pagination = Pagination::from(PaginationQuery { page, limit });

        prop_assert!(pagination.page >= 1);
        prop_assert!(pagination.limit >= 1);
        prop_assert_eq!(
            pagination.offset(),
            u64::from(pagination.page - 1) * u64::from(pagination.limit)
        );
    }

    #[test]
    fn test_any_present_list_field_makes_patch_non_empty(
        title in proptest::option::of(".*"),
        description in proptest::option::of(".*"),
    ) {
        let expected_empty = title.is_none() && description.is_none();
        let patch = UpdateTodoListDto { title, description };
        prop_assert_eq!(patch.is_empty(), expected_empty);
    }
}
