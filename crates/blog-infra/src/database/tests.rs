#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::post_store::SeaOrmPostStore;
    use blog_core::{Author, NewPost, PostStore};
    use blog_core::StoreError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn submission(title: &str) -> NewPost {
        NewPost {
            title: title.to_owned(),
            excerpt: None,
            category: "Development".to_owned(),
            author: Author {
                name: "John Doe".to_owned(),
                avatar: String::new(),
            },
            student_name: "JD2023".to_owned(),
            source: "https://nextjs.org/docs".to_owned(),
            content: "<p>Content</p>".to_owned(),
        }
    }

    fn row(id: i64, slug: &str, excerpt: Option<&str>) -> post::Model {
        post::Model {
            id,
            slug: slug.to_owned(),
            title: "Test Post".to_owned(),
            excerpt: excerpt.map(str::to_owned),
            date: "May 15, 2023".to_owned(),
            read_time: "1 min read".to_owned(),
            category: "Development".to_owned(),
            author_name: "John Doe".to_owned(),
            author_avatar: "/placeholder.svg?height=80&width=80".to_owned(),
            student_name: "JD2023".to_owned(),
            source: "https://nextjs.org/docs".to_owned(),
            content: "<p>Content</p>".to_owned(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        // Create mock database with expected query results
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(7, "test-post", Some("Summary"))]])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);

        let post = repo.get_by_slug("test-post").await.unwrap().unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.author.name, "John Doe");
        assert_eq!(post.student_name, "JD2023");
        assert_eq!(post.excerpt, "Summary");
    }

    #[tokio::test]
    async fn test_missing_slug_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        assert!(repo.get_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_null_excerpt_is_derived() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results(vec![vec![row(1, "test-post", None)]])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        let post = repo.get_by_slug("test-post").await.unwrap().unwrap();
        assert_eq!(post.excerpt, "Content...");
    }

    #[tokio::test]
    async fn test_list_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                row(2, "second", Some("b")),
                row(1, "first", Some("a")),
            ]])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "second");
        assert_eq!(posts[1].id, 1);
    }

    #[tokio::test]
    async fn test_create_returns_database_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(42, "hello-world", Some("Hi"))]])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        let created = repo
            .create(NewPost {
                title: "Hello, World!".to_owned(),
                excerpt: Some("Hi".to_owned()),
                category: "Development".to_owned(),
                author: Author {
                    name: "John Doe".to_owned(),
                    avatar: String::new(),
                },
                student_name: "JD2023".to_owned(),
                source: "https://nextjs.org/docs".to_owned(),
                content: "<p>Content</p>".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(created.slug, "hello-world");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        assert!(repo.delete_by_id(3).await.unwrap());
        assert!(!repo.delete_by_id(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_backend_name() {
        let pg = SeaOrmPostStore::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let my = SeaOrmPostStore::new(MockDatabase::new(DatabaseBackend::MySql).into_connection());
        assert_eq!(pg.backend(), "postgres");
        assert_eq!(my.backend(), "mysql");
    }

    #[tokio::test]
    async fn test_seed_inserts_samples_into_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![
                vec![row(1, "getting-started-with-nextjs", Some("a"))],
                vec![row(2, "mastering-tailwind-css", Some("b"))],
            ])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        assert_eq!(repo.seed_if_empty().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_table() {
        // No insert results are queued: any insert attempt would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(5)]])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        assert_eq!(repo.seed_if_empty().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_constraint_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"posts_slug_key\"".to_owned(),
            )])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        let err = repo.create(submission("Hello, World!")).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_other_write_failures_are_query_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("value too long for column".to_owned())])
            .into_connection();

        let repo = SeaOrmPostStore::new(db);
        let err = repo.create(submission("Hello, World!")).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }
}
