use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(posts_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

fn posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Posts::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        // Bounded so MySQL can index it: 768 utf8mb4 chars fill the 3072-byte key limit
        .col(
            ColumnDef::new(Posts::Slug)
                .string_len(768)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Posts::Title).text().not_null())
        // NULL means "derive from content on read"
        .col(ColumnDef::new(Posts::Excerpt).text().null())
        .col(ColumnDef::new(Posts::Date).string().not_null())
        .col(ColumnDef::new(Posts::ReadTime).string().not_null())
        .col(ColumnDef::new(Posts::Category).text().not_null())
        .col(ColumnDef::new(Posts::AuthorName).text().not_null())
        .col(ColumnDef::new(Posts::AuthorAvatar).text().not_null())
        .col(ColumnDef::new(Posts::StudentName).text().not_null())
        .col(ColumnDef::new(Posts::Source).text().not_null())
        .col(ColumnDef::new(Posts::Content).text().not_null())
        .col(
            ColumnDef::new(Posts::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Slug,
    Title,
    Excerpt,
    Date,
    ReadTime,
    Category,
    AuthorName,
    AuthorAvatar,
    StudentName,
    Source,
    Content,
    CreatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_free_text_columns_are_unbounded() {
        let sql = posts_table().to_string(MysqlQueryBuilder);
        for column in ["title", "category", "author_name", "author_avatar", "student_name"] {
            assert!(sql.contains(&format!("`{column}` text")), "{column} in {sql}");
        }
        assert!(sql.contains("`slug` varchar(768)"));
    }
}
