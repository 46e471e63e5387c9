// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create url_analyses table
        manager
            .create_table(
                Table::create()
                    .table(UrlAnalyses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlAnalyses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UrlAnalyses::Url).string().not_null())
                    .col(
                        ColumnDef::new(UrlAnalyses::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(UrlAnalyses::Results).json())
                    .col(ColumnDef::new(UrlAnalyses::ErrorMessage).text())
                    .col(
                        ColumnDef::new(UrlAnalyses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UrlAnalyses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // History listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_url_analyses_created_at")
                    .table(UrlAnalyses::Table)
                    .col(UrlAnalyses::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UrlAnalyses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UrlAnalyses {
    Table,
    Id,
    Url,
    Status,
    Results,
    ErrorMessage,
    CreatedAt,
    UpdatedAt,
}
