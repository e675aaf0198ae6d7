use sea_orm_migration::prelude::*;

use super::m20260712_101500_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entries::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Entries::Title).string().not_null())
                    .col(
                        ColumnDef::new(Entries::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Entries::Category).string().not_null())
                    .col(ColumnDef::new(Entries::Kind).string().not_null())
                    .col(ColumnDef::new(Entries::Date).date().not_null())
                    .col(ColumnDef::new(Entries::UserId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-user_id")
                            .from(Entries::Table, Entries::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Entries {
    Table,
    Id,
    Title,
    AmountCents,
    Category,
    Kind,
    Date,
    UserId,
}
