use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_warehouse_table::Migration)]
    }
}

mod m20240101_000001_create_warehouse_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_warehouse_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warehouse::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Warehouse::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Warehouse::BusinessUnitCode)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Warehouse::Location).string().not_null())
                        .col(ColumnDef::new(Warehouse::Capacity).integer().not_null())
                        .col(ColumnDef::new(Warehouse::Stock).integer().not_null())
                        .col(
                            ColumnDef::new(Warehouse::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warehouse::ArchivedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Search touches location and capacity on every active record
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warehouse_location")
                        .table(Warehouse::Table)
                        .col(Warehouse::Location)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warehouse_capacity")
                        .table(Warehouse::Table)
                        .col(Warehouse::Capacity)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_warehouse_archived_at")
                        .table(Warehouse::Table)
                        .col(Warehouse::ArchivedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouse::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Warehouse {
        Table,
        Id,
        BusinessUnitCode,
        Location,
        Capacity,
        Stock,
        CreatedAt,
        ArchivedAt,
    }
}
