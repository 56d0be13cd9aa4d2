pub use sea_orm_migration::prelude::*;

mod m20250301_000001_client;
mod m20250301_000002_attorney;
mod m20250301_000003_affair;
mod m20250301_000004_assignment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_client::Migration),
            Box::new(m20250301_000002_attorney::Migration),
            Box::new(m20250301_000003_affair::Migration),
            Box::new(m20250301_000004_assignment::Migration),
        ]
    }
}
