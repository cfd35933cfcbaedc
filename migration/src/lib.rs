pub use sea_orm_migration::prelude::*;

mod m20261019_000001_vigil_team;
mod m20261019_000002_vigil_user;
mod m20261019_000003_vigil_project;
mod m20261019_000004_vigil_item;
mod m20261019_000005_vigil_audit;
mod m20261019_000006_vigil_finding;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_vigil_team::Migration),
            Box::new(m20261019_000002_vigil_user::Migration),
            Box::new(m20261019_000003_vigil_project::Migration),
            Box::new(m20261019_000004_vigil_item::Migration),
            Box::new(m20261019_000005_vigil_audit::Migration),
            Box::new(m20261019_000006_vigil_finding::Migration),
        ]
    }
}
