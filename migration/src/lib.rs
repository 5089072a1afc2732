pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_building_table;
mod m20250301_000002_create_room_table;
mod m20250301_000003_create_discipline_table;
mod m20250301_000004_create_class_table;
mod m20250301_000005_create_lecture_table;
mod m20250302_000006_create_resource_type_table;
mod m20250302_000007_create_resource_table;
mod m20250303_000008_create_reservation_table;
mod m20250303_000009_create_reservation_resource_table;
mod m20250304_000010_create_curriculum_table;
mod m20250304_000011_create_curriculum_discipline_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_building_table::Migration),
            Box::new(m20250301_000002_create_room_table::Migration),
            Box::new(m20250301_000003_create_discipline_table::Migration),
            Box::new(m20250301_000004_create_class_table::Migration),
            Box::new(m20250301_000005_create_lecture_table::Migration),
            Box::new(m20250302_000006_create_resource_type_table::Migration),
            Box::new(m20250302_000007_create_resource_table::Migration),
            Box::new(m20250303_000008_create_reservation_table::Migration),
            Box::new(m20250303_000009_create_reservation_resource_table::Migration),
            Box::new(m20250304_000010_create_curriculum_table::Migration),
            Box::new(m20250304_000011_create_curriculum_discipline_table::Migration),
        ]
    }
}
