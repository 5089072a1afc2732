pub use super::building::Entity as Building;
pub use super::class::Entity as Class;
pub use super::curriculum::Entity as Curriculum;
pub use super::curriculum_discipline::Entity as CurriculumDiscipline;
pub use super::discipline::Entity as Discipline;
pub use super::lecture::Entity as Lecture;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_resource::Entity as ReservationResource;
pub use super::resource::Entity as Resource;
pub use super::resource_type::Entity as ResourceType;
pub use super::room::Entity as Room;
