pub mod course_query_postgres;
pub mod course_repository_postgres;
pub mod enrollment_repository_postgres;
pub mod sea_orm_entity;
