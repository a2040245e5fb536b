pub mod document;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use sea_orm_repo::SeaOrmTenantRepository;

#[cfg(test)]
mod mapper_test;
