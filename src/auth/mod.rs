pub mod auth_dto;
pub mod auth_handlers;
pub mod auth_service;
pub mod password;
