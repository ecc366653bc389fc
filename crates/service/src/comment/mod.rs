//! Comment module: three-layer architecture (domain, repository, service).
//!
//! This module centralizes comment CRUD business logic under the service crate.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CommentService;
