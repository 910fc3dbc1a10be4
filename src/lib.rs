//! Jotter: a small in-memory todo service.
//!
//! This crate provides CRUD management of short task records over HTTP:
//! create, retrieve, search/filter, update, and delete, with sanitized
//! input and a completed-records-are-frozen business rule.
//!
//! # Architecture
//!
//! Jotter follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`todo`]: Record model, repository contract and in-memory store, and
//!   the use-case service
//! - [`http`]: The thin HTTP boundary over the use-case service

pub mod http;
pub mod todo;
