//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the record store: HTTP endpoints,
//! business rules, data access and startup infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Uniqueness checks, dependent guards, cascades and transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters and input validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Axum route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts the DTO into a validated param and calls the service
//! 3. **Service** opens a transaction, checks business rules, orchestrates repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
