//! # Repository Module
//!
//! Database repository implementations for StoreKeeper.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Screen                                                                │
//! │       │  db.products().insert(&input)                                  │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, input)                                              │
//! │  ├── update(&self, id, input)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  one SQL statement per call                                    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD

pub mod product;
