//! Entity records and their CRUD operations
//!
//! Each model owns its record type and the operations over it, taking a
//! [`Store`](crate::store::Store) handle the way a repository would take a
//! connection pool. All entities are plain records in flat arrays; there is
//! no referential-integrity enforcement beyond the cascade on shared-list
//! deletion.
//!
//! # Models
//!
//! - `user`: account records (creation goes through [`crate::auth`])
//! - `category`: fixed task categories, seeded once
//! - `task`: to-do items, personal or shared
//! - `shared_list`: lists joined via a short code
//! - `membership`: (list, user) pairs

pub mod category;
pub mod membership;
pub mod shared_list;
pub mod task;
pub mod user;
