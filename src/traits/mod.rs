//! Trait definitions for Daizy operations.
//!
//! Each entity type implements the traits its endpoints support, so
//! callers can write code that is generic over entities.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use update::Update;
