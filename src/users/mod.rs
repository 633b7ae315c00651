//! User management built on the searchable repository core
//!
//! - [`UserEntity`]: validated user record
//! - [`UserSearch`]: name/email filter, newest-first default order
//! - [`UserRepository`]: searchable repository with email lookups
//! - Use cases for listing, reading, renaming and deleting users

pub mod entity;
pub mod output;
pub mod repository;
pub mod usecases;

pub use entity::{UserEntity, UserProps};
pub use output::{UserOutput, UserOutputMapper};
pub use repository::{InMemoryUserRepository, UserRepository, UserSearch};
pub use usecases::{
    DeleteUserInput, DeleteUserUseCase, GetUserInput, GetUserUseCase, ListUsersInput,
    ListUsersOutput, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
