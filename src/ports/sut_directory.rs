//! System-under-test directory port definition.

use crate::domain::{AppError, Repository, SystemUnderTest};

/// Port for repository and system-under-test lookups.
///
/// Returned lists are ordered; callers rely on that order and never sort.
pub trait SutDirectory {
    /// Home repository of a wiki space.
    fn home_repository(&self, space_key: &str) -> Result<Repository, AppError>;

    /// Systems under test of the project that owns the repository `repository_uid`.
    fn suts_of_associated_project(
        &self,
        repository_uid: &str,
    ) -> Result<Vec<SystemUnderTest>, AppError>;

    /// Systems under test selectable from a wiki space.
    fn suts_of_space(&self, space_key: &str) -> Result<Vec<SystemUnderTest>, AppError>;
}
