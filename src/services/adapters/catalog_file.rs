//! YAML-backed stand-in for the remote system-under-test service.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, Page, Repository, SystemUnderTest};
use crate::ports::{PageContext, SutDirectory};

/// Spaces, projects and pages read from a catalog file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    spaces: HashMap<String, SpaceEntry>,
    #[serde(default)]
    projects: HashMap<String, ProjectEntry>,
    #[serde(default)]
    pages: HashMap<String, PageEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpaceEntry {
    home_repository: String,
    #[serde(default)]
    repository_name: Option<String>,
    #[serde(default)]
    systems_under_test: Vec<SystemUnderTest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectEntry {
    #[serde(default)]
    systems_under_test: Vec<SystemUnderTest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageEntry {
    #[serde(default)]
    executable: bool,
    #[serde(default)]
    selected_sut: Option<String>,
}

impl CatalogFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            AppError::config_error(format!("Failed to read catalog {}: {err}", path.display()))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl SutDirectory for CatalogFile {
    fn home_repository(&self, space_key: &str) -> Result<Repository, AppError> {
        let space = self
            .spaces
            .get(space_key)
            .ok_or_else(|| AppError::SpaceNotFound(space_key.to_string()))?;
        Ok(Repository { uid: space.home_repository.clone(), name: space.repository_name.clone() })
    }

    fn suts_of_associated_project(
        &self,
        repository_uid: &str,
    ) -> Result<Vec<SystemUnderTest>, AppError> {
        Ok(self
            .projects
            .get(repository_uid)
            .map(|project| project.systems_under_test.clone())
            .unwrap_or_default())
    }

    fn suts_of_space(&self, space_key: &str) -> Result<Vec<SystemUnderTest>, AppError> {
        self.spaces
            .get(space_key)
            .map(|space| space.systems_under_test.clone())
            .ok_or_else(|| AppError::SpaceNotFound(space_key.to_string()))
    }
}

impl PageContext for CatalogFile {
    fn is_executable(&self, page: &Page) -> bool {
        self.pages.get(&page.title).is_some_and(|entry| entry.executable)
    }

    fn selected_sut_info(&self, page: &Page) -> Result<String, AppError> {
        self.pages
            .get(&page.title)
            .and_then(|entry| entry.selected_sut.clone())
            .ok_or_else(|| AppError::PageNotFound(page.title.clone()))
    }
}
