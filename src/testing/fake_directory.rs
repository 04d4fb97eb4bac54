use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{AppError, Page, Repository, SystemUnderTest};
use crate::ports::{PageContext, SutDirectory};

/// In-memory directory that records every lookup it serves.
#[derive(Default)]
pub struct FakeSutDirectory {
    pub home_repositories: HashMap<String, Repository>,
    pub project_suts: HashMap<String, Vec<SystemUnderTest>>,
    pub space_suts: HashMap<String, Vec<SystemUnderTest>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSutDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(
        mut self,
        space_key: &str,
        repository_uid: &str,
        suts: Vec<SystemUnderTest>,
    ) -> Self {
        self.home_repositories.insert(space_key.to_string(), Repository::new(repository_uid));
        self.space_suts.insert(space_key.to_string(), suts);
        self
    }

    pub fn with_project(mut self, repository_uid: &str, suts: Vec<SystemUnderTest>) -> Self {
        self.project_suts.insert(repository_uid.to_string(), suts);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SutDirectory for FakeSutDirectory {
    fn home_repository(&self, space_key: &str) -> Result<Repository, AppError> {
        self.record(format!("home_repository:{space_key}"));
        self.home_repositories
            .get(space_key)
            .cloned()
            .ok_or_else(|| AppError::SpaceNotFound(space_key.to_string()))
    }

    fn suts_of_associated_project(
        &self,
        repository_uid: &str,
    ) -> Result<Vec<SystemUnderTest>, AppError> {
        self.record(format!("suts_of_associated_project:{repository_uid}"));
        Ok(self.project_suts.get(repository_uid).cloned().unwrap_or_default())
    }

    fn suts_of_space(&self, space_key: &str) -> Result<Vec<SystemUnderTest>, AppError> {
        self.record(format!("suts_of_space:{space_key}"));
        Ok(self.space_suts.get(space_key).cloned().unwrap_or_default())
    }
}

/// Page context with a single, fixed answer for every page.
#[derive(Debug, Default, Clone)]
pub struct FakePageContext {
    pub executable: bool,
    pub selected_sut_info: Option<String>,
}

impl FakePageContext {
    pub fn not_executable() -> Self {
        Self::default()
    }

    pub fn executable_with(info: &str) -> Self {
        Self { executable: true, selected_sut_info: Some(info.to_string()) }
    }
}

impl PageContext for FakePageContext {
    fn is_executable(&self, _page: &Page) -> bool {
        self.executable
    }

    fn selected_sut_info(&self, page: &Page) -> Result<String, AppError> {
        self.selected_sut_info.clone().ok_or_else(|| AppError::PageNotFound(page.title.clone()))
    }
}
