//! Entities served by the system-under-test directory and the page context.

use serde::{Deserialize, Serialize};

/// Page the macro is rendered on. Opaque apart from its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// A named target configuration that reports are generated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUnderTest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Project default, picked when nothing else selects a system.
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl SystemUnderTest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), project: None, is_default: false }
    }

    pub fn default_of(name: impl Into<String>) -> Self {
        Self { name: name.into(), project: None, is_default: true }
    }
}

/// Home repository backing a wiki space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Repository {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into(), name: None }
    }
}
