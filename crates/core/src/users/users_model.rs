//! User directory models.

use serde::{Deserialize, Serialize};

/// Organisational department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Career stage (grade) a user is evaluated at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Minimal reference to another user, as embedded by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

/// Domain model representing a user from the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub employee_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub supervisor: Option<UserRef>,
}

impl User {
    pub fn department_id(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.id.as_str())
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().map(|d| d.name.as_str())
    }

    pub fn stage_id(&self) -> Option<&str> {
        self.stage.as_ref().map(|s| s.id.as_str())
    }

    pub fn supervisor_id(&self) -> Option<&str> {
        self.supervisor.as_ref().map(|s| s.id.as_str())
    }
}
