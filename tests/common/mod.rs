//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The two-case list used across integration tests, in API envelope form
pub const SAMPLE_CASES: &str = r#"{
  "count": 2,
  "data": [
    {
      "id": "1",
      "title": "Asylum Claim",
      "case_number": "C-001",
      "status": "open",
      "priority": "high",
      "case_type": "asylum",
      "urgency_level": "medium",
      "beneficiary": {"id": "b1", "full_name": "Maria Lopez"},
      "assigned_to": {"id": "u1", "first_name": "Sam", "last_name": "Reyes", "email": "sam@example.org"},
      "due_date": "2024-02-15",
      "created_at": "2024-01-10"
    },
    {
      "id": "2",
      "title": "Visa Renewal",
      "case_number": "C-002",
      "status": "closed",
      "priority": "low",
      "case_type": "visa",
      "urgency_level": "low",
      "assigned_to": null,
      "created_at": "2024-02-01",
      "updated_at": "2024-03-04T12:00:00Z"
    }
  ]
}"#;

/// Test context builder for setting up test environments
pub struct TestContextBuilder {
    temp_dir: TempDir,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            initial_files: Vec::new(),
        })
    }

    /// Add the sample case list as `cases.json`
    pub fn with_sample_cases(self) -> Self {
        self.with_file("cases.json", SAMPLE_CASES)
    }

    /// Add an initial file
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.initial_files.push((path.into(), content.into()));
        self
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        for (path, content) in &self.initial_files {
            let full_path = self.temp_dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// Test context with a temporary working directory
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Get the working directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the working directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
