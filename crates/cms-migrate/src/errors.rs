//! Actionable error formatting for operator-facing failures.
//!
//! Migration runs are usually attended by whoever operates the two content
//! stores, so errors carry possible causes and concrete remediation steps
//! alongside the message.

use std::fmt;
use std::path::Path;

/// An error with diagnostic context and remediation steps.
#[derive(Debug, Clone)]
pub struct ActionableError {
    /// The main error message
    error: String,
    /// Possible causes (diagnostic hints)
    causes: Vec<String>,
    /// Remediation steps (how to fix)
    remediation: Vec<String>,
}

impl ActionableError {
    /// Create a new actionable error with the given message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            causes: Vec::new(),
            remediation: Vec::new(),
        }
    }

    /// Add a possible cause (diagnostic hint).
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Add a remediation step (actionable fix).
    pub fn with_remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remediation.push(remedy.into());
        self
    }

    /// Convert to a formatted message suitable for display.
    pub fn to_error_message(&self) -> String {
        let mut msg = self.error.clone();

        if !self.causes.is_empty() {
            msg.push_str("\n\nPossible causes:\n");
            for cause in &self.causes {
                msg.push_str(&format!("  • {}\n", cause));
            }
        }

        if !self.remediation.is_empty() {
            if self.causes.is_empty() {
                msg.push('\n');
            }
            msg.push_str("\nTo fix:\n");
            for remedy in &self.remediation {
                msg.push_str(&format!("  • {}\n", remedy));
            }
        }

        msg
    }
}

impl fmt::Display for ActionableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_error_message())
    }
}

impl std::error::Error for ActionableError {}

/// Helper for a required environment variable that is not set.
pub fn missing_env(var: &str) -> ActionableError {
    ActionableError::new(format!("Environment variable {} is not set", var))
        .with_cause("There is no .env file in the working directory")
        .with_cause("The variable is not exported in the current shell")
        .with_remedy(format!("Add {}=<value> to a .env file", var))
        .with_remedy(format!("Or export it: export {}=<value>", var))
}

/// Helper for an unreachable Strapi instance.
pub fn strapi_unreachable(url: &str) -> ActionableError {
    ActionableError::new(format!("Cannot connect to Strapi at {}", url))
        .with_cause("Strapi is not running")
        .with_cause("STRAPI_URL points at the wrong host or port")
        .with_remedy("Start Strapi: npm run develop")
        .with_remedy("Set STRAPI_URL if the instance runs elsewhere")
        .with_remedy("Check that the blogs API permissions are configured")
}

/// Helper for a missing staged migration file.
pub fn migration_data_missing(path: &Path) -> ActionableError {
    ActionableError::new(format!("Migration data not found at {}", path.display()))
        .with_cause("The export step has not been run yet")
        .with_cause("MIGRATE_DATA_DIR points at a different directory")
        .with_remedy("Run: cms-migrate migrate")
        .with_remedy("Or set MIGRATE_DATA_DIR to the directory holding the file")
}

/// Helper for a missing CSV export file.
pub fn csv_file_missing(path: &Path) -> ActionableError {
    ActionableError::new(format!("CSV file not found at {}", path.display()))
        .with_remedy(format!("Place your CSV export at {}", path.display()))
        .with_remedy(
            "Expected columns: Name, Content Type, Updated, Last updated by, \
             Blog Text, Created, Published, Created by, Tags, Slug, status",
        )
}
