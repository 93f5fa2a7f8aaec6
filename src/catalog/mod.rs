//! Static catalog of manageable tools

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

/// Catalog document compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("tools.json");

/// A manageable tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tool {
    /// Display name (e.g., "Claude Code")
    pub name: String,
    /// Package manager identifier, possibly scoped and possibly pinned
    /// (e.g., "@anthropic-ai/claude-code", "foo@1.2.3")
    pub package: String,
    pub description: String,
}

impl Tool {
    pub fn new(name: &str, package: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            package: package.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no tools")]
    Empty,

    #[error("Tool {0:?} has an empty package identifier")]
    MissingPackage(String),

    #[error("Package {0:?} is listed more than once")]
    DuplicatePackage(String),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    tools: Vec<Tool>,
}

/// The fixed list of tools, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_tools(document.tools)
    }

    pub fn from_tools(tools: Vec<Tool>) -> Result<Self, CatalogError> {
        if tools.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for tool in &tools {
            if tool.package.trim().is_empty() {
                return Err(CatalogError::MissingPackage(tool.name.clone()));
            }
            if !seen.insert(tool.package.as_str()) {
                return Err(CatalogError::DuplicatePackage(tool.package.clone()));
            }
        }

        Ok(Self { tools })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
