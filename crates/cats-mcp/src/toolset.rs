//! Toolsets: named groups of tools enabled together at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Toolset selection errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolsetError {
    /// One or more names are not known toolsets.
    #[error("Invalid toolsets specified: {invalid}. Valid toolsets: {valid}")]
    Unknown {
        /// Comma-separated invalid names.
        invalid: String,
        /// Comma-separated valid names.
        valid: String,
    },
}

/// Tool group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toolset {
    Candidates,
    Jobs,
    Pipelines,
    Context,
    Tasks,
    Companies,
    Contacts,
    Activities,
    Portals,
    WorkHistory,
    Tags,
    Webhooks,
    Users,
    Triggers,
    Attachments,
    Backups,
    Events,
}

/// Catalogue section a toolset is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolsetGroup {
    /// Loaded when no selection is given.
    Default,
    /// Companies, contacts and related recruiting records.
    Recruiting,
    /// Data and configuration endpoints.
    Data,
}

impl Toolset {
    /// Every toolset, in catalogue order.
    pub const ALL: [Toolset; 17] = [
        Toolset::Candidates,
        Toolset::Jobs,
        Toolset::Pipelines,
        Toolset::Context,
        Toolset::Tasks,
        Toolset::Companies,
        Toolset::Contacts,
        Toolset::Activities,
        Toolset::Portals,
        Toolset::WorkHistory,
        Toolset::Tags,
        Toolset::Webhooks,
        Toolset::Users,
        Toolset::Triggers,
        Toolset::Attachments,
        Toolset::Backups,
        Toolset::Events,
    ];

    /// Toolsets loaded when nothing is selected.
    pub const DEFAULT: [Toolset; 5] = [
        Toolset::Candidates,
        Toolset::Jobs,
        Toolset::Pipelines,
        Toolset::Context,
        Toolset::Tasks,
    ];

    /// Name used on the command line and in `CATS_TOOLSETS`.
    pub fn name(self) -> &'static str {
        match self {
            Toolset::Candidates => "candidates",
            Toolset::Jobs => "jobs",
            Toolset::Pipelines => "pipelines",
            Toolset::Context => "context",
            Toolset::Tasks => "tasks",
            Toolset::Companies => "companies",
            Toolset::Contacts => "contacts",
            Toolset::Activities => "activities",
            Toolset::Portals => "portals",
            Toolset::WorkHistory => "work_history",
            Toolset::Tags => "tags",
            Toolset::Webhooks => "webhooks",
            Toolset::Users => "users",
            Toolset::Triggers => "triggers",
            Toolset::Attachments => "attachments",
            Toolset::Backups => "backups",
            Toolset::Events => "events",
        }
    }

    /// One-line description for `--list-toolsets`.
    pub fn description(self) -> &'static str {
        match self {
            Toolset::Candidates => "Core recruiting",
            Toolset::Jobs => "Job management",
            Toolset::Pipelines => "Workflow management",
            Toolset::Context => "Site/user info",
            Toolset::Tasks => "Task management",
            Toolset::Companies => "Company records",
            Toolset::Contacts => "Contact records",
            Toolset::Activities => "Activity log",
            Toolset::Portals => "Job portals",
            Toolset::WorkHistory => "Candidate work history",
            Toolset::Tags => "Tags",
            Toolset::Webhooks => "Webhook subscriptions",
            Toolset::Users => "Users",
            Toolset::Triggers => "Triggers",
            Toolset::Attachments => "Attachments and resume parsing",
            Toolset::Backups => "Backups",
            Toolset::Events => "Audit event stream",
        }
    }

    /// Catalogue section.
    pub fn group(self) -> ToolsetGroup {
        match self {
            Toolset::Candidates
            | Toolset::Jobs
            | Toolset::Pipelines
            | Toolset::Context
            | Toolset::Tasks => ToolsetGroup::Default,
            Toolset::Companies
            | Toolset::Contacts
            | Toolset::Activities
            | Toolset::Portals
            | Toolset::WorkHistory => ToolsetGroup::Recruiting,
            _ => ToolsetGroup::Data,
        }
    }
}

impl fmt::Display for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Toolset {
    type Err = ToolsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Toolset::ALL
            .into_iter()
            .find(|toolset| toolset.name() == s)
            .ok_or_else(|| unknown(&[s]))
    }
}

/// Parse a comma-separated toolset list.
///
/// `"all"` anywhere in the list selects every toolset. Blank entries are
/// ignored; an empty list selects the defaults.
pub fn parse_toolsets(list: &str) -> Result<BTreeSet<Toolset>, ToolsetError> {
    let names: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Ok(Toolset::DEFAULT.into_iter().collect());
    }
    if names.contains(&"all") {
        return Ok(Toolset::ALL.into_iter().collect());
    }

    let invalid: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| name.parse::<Toolset>().is_err())
        .collect();
    if !invalid.is_empty() {
        return Err(unknown(&invalid));
    }

    Ok(names.iter().filter_map(|name| name.parse().ok()).collect())
}

fn unknown(invalid: &[&str]) -> ToolsetError {
    let valid: Vec<&str> = Toolset::ALL.iter().map(|t| t.name()).collect();
    ToolsetError::Unknown {
        invalid: invalid.join(", "),
        valid: valid.join(", "),
    }
}
