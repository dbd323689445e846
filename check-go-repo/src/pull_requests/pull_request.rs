//! Pull request snapshots and drafts.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// An open pull request as reported by `gh pr list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// GraphQL node id.
    pub id: String,

    /// PR number.
    pub number: u64,

    /// PR URL.
    #[serde(default)]
    pub url: String,

    /// Target branch.
    pub base_ref_name: String,

    /// Source branch.
    pub head_ref_name: String,

    /// Label names.
    #[serde(default, deserialize_with = "label_names")]
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Returns true if the PR carries `label`.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// `gh` reports labels as objects; plain names are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Name(String),
    Object { name: String },
}

fn label_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Vec::<LabelRepr>::deserialize(deserializer)?;
    Ok(labels
        .into_iter()
        .map(|label| match label {
            LabelRepr::Name(name) | LabelRepr::Object { name } => name,
        })
        .collect())
}

/// Everything needed to open the update pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft {
    /// Branch created for the update.
    pub branch: String,

    /// Files committed on the branch.
    pub files: Vec<PathBuf>,

    /// Commit message.
    pub commit_message: String,

    /// PR title.
    pub title: String,

    /// Rendered PR body.
    pub body: String,

    /// Correlation label.
    pub label: String,
}
