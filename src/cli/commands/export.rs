use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::github::{FollowClient, UserList};
use crate::store;

/// Export the accounts the authenticated user follows to a CSV file.
pub async fn export_following(client: &FollowClient, filename: &Path) -> Result<()> {
    let list = client.following().await;
    finish_export(list, filename, "following list")
}

/// Export the members of an organization to a CSV file.
pub async fn export_org_members(client: &FollowClient, org: &str, filename: &Path) -> Result<()> {
    let list = client.org_members(org).await;
    finish_export(list, filename, &format!("members of {org}"))
}

fn finish_export(list: UserList, filename: &Path, what: &str) -> Result<()> {
    if let Some(truncation) = list.truncation() {
        warn!(what, %truncation, "export is partial");
        println!("⚠️  Export of {what} is partial ({truncation})");
    }

    store::save_accounts(filename, list.accounts())?;
    println!(
        "✅ Saved {} accounts to {}",
        list.len(),
        filename.display()
    );
    Ok(())
}
