use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::batch::{BatchReport, BatchRunner, FollowAction, MutationKind};
use crate::github::{Account, FollowClient, UserList};
use crate::store;

/// Follow every account listed in a CSV file, one call per `delay_secs`.
pub async fn follow_from_csv(client: &FollowClient, filename: &Path, delay_secs: u64) -> Result<()> {
    let accounts = store::load_accounts(filename)?;
    run_batch(
        client,
        accounts,
        MutationKind::Follow,
        delay_secs,
        "Following users".to_string(),
    )
    .await
}

/// Unfollow every account listed in a CSV file.
pub async fn unfollow_from_csv(
    client: &FollowClient,
    filename: &Path,
    delay_secs: u64,
) -> Result<()> {
    let accounts = store::load_accounts(filename)?;
    run_batch(
        client,
        accounts,
        MutationKind::Unfollow,
        delay_secs,
        "Unfollowing users".to_string(),
    )
    .await
}

/// Follow every member of an organization, fetched live.
pub async fn follow_org(client: &FollowClient, org: &str, delay_secs: u64) -> Result<()> {
    let list = client.org_members(org).await;
    warn_if_partial(&list, org);
    run_batch(
        client,
        list.into_accounts(),
        MutationKind::Follow,
        delay_secs,
        format!("Following members of {org}"),
    )
    .await
}

/// Unfollow every member of an organization, fetched live.
pub async fn unfollow_org(client: &FollowClient, org: &str, delay_secs: u64) -> Result<()> {
    let list = client.org_members(org).await;
    warn_if_partial(&list, org);
    run_batch(
        client,
        list.into_accounts(),
        MutationKind::Unfollow,
        delay_secs,
        format!("Unfollowing members of {org}"),
    )
    .await
}

fn warn_if_partial(list: &UserList, org: &str) {
    if let Some(truncation) = list.truncation() {
        warn!(org, %truncation, "member list is partial");
        println!("⚠️  Member list for {org} is partial ({truncation}); continuing with {} accounts", list.len());
    }
}

async fn run_batch(
    client: &FollowClient,
    accounts: Vec<Account>,
    kind: MutationKind,
    delay_secs: u64,
    label: String,
) -> Result<()> {
    let bar = ProgressBar::new(accounts.len() as u64)
        .with_style(ProgressStyle::with_template("{msg} [{wide_bar}] {pos}/{len}").unwrap())
        .with_message(label);

    let runner = BatchRunner::with_delay_secs(delay_secs);
    let action = FollowAction::new(client, kind);
    let report = runner.run(&accounts, &action, &bar).await;
    bar.finish();

    print_summary(&report, kind);
    Ok(())
}

fn print_summary(report: &BatchReport, kind: MutationKind) {
    if report.failures.is_empty() {
        println!(
            "✅ {} call succeeded for all {} accounts",
            kind.verb(),
            report.attempted
        );
        return;
    }

    println!(
        "⚠️  {} of {} {} calls failed:",
        report.failures.len(),
        report.attempted,
        kind.verb()
    );
    for failure in &report.failures {
        println!("   → {}: {}", failure.username, failure.reason);
    }
}
