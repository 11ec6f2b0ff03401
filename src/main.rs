use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gh_follower::cli::commands;
use gh_follower::config::Credentials;
use gh_follower::github::FollowClient;
use gh_follower::telemetry;

#[derive(Parser)]
#[command(name = "gh-follower")]
#[command(about = "Bulk follow/unfollow GitHub accounts from locally cached CSV lists")]
#[command(
    long_about = "gh-follower exports the accounts you follow (or an organization's members) \
                  to CSV, and follows/unfollows every account in such a list with a fixed \
                  delay between calls to stay under GitHub's rate limits. Credentials come \
                  from GITHUB_USERNAME and GITHUB_TOKEN (a .env file is honored)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export accounts the authenticated user follows to a CSV file
    ExportFollowingUsersToCsv {
        /// Destination CSV file
        filename: PathBuf,
    },
    /// Export members of an organization to a CSV file
    ExportOrgMembersToCsv {
        /// Organization login
        org: String,
        /// Destination CSV file
        filename: PathBuf,
    },
    /// Follow every account listed in a CSV file
    FollowUsersFromCsv {
        /// CSV file with Username,URL columns
        filename: PathBuf,
        /// Delay between follow requests in seconds
        #[arg(short = 'd', long, default_value_t = 30)]
        delay: u64,
    },
    /// Unfollow every account listed in a CSV file
    UnfollowUsersFromCsv {
        /// CSV file with Username,URL columns
        filename: PathBuf,
        /// Delay between unfollow requests in seconds
        #[arg(short = 'd', long, default_value_t = 5)]
        delay: u64,
    },
    /// Follow every member of an organization
    FollowOrgMembers {
        /// Organization login
        org: String,
        /// Delay between follow requests in seconds
        #[arg(short = 'd', long, default_value_t = 30)]
        delay: u64,
    },
    /// Unfollow every member of an organization
    UnfollowOrgMembers {
        /// Organization login
        org: String,
        /// Delay between unfollow requests in seconds
        #[arg(short = 'd', long, default_value_t = 5)]
        delay: u64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_telemetry()?;

    let cli = Cli::parse();
    let credentials = Credentials::from_env()?;
    let client = FollowClient::new(credentials)?;

    tokio::runtime::Runtime::new()?.block_on(async {
        match cli.command {
            Commands::ExportFollowingUsersToCsv { filename } => {
                commands::export_following(&client, &filename).await
            }
            Commands::ExportOrgMembersToCsv { org, filename } => {
                commands::export_org_members(&client, &org, &filename).await
            }
            Commands::FollowUsersFromCsv { filename, delay } => {
                commands::follow_from_csv(&client, &filename, delay).await
            }
            Commands::UnfollowUsersFromCsv { filename, delay } => {
                commands::unfollow_from_csv(&client, &filename, delay).await
            }
            Commands::FollowOrgMembers { org, delay } => {
                commands::follow_org(&client, &org, delay).await
            }
            Commands::UnfollowOrgMembers { org, delay } => {
                commands::unfollow_org(&client, &org, delay).await
            }
        }
    })
}
