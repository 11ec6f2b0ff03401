mod export;
mod mutate;

pub use export::{export_following, export_org_members};
pub use mutate::{follow_from_csv, follow_org, unfollow_from_csv, unfollow_org};
