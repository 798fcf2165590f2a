use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use scout::commands;

#[derive(Parser)]
#[command(name = "scout")]
#[command(
  about = "Scout - GitHub issue recommendation client\nMatches your profile description against open issues and suggests where to contribute"
)]
#[command(version)]
struct Cli {
  /// Profile description text (reads stdin to EOF when omitted)
  profile: Option<String>,

  /// Read the profile description from a file
  #[arg(short, long, value_name = "PATH", conflicts_with = "profile")]
  file: Option<PathBuf>,

  /// Interactive session: edit, submit, and resubmit in a loop
  #[arg(short, long, conflicts_with_all = ["profile", "file"])]
  interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.interactive {
    commands::interactive().await
  } else {
    let profile = commands::read_profile(cli.profile, cli.file)?;
    commands::recommend(profile).await
  }
}
