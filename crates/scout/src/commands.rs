//! Command handlers for the scout CLI
//!
//! This is the single catch site for submission failures: the error is
//! logged to the diagnostic channel and surfaced as an alert, and the view
//! keeps whatever results it already had.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::process;

use crate::client::HttpRecommender;
use crate::view::RecommenderView;
use crate::{display, log};

/// Resolve the profile text from the argument, a file, or stdin.
pub fn read_profile(profile: Option<String>, file: Option<PathBuf>) -> Result<String> {
  if let Some(text) = profile {
    return Ok(text);
  }

  if let Some(path) = file {
    return std::fs::read_to_string(&path)
      .with_context(|| format!("could not read profile from {}", path.display()));
  }

  let mut text = String::new();
  io::stdin().read_to_string(&mut text).context("could not read profile from stdin")?;
  Ok(text)
}

/// One-shot submission: submit the profile, render the cards, exit 1 on failure.
pub async fn recommend(profile: String) -> Result<()> {
  let mut view = RecommenderView::new(HttpRecommender::new());
  view.set_profile(profile);

  match view.submit().await {
    Ok(()) => {
      display::display_recommendations(view.results().unwrap_or(&[]));
      Ok(())
    }
    Err(e) => {
      log::event_error(&format!("Error fetching recommendations: {e}"));
      display::alert(&format!("Failed to fetch recommendations: {e}"));
      process::exit(1);
    }
  }
}

/// Read one multi-line profile from stdin, terminated by an empty line.
///
/// Returns None on EOF with nothing entered.
fn read_profile_block() -> Result<Option<String>> {
  let mut collected = String::new();

  for line in io::stdin().lock().lines() {
    let line = line.context("could not read profile from stdin")?;
    if line.trim().is_empty() {
      break;
    }
    if !collected.is_empty() {
      collected.push('\n');
    }
    collected.push_str(&line);
  }

  if collected.is_empty() {
    Ok(None)
  } else {
    Ok(Some(collected))
  }
}

/// Interactive session: edit, submit, render, repeat.
///
/// A failed submission shows the alert and leaves the previously rendered
/// cards as the current result set.
pub async fn interactive() -> Result<()> {
  let mut view = RecommenderView::new(HttpRecommender::new());

  log::info("Enter your profile description below.");
  log::info("Finish with an empty line to get recommendations; an empty profile quits.");

  loop {
    eprintln!();
    let Some(profile) = read_profile_block()? else {
      break;
    };

    view.set_profile(profile);
    match view.submit().await {
      Ok(()) => display::display_recommendations(view.results().unwrap_or(&[])),
      Err(e) => {
        log::event_error(&format!("Error fetching recommendations: {e}"));
        display::alert(&format!("Failed to fetch recommendations: {e}"));
        if view.results().is_some() {
          log::warn("Previous recommendations are still the current result set.");
        }
      }
    }
  }

  log::success("Session ended.");
  Ok(())
}
