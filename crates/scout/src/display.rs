//! Card rendering for recommended issues
//!
//! Cards go to stdout; the failure alert goes to stderr through a banner so
//! it cannot be mistaken for a result.

use colored::*;
use url::Url;

use crate::api::RecommendationItem;
use crate::log;

const CARD_WIDTH: usize = 80;

fn wrap_words(paragraph: &str, width: usize) -> Vec<String> {
  let mut lines: Vec<String> = Vec::new();

  for word in paragraph.split_whitespace() {
    match lines.last_mut() {
      // A word longer than the width gets its own line rather than a split.
      Some(line) if line.len() + 1 + word.len() <= width => {
        line.push(' ');
        line.push_str(word);
      }
      _ => lines.push(word.to_string()),
    }
  }

  lines
}

/// Wrap text to fit within a specified width, preserving paragraph breaks.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  text
    .split('\n')
    .flat_map(|paragraph| {
      if paragraph.trim().is_empty() {
        vec![String::new()]
      } else {
        wrap_words(paragraph, width)
      }
    })
    .collect()
}

/// Whether an item link is an absolute http(s) URL.
pub fn is_absolute_link(link: &str) -> bool {
  match Url::parse(link) {
    Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
    Err(_) => false,
  }
}

/// Plain (uncolored) lines of one card, for formatting tests.
pub fn card_lines(item: &RecommendationItem) -> Vec<String> {
  let mut lines = wrap_text(&item.title, CARD_WIDTH);
  lines.push(item.repo.clone());
  if is_absolute_link(&item.url) {
    lines.push(format!("View on GitHub -> {}", item.url));
  } else {
    lines.push(format!("(link not resolvable: {})", item.url));
  }
  lines
}

fn print_card(index: usize, item: &RecommendationItem) {
  println!("{} {}", format!("{}.", index + 1).dimmed(), item.title.bold());
  println!("   {}", item.repo.cyan());
  if is_absolute_link(&item.url) {
    println!("   {} {}", "View on GitHub ->".dimmed(), item.url.blue().underline());
  } else {
    println!("   {}", format!("(link not resolvable: {})", item.url).yellow());
  }
  println!();
}

/// Render the result list as cards.
pub fn display_recommendations(items: &[RecommendationItem]) {
  if items.is_empty() {
    println!("No matching issues found. Try a more detailed profile description.");
    return;
  }

  let header = format!("{} recommended issues", items.len());
  println!("{}", header.green().bold());
  println!("{}", log::banner_line(CARD_WIDTH, '='));
  println!();

  for (index, item) in items.iter().enumerate() {
    print_card(index, item);
  }
}

/// The blocking-alert analog: a banner-framed failure message on stderr.
pub fn alert(message: &str) {
  eprintln!("{}", log::banner_line(CARD_WIDTH, '!').red());
  for line in wrap_text(message, CARD_WIDTH) {
    eprintln!("{}", line.red().bold());
  }
  eprintln!("{}", log::banner_line(CARD_WIDTH, '!').red());
}
