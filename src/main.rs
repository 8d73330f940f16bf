use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use wpiptv::{
    DEFAULT_BASE_URL, DEFAULT_PLAYLIST_FILENAME, NoopReporter, ProgressEvent, ProgressReporter,
    ReqwestClient, SharedProgressReporter, generate_playlist,
};

// Emoji with fallback for terminals without Unicode support
static TELEVISION: Emoji<'_, '_> = Emoji("📺 ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "[d] ");
static CHANNEL: Emoji<'_, '_> = Emoji("📡 ", "[+] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[-] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");

/// Build an IPTV playlist from the live-stream links published on a WordPress site
#[derive(Parser, Debug)]
#[command(name = "wpiptv")]
#[command(about = "Build an IPTV playlist from the live-stream links published on a WordPress site")]
#[command(version)]
struct Args {
    /// Base URL of the site's WordPress REST API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Playlist file to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_PLAYLIST_FILENAME)]
    output: PathBuf,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using indicatif for terminal output
struct IndicatifReporter {
    main_bar: ProgressBar,
    current_category: Mutex<String>,
    channels_found: Mutex<usize>,
}

impl IndicatifReporter {
    fn new() -> Self {
        let main_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let main_bar = ProgressBar::new_spinner();
        main_bar.set_style(main_style);
        main_bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            main_bar,
            current_category: Mutex::new(String::new()),
            channels_found: Mutex::new(0),
        }
    }

    /// Remove the spinner line, e.g. before an error is printed
    fn clear(&self) {
        self.main_bar.finish_and_clear();
    }

    fn warn(&self, message: String) {
        self.main_bar
            .println(format!("  {WARNING}{}", message.dimmed()));
    }
}

impl ProgressReporter for IndicatifReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingCategories { url } => {
                self.main_bar
                    .set_message(format!("{SEARCH}Fetching categories: {}", url.cyan()));
            }

            ProgressEvent::CategoriesListed { total } => {
                self.main_bar.set_message(format!(
                    "{SEARCH}{} categories found",
                    total.to_string().cyan()
                ));
            }

            ProgressEvent::CategorySkipped { id, name } => {
                self.warn(format!(
                    "Skipping category without id or name (id: {}, name: {})",
                    id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                    name.unwrap_or_else(|| "-".to_string())
                ));
            }

            ProgressEvent::FetchingCategory { name, .. } => {
                self.main_bar
                    .println(format!("{FOLDER}{}", name.bold().green()));
                *self.current_category.lock().unwrap() = name;
            }

            ProgressEvent::FetchingPage { page, .. } => {
                let category = self.current_category.lock().unwrap().clone();
                let found = *self.channels_found.lock().unwrap();
                self.main_bar.set_message(format!(
                    "{SEARCH}{} • page {} • {} channels so far",
                    category.cyan(),
                    page.to_string().cyan(),
                    found.to_string().yellow()
                ));
            }

            ProgressEvent::FetchFailed { url, error } => {
                self.main_bar.println(format!(
                    "  {FAILURE}{} - {}",
                    url.red(),
                    error.red()
                ));
            }

            ProgressEvent::PageParseFailed {
                category_id,
                page,
                error,
            } => {
                self.main_bar.println(format!(
                    "  {FAILURE}{} - {}",
                    format!("Invalid JSON on page {page} of category {category_id}").red(),
                    error.red()
                ));
            }

            ProgressEvent::PageEmpty { category_id, page } => {
                self.warn(format!(
                    "No posts on page {page} of category {category_id}"
                ));
            }

            ProgressEvent::CategoryEmpty { name } => {
                self.warn(format!("No posts found in category {name}"));
            }

            ProgressEvent::PostSkipped {
                category_name,
                post_id,
            } => {
                self.warn(format!(
                    "Skipping post {} in {category_name}: missing id, title or content",
                    post_id.map_or_else(|| "-".to_string(), |id| id.to_string())
                ));
            }

            ProgressEvent::PostHarvested { title, streams, .. } => {
                if streams > 0 {
                    *self.channels_found.lock().unwrap() += streams;
                    self.main_bar.println(format!(
                        "  {CHANNEL}{} {}",
                        title,
                        format!("({streams} streams)").dimmed()
                    ));
                }
            }

            ProgressEvent::PlaylistWritten { path, entries } => {
                self.main_bar.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} channels written to {}",
                    "Playlist ready:".bold().green(),
                    entries.to_string().green().bold(),
                    path.cyan()
                );
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            TELEVISION,
            "wpiptv".bold().magenta(),
            "- WordPress IPTV Playlist Builder".dimmed()
        );
    }

    let client = ReqwestClient::new();

    let spinner = (!args.quiet).then(|| Arc::new(IndicatifReporter::new()));
    let reporter: SharedProgressReporter = match &spinner {
        Some(spinner) => spinner.clone() as SharedProgressReporter,
        None => NoopReporter::shared(),
    };

    let result = generate_playlist(&client, &args.base_url, &args.output, reporter).await;
    if let (Err(_), Some(spinner)) = (&result, &spinner) {
        spinner.clear();
    }
    let result = result.context("Failed to generate playlist")?;

    if !args.quiet {
        println!(
            "   {} categories ({} skipped), {} posts ({} skipped)",
            result.categories_processed.to_string().cyan(),
            result.categories_skipped.to_string().yellow(),
            result.posts_processed.to_string().cyan(),
            result.posts_skipped.to_string().yellow()
        );
    }

    Ok(())
}
