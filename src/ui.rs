// UI layer: the interactive setup flow, using `dialoguer` for input.
// The functions are small and synchronous to make the flow easy to follow.

use crate::credential::{key_file_path, CaptureOutcome, Credential};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

/// Run the setup flow once: print the instructions, prompt for the key
/// and persist it. Returns `Saved` or `Skipped`; a filesystem error
/// during the save propagates to the caller.
///
/// Note: `Input::interact_text()` blocks until the operator presses
/// Enter; an empty line means "skip".
pub fn run_setup() -> Result<CaptureOutcome> {
    print_instructions();

    let raw: String = Input::new()
        .with_prompt("Enter your Firecrawl API key (or press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let credential = match Credential::from_input(&raw) {
        Some(credential) => credential,
        None => {
            println!(
                "{}",
                style("Skipping Firecrawl setup - AI research will be limited").yellow()
            );
            return Ok(CaptureOutcome::Skipped);
        }
    };

    let path = key_file_path();
    // indicatif's spinner gives feedback while the key is written.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Saving API key...");
    // small delay to make the spinner visible
    thread::sleep(Duration::from_millis(300));

    let result = credential.persist(&path);
    spinner.finish_and_clear();
    result?;

    println!(
        "{}",
        style(format!("Firecrawl API key saved to {}", path.display())).green()
    );
    Ok(CaptureOutcome::Saved)
}

/// Print the fixed banner and signup instructions. Informational only;
/// the wording is not part of the tool's contract.
fn print_instructions() {
    println!("{}", style("FIRECRAWL API SETUP").bold());
    println!("{}", "=".repeat(40));
    println!("Firecrawl provides advanced web scraping and research capabilities");
    println!("for building comprehensive dossiers on decision makers and companies.");
    println!();
    println!("To get a Firecrawl API key:");
    println!("1. Go to https://firecrawl.dev");
    println!("2. Sign up for an account");
    println!("3. Get your API key from the dashboard");
    println!();
}
