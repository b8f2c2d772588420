// Entrypoint for the setup CLI.
// - Keeps `main` small: run the interactive flow and map its outcome to
//   an explicit exit code (0 = key saved, 1 = skipped or failed).

use firecrawl_setup::credential::CaptureOutcome;
use firecrawl_setup::ui::run_setup;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run_setup() {
        Ok(CaptureOutcome::Saved) => ExitCode::SUCCESS,
        Ok(CaptureOutcome::Skipped) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
            ExitCode::from(1)
        }
    }
}
