use color_eyre::eyre::Result;
use tinta_protocol::{ApiResponse, ThemeRequest, ThemeService};

use crate::config::OutputFormat;
use crate::output::print_json;

pub fn run_preview(
    service: &ThemeService,
    request: &ThemeRequest,
    output: OutputFormat,
) -> Result<()> {
    match service.preview(request) {
        Ok(preview) => print_json(&ApiResponse::ok(preview), output),
        Err(rejection) => {
            print_json(&rejection.body(), output)?;
            std::process::exit(1);
        }
    }
}

/// Nothing is persisted; the accepted payload is printed for the caller to store.
pub fn run_save(
    service: &ThemeService,
    request: &ThemeRequest,
    output: OutputFormat,
) -> Result<()> {
    match service.save(request) {
        Ok(saved) => print_json(&ApiResponse::ok(saved).with_message("Theme saved"), output),
        Err(rejection) => {
            print_json(&rejection.body(), output)?;
            std::process::exit(1);
        }
    }
}
