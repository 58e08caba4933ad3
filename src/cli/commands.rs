//! Command implementations

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::TomlConfigAdapter;
use crate::app::AppContainer;
use crate::cli::args::{ConfigArgs, ConfigFormat, InfoArgs, TrimArgs};
use crate::domain::model::TrimOutcome;
use crate::probe::FileInfo;
use crate::utils::Utils;

/// Execute the trim command
pub async fn trim(container: &AppContainer, args: TrimArgs) -> Result<ExitCode> {
    info!("Starting trim of {}", args.input.display());

    let outcome = match container.trim_interactor().await {
        Ok(interactor) => interactor.trim_audio(args.to_request()).await,
        Err(e) => {
            warn!("Trim interactor unavailable: {}", e);
            TrimOutcome::failure(&e)
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?
        );
    } else {
        println!("{}", outcome.message);
        if let Some(path) = &outcome.output_path {
            println!("{}", path.display());
        }
    }

    Ok(exit_code(outcome.is_success()))
}

/// Execute the check command
pub async fn check(container: &AppContainer) -> Result<ExitCode> {
    let config = container.config();
    match container
        .execute_port()
        .check_available(config.tool_check_timeout())
        .await
    {
        Ok(()) => {
            println!("FFmpeg is available: {}", config.ffmpeg_binary);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Execute the info command
pub fn info(container: &AppContainer, args: InfoArgs) -> Result<ExitCode> {
    let file_info = container
        .inspect_interactor()
        .inspect_file(&args.input)
        .with_context(|| format!("Failed to inspect {}", args.input.display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&file_info).context("Failed to serialize file info")?
        );
    } else {
        print_file_info(&args, &file_info);
    }

    Ok(exit_code(file_info.exists))
}

fn print_file_info(args: &InfoArgs, file_info: &FileInfo) {
    if !file_info.exists {
        println!("File not found: {}", args.input.display());
        return;
    }

    println!("Name:      {}", file_info.name.as_deref().unwrap_or(""));
    println!(
        "Size:      {} ({} bytes)",
        file_info.size_formatted.as_deref().unwrap_or(""),
        file_info.size.unwrap_or(0)
    );
    println!(
        "Extension: {}",
        file_info.extension.as_deref().unwrap_or("")
    );
    println!(
        "Supported: {}",
        if file_info.is_supported == Some(true) {
            "yes"
        } else {
            "no"
        }
    );
    if let Some(modified) = file_info.modified {
        println!("Modified:  {}", modified.to_rfc3339());
    }
}

/// Execute the config command
pub fn config(container: &AppContainer, args: ConfigArgs) -> Result<ExitCode> {
    let config = container.config();
    let rendered = match args.format {
        ConfigFormat::Toml => TomlConfigAdapter::render(&config)?,
        ConfigFormat::Json => {
            serde_json::to_string_pretty(&*config).context("Failed to serialize configuration")?
        }
    };
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

/// Execute the clean command
pub fn clean(container: &AppContainer) -> Result<ExitCode> {
    let interactor = container.inspect_interactor();
    let report = interactor.clean_temp_dir()?;

    println!(
        "Removed {} file(s), {} from {}",
        report.removed_files,
        Utils::format_file_size(report.removed_bytes),
        interactor.temp_dir().path().display()
    );
    if report.failed > 0 {
        println!("{} file(s) could not be removed", report.failed);
    }

    Ok(exit_code(report.failed == 0))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
