// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bildreihe — Labelled image row generator
//
// Entry point. Initialises logging, applies caller policy (file types, image
// limit, height range), runs the compositor, and writes the PNG.

mod cli;
mod services;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bildreihe_compose::integrity::hash_bytes;
use bildreihe_compose::{FontSource, RowCompositor};
use bildreihe_core::BildreiheError;
use bildreihe_core::human_errors::{HumanError, humanize_error, humanize_warning};

use cli::Args;
use services::config::{apply_overrides, load_config};
use services::inputs::collect_inputs;

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Bildreihe starting");

    match run(&args) {
        Ok(Some(path)) => {
            tracing::debug!(path = %path.display(), "done");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("No images given. Pass up to five PNG or JPEG files to combine them into one row.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Some(core) = err.downcast_ref::<BildreiheError>() {
                report(&humanize_error(core));
            }
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Compose the requested row and write it out. Returns the output path, or
/// `None` when there was nothing to compose.
fn run(args: &Args) -> Result<Option<PathBuf>> {
    let mut config = load_config(args.config.as_deref()).context("Failed to load settings")?;
    apply_overrides(&mut config, args);

    let height = config.validate_height(args.height.unwrap_or(config.default_height))?;

    let batch = collect_inputs(&args.images, config.max_images)?;
    if let Some(truncated) = batch.truncation() {
        report(&humanize_error(&truncated));
    }

    let font_source =
        FontSource::named(config.label_font.as_str()).with_dirs(config.font_dirs.iter().cloned());
    let compositor = RowCompositor::with_font_source(font_source);

    let Some(row) = compositor
        .compose(&batch.buffers, height)
        .context("Failed to combine images")?
    else {
        return Ok(None);
    };

    if let Some(warning) = &row.warning {
        report(&humanize_warning(warning));
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_file_name));
    std::fs::write(&output, &row.png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let labels: Vec<&str> = row.tiles.iter().map(|tile| tile.label.as_str()).collect();
    tracing::info!(
        path = %output.display(),
        sha256 = %hash_bytes(&row.png),
        "Composite written"
    );
    println!(
        "Combined {} image(s) ({}) into {}x{} -> {}",
        row.tiles.len(),
        labels.join(", "),
        row.width,
        row.height,
        output.display()
    );

    Ok(Some(output))
}

fn report(human: &HumanError) {
    eprintln!("{}", human.message);
    eprintln!("  {}", human.suggestion);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 140, 200])))
            .save(&path)
            .unwrap();
        path
    }

    fn args_for(dir: &std::path::Path, extra: &[&str], images: &[PathBuf]) -> Args {
        let output = dir.join("row.png");
        let mut argv: Vec<String> = vec![
            "bildreihe".into(),
            "-o".into(),
            output.display().to_string(),
            "--font".into(),
            "no-such-font-for-labels.ttf".into(),
        ];
        argv.extend(extra.iter().map(|s| (*s).to_owned()));
        argv.extend(images.iter().map(|p| p.display().to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn writes_composite_at_requested_height() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec![
            write_png(dir.path(), "a.png", 100, 200),
            write_png(dir.path(), "b.png", 300, 100),
        ];
        let args = args_for(dir.path(), &["-H", "400"], &images);

        let output = run(&args).unwrap().unwrap();
        let row = image::open(&output).unwrap();
        assert_eq!((row.width(), row.height()), (1400, 400));
    }

    #[test]
    fn keeps_only_first_five_images() {
        let dir = tempfile::tempdir().unwrap();
        let images: Vec<PathBuf> = (0..6)
            .map(|i| write_png(dir.path(), &format!("{i}.png"), 50, 50))
            .collect();
        let args = args_for(dir.path(), &["-H", "200"], &images);

        let output = run(&args).unwrap().unwrap();
        let row = image::open(&output).unwrap();
        assert_eq!(row.width(), 5 * 200);
    }

    #[test]
    fn no_images_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(dir.path(), &[], &[]);
        assert!(run(&args).unwrap().is_none());
        assert!(!dir.path().join("row.png").exists());
    }

    #[test]
    fn out_of_range_height_fails_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec![dir.path().join("never-read.png")];
        let args = args_for(dir.path(), &["-H", "1000"], &images);

        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BildreiheError>(),
            Some(BildreiheError::HeightOutOfRange { height: 1000, .. })
        ));
    }

    #[test]
    fn corrupt_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_png(dir.path(), "good.png", 40, 40);
        let bad = dir.path().join("bad.jpg");
        std::fs::write(&bad, b"not a jpeg").unwrap();
        let args = args_for(dir.path(), &[], &[good, bad]);

        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BildreiheError>(),
            Some(BildreiheError::Decode { position: 2, .. })
        ));
        assert!(!dir.path().join("row.png").exists());
    }
}
