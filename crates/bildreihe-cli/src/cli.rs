// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Combine up to five images into a single labelled row of uniform height.
#[derive(Parser, Debug)]
#[command(name = "bildreihe")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input images (PNG or JPEG), in display order.
    #[arg(value_name = "IMAGES")]
    pub images: Vec<PathBuf>,

    /// Uniform height in pixels for every image in the row.
    #[arg(short = 'H', long, value_name = "PX")]
    pub height: Option<u32>,

    /// Where to write the combined PNG. Defaults to the configured file name.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON settings file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Label font file name or path.
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,

    /// Extra directory to search for the label font. May be repeated.
    #[arg(long = "font-dir", value_name = "DIR")]
    pub font_dirs: Vec<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "bildreihe",
            "-H",
            "450",
            "-o",
            "row.png",
            "--font",
            "DejaVuSans.ttf",
            "--font-dir",
            "/opt/fonts",
            "a.png",
            "b.jpg",
        ])
        .unwrap();

        assert_eq!(args.height, Some(450));
        assert_eq!(args.output, Some(PathBuf::from("row.png")));
        assert_eq!(args.font.as_deref(), Some("DejaVuSans.ttf"));
        assert_eq!(args.font_dirs, vec![PathBuf::from("/opt/fonts")]);
        assert_eq!(args.images.len(), 2);
        assert!(!args.verbose);
    }

    #[test]
    fn images_are_optional() {
        let args = Args::try_parse_from(["bildreihe"]).unwrap();
        assert!(args.images.is_empty());
        assert!(args.height.is_none());
    }
}
