//! raycast CLI - render a scene file to a PPM image
//!
//! ```text
//! raycast <width> <height> <scene.json> <output.ppm>
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use raycast_math::Color;
use raycast_ppm::{write_ppm_file, PpmFormat, PpmMeta};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "raycast")]
#[command(about = "Render a scene of spheres and planes to a PPM image", long_about = None)]
struct Cli {
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
    /// Scene description file
    scene: PathBuf,
    /// Output image (.ppm)
    output: PathBuf,

    /// PPM variant to write
    #[arg(long, value_enum, default_value_t = Format::P6)]
    format: Format,

    /// Color for pixels that hit nothing, as r,g,b in [0, 1]
    #[arg(long, value_parser = parse_color, default_value = "0,0,0")]
    background: Color,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// ASCII samples
    P3,
    /// Binary samples
    P6,
}

impl From<Format> for PpmFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::P3 => PpmFormat::Ascii,
            Format::P6 => PpmFormat::Binary,
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(format!("invalid color channel '{part}'")),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    match channels[..] {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("expected r,g,b, got {} values", channels.len())),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let parsed = raycast_scene::read_scene(&cli.scene)
        .with_context(|| format!("Failed to load scene {}", cli.scene.display()))?;
    let scene = parsed.scene.with_background(cli.background);
    info!(
        objects = scene.objects.len(),
        warnings = parsed.warnings.len(),
        "loaded {}",
        cli.scene.display()
    );

    let frame = raycast_render::render(&scene, cli.width, cli.height)
        .with_context(|| format!("Failed to render {}", cli.scene.display()))?;

    write_image(&cli.output, frame.pixels(), frame.width(), frame.height(), cli.format)?;
    info!("wrote {}x{} image to {}", frame.width(), frame.height(), cli.output.display());

    Ok(())
}

fn write_image(
    path: &Path,
    pixels: &[[u8; 3]],
    width: usize,
    height: usize,
    format: Format,
) -> Result<()> {
    let meta = PpmMeta::new(width, height).with_format(format.into());
    write_ppm_file(path, pixels, &meta)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SCENE: &str = r#"[
  {"type": "camera", "width": 4, "height": 4},
  {"type": "sphere", "color": [1, 0, 0], "position": [0, 0, 5], "radius": 1}
]"#;

    fn cli(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("raycast").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("1,0.5,0").unwrap(), Color::new(1.0, 0.5, 0.0));
        assert_eq!(parse_color(" 0, 0 , 1").unwrap(), Color::new(0.0, 0.0, 1.0));
        assert!(parse_color("1,0").is_err());
        assert!(parse_color("1,0,0,0").is_err());
        assert!(parse_color("red,0,0").is_err());
        assert!(parse_color("inf,0,0").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = cli(&["640", "480", "scene.json", "out.ppm"]).unwrap();
        assert_eq!(cli.width, 640);
        assert_eq!(cli.height, 480);
        assert_eq!(cli.format, Format::P6);
        assert_eq!(cli.background, Color::zeros());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_options() {
        let cli = cli(&[
            "8", "6", "s.json", "o.ppm", "--format", "p3", "--background", "0,0,1", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::P3);
        assert_eq!(cli.background, Color::new(0.0, 0.0, 1.0));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_missing_arguments_is_usage_error() {
        let err = cli(&["640", "480", "scene.json"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(cli(&["wide", "480", "scene.json", "out.ppm"]).is_err());
    }

    #[test]
    fn test_run_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.json");
        let output = dir.path().join("out.ppm");
        fs::write(&scene, SCENE).unwrap();

        let args = cli(&[
            "5",
            "5",
            scene.to_str().unwrap(),
            output.to_str().unwrap(),
            "--background",
            "0,0,1",
        ])
        .unwrap();
        run(&args).unwrap();

        let data = fs::read(&output).unwrap();
        let header = b"P6\n5 5\n255\n";
        assert_eq!(&data[..header.len()], header);
        let body = &data[header.len()..];
        assert_eq!(body.len(), 5 * 5 * 3);
        // Corner is background, center is the sphere
        assert_eq!(&body[..3], &[0, 0, 255]);
        let center = (2 * 5 + 2) * 3;
        assert_eq!(&body[center..center + 3], &[255, 0, 0]);
    }

    #[test]
    fn test_run_ascii_output() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.json");
        let output = dir.path().join("out.ppm");
        fs::write(&scene, SCENE).unwrap();

        let args = cli(&[
            "1",
            "1",
            scene.to_str().unwrap(),
            output.to_str().unwrap(),
            "--format",
            "p3",
        ])
        .unwrap();
        run(&args).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "P3\n1 1\n255\n255\n0\n0\n");
    }

    #[test]
    fn test_run_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("bad.json");
        fs::write(&scene, "[\n  {\"type\": \"cube\"}\n]").unwrap();

        let args = cli(&["4", "4", scene.to_str().unwrap(), "out.ppm"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn test_run_without_camera_fails() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("empty.json");
        let output = dir.path().join("out.ppm");
        fs::write(&scene, "[]").unwrap();

        let args = cli(&["4", "4", scene.to_str().unwrap(), output.to_str().unwrap()]).unwrap();
        assert!(run(&args).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_rejects_oversized_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.json");
        let output = dir.path().join("out.ppm");
        fs::write(&scene, SCENE).unwrap();

        let args = cli(&[
            "8589934592",
            "8589934592",
            scene.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid resolution"), "{err:#}");
        assert!(!output.exists());
    }

    #[test]
    fn test_run_missing_scene_file() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("nope.json");
        let args = cli(&["4", "4", scene.to_str().unwrap(), "out.ppm"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
