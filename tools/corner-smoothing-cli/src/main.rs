mod preferences;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use corner_smoothing::{Coefficients, PresetStore, SceneItem, Settings, SmoothingSession, export, round_off};
use fern::colors::{Color, ColoredLevelConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "corner-smoothing")]
#[command(about = "Tune the rounded corners of the selected points in a JSON scene and draw their curvature profile")]
struct Args {
	/// JSON file holding an array of scene items
	input: PathBuf,

	/// Use the coefficients of a stored preset
	#[arg(short, long, conflicts_with_all = ["coef1", "coef2"])]
	preset: Option<String>,

	/// Anchor offset, as a fraction of the handle length
	#[arg(long)]
	coef1: Option<f64>,

	/// Handle offset, as a fraction of the handle length
	#[arg(long)]
	coef2: Option<f64>,

	/// RON settings file holding presets and the last used coefficients, created if missing
	#[arg(short, long)]
	settings: Option<PathBuf>,

	/// Store the coefficients used by this run as a new preset, named after the values if the name is empty
	#[arg(long, requires = "settings")]
	save_preset: Option<String>,

	/// Skip building the curvature profile
	#[arg(long)]
	no_profile: bool,

	/// Write an SVG rendering of the paths and their curvature profile
	#[arg(long)]
	svg: Option<PathBuf>,

	/// Output file for the smoothed scene (defaults to stdout)
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Log more details, repeat for more
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn setup_logging(verbose: u8) -> Result<()> {
	let level = match verbose {
		0 => log::LevelFilter::Warn,
		1 => log::LevelFilter::Info,
		2 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};
	let colors = ColoredLevelConfig::new().debug(Color::Magenta).info(Color::Green).error(Color::Red);

	fern::Dispatch::new()
		.chain(std::io::stderr())
		.level(level)
		.format(move |out, message, record| {
			out.finish(format_args!(
				"[{}]{} {}",
				// Only the level is colored
				colors.color(record.level()),
				chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
				message
			))
		})
		.apply()
		.context("Failed to install the logger")
}

/// Resolve the coefficients of this run from the command line, falling back to the stored ones.
fn apply_coefficients(settings: &mut Settings, args: &Args) -> Result<()> {
	if let Some(name) = &args.preset {
		settings.select_preset(name)?;
	} else if args.coef1.is_some() || args.coef2.is_some() {
		let current = settings.coefficients;
		settings.set_coefficients(Coefficients::new(args.coef1.unwrap_or(current.coef1), args.coef2.unwrap_or(current.coef2)))?;
	}
	log::info!("Smoothing with coefficients {} and {}", settings.coefficients.coef1, settings.coefficients.coef2);
	Ok(())
}

/// Describe the coefficients of this run and the stored presets, marking the preset in use.
fn settings_summary(settings: &Settings) -> String {
	let Coefficients { coef1, coef2 } = settings.coefficients;
	let selected = settings.selected_preset();

	let mut summary = format!("Anchor coefficient {}, handle coefficient {}", round_off(coef1), round_off(coef2));
	for (index, preset) in settings.presets.iter().enumerate() {
		let marker = if selected == Some(index) { '*' } else { ' ' };
		summary.push_str(&format!("\n{marker} {}: {} - {}", preset.name, preset.coef1, preset.coef2));
	}
	summary
}

fn read_scene(path: &Path) -> Result<Vec<SceneItem>> {
	let data = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	serde_json::from_str(&data).with_context(|| format!("{} is not a valid scene", path.display()))
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
	match path {
		Some(path) => std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display())),
		None => {
			println!("{contents}");
			Ok(())
		}
	}
}

fn main() -> Result<ExitCode> {
	let args = Args::parse();
	setup_logging(args.verbose)?;

	let mut settings = match &args.settings {
		Some(path) => preferences::read(path)?,
		None => Settings::default(),
	};
	apply_coefficients(&mut settings, &args)?;
	if settings.show_ui {
		eprintln!("{}", settings_summary(&settings));
	}

	let mut items = read_scene(&args.input)?;
	let mut session = SmoothingSession::new(settings.profile.clone());
	let report = match session.run(&mut items, settings.coefficients, settings.show_profile && !args.no_profile) {
		Ok(report) => report,
		// Already logged as a warning
		Err(error) if error.is_notice() => return Ok(ExitCode::FAILURE),
		Err(error) => return Err(error.into()),
	};
	session.restore_selection(&mut items);
	log::info!("Visited {} selected points", report.visited_points);

	let scene = serde_json::to_string_pretty(&items).context("Failed to serialize the smoothed scene")?;
	write_output(args.output.as_deref(), &scene)?;

	if let Some(svg_path) = &args.svg {
		let profile_paths = report.profile_paths().cloned().collect::<Vec<_>>();
		let svg = export::render_svg(&items, &profile_paths);
		std::fs::write(svg_path, svg).with_context(|| format!("Failed to write {}", svg_path.display()))?;
	}

	if let Some(path) = &args.settings {
		if let Some(name) = &args.save_preset {
			let name = if name.is_empty() { PresetStore::suggested_name(settings.coefficients) } else { name.clone() };
			settings.presets.add(name, settings.coefficients);
			settings.validate()?;
		}
		preferences::write(path, &settings)?;
	}

	Ok(ExitCode::SUCCESS)
}
