use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use ppmkit_engine::logging::{init_logging, LoggingConfig};
use ppmkit_engine::raster::{LineMode, PatternRemainder, RasterConfig};

mod output;
mod palette;
mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "ppmkit-studio")]
#[command(about = "Render a demo scene to a plain-text PPM image")]
struct Cli {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = Scene::Curve)]
    scene: Scene,

    /// Output file; defaults to the scene's own file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the image to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    #[arg(long, default_value_t = 400)]
    width: u32,

    #[arg(long, default_value_t = 300)]
    height: u32,

    /// Reproduce historical line and Bézier output exactly
    #[arg(long)]
    legacy: bool,

    /// Line thickness strategy (overrides --legacy for lines)
    #[arg(long, value_enum)]
    line_mode: Option<LineModeArg>,

    /// Bézier parameter steps per curve
    #[arg(long)]
    bezier_steps: Option<u32>,

    /// Let the last checkerboard row and column absorb leftover pixels
    #[arg(long)]
    stretch_pattern: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LineModeArg {
    Axis,
    Perpendicular,
    Legacy,
}

impl From<LineModeArg> for LineMode {
    fn from(arg: LineModeArg) -> Self {
        match arg {
            LineModeArg::Axis => LineMode::Axis,
            LineModeArg::Perpendicular => LineMode::Perpendicular,
            LineModeArg::Legacy => LineMode::Legacy,
        }
    }
}

impl Cli {
    fn raster_config(&self) -> RasterConfig {
        let mut config = if self.legacy { RasterConfig::legacy() } else { RasterConfig::default() };
        if let Some(mode) = self.line_mode {
            config.line_mode = mode.into();
        }
        if let Some(steps) = self.bezier_steps {
            config.bezier_steps = steps;
        }
        if self.stretch_pattern {
            config.pattern_remainder = PatternRemainder::StretchLast;
        }
        config
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.raster_config();
    log::debug!("raster config: {config:?}");

    let canvas = scene::render(cli.scene, cli.width, cli.height, config)?;

    if cli.stdout {
        return output::write_stdout(&canvas);
    }
    let path = cli.output.unwrap_or_else(|| PathBuf::from(canvas.name()));
    output::save(&canvas, &path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..Default::default() }.with_verbosity(cli.verbose));

    run(cli).inspect_err(|err| log::error!("{err:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn legacy_flag_selects_legacy_config() {
        let cli = Cli::parse_from(["ppmkit-studio", "--legacy", "--bezier-steps", "10"]);
        let config = cli.raster_config();
        assert_eq!(config.line_mode, LineMode::Legacy);
        assert_eq!(config.bezier_steps, 10);
    }

    #[test]
    fn line_mode_overrides_legacy() {
        let cli = Cli::parse_from(["ppmkit-studio", "--legacy", "--line-mode", "perpendicular", "--stretch-pattern"]);
        let config = cli.raster_config();
        assert_eq!(config.line_mode, LineMode::Perpendicular);
        assert_eq!(config.pattern_remainder, PatternRemainder::StretchLast);
    }

    #[test]
    fn defaults_render_the_curve_scene() {
        let cli = Cli::parse_from(["ppmkit-studio"]);
        assert_eq!(cli.scene, Scene::Curve);
        assert_eq!((cli.width, cli.height), (400, 300));
        assert_eq!(cli.raster_config(), RasterConfig::default());
    }
}
