//! folio - Entry Point

use clap::Parser;
use folio::audio::{AudioHandle, ClickSfx, CommandPlayer, NullAudio, SilentClick, TerminalBell};
use folio::config::ResolvedConfig;
use folio::model::{AppError, Portfolio};
use folio::preferences::{load_theme, JsonPreferenceStore, PreferenceStore};
use folio::state::{FsImageProbe, ThemeMode};
use folio::view::{Collaborators, ColorConfig, RunOptions};
use std::path::PathBuf;
use tracing::{debug, info};

/// folio - a personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio with a project carousel, experience tabs, and a cat gallery")]
pub struct Args {
    /// Portfolio content file (TOML). Uses the built-in portfolio if omitted
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Disable background music and click sounds
    #[arg(long)]
    pub no_music: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Theme forced by `--dark` / `--light`, if any.
    fn theme_override(&self) -> Option<ThemeMode> {
        match (self.dark, self.light) {
            (true, _) => Some(ThemeMode::Dark),
            (_, true) => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run_app(args)?;
    Ok(())
}

fn run_app(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);
        folio::config::apply_cli_overrides(
            with_env,
            args.theme_override(),
            args.content.clone(),
            args.no_music,
        )
    };

    folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let today = chrono::Local::now().date_naive();
    let portfolio = folio::content::load_portfolio(config.content_path.as_deref(), today)?;
    folio::logging::greet(&portfolio.profile.name);

    let preferences = JsonPreferenceStore::new(config.preferences_path.clone());
    let theme = resolve_theme(config.theme, &preferences);

    let options = RunOptions {
        theme,
        transition: config.transition,
        tick: config.tick,
        colors: ColorConfig::from_env_and_args(args.no_color),
        ..RunOptions::new(today)
    };

    let click: Box<dyn ClickSfx> = if config.music_enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentClick)
    };

    let collaborators = Collaborators {
        audio: build_audio(&config, &portfolio),
        click,
        preferences: Box::new(preferences),
        probe: Box::new(FsImageProbe),
    };

    folio::view::run(portfolio, options, collaborators)?;

    Ok(())
}

/// Explicit theme settings win over the stored preference.
fn resolve_theme(configured: Option<ThemeMode>, store: &dyn PreferenceStore) -> ThemeMode {
    configured.unwrap_or_else(|| load_theme(store))
}

/// Music player for the resolved config, or a handle that always refuses.
fn build_audio(config: &ResolvedConfig, portfolio: &Portfolio) -> Box<dyn AudioHandle> {
    let player = if config.music_enabled {
        portfolio
            .music
            .as_ref()
            .filter(|file| file.exists())
            .and_then(|file| CommandPlayer::new(&config.music_command, file.clone()))
    } else {
        None
    };

    match player {
        Some(mut player) => {
            player.set_volume(f32::from(config.music_volume) / 100.0);
            player.set_loop(config.music_loop);
            Box::new(player)
        }
        None => {
            debug!("background music unavailable");
            Box::new(NullAudio)
        }
    }
}
