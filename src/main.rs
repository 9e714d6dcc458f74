// SPDX-License-Identifier: MPL-2.0
use showreel::catalog::{self, Catalog};
use showreel::config;
use showreel::host::SelectionHost;
use showreel::i18n::I18n;
use showreel::infrastructure::{AutoplayPolicy, SimulatedOptions, SimulatedSurface};
use showreel::video_player::{ControlsView, Effect, PlayerSettings};
use std::path::PathBuf;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(250);

const HELP: &str = "\
showreel - headless showcase player

USAGE:
  showreel [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, pt-BR)
  --config-dir <DIR>     Read settings.toml from DIR
  --catalog <FILE>       Load the catalog from a TOML file
  --block-autoplay       Refuse the first play request after each load
  --duration <SECS>      Simulated media duration [default: 5]
  --cycles <N>           Stop after N passes over the catalog [default: 1]
  -h, --help             Print help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
    block_autoplay: bool,
    duration_secs: f64,
    cycles: usize,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        block_autoplay: args.contains("--block-autoplay"),
        duration_secs: args.opt_value_from_str("--duration")?.unwrap_or(5.0),
        cycles: args.opt_value_from_str("--cycles")?.unwrap_or(1),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn load_catalog(flags: &Flags, config: &config::Config) -> Catalog {
    let Some(path) = flags.catalog.as_ref().or(config.catalog.path.as_ref()) else {
        return Catalog::builtin();
    };
    match catalog::load_from_path(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to load catalog {}: {err}", path.display());
            log::info!("Falling back to the bundled catalog");
            Catalog::builtin()
        }
    }
}

fn describe(view: &ControlsView) {
    match view {
        ControlsView::Placeholder { message } => log::info!("{message}"),
        ControlsView::Active(controls) => log::info!(
            "[{}] {} - {}  {}/{}  {} | {}",
            controls.heading,
            controls.title,
            controls.artist,
            controls.elapsed,
            controls.total,
            controls.transport_label,
            controls.volume_label,
        ),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    let i18n = I18n::new(flags.lang.clone(), &config);
    if let Some(key) = warning {
        log::warn!("{}", i18n.tr(&key));
    }

    let catalog = load_catalog(&flags, &config);
    let catalog_len = catalog.len();
    let options = SimulatedOptions {
        autoplay: if flags.block_autoplay {
            AutoplayPolicy::Block
        } else {
            AutoplayPolicy::Allow
        },
        media_duration_secs: flags.duration_secs.max(0.5),
        ..SimulatedOptions::default()
    };
    let (surface, mut events) = SimulatedSurface::new(options);
    let mut host = SelectionHost::with_initial_selection(
        catalog,
        surface,
        PlayerSettings::from(&config.player),
    );
    describe(&ControlsView::from_state(host.player().state(), &i18n));

    let target_selections = catalog_len * flags.cycles.max(1);
    let mut selections = 1;
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                host.player_mut().surface_mut().advance(TICK);
            }
            Some(message) = events.recv() => {
                let generation = host.player().state().generation();
                match host.handle_surface_event(message) {
                    Effect::None => continue,
                    Effect::PlayRefused { error } => {
                        log::warn!("{}", i18n.tr(error.i18n_key()));
                        // Stand-in for the user pressing play after a refusal.
                        host.player_mut().toggle_play_pause();
                    }
                    Effect::StateChanged | Effect::Ended => {}
                }
                // A new generation means the host moved on to the next video.
                if host.player().state().generation() != generation {
                    if selections >= target_selections {
                        break;
                    }
                    selections += 1;
                    describe(&ControlsView::from_state(host.player().state(), &i18n));
                }
            }
        }
    }

    log::info!("Played {selections} videos");
}
