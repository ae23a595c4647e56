use anyhow::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use upcoming_events::cli::{CliArgs, print_help};
use upcoming_events::clock::SystemClock;
use upcoming_events::config::Config;
use upcoming_events::context::StandardContext;
use upcoming_events::locale;
use upcoming_events::model::LocaleDateFormatter;
use upcoming_events::projector::UpcomingEventsProjector;
use upcoming_events::render;
use upcoming_events::telemetry;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;

    if cli.help {
        print_help("upcoming-events");
        return Ok(());
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A logger may already be installed when embedded; that's fine.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(cli.root.clone());
    let mut config = Config::load_or_default(&ctx)?;
    if let Some(path) = cli.events.clone() {
        config.events_file = Some(path);
    }
    if let Some(tag) = cli.locale.clone() {
        config.locale = Some(tag);
    }

    let active_locale = locale::apply_locale(config.locale.as_deref());
    let formatter = LocaleDateFormatter::new(&active_locale);

    let events = config.load_events(&ctx)?;
    let sink = telemetry::sink_for(config.telemetry, &ctx);

    let mut projector = UpcomingEventsProjector::from_config(events, &config);
    projector.activate(&SystemClock, &formatter);

    for _ in 0..cli.more {
        if !projector.has_more() {
            break;
        }
        projector.load_more(&sink);
    }

    let view = projector.view();
    if cli.json {
        println!("{}", render::render_json(&view)?);
    } else {
        print!("{}", render::render_text(&view)?);
    }

    Ok(())
}
