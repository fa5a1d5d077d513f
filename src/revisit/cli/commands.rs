//! # CLI Layer
//!
//! One possible UI client for revisit. This is the only place that knows about
//! stdout, stderr and exit codes.
//!
//! - `run()`: Parse arguments, set up logging and the API, dispatch
//! - `init_context()`: Resolves the data directory and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Archived items past their retention period are swept before every command,
//! so listings never show stale entries.

use super::render::{
    print_messages, render_agenda, render_config, render_full_items, RenderContext,
};
use super::setup::{Cli, Commands};
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use revisit::api::{ConfigAction, RevisitApi};
use revisit::config::RevisitConfig;
use revisit::error::{Result, RevisitError};
use revisit::schedule::parse_intervals;
use revisit::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: RevisitApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let swept = ctx.api.sweep()?;
    for message in &swept.messages {
        tracing::info!("{}", message.content);
    }

    match cli.command {
        Some(Commands::Add { intervals, title }) => handle_add(&mut ctx, title, intervals),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Show { selectors, json }) => handle_show(&ctx, selectors, json),
        Some(Commands::Done { selectors }) => handle_done(&mut ctx, selectors),
        Some(Commands::Archive { selectors }) => handle_archive(&mut ctx, selectors),
        Some(Commands::Restore { selectors }) => handle_restore(&mut ctx, selectors),
        Some(Commands::Rename { selector, title }) => handle_rename(&mut ctx, selector, title),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "Using data directory");

    let config = RevisitConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("{e}, using defaults");
        RevisitConfig::default()
    });
    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: RevisitApi::new(store, data_dir, config),
    })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "revisit", "revisit")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RevisitError::Config(
                "Could not determine a data directory, pass --data-dir".to_string(),
            )
        })
}

fn render_context<'a>(
    ctx: &'a AppContext,
    now: &'a chrono::DateTime<Local>,
) -> RenderContext<'a, Local> {
    RenderContext {
        now,
        config: ctx.api.settings(),
    }
}

fn handle_add(ctx: &mut AppContext, title: Vec<String>, intervals: Option<String>) -> Result<()> {
    let intervals = intervals.as_deref().map(parse_intervals);
    let result = ctx.api.add(&title.join(" "), intervals)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list()?;
    let agenda = result.agenda.unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&agenda)?);
    } else {
        let now = Local::now();
        print!("{}", render_agenda(&agenda, &render_context(ctx, &now)));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, selectors: Vec<String>, json: bool) -> Result<()> {
    let result = ctx.api.show(&selectors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_items)?);
    } else {
        let now = Local::now();
        print!(
            "{}",
            render_full_items(&result.listed_items, &render_context(ctx, &now))
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.complete(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_archive(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.archive(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.restore(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, selector: String, title: Vec<String>) -> Result<()> {
    let result = ctx.api.update_title(&selector, &title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_permanently(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
