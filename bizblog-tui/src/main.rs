//! bizblog-tui - Terminal front-end for BizBlog
//!
//! Browse, search and filter the blog, read posts and write new ones
//! without leaving the terminal.

use anyhow::{Context, Result};
use clap::Parser;

use bizblog_tui::{
    app::{event::EventHandler, event::TuiEvent, reduce, AppState, ContentEditor},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libbizblog::config::{self, Config};
use libbizblog::logging::{self, LogFormat, LogTarget};
use libbizblog::BlogService;

#[derive(Parser, Debug)]
#[command(name = "bizblog-tui")]
#[command(version, about = "Terminal front-end for the BizBlog small-business blog")]
#[command(long_about = r#"Terminal front-end for the BizBlog small-business blog.

Posts live in memory for the session; anything written here is gone on exit.

KEYS:
    h/b Home   a About   c Contact   s Shop   w Write   F1 Help   q Quit

LOGGING:
    The terminal belongs to the UI, so logs go to a file:
    <data dir>/bizblog/bizblog-tui.log unless BIZBLOG_LOG_FILE is set.
    BIZBLOG_LOG_FORMAT and BIZBLOG_LOG_LEVEL set the defaults for the
    flags below.
"#)]
struct Cli {
    /// Configuration file (defaults to BIZBLOG_CONFIG or the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Log output format [default: BIZBLOG_LOG_FORMAT or text]
    #[arg(long, value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "pretty"])]
    log_format: Option<String>,

    /// Minimum log level: error, warn, info, debug, trace [default: BIZBLOG_LOG_LEVEL or info]
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config = load_config(cli.config.as_deref())?;
    let blog = BlogService::from_config(config);
    tracing::info!(posts = blog.posts().len(), "Starting bizblog-tui");

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, AppState::new(blog));
    restore_terminal(terminal)?;

    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let mut log_config = logging::config_from_env();

    if let Some(ref format) = cli.log_format {
        log_config.format = format
            .parse::<LogFormat>()
            .map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(ref level) = cli.log_level {
        log_config.level = level.clone();
    }
    log_config.verbose = cli.verbose;

    // Stderr would draw over the UI
    if log_config.target == LogTarget::Stderr {
        log_config.target = LogTarget::File(config::resolve_data_path()?.join("bizblog-tui.log"));
    }

    log_config.init().context("Failed to initialize logging")
}

fn load_config(path: Option<&str>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            Config::load_from_path(std::path::Path::new(&expanded))
                .with_context(|| format!("Failed to load config from {}", expanded))?
        }
        None => Config::load().context("Failed to load config")?,
    };
    Ok(config)
}

fn run_app(terminal: &mut Tui, state: AppState) -> Result<()> {
    let mut state = state;
    let mut editor = ContentEditor::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        editor.set_block(ui::content_editor_block(&state));

        terminal.draw(|frame| {
            ui::render(frame, &state, editor.textarea());
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => editor.route_key(&state, key),
            other => other.into(),
        };

        state = reduce(state, action);

        // Publishing or discarding empties the draft; the editor follows
        editor.sync(&state);

        if state.should_quit {
            tracing::info!("Quitting bizblog-tui");
            break;
        }
    }

    Ok(())
}
