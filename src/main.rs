// Entry point: parses flags, loads the catalog, then either prints the
// completion candidates for a partial line or runs the interactive shell.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use once_cell::sync::OnceCell;
use tabline::catalog::Catalog;
use tabline::config::{self, DEFS_ENV};
use tabline::key::KeyInput;
use tabline::ui::{Model as UiModel, initial_model, run as noninteractive_run};

use bubbletea_rs::{
    Program, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};

// bubbletea builds the model through `init()`, so the catalog lives here
static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Parser, Debug)]
#[command(name = "tabline", version, about = "hierarchical command-line autocompletion")]
struct Args {
    /// JSON file describing command spaces, commands, arguments and options
    #[arg(long, env = DEFS_ENV)]
    defs: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Partial command line; prints its completion candidates and exits
    line: Vec<String>,
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our UiModel
struct TeaAdapter {
    inner: Option<UiModel>,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<bubbletea_rs::command::Cmd>) {
        let mut inner = CATALOG.get().map(initial_model);
        if let Some(m) = inner.as_mut() {
            let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
            m.update(tabline::ui::Msg::WindowSize {
                width: width as usize,
                height: height as usize,
            });
        }
        (TeaAdapter { inner }, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<bubbletea_rs::command::Cmd> {
        let Some(inner) = self.inner.as_mut() else {
            return Some(bubbletea_rs::quit());
        };
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            if km.modifiers.contains(KeyModifiers::CONTROL) && matches!(km.key, KeyCode::Char('c' | 'C')) {
                return Some(bubbletea_rs::quit());
            }
            inner.update(tabline::ui::Msg::Key(KeyInput::from_crossterm(km.key, km.modifiers)));
            if inner.quit {
                return Some(bubbletea_rs::quit());
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            inner.update(tabline::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.as_ref().map(UiModel::render_full).unwrap_or_default()
    }
}

async fn interactive(catalog: Catalog) -> anyhow::Result<()> {
    if CATALOG.set(catalog).is_err() {
        anyhow::bail!("interactive shell already running");
    }
    let program = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build program: {e:?}"))?;
    let finished = program
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("program error: {e:?}"))?;
    // leave the session's transcript on the normal screen
    if let Some(m) = finished.inner {
        for line in &m.transcript {
            println!("{line}");
        }
    }
    Ok(())
}

async fn real_main(args: Args) -> anyhow::Result<()> {
    let catalog = config::load_catalog(args.defs.as_deref()).context("loading definitions")?;

    if !args.line.is_empty() {
        let out = noninteractive_run(&catalog, &args.line).context("completing line")?;
        if !out.is_empty() {
            println!("{out}");
        }
        return Ok(());
    }

    interactive(catalog).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    config::init_logging(&args.log_level);

    if let Err(e) = real_main(args).await {
        eprintln!("{e:#}");
        process::exit(2);
    }
}
