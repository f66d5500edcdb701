//! Tabdock demo
//!
//! Drives a [`TabHost`] through a list of steps given on the command line
//! and prints what a tab view container would keep mounted after each one.
//!
//! ```text
//! tabdock-demo [--config PATH] [STEP...]
//!   STEP = <tab name>   select a tab (e.g. goals, History, Edit)
//!        | width=<N>    resize the bar container
//! ```

mod script;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use tabdock_core::{Config, TabContentProvider, TabHost, TabId};

use script::Step;

#[derive(Parser, Debug)]
#[command(name = "tabdock-demo", about = "Walk a tab bar through a list of steps")]
struct Cli {
    /// Configuration file (defaults to the per-user config if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tab names to select, or width=<N> to resize the bar
    steps: Vec<Step>,
}

/// Renders each tab as the text block the container would show
struct TextContent;

impl TabContentProvider for TextContent {
    type View = String;

    fn make_view(&mut self, tab: TabId) -> String {
        tracing::debug!(tab = %tab, "Building content");
        format!("{} [{}]", tab.label(), tab.icon())
    }
}

fn main() -> anyhow::Result<()> {
    tabdock_core::init_logging("info");

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let mut host = TabHost::new(config, TextContent)?;
    print_host(&host, "start");

    for step in cli.steps {
        match step {
            Step::Select(tab) => {
                if let Some(request) = host.tap(tab) {
                    println!("  scroll bar to {:.1} for {}", request.offset, request.tab.label());
                }
                print_host(&host, &format!("select {}", tab.label()));
            }
            Step::Resize(width) => {
                host.resize(width);
                print_host(&host, &format!("width {}", width));
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            let path = Config::default_path();
            if path.exists() {
                Config::load(&path)
                    .with_context(|| format!("failed to load config from {}", path.display()))
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn print_host(host: &TabHost<TextContent>, title: &str) {
    let state = host.state();
    let plan = host.plan();

    println!("== {}", title);
    println!(
        "Selected: {}  (bar {} at width {}, needs {})",
        state.selected.label(),
        if plan.scrolling { "scrolls" } else { "fits" },
        plan.available_width,
        plan.required_width
    );
    println!("Current TabView Tabs:");
    for tab in host.mounted_tabs() {
        let marker = if tab == state.selected { '*' } else { '•' };
        let view = host.view(tab).map(String::as_str).unwrap_or("");
        println!("  {} {}", marker, view);
    }
}
