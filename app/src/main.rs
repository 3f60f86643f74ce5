use std::io::{self, IsTerminal};

use clap::Parser;
use todo_view::config::Config;
use todo_view::transport::HttpTransport;
use todo_view::{logging, session};
use todo_view_core::{TodoClient, TodoView};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config.log_level)?;
    info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "starting");

    let client = TodoClient::new(&config.base_url);
    let mut view = TodoView::new(client, HttpTransport::new(config.timeout()));

    let stdout = io::stdout();
    let styled = !config.no_color && stdout.is_terminal();
    session::run(&mut view, io::stdin().lock(), &mut stdout.lock(), styled)?;
    Ok(())
}
