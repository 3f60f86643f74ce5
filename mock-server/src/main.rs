use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "todo-api-mock", about = "In-memory /api/Todo server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "TODO_MOCK_BIND", default_value = "127.0.0.1:5143")]
    bind: String,

    /// Tracing filter directive, e.g. `info` or `todo_api_mock=debug`.
    #[arg(long, env = "TODO_MOCK_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let listener = TcpListener::bind(&args.bind).await?;
    todo_api_mock::serve(listener, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
