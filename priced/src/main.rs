use arguments::Arguments;
use clap::Parser;
use tokio::net::TcpListener;

mod arguments;
mod connection;
mod mean;
mod server;
mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Arguments::parse();
    let listener = TcpListener::bind(args.socket).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    server::serve(listener).await
}
