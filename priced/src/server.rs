use crate::connection;
use priced_codecs::{request::RequestDecoder, response::ResponseEncoder};
use tokio::net::TcpListener;
use tokio_util::codec::{FramedRead, FramedWrite};

/// Accepts connections forever, one task and one session each. A failed
/// accept is logged and does not stop the listener.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((mut stream, addr)) => {
                tracing::info!("Accepted connection from {addr}");
                tokio::spawn(async move {
                    let (reader, writer) = stream.split();
                    let reader = FramedRead::new(reader, RequestDecoder);
                    let writer = FramedWrite::new(writer, ResponseEncoder);
                    match connection::handle(reader, writer).await {
                        Ok(()) => tracing::info!("Session from {addr} ended"),
                        Err(error) => tracing::warn!("Session from {addr} aborted: {error}"),
                    }
                });
            }
            Err(error) => tracing::warn!("Failed to accept connection: {error}"),
        }
    }
}
