use crate::session::Session;
use futures::{Sink, SinkExt, Stream, StreamExt};
use priced_codecs::request::Request;

/// Runs one session to completion: decode, dispatch, reply, in arrival
/// order. Returns an error if a frame was malformed or truncated, or if
/// the transport failed; the peer never receives an error reply.
pub async fn handle<R, W>(mut reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: Stream<Item = Result<Request, anyhow::Error>> + Unpin,
    W: Sink<i32, Error = anyhow::Error> + Unpin,
{
    let mut session = Session::default();
    while let Some(request) = reader.next().await {
        if let Some(mean) = dispatch(request?, &mut session) {
            writer.send(mean).await?;
        }
    }
    Ok(())
}

pub fn dispatch(request: Request, session: &mut Session) -> Option<i32> {
    match request {
        Request::Insert { timestamp, price } => {
            session.insert(timestamp, price);
            None
        }
        Request::Query { min_time, max_time } => Some(session.mean_in_range(min_time, max_time)),
    }
}
