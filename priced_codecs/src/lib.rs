pub mod request;
pub mod response;

pub type Timestamp = i32;
pub type Price = i32;

/// Request frames are fixed-width: one tag byte plus two big-endian i32s.
pub const FRAME_LEN: usize = 9;

#[cfg(test)]
mod test {
    use crate::request::{Request, RequestDecoder};
    use crate::response::ResponseEncoder;
    use futures::{SinkExt, StreamExt};
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn decodes_a_framed_session() {
        let client = Builder::new()
            .read(&[0x49, 0x00, 0x00, 0x30, 0x39, 0x00, 0x00, 0x00, 0x65])
            .read(&[0x49, 0x00, 0x00, 0x30, 0x3a, 0x00, 0x00, 0x00, 0x66])
            .read(&[0x51, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x40, 0x00])
            .build();
        let mut client = tokio_util::codec::FramedRead::new(client, RequestDecoder);

        assert_eq!(
            client.next().await.unwrap().unwrap(),
            Request::Insert {
                timestamp: 12345,
                price: 101,
            }
        );
        assert_eq!(
            client.next().await.unwrap().unwrap(),
            Request::Insert {
                timestamp: 12346,
                price: 102,
            }
        );
        assert_eq!(
            client.next().await.unwrap().unwrap(),
            Request::Query {
                min_time: 12288,
                max_time: 16384,
            }
        );
        assert!(client.next().await.is_none());
    }

    #[tokio::test]
    async fn encodes_means_big_endian() {
        let server = Builder::new()
            .write(&[0x00, 0x00, 0x00, 0x37])
            .write(&[0xff, 0xff, 0xff, 0xff])
            .build();
        let mut server = tokio_util::codec::FramedWrite::new(server, ResponseEncoder);

        server.send(55).await.unwrap();
        server.send(-1).await.unwrap();
    }
}
