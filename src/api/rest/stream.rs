//! Line delimited JSON responses (<http://jsonlines.org/>).
use async_stream::try_stream;
use futures::{StreamExt, stream::BoxStream};
use serde::de::DeserializeOwned;

use super::{Error, Result};

/// Stream reads a response body that holds one JSON document per line.
///
/// Lines are decoded one at a time as they arrive, so arbitrarily large results can be
/// processed without holding them in memory.
pub struct Stream {
    body: Option<BoxStream<'static, reqwest::Result<Vec<u8>>>>,
    buffer: Vec<u8>,
}

impl Stream {
    pub(crate) fn new(resp: reqwest::Response) -> Stream {
        Stream::from_chunks(resp.bytes_stream().map(|chunk| chunk.map(|b| b.to_vec())))
    }

    fn from_chunks(
        chunks: impl futures::Stream<Item = reqwest::Result<Vec<u8>>> + Send + 'static,
    ) -> Stream {
        Stream {
            body: Some(chunks.boxed()),
            buffer: Vec::new(),
        }
    }

    /// Decodes the next line.
    ///
    /// Returns `Ok(None)` once the body is exhausted. Blank lines are skipped.
    pub async fn next<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = self.buffer.drain(..=pos).collect();
                if line.trim_ascii().is_empty() {
                    continue;
                }
                return Ok(Some(serde_json::from_slice(&line)?));
            }
            let Some(body) = self.body.as_mut() else {
                return self.flush();
            };
            match body.next().await {
                Some(chunk) => self.buffer.extend_from_slice(&chunk.map_err(Error::from)?),
                None => self.body = None,
            }
        }
    }

    /// Decodes whatever is left after the last newline.
    fn flush<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        let rest = std::mem::take(&mut self.buffer);
        if rest.trim_ascii().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&rest)?))
    }

    /// Stops reading and releases the connection.
    pub fn close(&mut self) {
        self.body = None;
        self.buffer.clear();
    }

    /// Turns the reader into a [`futures::Stream`] of decoded lines.
    pub fn into_stream<T>(mut self) -> impl futures::Stream<Item = Result<T>>
    where
        T: DeserializeOwned,
    {
        try_stream! {
            while let Some(row) = self.next::<T>().await? {
                yield row;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use futures::{TryStreamExt, stream};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    fn chunked(chunks: &[&str]) -> Stream {
        let chunks: Vec<reqwest::Result<Vec<u8>>> =
            chunks.iter().map(|c| Ok(c.as_bytes().to_vec())).collect();
        Stream::from_chunks(stream::iter(chunks))
    }

    #[tokio::test]
    async fn reads_lines_split_over_chunks() {
        let mut s = chunked(&["{\"id\":", "1}\n{\"id\"", ":2}\n", "\n{\"id\":3}"]);
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 1 }));
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 2 }));
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 3 }));
        assert_eq!(s.next::<Row>().await.unwrap(), None);
        assert_eq!(s.next::<Row>().await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_body_ends_immediately() {
        let mut s = chunked(&[]);
        assert_eq!(s.next::<Row>().await.unwrap(), None);
    }

    #[tokio::test]
    async fn handles_crlf() {
        let mut s = chunked(&["{\"id\":1}\r\n{\"id\":2}\r\n"]);
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 1 }));
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 2 }));
        assert_eq!(s.next::<Row>().await.unwrap(), None);
    }

    #[tokio::test]
    async fn bad_line_is_an_error() {
        let mut s = chunked(&["{\"id\":1}\nnope\n"]);
        assert_eq!(s.next::<Row>().await.unwrap(), Some(Row { id: 1 }));
        assert!(matches!(s.next::<Row>().await, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn close_stops_reading() {
        let mut s = chunked(&["{\"id\":1}\n{\"id\":2}\n"]);
        s.close();
        assert_eq!(s.next::<Row>().await.unwrap(), None);
    }

    #[tokio::test]
    async fn collects_as_futures_stream() {
        let rows: Vec<Row> = chunked(&["{\"id\":1}\n{\"id\":2}\n"])
            .into_stream()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }
}
