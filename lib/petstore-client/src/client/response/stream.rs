use std::collections::VecDeque;
use std::mem;
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt, stream};
use serde::de::DeserializeOwned;

use crate::client::ApiClientError;
use crate::client::media::MediaType;

/// A lazy, single-use sequence of decoded collection elements.
pub type ItemStream<T> = Pin<Box<dyn Stream<Item = Result<T, ApiClientError>> + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SplitState {
    #[default]
    Start,
    Between,
    Item,
    Single,
    End,
}

/// Splits a JSON array into its raw elements as bytes arrive.
///
/// A document that is not an array is yielded as a single element.
#[derive(Debug, Default)]
pub(in crate::client) struct JsonArraySplitter {
    state: SplitState,
    current: Vec<u8>,
    depth: usize,
    in_string: bool,
    escaped: bool,
}

impl JsonArraySplitter {
    /// Consumes a chunk, returns the elements completed by it.
    pub(in crate::client) fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        let mut items = Vec::new();
        for &byte in chunk {
            match self.state {
                SplitState::Start if byte.is_ascii_whitespace() => {}
                SplitState::Start if byte == b'[' => self.state = SplitState::Between,
                SplitState::Start | SplitState::Single => {
                    self.state = SplitState::Single;
                    self.current.push(byte);
                }
                SplitState::Between if byte.is_ascii_whitespace() || byte == b',' => {}
                SplitState::Between if byte == b']' => self.state = SplitState::End,
                SplitState::Between => {
                    self.state = SplitState::Item;
                    self.scan(byte);
                    self.current.push(byte);
                }
                SplitState::Item
                    if self.depth == 0 && !self.in_string && (byte == b',' || byte == b']') =>
                {
                    items.push(mem::take(&mut self.current));
                    self.state = if byte == b']' {
                        SplitState::End
                    } else {
                        SplitState::Between
                    };
                }
                SplitState::Item => {
                    self.scan(byte);
                    self.current.push(byte);
                }
                SplitState::End => {}
            }
        }
        items
    }

    fn scan(&mut self, byte: u8) {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if byte == b'\\' {
                self.escaped = true;
            } else if byte == b'"' {
                self.in_string = false;
            }
            return;
        }
        match byte {
            b'"' => self.in_string = true,
            b'{' | b'[' => self.depth += 1,
            b'}' | b']' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Ends the input, returns the pending element of a non-array document.
    pub(in crate::client) fn finish(&mut self) -> Result<Option<Vec<u8>>, ApiClientError> {
        match mem::take(&mut self.state) {
            SplitState::Start | SplitState::End => Ok(None),
            SplitState::Single => Ok(Some(mem::take(&mut self.current))),
            SplitState::Between | SplitState::Item => Err(ApiClientError::SerializationError {
                message: "JSON array body ended before its closing bracket".to_string(),
            }),
        }
    }
}

struct JsonItems<S> {
    bytes: S,
    splitter: JsonArraySplitter,
    pending: VecDeque<Vec<u8>>,
    finished: bool,
}

fn decode_item<T>(item: &[u8]) -> Result<T, ApiClientError>
where
    T: DeserializeOwned,
{
    MediaType::Json.decode(&String::from_utf8_lossy(item))
}

/// Decodes array elements from a JSON body stream, one element at a time.
pub(in crate::client) fn json_items<T, S>(bytes: S) -> ItemStream<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + Unpin + 'static,
{
    let state = JsonItems {
        bytes,
        splitter: JsonArraySplitter::default(),
        pending: VecDeque::new(),
        finished: false,
    };
    let items = stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((decode_item(&item), state));
            }
            if state.finished {
                return None;
            }
            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    let completed = state.splitter.push(&chunk);
                    state.pending.extend(completed);
                }
                Some(Err(error)) => {
                    state.finished = true;
                    return Some((Err(ApiClientError::TransportFailure(error)), state));
                }
                None => {
                    state.finished = true;
                    match state.splitter.finish() {
                        Ok(last) => state.pending.extend(last),
                        Err(error) => return Some((Err(error), state)),
                    }
                }
            }
        }
    });
    Box::pin(items)
}

/// Yields already decoded elements.
pub(in crate::client) fn from_items<T>(items: Vec<T>) -> ItemStream<T>
where
    T: Send + 'static,
{
    Box::pin(stream::iter(items.into_iter().map(Ok)))
}
