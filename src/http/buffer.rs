// http/buffer.rs

use crate::model::RequestError;

/// Growable sink for response bytes. One buffer per request in flight.
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    data: Vec<u8>,
    limit: Option<usize>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as `new`, but refuses to grow past `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn append(&mut self, bytes: &[u8]) -> Result<(), RequestError> {
        if let Some(limit) = self.limit {
            if self.data.len() + bytes.len() > limit {
                return Err(RequestError::BodyTooLarge { limit });
            }
        }
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Drops the storage and reports how many bytes it held.
    pub fn finish(self) -> usize {
        self.data.len()
    }
}
