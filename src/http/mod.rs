pub mod buffer;
pub mod executor;

#[cfg(test)]
pub(crate) mod test_support;

pub use buffer::ResponseBuffer;
pub use executor::{HttpMethod, ReqwestTransport, RequestExecutor, Transport};
