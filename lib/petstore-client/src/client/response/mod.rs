//! Response handling: decoded results, raw outputs and element streams.

pub(in crate::client) mod output;
pub use self::output::Output;

mod result;
pub use self::result::{CallResult, ResponseEntity};

pub(in crate::client) mod stream;
pub use self::stream::ItemStream;
