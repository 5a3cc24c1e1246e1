mod chat_result;
mod common;
mod content;
mod message_param;
mod tools;

pub use chat_result::*;
pub use common::*;
pub use content::*;
pub use message_param::*;
pub use tools::*;
