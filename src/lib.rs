pub mod classify;
pub mod engine;
pub mod key;
pub mod resolver;
pub mod traits;
pub mod types;

pub use crate::engine::handle_delete_key;
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::resolver::{offset_for_backspace, offset_for_forward_delete};
pub use crate::traits::TextOps;
pub use crate::types::{Error, Range};
