//! Frame Types - Level 1 Foundation Types
//!
//! Pure data structures shared by the frame and transaction builder nodes.
//! Nothing in here assembles HTML or talks to a host; `frame-nodes-core` does
//! that on top of these types.
//!
//! ## Contents
//!
//! - [`FrameParameters`] and its parts (buttons, aspect ratio, custom meta)
//! - [`MetaTag`], the ordered (name, content) pair a frame is made of
//! - [`TransactionParameters`] and the [`TransactionRequest`] record
//! - [`HttpResponse`], the payload handed to a "respond immediately" collaborator
//!
//! ## Rules
//!
//! 1. **NO ASSEMBLY LOGIC** - only data, constructors and accessors
//! 2. **NO VALIDATION** - unknown enum strings are carried, never rejected
//! 3. **SERIALIZABLE** - every type supports serde
//! 4. **THREAD SAFE** - every type is `Send + Sync`

pub mod frame;
pub mod response;
pub mod transaction;

pub use frame::{
    AspectRatio, ButtonAction, CustomMeta, FrameButton, FrameParameters, MetaTag,
    DEFAULT_FRAME_VERSION, DEFAULT_TEMPLATE,
};
pub use response::{HttpResponse, ResponseBody, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON};
pub use transaction::{
    KnownChain, TransactionCall, TransactionParameters, TransactionRequest,
    DEFAULT_TX_METHOD,
};
