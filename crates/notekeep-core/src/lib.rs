//! # notekeep-core — Domain Layer for notekeep
//!
//! Everything the notes service knows that is not HTTP: who the users are,
//! what a note looks like, where notes live while the process runs, and how
//! bearer tokens are minted and checked.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `UserId` and `NoteId` are distinct types so a
//!    user id can never be used to look up a note.
//!
//! 2. **One store, one lock.** [`NoteStore`] owns both the note collection and
//!    the id counter behind a single `RwLock`. Ids are allocated under the write
//!    lock and are never reused.
//!
//! 3. **Validate before mutate.** Every store operation checks its input before
//!    touching the collection, so a rejected request leaves no trace.
//!
//! 4. **Stateless tokens.** [`token::verify`] is a pure function of the token,
//!    the signing key, and the current time. Nothing about issued tokens is
//!    remembered server-side.
//!
//! ## Crate Policy
//!
//! - No HTTP types. The API crate maps these errors onto status codes.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod note;
pub mod store;
pub mod temporal;
pub mod token;
pub mod user;

pub use error::{AuthError, NoteError, TokenError};
pub use identity::{NoteId, UserId};
pub use note::{validate_content, Note};
pub use store::NoteStore;
pub use temporal::Timestamp;
pub use token::{Claims, Identity, IssuedToken, TokenKey, TOKEN_LIFETIME_SECS};
pub use user::{User, UserDirectory};
