//! # inplace-optional
//!
//! [`Optional<T>`] holds zero or one `T` inline, in storage sized and aligned for
//! exactly one `T`, with the construction, assignment and destruction of that value
//! spelled out operation by operation.
//!
//! ## State Machine
//!
//! | From | To | Through |
//! |------|----|---------|
//! | Empty | Populated | `some`, `construct`, `emplace`, `set`, `clone`/`take`/`move_from` of a populated source |
//! | Populated | Empty | `reset`, drop, `take`/`move_from`/`take_value` as source, assignment from an empty source |
//! | Populated | Populated | `set`, `clone_from`/`move_from` from a populated source (assigns into the value) |
//!
//! ## Access
//!
//! | Form | Empty container |
//! |------|-----------------|
//! | `value`, `value_mut`, `into_value` | `Err(BadOptionalAccess)` |
//! | `*opt`, `opt.field` | panics with `bad optional access` |
//! | `get_unchecked*`, `into_inner_unchecked` | undefined behavior (`debug_assert!` in debug builds) |
//!
//! ## Lifecycle Logging
//!
//! Set `INPLACE_OPTIONAL_TRACE=1` to emit `tracing` events for drops, emplacement,
//! move assignment and swaps. Debug builds only.

pub mod env;
mod error;
mod log;
mod optional;

pub use error::BadOptionalAccess;
pub use optional::Optional;
pub use raw_slot::RawSlot;
