//! The reducer runtime shared by every view: actions go in, new state plus
//! effects come out, effect futures run inside a cancellation scope tied to
//! the owning [`Store`].

mod effect;
mod handle;
mod store;

pub use effect::{Debouncer, Effect};
pub use handle::RequestHandle;
pub use store::{Reducer, Store};
