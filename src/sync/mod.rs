pub mod form;
pub mod synchronizer;

pub use form::{FormMode, FormState};
pub use synchronizer::{PropertyListSynchronizer, Snapshot};
