pub mod cli;
pub mod codec;
pub mod dom;
pub mod persist;
pub mod resolve;

pub use crate::codec::deserialize::deserialize;
pub use crate::codec::filter::FilterConfig;
pub use crate::codec::handler::HandlerTable;
pub use crate::codec::record_model::{FormRecord, SavedValue};
pub use crate::codec::serialize::serialize;
pub use crate::dom::classifier::{ControlKind, control_kind};
pub use crate::dom::dom_model::{ControlElement, Document, FormElement, SelectOption};
pub use crate::persist::error::PersistError;
pub use crate::persist::options::{PersistOptions, load_options};
pub use crate::persist::session::{
    ArmedForm, LifecycleSignal, clear_storage, load, register, save,
};
pub use crate::persist::store::{
    FileStorage, MemoryStorage, STORAGE_PREFIX, ScopedStores, StorageBackend, StorageScope,
    storage_key,
};
pub use crate::resolve::resolver::resolve;
