use crate::codec::deserialize::deserialize;
use crate::codec::record_model::FormRecord;
use crate::codec::serialize::serialize;
use crate::dom::dom_model::Document;
use crate::persist::error::PersistError;
use crate::persist::options::PersistOptions;
use crate::persist::store::{StorageBackend, storage_key};

/// Serialize the form and write the record under its storage key.
pub fn save(
    doc: &Document,
    form: usize,
    options: &PersistOptions,
    storage: &mut dyn StorageBackend,
) -> Result<(), PersistError> {
    let key = storage_key(doc, form, options.uuid.as_deref())?;
    let record = serialize(doc, form, &options.filter, options.skip_external);
    let body = serde_json::to_string(&record).map_err(|source| PersistError::Encode { source })?;
    storage.set(&key, &body);
    Ok(())
}

/// Read the stored record, if any, and apply it to the form. A missing key
/// is a no-op; returns whether a record was applied.
pub fn load(
    doc: &mut Document,
    form: usize,
    options: &PersistOptions,
    storage: &dyn StorageBackend,
) -> Result<bool, PersistError> {
    let key = storage_key(doc, form, options.uuid.as_deref())?;
    let Some(body) = storage.get(&key) else {
        return Ok(false);
    };
    let record: FormRecord =
        serde_json::from_str(&body).map_err(|source| PersistError::Decode { key, source })?;
    deserialize(
        doc,
        form,
        &record,
        &options.handlers,
        &options.filter,
        options.skip_external,
    );
    Ok(true)
}

/// Remove the stored record for the form.
pub fn clear_storage(
    doc: &Document,
    form: usize,
    options: &PersistOptions,
    storage: &mut dyn StorageBackend,
) -> Result<(), PersistError> {
    let key = storage_key(doc, form, options.uuid.as_deref())?;
    storage.remove(&key);
    Ok(())
}

// ============================================================================
// Lifecycle wiring
// ============================================================================

/// Abstract page lifecycle notifications delivered by the host. `Unload` and
/// `PageHide` are the unload family; either one means "persist now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    Unload,
    PageHide,
    Submit,
}

/// A form armed for lifecycle-driven persistence. Produced by `register`.
///
/// The host may deliver several redundant unload-family notifications; the
/// exit save fires exactly once.
#[derive(Debug)]
pub struct ArmedForm {
    form: usize,
    saved_on_exit: bool,
}

impl ArmedForm {
    pub fn form(&self) -> usize {
        self.form
    }

    /// Feed one lifecycle notification through the configured behavior.
    pub fn signal(
        &mut self,
        signal: LifecycleSignal,
        doc: &Document,
        options: &PersistOptions,
        storage: &mut dyn StorageBackend,
    ) -> Result<(), PersistError> {
        match signal {
            LifecycleSignal::Unload | LifecycleSignal::PageHide => {
                if self.saved_on_exit {
                    return Ok(());
                }
                self.saved_on_exit = true;
                save(doc, self.form, options, storage)
            }
            LifecycleSignal::Submit => {
                if options.save_on_submit {
                    save(doc, self.form, options, storage)
                } else {
                    clear_storage(doc, self.form, options, storage)
                }
            }
        }
    }
}

/// Load any existing record into the form, then arm it for save-on-unload
/// and save-or-clear-on-submit per the options.
pub fn register(
    doc: &mut Document,
    form: usize,
    options: &PersistOptions,
    storage: &mut dyn StorageBackend,
) -> Result<ArmedForm, PersistError> {
    load(doc, form, options, storage)?;
    Ok(ArmedForm {
        form,
        saved_on_exit: false,
    })
}
