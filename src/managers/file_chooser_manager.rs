//! Single-slot store for the pending file-chooser callback.
//!
//! At most one request is outstanding. A new request displaces the old one,
//! which is resolved as cancelled so the page stops waiting on it.

use crate::types::file_chooser::{ActivityResult, FileChooserCallback, SelectedFile};

/// Trait defining the pending-request slot.
pub trait FileChooserManagerTrait {
    /// Stores `callback` under `request_code`. Returns true if an older
    /// request was displaced.
    fn begin(&mut self, request_code: i32, callback: FileChooserCallback) -> bool;
    /// Resolves and clears the slot. Returns false when nothing was pending
    /// for `request_code`.
    fn resolve(&mut self, request_code: i32, result: ActivityResult) -> bool;
    fn is_pending(&self) -> bool;
    fn pending_request_code(&self) -> Option<i32>;
}

struct PendingRequest {
    request_code: i32,
    callback: FileChooserCallback,
}

#[derive(Default)]
pub struct FileChooserManager {
    pending: Option<PendingRequest>,
}

impl FileChooserManager {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Maps a picker result to the value handed to the page: a picked item list
/// (possibly empty) on success, `None` on cancel.
pub fn selection_for(result: ActivityResult) -> Option<Vec<SelectedFile>> {
    match result {
        ActivityResult::Ok(files) => Some(files),
        ActivityResult::Canceled => None,
    }
}

impl FileChooserManagerTrait for FileChooserManager {
    fn begin(&mut self, request_code: i32, callback: FileChooserCallback) -> bool {
        let displaced = self.pending.replace(PendingRequest {
            request_code,
            callback,
        });
        match displaced {
            Some(old) => {
                log::debug!("File chooser request {} displaced", old.request_code);
                (old.callback)(None);
                true
            }
            None => false,
        }
    }

    fn resolve(&mut self, request_code: i32, result: ActivityResult) -> bool {
        match self.pending.take() {
            Some(pending) if pending.request_code == request_code => {
                (pending.callback)(selection_for(result));
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn pending_request_code(&self) -> Option<i32> {
        self.pending.as_ref().map(|p| p.request_code)
    }
}
