use std::path::PathBuf;

/// Request code the shell uses for its file-picker round trip.
pub const FILE_CHOOSER_REQUEST_CODE: i32 = 100;

/// One item picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// What the page asked for when it opened the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChooserParams {
    pub accept_types: Vec<String>,
    pub multiple: bool,
}

/// Result delivered by the host picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityResult {
    /// The picker finished; the payload may be empty.
    Ok(Vec<SelectedFile>),
    Canceled,
}

/// Receives the selection for a pending file-input request. `None` means the
/// picker was dismissed.
pub type FileChooserCallback = Box<dyn FnOnce(Option<Vec<SelectedFile>>) + Send>;
