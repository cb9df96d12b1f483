use crate::config::FormConfig;
use crate::markup::PLACEHOLDER_ICON_SRC;

/// What the controller knows about a candidate file before reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime: mime.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Kilobytes are `bytes / 1024`; a file exactly at the limit is accepted.
    pub fn exceeds_limit(&self, config: &FormConfig) -> bool {
        self.size_bytes > config.max_upload_bytes()
    }
}

/// Which presentation class the upload hint span currently carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HintPresentation {
    #[default]
    Info,
    Error,
}

/// Tags an asynchronous preview decode so stale results can be recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeRequest(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<FileMeta>,
    pub preview_src: String,
    pub preview_visible: bool,
    pub has_size_error: bool,
    pub hint: HintPresentation,
    pub buttons_visible: bool,
    pub helper_text_visible: bool,
    decode_generation: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            selected: None,
            preview_src: PLACEHOLDER_ICON_SRC.to_string(),
            preview_visible: true,
            has_size_error: false,
            hint: HintPresentation::Info,
            buttons_visible: false,
            helper_text_visible: true,
            decode_generation: 0,
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.preview_src == PLACEHOLDER_ICON_SRC
    }

    pub(crate) fn next_decode_generation(&mut self) -> DecodeRequest {
        self.decode_generation = self.decode_generation.wrapping_add(1);
        DecodeRequest(self.decode_generation)
    }

    pub(crate) fn is_current(&self, request: DecodeRequest) -> bool {
        request.0 == self.decode_generation
    }

    pub(crate) fn set_error(&mut self, has_error: bool, swap_hint: bool) {
        self.has_size_error = has_error;
        if swap_hint {
            self.hint = if has_error {
                HintPresentation::Error
            } else {
                HintPresentation::Info
            };
        }
    }

    pub(crate) fn reset(&mut self) {
        self.selected = None;
        self.preview_src = PLACEHOLDER_ICON_SRC.to_string();
        self.preview_visible = true;
        self.buttons_visible = false;
        self.helper_text_visible = true;
        self.set_error(false, false);
        self.next_decode_generation();
    }
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}
