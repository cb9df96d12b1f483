pub mod config;
pub mod machine;
pub mod markup;
pub mod ticket;
pub mod upload;
pub mod validate;

pub use config::{ConfigError, FormConfig, DEFAULT_MAX_UPLOAD_KB};
pub use machine::{Command, FormEvent, FormMachine, Outcome, PageModel, Reaction, ViewState};
pub use ticket::{TicketNumber, TicketView};
pub use upload::{DecodeRequest, FileMeta, HintPresentation, UploadState};
pub use validate::{is_valid_email, is_valid_full_name, FieldValidation, FormFields};
