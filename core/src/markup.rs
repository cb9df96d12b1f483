//! Element ids and class names shared with the page markup and stylesheet.

pub const UPLOAD_AREA_ID: &str = "upload-area";
pub const FILE_INPUT_ID: &str = "file-input";
pub const PREVIEW_ID: &str = "preview";
pub const UPLOAD_TEXT_ID: &str = "upload-text";
pub const UPLOAD_BUTTONS_ID: &str = "upload-buttons";
pub const UPLOAD_REMOVE_ID: &str = "upload-remove";
pub const UPLOAD_CHANGE_ID: &str = "upload-change";
pub const FORM_ID: &str = "form";
pub const FULL_NAME_ID: &str = "full-name";
pub const EMAIL_ID: &str = "email";
pub const GITHUB_ID: &str = "github";
pub const FORM_SECTION_ID: &str = "form-section";
pub const TICKET_SECTION_ID: &str = "ticket-section";
pub const TICKET_NAME_ID: &str = "ticket-name";
pub const TICKET_EMAIL_ID: &str = "ticket-email";
pub const TICKET_GITHUB_ID: &str = "ticket-github";
pub const TICKET_IMAGE_ID: &str = "ticket-image";
pub const TICKET_NUMBER_ID: &str = "ticket-number";

pub const FIELD_GROUP_CLASS: &str = "form__group";
pub const FIELD_GROUP_ERROR_CLASS: &str = "form__group--error";
pub const HINT_INFO_CLASS: &str = "form__info";
pub const HINT_ERROR_CLASS: &str = "form__error";
pub const DRAG_ACTIVE_CLASS: &str = "dragover";
pub const TICKET_GITHUB_CONTAINER_CLASS: &str = "card__user-github";

pub const PLACEHOLDER_ICON_SRC: &str = "./assets/images/icon-upload.svg";
