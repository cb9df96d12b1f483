use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
};

use ticket_form_core::markup::*;
use ticket_form_core::{FileMeta, FormFields, HintPresentation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarkupError {
    NoDocument,
    MissingElement { id: &'static str },
    WrongElementKind { id: &'static str, expected: &'static str },
    MissingFieldGroup { input_id: &'static str },
    MissingSelector { selector: String },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::NoDocument => write!(f, "document is not available"),
            MarkupError::MissingElement { id } => write!(f, "missing element #{id}"),
            MarkupError::WrongElementKind { id, expected } => {
                write!(f, "element #{id} is not a {expected}")
            }
            MarkupError::MissingFieldGroup { input_id } => {
                write!(f, "element #{input_id} has no enclosing field group")
            }
            MarkupError::MissingSelector { selector } => {
                write!(f, "no element matches '{selector}'")
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Handles to every element the controller reads or mutates.
pub(crate) struct FormElements {
    pub(crate) upload_area: HtmlElement,
    pub(crate) file_input: HtmlInputElement,
    pub(crate) preview: HtmlImageElement,
    pub(crate) upload_text: HtmlElement,
    pub(crate) upload_buttons: HtmlElement,
    pub(crate) upload_remove: HtmlElement,
    pub(crate) upload_change: HtmlElement,
    pub(crate) form: HtmlFormElement,
    pub(crate) full_name: HtmlInputElement,
    pub(crate) email: HtmlInputElement,
    pub(crate) github: HtmlInputElement,
    pub(crate) upload_group: Element,
    pub(crate) full_name_group: Element,
    pub(crate) email_group: Element,
    pub(crate) form_section: HtmlElement,
    pub(crate) ticket_section: HtmlElement,
    pub(crate) ticket_name: Element,
    pub(crate) ticket_email: Element,
    pub(crate) ticket_github: Element,
    pub(crate) ticket_github_row: HtmlElement,
    pub(crate) ticket_image: HtmlImageElement,
    pub(crate) ticket_number: Element,
}

impl FormElements {
    pub(crate) fn bind(document: &Document) -> Result<Self, MarkupError> {
        let file_input: HtmlInputElement = by_id(document, FILE_INPUT_ID, "input")?;
        let full_name: HtmlInputElement = by_id(document, FULL_NAME_ID, "input")?;
        let email: HtmlInputElement = by_id(document, EMAIL_ID, "input")?;

        let upload_group = file_input
            .closest(&format!(".{FIELD_GROUP_CLASS}"))
            .ok()
            .flatten()
            .ok_or(MarkupError::MissingFieldGroup {
                input_id: FILE_INPUT_ID,
            })?;
        let full_name_group = full_name
            .parent_element()
            .ok_or(MarkupError::MissingFieldGroup {
                input_id: FULL_NAME_ID,
            })?;
        let email_group = email
            .parent_element()
            .ok_or(MarkupError::MissingFieldGroup { input_id: EMAIL_ID })?;

        let github_selector = format!(".{TICKET_GITHUB_CONTAINER_CLASS}");
        let ticket_github_row = document
            .query_selector(&github_selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(MarkupError::MissingSelector {
                selector: github_selector,
            })?;

        Ok(Self {
            upload_area: by_id(document, UPLOAD_AREA_ID, "html element")?,
            file_input,
            preview: by_id(document, PREVIEW_ID, "img")?,
            upload_text: by_id(document, UPLOAD_TEXT_ID, "html element")?,
            upload_buttons: by_id(document, UPLOAD_BUTTONS_ID, "html element")?,
            upload_remove: by_id(document, UPLOAD_REMOVE_ID, "html element")?,
            upload_change: by_id(document, UPLOAD_CHANGE_ID, "html element")?,
            form: by_id(document, FORM_ID, "form")?,
            full_name,
            email,
            github: by_id(document, GITHUB_ID, "input")?,
            upload_group,
            full_name_group,
            email_group,
            form_section: by_id(document, FORM_SECTION_ID, "html element")?,
            ticket_section: by_id(document, TICKET_SECTION_ID, "html element")?,
            ticket_name: by_id(document, TICKET_NAME_ID, "element")?,
            ticket_email: by_id(document, TICKET_EMAIL_ID, "element")?,
            ticket_github: by_id(document, TICKET_GITHUB_ID, "element")?,
            ticket_github_row,
            ticket_image: by_id(document, TICKET_IMAGE_ID, "img")?,
            ticket_number: by_id(document, TICKET_NUMBER_ID, "element")?,
        })
    }

    pub(crate) fn read_fields(&self) -> FormFields {
        FormFields::new(self.full_name.value(), self.email.value(), self.github.value())
    }
}

fn by_id<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, MarkupError> {
    document
        .get_element_by_id(id)
        .ok_or(MarkupError::MissingElement { id })?
        .dyn_into::<T>()
        .map_err(|_| MarkupError::WrongElementKind { id, expected })
}

pub(crate) fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.size().max(0.0) as u64, file.type_())
}

pub(crate) fn set_display(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("display", value);
}

pub(crate) fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Swaps the hint span between the info and error classes; text is untouched.
pub(crate) fn set_hint(group: &Element, hint: HintPresentation) {
    let (from, to) = match hint {
        HintPresentation::Error => (HINT_INFO_CLASS, HINT_ERROR_CLASS),
        HintPresentation::Info => (HINT_ERROR_CLASS, HINT_INFO_CLASS),
    };
    if let Ok(Some(hint_el)) = group.query_selector(&format!(".{from}")) {
        let _ = hint_el.class_list().replace(from, to);
    }
}

/// Compares against the raw attribute, not the resolved absolute URL.
pub(crate) fn set_image_src(image: &HtmlImageElement, src: &str) {
    if image.get_attribute("src").as_deref() != Some(src) {
        image.set_src(src);
    }
}
