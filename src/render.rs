use ticket_form_core::markup::{DRAG_ACTIVE_CLASS, FIELD_GROUP_ERROR_CLASS};
use ticket_form_core::{PageModel, TicketView, ViewState};

use crate::dom::{set_class, set_display, set_hint, set_image_src, FormElements};

const DISPLAY_BLOCK: &str = "block";
const DISPLAY_FLEX: &str = "flex";
const DISPLAY_NONE: &str = "none";

fn display(visible: bool, shown: &'static str) -> &'static str {
    if visible {
        shown
    } else {
        DISPLAY_NONE
    }
}

pub(crate) fn render(elements: &FormElements, model: &PageModel) {
    let upload = &model.upload;
    set_class(&elements.upload_area, DRAG_ACTIVE_CLASS, model.drag_active);
    set_class(&elements.upload_group, FIELD_GROUP_ERROR_CLASS, upload.has_size_error);
    set_hint(&elements.upload_group, upload.hint);
    set_image_src(&elements.preview, &upload.preview_src);
    set_display(&elements.preview, display(upload.preview_visible, DISPLAY_BLOCK));
    set_display(
        &elements.upload_buttons,
        display(upload.buttons_visible, DISPLAY_FLEX),
    );
    set_display(
        &elements.upload_text,
        display(upload.helper_text_visible, DISPLAY_BLOCK),
    );

    set_class(&elements.full_name_group, FIELD_GROUP_ERROR_CLASS, model.full_name_error);
    set_class(&elements.email_group, FIELD_GROUP_ERROR_CLASS, model.email_error);

    let ticket_visible = model.view == ViewState::TicketVisible;
    set_display(&elements.form_section, display(!ticket_visible, DISPLAY_BLOCK));
    set_display(&elements.ticket_section, display(ticket_visible, DISPLAY_BLOCK));
    if let Some(ticket) = &model.ticket {
        render_ticket(elements, ticket);
    }
}

fn render_ticket(elements: &FormElements, ticket: &TicketView) {
    elements
        .ticket_name
        .set_text_content(Some(&ticket.display_name));
    elements
        .ticket_email
        .set_text_content(Some(&ticket.display_email));
    match &ticket.display_github {
        Some(handle) => elements.ticket_github.set_text_content(Some(handle)),
        None => set_display(&elements.ticket_github_row, DISPLAY_NONE),
    }
    set_image_src(&elements.ticket_image, &ticket.image_src);
    elements
        .ticket_number
        .set_text_content(Some(&ticket.number.to_string()));
}
