use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DragEvent, Event, EventTarget, File, KeyboardEvent, Node};

use ticket_form_core::{Command, DecodeRequest, FormEvent, FormMachine, Outcome, Reaction};

use crate::dom::{file_meta, FormElements, MarkupError};
use crate::form_config::load_form_config;
use crate::preview_decode::decode_preview;
use crate::render::render;

pub(crate) struct FormController {
    elements: FormElements,
    machine: RefCell<FormMachine>,
    listeners: RefCell<Vec<EventListener>>,
}

thread_local! {
    static FORM_CONTROLLER: RefCell<Option<Rc<FormController>>> = RefCell::new(None);
}

pub(crate) fn run() -> Result<(), MarkupError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MarkupError::NoDocument)?;
    let config = load_form_config();
    let controller = FormController::mount(&document, FormMachine::new(config))?;
    gloo::console::log!("ticket form ready, upload limit KB:", config.max_upload_kb);
    FORM_CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller);
    });
    Ok(())
}

fn listen<F>(target: &EventTarget, event_type: &'static str, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        callback,
    )
}

fn dropped_file(event: &Event) -> Option<File> {
    event
        .dyn_ref::<DragEvent>()
        .and_then(DragEvent::data_transfer)
        .and_then(|transfer| transfer.files())
        .and_then(|files| files.get(0))
}

impl FormController {
    pub(crate) fn mount(document: &Document, machine: FormMachine) -> Result<Rc<Self>, MarkupError> {
        let elements = FormElements::bind(document)?;
        let controller = Rc::new(Self {
            elements,
            machine: RefCell::new(machine),
            listeners: RefCell::new(Vec::new()),
        });
        controller.install_listeners();
        controller.render();
        Ok(controller)
    }

    #[cfg(test)]
    pub(crate) fn unmount(&self) {
        self.listeners.borrow_mut().clear();
    }

    fn install_listeners(self: &Rc<Self>) {
        let elements = &self.elements;
        let mut listeners = Vec::new();

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_area, "click", move |event| {
            controller.handle(event, FormEvent::DropZoneClick, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_area, "keypress", move |event| {
            let key = event
                .dyn_ref::<KeyboardEvent>()
                .map(KeyboardEvent::key)
                .unwrap_or_default();
            let target_is_zone = controller.is_upload_area(event.target());
            controller.handle(event, FormEvent::DropZoneKey { key, target_is_zone }, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.file_input, "change", move |event| {
            let file = controller
                .elements
                .file_input
                .files()
                .and_then(|files| files.get(0));
            let meta = file.as_ref().map(file_meta);
            controller.handle(event, FormEvent::FileChosen(meta), file);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_area, "dragover", move |event| {
            controller.handle(event, FormEvent::DragOver, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_area, "dragleave", move |event| {
            controller.handle(event, FormEvent::DragLeave, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_area, "drop", move |event| {
            let file = dropped_file(event);
            let meta = file.as_ref().map(file_meta);
            controller.handle(event, FormEvent::Drop(meta), file);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_remove, "click", move |event| {
            controller.handle(event, FormEvent::RemoveClick, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.upload_change, "click", move |event| {
            controller.handle(event, FormEvent::ChangeClick, None);
        }));

        let controller = Rc::clone(self);
        listeners.push(listen(&elements.form, "submit", move |event| {
            let fields = controller.elements.read_fields();
            controller.handle(event, FormEvent::Submit(fields), None);
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    fn is_upload_area(&self, target: Option<EventTarget>) -> bool {
        target
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| self.elements.upload_area.is_same_node(Some(&node)))
    }

    fn handle(self: &Rc<Self>, event: &Event, form_event: FormEvent, file: Option<File>) {
        let reaction = self.machine.borrow_mut().dispatch(form_event);
        if reaction.prevent_default {
            event.prevent_default();
        }
        if reaction.stop_propagation {
            event.stop_propagation();
        }
        self.finish(reaction, file);
    }

    fn finish(self: &Rc<Self>, reaction: Reaction, file: Option<File>) {
        log_outcome(reaction.outcome.as_ref());
        // The machine borrow is released here: opening the picker re-enters `handle`.
        for command in reaction.commands {
            match command {
                Command::OpenFilePicker => self.elements.file_input.click(),
                Command::ClearFilePicker => self.elements.file_input.set_value(""),
                Command::DecodePreview(request) => {
                    if let Some(file) = file.clone() {
                        self.spawn_decode(request, file);
                    }
                }
            }
        }
        self.render();
    }

    fn spawn_decode(self: &Rc<Self>, request: DecodeRequest, file: File) {
        let controller = Rc::clone(self);
        spawn_local(async move {
            match decode_preview(&file).await {
                Ok(data_uri) => {
                    let reaction = controller
                        .machine
                        .borrow_mut()
                        .dispatch(FormEvent::PreviewDecoded { request, data_uri });
                    controller.finish(reaction, None);
                }
                Err(message) => {
                    gloo::console::warn!("preview decode failed", file.name(), message);
                }
            }
        });
    }

    fn render(&self) {
        render(&self.elements, self.machine.borrow().model());
    }
}

fn log_outcome(outcome: Option<&Outcome>) {
    match outcome {
        Some(Outcome::FileAccepted { decode }) => {
            let kind = if decode.is_some() { "image" } else { "non-image" };
            gloo::console::log!("upload accepted", kind);
        }
        Some(Outcome::FileTooLarge {
            size_bytes,
            limit_kb,
        }) => {
            gloo::console::warn!(format!(
                "upload rejected: {size_bytes} bytes exceeds {limit_kb} KB"
            ));
        }
        Some(Outcome::UploadCleared) => gloo::console::log!("upload cleared"),
        Some(Outcome::StaleDecodeDropped) => {
            gloo::console::log!("dropping stale preview decode");
        }
        Some(Outcome::SubmitAccepted(number)) => {
            gloo::console::log!("ticket issued", number.to_string());
        }
        Some(Outcome::SubmitRejected(validation)) => {
            gloo::console::log!(format!(
                "submit rejected: full name valid={}, email valid={}",
                validation.full_name_ok, validation.email_ok
            ));
        }
        Some(Outcome::PreviewApplied) | Some(Outcome::Ignored) | None => {}
    }
}
