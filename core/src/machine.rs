//! Event dispatch for the registration form.
//!
//! The browser layer translates DOM events into [`FormEvent`]s, feeds them to
//! [`FormMachine::dispatch`], applies the returned [`Reaction`] to the DOM
//! event, runs the one-shot [`Command`]s and then renders [`PageModel`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FormConfig;
use crate::ticket::{TicketNumber, TicketView};
use crate::upload::{DecodeRequest, FileMeta, UploadState};
use crate::validate::{FieldValidation, FormFields};

pub const ENTER_KEY: &str = "Enter";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    DropZoneClick,
    DropZoneKey { key: String, target_is_zone: bool },
    FileChosen(Option<FileMeta>),
    DragOver,
    DragLeave,
    Drop(Option<FileMeta>),
    RemoveClick,
    ChangeClick,
    Submit(FormFields),
    PreviewDecoded {
        request: DecodeRequest,
        data_uri: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    OpenFilePicker,
    ClearFilePicker,
    DecodePreview(DecodeRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    FileAccepted { decode: Option<DecodeRequest> },
    FileTooLarge { size_bytes: u64, limit_kb: u32 },
    UploadCleared,
    PreviewApplied,
    StaleDecodeDropped,
    SubmitAccepted(TicketNumber),
    SubmitRejected(FieldValidation),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub commands: Vec<Command>,
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    FormVisible,
    TicketVisible,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageModel {
    pub view: ViewState,
    pub upload: UploadState,
    pub full_name_error: bool,
    pub email_error: bool,
    pub drag_active: bool,
    pub ticket: Option<TicketView>,
}

pub struct FormMachine {
    config: FormConfig,
    model: PageModel,
    rng: StdRng,
}

impl FormMachine {
    pub fn new(config: FormConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: FormConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FormConfig, rng: StdRng) -> Self {
        Self {
            config,
            model: PageModel::default(),
            rng,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Reaction {
        let mut reaction = Reaction::default();
        match event {
            FormEvent::DropZoneClick => {
                reaction.commands.push(Command::OpenFilePicker);
            }
            FormEvent::ChangeClick => {
                reaction.stop_propagation = true;
                reaction.commands.push(Command::OpenFilePicker);
            }
            FormEvent::DropZoneKey { key, target_is_zone } => {
                if key == ENTER_KEY && target_is_zone {
                    reaction.commands.push(Command::OpenFilePicker);
                } else {
                    reaction.outcome = Some(Outcome::Ignored);
                }
            }
            FormEvent::FileChosen(file) => self.intake(file, &mut reaction),
            FormEvent::DragOver => {
                reaction.prevent_default = true;
                self.model.drag_active = true;
            }
            FormEvent::DragLeave => {
                self.model.drag_active = false;
            }
            FormEvent::Drop(file) => {
                reaction.prevent_default = true;
                self.model.drag_active = false;
                self.intake(file, &mut reaction);
            }
            FormEvent::RemoveClick => {
                reaction.stop_propagation = true;
                reaction.commands.push(Command::ClearFilePicker);
                self.model.upload.reset();
                reaction.outcome = Some(Outcome::UploadCleared);
            }
            FormEvent::Submit(fields) => {
                reaction.prevent_default = true;
                self.submit(fields, &mut reaction);
            }
            FormEvent::PreviewDecoded { request, data_uri } => {
                let upload = &mut self.model.upload;
                if upload.is_current(request) {
                    upload.preview_src = data_uri;
                    upload.preview_visible = true;
                    reaction.outcome = Some(Outcome::PreviewApplied);
                } else {
                    reaction.outcome = Some(Outcome::StaleDecodeDropped);
                }
            }
        }
        reaction
    }

    fn intake(&mut self, file: Option<FileMeta>, reaction: &mut Reaction) {
        let Some(file) = file else {
            reaction.outcome = Some(Outcome::Ignored);
            return;
        };
        let upload = &mut self.model.upload;
        if file.exceeds_limit(&self.config) {
            upload.set_error(true, true);
            reaction.outcome = Some(Outcome::FileTooLarge {
                size_bytes: file.size_bytes,
                limit_kb: self.config.max_upload_kb,
            });
            return;
        }
        upload.set_error(false, true);

        // Any newer accepted selection supersedes a decode still in flight.
        let request = upload.next_decode_generation();
        let decode = if file.is_image() {
            reaction.commands.push(Command::DecodePreview(request));
            Some(request)
        } else {
            None
        };
        // Buttons show even for a non-image file that never gets a preview.
        upload.selected = Some(file);
        upload.buttons_visible = true;
        upload.helper_text_visible = false;
        reaction.outcome = Some(Outcome::FileAccepted { decode });
    }

    fn submit(&mut self, fields: FormFields, reaction: &mut Reaction) {
        if self.model.view == ViewState::TicketVisible {
            reaction.outcome = Some(Outcome::Ignored);
            return;
        }
        let validation = FieldValidation::check(&fields);
        self.model.full_name_error = !validation.full_name_ok;
        self.model.email_error = !validation.email_ok;
        if !validation.is_valid() {
            reaction.outcome = Some(Outcome::SubmitRejected(validation));
            return;
        }
        let number = TicketNumber::generate(&mut self.rng);
        self.model.ticket = Some(TicketView::project(
            &fields,
            &self.model.upload.preview_src,
            number,
        ));
        self.model.view = ViewState::TicketVisible;
        reaction.outcome = Some(Outcome::SubmitAccepted(number));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::PLACEHOLDER_ICON_SRC;
    use crate::upload::HintPresentation;

    fn machine() -> FormMachine {
        FormMachine::with_seed(FormConfig::default(), 11)
    }

    fn png(size_bytes: u64) -> FileMeta {
        FileMeta::new("avatar.png", size_bytes, "image/png")
    }

    #[test]
    fn initial_model() {
        let machine = machine();
        let model = machine.model();
        assert_eq!(model.view, ViewState::FormVisible);
        assert!(model.upload.shows_placeholder());
        assert!(model.upload.preview_visible);
        assert!(!model.upload.buttons_visible);
        assert!(model.upload.helper_text_visible);
        assert!(model.ticket.is_none());
    }

    #[test]
    fn click_and_enter_open_picker() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::DropZoneClick);
        assert_eq!(reaction.commands, vec![Command::OpenFilePicker]);
        assert!(!reaction.stop_propagation);

        let reaction = machine.dispatch(FormEvent::DropZoneKey {
            key: "Enter".to_string(),
            target_is_zone: true,
        });
        assert_eq!(reaction.commands, vec![Command::OpenFilePicker]);

        let reaction = machine.dispatch(FormEvent::DropZoneKey {
            key: "Enter".to_string(),
            target_is_zone: false,
        });
        assert!(reaction.commands.is_empty());

        let reaction = machine.dispatch(FormEvent::DropZoneKey {
            key: "a".to_string(),
            target_is_zone: true,
        });
        assert!(reaction.commands.is_empty());
    }

    #[test]
    fn change_button_opens_picker_without_bubbling() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::ChangeClick);
        assert!(reaction.stop_propagation);
        assert_eq!(reaction.commands, vec![Command::OpenFilePicker]);
    }

    #[test]
    fn cancelled_picker_is_ignored() {
        let mut machine = machine();
        let before = machine.model().clone();
        let reaction = machine.dispatch(FormEvent::FileChosen(None));
        assert_eq!(reaction.outcome, Some(Outcome::Ignored));
        assert_eq!(machine.model(), &before);
    }

    #[test]
    fn drag_toggles_active_marker() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::DragOver);
        assert!(reaction.prevent_default);
        assert!(machine.model().drag_active);
        machine.dispatch(FormEvent::DragLeave);
        assert!(!machine.model().drag_active);

        machine.dispatch(FormEvent::DragOver);
        let reaction = machine.dispatch(FormEvent::Drop(None));
        assert!(reaction.prevent_default);
        assert!(!machine.model().drag_active);
        assert_eq!(reaction.outcome, Some(Outcome::Ignored));
    }

    #[test]
    fn image_intake_requests_decode() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::Drop(Some(png(1024))));
        let [Command::DecodePreview(request)] = reaction.commands[..] else {
            panic!("expected a decode command, got {:?}", reaction.commands);
        };
        let upload = &machine.model().upload;
        assert!(upload.buttons_visible);
        assert!(!upload.helper_text_visible);
        assert!(upload.shows_placeholder());

        machine.dispatch(FormEvent::PreviewDecoded {
            request,
            data_uri: "data:image/png;base64,AAAA".to_string(),
        });
        assert_eq!(machine.model().upload.preview_src, "data:image/png;base64,AAAA");
        assert!(machine.model().upload.preview_visible);
    }

    #[test]
    fn non_image_still_reveals_buttons() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::FileChosen(Some(FileMeta::new(
            "notes.txt",
            10,
            "text/plain",
        ))));
        assert!(reaction.commands.is_empty());
        assert_eq!(reaction.outcome, Some(Outcome::FileAccepted { decode: None }));
        let upload = &machine.model().upload;
        assert!(upload.buttons_visible);
        assert!(!upload.helper_text_visible);
        assert!(upload.shows_placeholder());
    }

    #[test]
    fn oversized_file_marks_error_and_keeps_previous_selection() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::FileChosen(Some(png(2048))));
        let [Command::DecodePreview(request)] = reaction.commands[..] else {
            panic!("expected decode");
        };
        machine.dispatch(FormEvent::PreviewDecoded {
            request,
            data_uri: "data:image/png;base64,OLD".to_string(),
        });
        let before = machine.model().upload.clone();

        let reaction = machine.dispatch(FormEvent::FileChosen(Some(png(600 * 1024))));
        assert!(reaction.commands.is_empty());
        assert_eq!(
            reaction.outcome,
            Some(Outcome::FileTooLarge {
                size_bytes: 600 * 1024,
                limit_kb: 500
            })
        );
        let upload = &machine.model().upload;
        assert!(upload.has_size_error);
        assert_eq!(upload.hint, HintPresentation::Error);
        assert_eq!(upload.preview_src, before.preview_src);
        assert_eq!(upload.selected, before.selected);
        assert_eq!(upload.buttons_visible, before.buttons_visible);

        machine.dispatch(FormEvent::FileChosen(Some(png(10))));
        let upload = &machine.model().upload;
        assert!(!upload.has_size_error);
        assert_eq!(upload.hint, HintPresentation::Info);
    }

    #[test]
    fn oversized_file_does_not_cancel_pending_decode() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::FileChosen(Some(png(10))));
        let [Command::DecodePreview(request)] = reaction.commands[..] else {
            panic!("expected decode");
        };
        machine.dispatch(FormEvent::FileChosen(Some(png(10 * 1024 * 1024))));
        let reaction = machine.dispatch(FormEvent::PreviewDecoded {
            request,
            data_uri: "data:image/png;base64,A".to_string(),
        });
        assert_eq!(reaction.outcome, Some(Outcome::PreviewApplied));
    }

    #[test]
    fn remove_resets_upload_but_not_hint() {
        let mut machine = machine();
        machine.dispatch(FormEvent::FileChosen(Some(png(10))));
        machine.dispatch(FormEvent::FileChosen(Some(png(900 * 1024))));
        let reaction = machine.dispatch(FormEvent::RemoveClick);
        assert!(reaction.stop_propagation);
        assert_eq!(reaction.commands, vec![Command::ClearFilePicker]);
        let upload = &machine.model().upload;
        assert_eq!(upload.preview_src, PLACEHOLDER_ICON_SRC);
        assert!(upload.preview_visible);
        assert!(!upload.buttons_visible);
        assert!(upload.helper_text_visible);
        assert!(!upload.has_size_error);
        assert_eq!(upload.hint, HintPresentation::Error);
        assert!(upload.selected.is_none());
    }

    #[test]
    fn remove_drops_inflight_decode() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::FileChosen(Some(png(10))));
        let [Command::DecodePreview(request)] = reaction.commands[..] else {
            panic!("expected decode");
        };
        machine.dispatch(FormEvent::RemoveClick);
        let reaction = machine.dispatch(FormEvent::PreviewDecoded {
            request,
            data_uri: "data:image/png;base64,LATE".to_string(),
        });
        assert_eq!(reaction.outcome, Some(Outcome::StaleDecodeDropped));
        assert!(machine.model().upload.shows_placeholder());
    }

    #[test]
    fn submit_marks_both_fields_independently() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::Submit(FormFields::new("", "nope", "")));
        assert!(reaction.prevent_default);
        assert!(machine.model().full_name_error);
        assert!(machine.model().email_error);
        assert_eq!(machine.model().view, ViewState::FormVisible);

        machine.dispatch(FormEvent::Submit(FormFields::new("", "a@b.co", "")));
        assert!(machine.model().full_name_error);
        assert!(!machine.model().email_error);
        assert_eq!(machine.model().view, ViewState::FormVisible);
        assert!(machine.model().ticket.is_none());
    }

    #[test]
    fn submit_renders_ticket_once() {
        let mut machine = machine();
        let reaction = machine.dispatch(FormEvent::Submit(FormFields::new(
            "Ada Lovelace",
            "ada@lovelace.dev",
            "",
        )));
        let Some(Outcome::SubmitAccepted(number)) = reaction.outcome else {
            panic!("expected acceptance, got {:?}", reaction.outcome);
        };
        let model = machine.model();
        assert_eq!(model.view, ViewState::TicketVisible);
        let ticket = model.ticket.clone().unwrap();
        assert_eq!(ticket.number, number);
        assert_eq!(ticket.display_github, None);
        assert_eq!(ticket.image_src, PLACEHOLDER_ICON_SRC);

        let reaction = machine.dispatch(FormEvent::Submit(FormFields::new(
            "Someone Else",
            "else@example.com",
            "else",
        )));
        assert!(reaction.prevent_default);
        assert_eq!(reaction.outcome, Some(Outcome::Ignored));
        assert_eq!(machine.model().ticket.as_ref(), Some(&ticket));
    }
}
