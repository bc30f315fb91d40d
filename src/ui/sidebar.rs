/// Input sidebar: photo picker, the three required fields and the submit button
use iced::widget::text_editor::{Action, Content, Motion};
use iced::widget::{button, column, container, text, text_editor, text_input, Space};
use iced::{Element, Length};

use crate::media::preview::SIDEBAR_WIDTH;
use crate::state::data::ListingDraft;
use crate::state::form::FormPhase;
use crate::Message;

/// Height of the multi-line description editor
const DESCRIPTION_HEIGHT: f32 = 140.0;

/// Committed text of the description editor, lines joined with `\n`
pub fn editor_text(content: &Content) -> String {
    content.lines().enumerate().fold(String::new(), |mut text, (i, line)| {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
        text
    })
}

/// Editor buffer holding `text` with the cursor at the end
pub fn editor_content(text: &str) -> Content {
    let mut content = Content::with_text(text);
    content.perform(Action::Move(Motion::DocumentEnd));
    content
}

pub fn view<'a>(draft: &'a ListingDraft, description: &'a Content, phase: FormPhase) -> Element<'a, Message> {
    let submitting = phase == FormPhase::Submitting;

    let add_photos = button(text("Add Photos"))
        .on_press(Message::AddPhotos)
        .padding(10)
        .width(Length::Fill);

    // Disabled while a request is in flight
    let create = button(text(if submitting { "Creating..." } else { "Create Listing" }))
        .on_press_maybe((!submitting).then_some(Message::Submit))
        .padding(10)
        .width(Length::Fill);

    let content = column![
        text("Item for Sale").size(24),
        add_photos,
        Space::with_height(10),
        text("Required").size(18),
        text_input("Title", &draft.title)
            .on_input(Message::TitleChanged)
            .padding(10),
        text_input("Price", &draft.price)
            .on_input(Message::PriceChanged)
            .padding(10),
        text_editor(description)
            .placeholder("Description")
            .on_action(Message::DescriptionEdited)
            .padding(10)
            .height(DESCRIPTION_HEIGHT),
        create,
    ]
    .spacing(12);

    container(content)
        .padding(20)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}
