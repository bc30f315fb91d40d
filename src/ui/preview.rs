/// Live preview pane
///
/// Mirrors the draft as the listing will look: the image at the tracked
/// 16/12 height with a remove button, then title, price and description,
/// each with a placeholder while empty.
use iced::alignment::Horizontal;
use iced::widget::{button, column, container, image, scrollable, stack, text, Space};
use iced::{ContentFit, Element, Length};

use crate::media::preview::PREVIEW_PADDING;
use crate::media::MediaController;
use crate::state::form::ListingForm;
use crate::Message;

/// Price line as shown in the preview
pub fn price_label(price: &str) -> String {
    if price.is_empty() {
        "Price".to_string()
    } else {
        format!("${price}")
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn view<'a>(form: &'a ListingForm, media: &'a MediaController) -> Element<'a, Message> {
    let draft = form.draft();
    let height = media.preview_height();

    let media_preview: Element<'a, Message> = match draft.media.as_ref().and_then(|item| media.handle(item)) {
        Some(handle) => {
            let picture = image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover);

            let remove = container(button(text("X")).on_press(Message::RemoveImage).style(button::danger))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(10);

            // Single-image form, the badge always reads "1 / 1"
            let badge = container(text(format!("{} / 1", form.current_image_index() + 1)).size(14))
                .padding(10);

            stack![picture, remove, badge].into()
        }
        None => container(text("No photo yet").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(container::bordered_box)
            .into(),
    };

    let details = column![
        text(or_placeholder(&draft.title, "Title")).size(22),
        text(price_label(&draft.price)).size(18),
        Space::with_height(8),
        text("Details").size(18),
        text(or_placeholder(&draft.description, "Description will appear here.")),
    ]
    .spacing(6);

    let content = column![text("Preview").size(24), media_preview, details].spacing(16);

    container(scrollable(content))
        .padding(PREVIEW_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
}
