/// Notification stack, drawn over the bottom-right corner of the window
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, row, text, Column};
use iced::{Element, Length};

use crate::notify::{Notification, NotificationCenter, NotifyKind};
use crate::Message;

const TOAST_WIDTH: f32 = 320.0;

fn toast(notification: &Notification) -> Element<'_, Message> {
    let message = text(&notification.message).width(Length::Fill);
    let message = match notification.kind {
        NotifyKind::Info => message.style(text::success),
        NotifyKind::Error => message.style(text::danger),
    };

    let dismiss = button(text("x"))
        .on_press(Message::DismissNotification(notification.id))
        .style(button::text);

    container(row![message, dismiss].spacing(8).align_y(Vertical::Center))
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(10)
        .style(container::rounded_box)
        .into()
}

pub fn overlay(center: &NotificationCenter) -> Element<'_, Message> {
    let toasts = Column::with_children(center.visible().map(toast))
        .spacing(8)
        .align_x(Horizontal::Right);

    container(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(20)
        .into()
}
