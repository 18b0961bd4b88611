// SPDX-License-Identifier: MPL-2.0
//! Add-friend form: a name and an avatar URL turned into a new friend.
//!
//! Submitting with either field empty does nothing. There is no error
//! message; the form simply stays as it is.

use crate::application::port::{AvatarReferenceGenerator, FriendIdGenerator};
use crate::domain::friend::Friend;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    ImageUrlChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    FriendCreated(Friend),
}

/// Collaborators needed to mint a new friend.
pub struct Ports<'a> {
    pub ids: &'a dyn FriendIdGenerator,
    pub avatars: &'a dyn AvatarReferenceGenerator,
}

/// Draft of the friend being added.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    name: String,
    image_url: String,
    default_image_url: String,
}

impl State {
    /// Empty draft whose image URL is prefilled with `default_image_url`.
    #[must_use]
    pub fn new(default_image_url: impl Into<String>) -> Self {
        let default_image_url = default_image_url.into();
        Self {
            name: String::new(),
            image_url: default_image_url.clone(),
            default_image_url,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn update(&mut self, message: Message, ports: &Ports<'_>) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Event::None
            }
            Message::ImageUrlChanged(url) => {
                self.image_url = url;
                Event::None
            }
            Message::Submit => self.submit(ports),
        }
    }

    fn submit(&mut self, ports: &Ports<'_>) -> Event {
        if self.name.is_empty() || self.image_url.is_empty() {
            tracing::debug!("ignoring add-friend submission with empty fields");
            return Event::None;
        }

        let id = ports.ids.next_id();
        let image_url = ports.avatars.reference(&self.image_url, &id);
        let friend = Friend::new(id, std::mem::take(&mut self.name), image_url);

        self.reset();
        Event::FriendCreated(friend)
    }

    fn reset(&mut self) {
        self.name.clear();
        self.image_url.clone_from(&self.default_image_url);
    }

    /// Render the form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let name_row = labeled_input(
            ctx.i18n.tr("add-friend-name-label"),
            text_input("", &self.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit),
        );

        let image_row = labeled_input(
            ctx.i18n.tr("add-friend-image-label"),
            text_input("", &self.image_url)
                .on_input(Message::ImageUrlChanged)
                .on_submit(Message::Submit),
        );

        let submit = button(Text::new(ctx.i18n.tr("add-friend-submit-button")))
            .on_press(Message::Submit)
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(name_row)
            .push(image_row)
            .push(submit);

        Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::highlighted)
            .into()
    }
}

fn labeled_input<'a>(
    label: String,
    input: iced::widget::TextInput<'a, Message>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(input.padding(spacing::XS).width(Length::FillPortion(2)))
        .into()
}
