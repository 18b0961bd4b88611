// SPDX-License-Identifier: MPL-2.0
//! Split-bill form for the selected friend.
//!
//! The form keeps the raw text of both amount inputs next to the parsed
//! [`BillDraft`]. An edit that does not parse, or that would push the user's
//! share above the bill, is dropped and the previous text stays visible.

use crate::domain::bill::{BillDraft, Payer};
use crate::domain::friend::{Friend, FriendId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::friends_list::format_amount;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::fmt;

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub friend: &'a Friend,
}

#[derive(Debug, Clone)]
pub enum Message {
    TotalBillChanged(String),
    UserExpenseChanged(String),
    PayerSelected(Payer),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Signed amount to add to the selected friend's balance.
    BalanceAdjusted(f64),
}

/// An amount input that is not a finite, non-negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAmount;

/// Parses an amount input. `Ok(None)` means the field was cleared.
pub fn parse_amount(input: &str) -> Result<Option<f64>, InvalidAmount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(InvalidAmount),
    }
}

/// Draft bound to one friend; dropped when the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    friend_id: FriendId,
    draft: BillDraft,
    total_input: String,
    user_input: String,
}

impl State {
    #[must_use]
    pub fn new(friend_id: FriendId) -> Self {
        Self {
            friend_id,
            draft: BillDraft::new(),
            total_input: String::new(),
            user_input: String::new(),
        }
    }

    #[must_use]
    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    #[must_use]
    pub fn draft(&self) -> &BillDraft {
        &self.draft
    }

    #[must_use]
    pub fn total_input(&self) -> &str {
        &self.total_input
    }

    #[must_use]
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TotalBillChanged(input) => {
                match parse_amount(&input) {
                    Ok(total) => {
                        self.draft.set_total_bill(total);
                        self.total_input = input;
                    }
                    Err(InvalidAmount) => tracing::debug!(%input, "rejected bill value"),
                }
                Event::None
            }
            Message::UserExpenseChanged(input) => {
                let accepted = match parse_amount(&input) {
                    Ok(expense) => self.draft.set_user_expense(expense),
                    Err(InvalidAmount) => false,
                };
                if accepted {
                    self.user_input = input;
                } else {
                    tracing::debug!(%input, "rejected user expense");
                }
                Event::None
            }
            Message::PayerSelected(payer) => {
                self.draft.set_payer(payer);
                Event::None
            }
            Message::Submit => match self.draft.settlement() {
                Some(delta) => Event::BalanceAdjusted(delta),
                None => {
                    tracing::debug!("ignoring incomplete bill split");
                    Event::None
                }
            },
        }
    }

    /// Render the form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let name = ctx.friend.name();

        let title = Text::new(ctx.i18n.tr_with_args("split-bill-title", &[("name", name)]))
            .size(typography::TITLE_LG);

        let total = text_input("", &self.total_input)
            .on_input(Message::TotalBillChanged)
            .on_submit(Message::Submit);

        let user = text_input("", &self.user_input)
            .on_input(Message::UserExpenseChanged)
            .on_submit(Message::Submit);

        let friend_share = self
            .draft
            .friend_expense()
            .map(format_amount)
            .unwrap_or_default();
        // No on_input: read-only
        let friend = text_input("", &friend_share);

        let options = payer_options(ctx.i18n, name);
        let selected = options
            .iter()
            .find(|option| option.payer == self.draft.payer())
            .cloned();
        let payer = pick_list(options, selected, |option: PayerOption| {
            Message::PayerSelected(option.payer)
        })
        .width(Length::Fixed(sizing::INPUT_WIDTH));

        let submit = button(Text::new(ctx.i18n.tr("split-bill-submit-button")))
            .on_press(Message::Submit)
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(labeled(ctx.i18n.tr("split-bill-total-label"), total.into()))
            .push(labeled(
                ctx.i18n.tr("split-bill-user-expense-label"),
                user.into(),
            ))
            .push(labeled(
                ctx.i18n
                    .tr_with_args("split-bill-friend-expense-label", &[("name", name)]),
                friend.into(),
            ))
            .push(labeled(ctx.i18n.tr("split-bill-payer-label"), payer.into()))
            .push(submit);

        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::highlighted)
            .into()
    }
}

/// Pick-list entry: a payer with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct PayerOption {
    pub payer: Payer,
    label: String,
}

impl fmt::Display for PayerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn payer_options(i18n: &I18n, friend_name: &str) -> Vec<PayerOption> {
    Payer::ALL
        .into_iter()
        .map(|payer| PayerOption {
            payer,
            label: match payer {
                Payer::User => i18n.tr("split-bill-payer-user"),
                Payer::Friend => friend_name.to_string(),
            },
        })
        .collect()
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(Container::new(field).width(Length::Fixed(sizing::INPUT_WIDTH)))
        .into()
}
