//! Widget showcase application
//!
//! Exercises both widgets end to end: a slider drives the progress ring, a
//! toggler flips the percentage label, and the option list round-trips its
//! selection through the spring animation manager.

use std::time::Instant;

use iced::widget::{Space, column, container, row, slider, text, toggler};
use iced::{Alignment, Color, Element, Fill, Subscription, Task, Theme};

use iced_ringpick::{
    CircularProgressBar, OptionId, OptionItem, OptionList, SelectionAnimation, circular_progress,
    theme,
};

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(Showcase::new, Showcase::update, Showcase::view)
        .title("ringpick showcase")
        .theme(Showcase::theme)
        .subscription(Showcase::subscription)
        .antialiasing(true)
        .run()
}

struct Showcase {
    /// Progress denominator, owned here and only read by the ring
    total: f32,
    /// Progress numerator, driven by the slider
    current: f32,
    percent_visible: bool,
    options: Vec<OptionItem>,
    /// Selection owned here; the list replaces it wholesale on taps
    selected: Option<OptionItem>,
    selection_anim: SelectionAnimation<OptionId>,
}

#[derive(Debug, Clone)]
enum Message {
    CurrentChanged(f32),
    PercentVisibilityToggled(bool),
    OptionSelected(Option<OptionItem>),
    AnimationTick,
}

impl Showcase {
    fn new() -> (Self, Task<Message>) {
        let options = vec![
            OptionItem::new("Every day"),
            OptionItem::new("Weekdays only"),
            OptionItem::new("Weekends only"),
        ];

        (
            Self {
                total: 100.0,
                current: 30.0,
                percent_visible: true,
                options,
                selected: None,
                selection_anim: SelectionAnimation::new(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::CurrentChanged(value) => {
                self.current = value;
            }
            Message::PercentVisibilityToggled(visible) => {
                self.percent_visible = visible;
            }
            Message::OptionSelected(option) => {
                tracing::debug!(
                    selected = ?option.as_ref().map(OptionItem::text),
                    "selection changed"
                );
                self.selection_anim
                    .set_selected(option.as_ref().map(OptionItem::id));
                self.selected = option;
            }
            Message::AnimationTick => {
                self.selection_anim.tick(Instant::now());
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let ring = CircularProgressBar::new(self.total, self.current)
            .percent_color(Color::WHITE)
            .percent_visible(self.percent_visible);

        let visibility_row = row![
            text("Show percentage").size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().width(Fill),
            toggler(self.percent_visible)
                .on_toggle(Message::PercentVisibilityToggled)
                .size(24),
        ]
        .align_y(Alignment::Center);

        let ring_panel = column![
            container(circular_progress(ring)).width(240).height(240),
            slider(0.0..=self.total, self.current, Message::CurrentChanged),
            visibility_row,
        ]
        .spacing(24)
        .width(280);

        let list = OptionList::new(
            &self.options,
            self.selected.as_ref(),
            Message::OptionSelected,
        )
        .animate_with(&self.selection_anim)
        .view();

        let list_panel = column![
            text("Reminder schedule").size(18).style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
            list,
        ]
        .spacing(8)
        .width(320);

        container(row![ring_panel, list_panel].spacing(48).align_y(Alignment::Center))
            .center_x(Fill)
            .center_y(Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Animation frames only while a spring is still moving
    fn subscription(&self) -> Subscription<Message> {
        if self.selection_anim.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}
