//! Selectable option list widget
//!
//! Renders caller-owned options as tappable rows. The row whose id matches
//! the caller's selection gets the highlighted treatment and a trailing
//! indicator icon; pressing any row emits a full replacement selection
//! through the `on_select` message constructor, so the caller's state stays
//! the single source of truth.
//!
//! # Design
//!
//! This is a reusable widget with a generic Message type. It never mutates
//! the option list or the selection itself.

use iced::widget::{Space, button, column, row, svg, text};
use iced::{Alignment, Border, Color, Element, Fill, Font, Padding};
use uuid::Uuid;

use crate::animation::SelectionAnimation;
use crate::icons;
use crate::theme;

/// Inner padding of each row
const ROW_PADDING: f32 = 16.0;
/// Gap between rows
const LIST_SPACING: f32 = 8.0;
/// Padding above the first row and on both sides of the list
const LIST_PADDING: f32 = 16.0;
/// Indicator icon edge length
const INDICATOR_SIZE: f32 = 20.0;

/// Stable identity of an option, independent of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(Uuid);

impl OptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A selectable entry: a generated stable id plus an immutable label.
///
/// Two options constructed from the same text are still distinct entries;
/// selection matching goes through the id, never the label.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    id: OptionId,
    text: String,
}

impl OptionItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Toggle transition: the selected row clears the selection, any other row
/// takes it over.
fn next_selection(selected: Option<OptionId>, tapped: &OptionItem) -> Option<OptionItem> {
    if selected == Some(tapped.id()) {
        None
    } else {
        Some(tapped.clone())
    }
}

/// Option list configuration
///
/// A selection pointing at an id that is not in `options` highlights
/// nothing; the widget does not reconcile it.
pub struct OptionList<'a, Message> {
    options: &'a [OptionItem],
    selected: Option<OptionId>,
    on_select: Box<dyn Fn(Option<OptionItem>) -> Message + 'a>,
    default_background: Color,
    selected_background: Color,
    indicator: svg::Handle,
    indicator_color: Color,
    corner_radius: f32,
    text_color: Color,
    animation: Option<&'a SelectionAnimation<OptionId>>,
}

impl<'a, Message: Clone + 'a> OptionList<'a, Message> {
    pub fn new(
        options: &'a [OptionItem],
        selected: Option<&OptionItem>,
        on_select: impl Fn(Option<OptionItem>) -> Message + 'a,
    ) -> Self {
        Self {
            options,
            selected: selected.map(OptionItem::id),
            on_select: Box::new(on_select),
            default_background: theme::ROW_BACKGROUND,
            selected_background: theme::ROW_SELECTED_BACKGROUND,
            indicator: svg::Handle::from_memory(icons::CHECK_CIRCLE.as_bytes()),
            indicator_color: Color::WHITE,
            corner_radius: 12.0,
            text_color: theme::ROW_TEXT,
            animation: None,
        }
    }

    /// Background color of unselected rows.
    pub fn default_background(mut self, color: Color) -> Self {
        self.default_background = color;
        self
    }

    /// Background color of the selected row.
    pub fn selected_background(mut self, color: Color) -> Self {
        self.selected_background = color;
        self
    }

    /// Indicator image shown on the selected row. Leaves the indicator
    /// color untouched.
    pub fn indicator(mut self, handle: svg::Handle) -> Self {
        self.indicator = handle;
        self
    }

    /// Tint of the selected-row indicator.
    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    /// Corner radius shared by the row background and its border.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Row label color.
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Drive row styling from a spring animation manager instead of a hard
    /// cut. The caller owns the manager, feeds it the selection in `update`
    /// and ticks it on animation frames.
    pub fn animate_with(mut self, animation: &'a SelectionAnimation<OptionId>) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Per-row highlight progress: animated when a manager is attached,
    /// otherwise 0 or 1 straight from id equality.
    fn highlight(&self, id: OptionId) -> f32 {
        match self.animation {
            Some(animation) => animation.progress(&id),
            None => {
                if self.selected == Some(id) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    fn view_row(&self, option: &'a OptionItem) -> Element<'a, Message> {
        let progress = self.highlight(option.id());

        let label = text(option.text())
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Default::default()
            })
            .color(self.text_color);

        // Indicator rides the highlight so it fades with the spring; with
        // binary styling this is exactly show-on-selected.
        let indicator: Element<'a, Message> = if progress > 0.01 {
            let color = self.indicator_color.scale_alpha(progress);
            svg(self.indicator.clone())
                .width(INDICATOR_SIZE)
                .height(INDICATOR_SIZE)
                .style(move |_theme, _status| svg::Style { color: Some(color) })
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        let content = row![label, Space::new().width(Fill), indicator].align_y(Alignment::Center);

        let background = theme::lerp(self.default_background, self.selected_background, progress);
        let border_color = theme::lerp(theme::ROW_BORDER, theme::ROW_BORDER_SELECTED, progress);
        let text_color = self.text_color;
        let radius = self.corner_radius;

        // Row chrome is a pure function of the selection; button status is
        // deliberately ignored.
        button(content)
            .width(Fill)
            .padding(ROW_PADDING)
            .style(move |_theme, _status| button::Style {
                background: Some(iced::Background::Color(background)),
                text_color,
                border: Border {
                    radius: radius.into(),
                    width: 1.0,
                    color: border_color,
                },
                ..Default::default()
            })
            .on_press((self.on_select)(next_selection(self.selected, option)))
            .into()
    }

    /// Build the element tree. An empty option list builds an empty column.
    pub fn view(self) -> Element<'a, Message> {
        let rows: Vec<Element<'a, Message>> = self
            .options
            .iter()
            .map(|option| self.view_row(option))
            .collect();

        column(rows)
            .spacing(LIST_SPACING)
            .padding(
                Padding::new(0.0)
                    .top(LIST_PADDING)
                    .left(LIST_PADDING)
                    .right(LIST_PADDING),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_options() -> Vec<OptionItem> {
        vec![
            OptionItem::new("first"),
            OptionItem::new("second"),
            OptionItem::new("third"),
        ]
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let a = OptionItem::new("same text");
        let b = OptionItem::new("same text");

        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a.clone().id());
    }

    #[test]
    fn tapping_selected_clears_selection() {
        let a = OptionItem::new("a");
        assert_eq!(next_selection(Some(a.id()), &a), None);
    }

    #[test]
    fn toggle_round_trips_over_two_taps() {
        let a = OptionItem::new("a");

        let after_first = next_selection(Some(a.id()), &a);
        assert_eq!(after_first, None);

        let after_second = next_selection(after_first.map(|o| o.id()), &a);
        assert_eq!(after_second.map(|o| o.id()), Some(a.id()));
    }

    #[test]
    fn tapping_other_takes_over_selection() {
        let a = OptionItem::new("a");
        let b = OptionItem::new("b");

        let next = next_selection(Some(a.id()), &b);
        assert_eq!(next.map(|o| o.id()), Some(b.id()));
    }

    #[test]
    fn at_most_one_row_highlights() {
        let options = three_options();
        let list: OptionList<'_, ()> = OptionList::new(&options, Some(&options[1]), |_| ());

        let highlighted = options
            .iter()
            .filter(|o| list.highlight(o.id()) > 0.0)
            .count();
        assert_eq!(highlighted, 1);
        assert!(list.highlight(options[1].id()) == 1.0);
    }

    #[test]
    fn stale_selection_highlights_nothing() {
        let options = three_options();
        let stale = OptionItem::new("not in the list");
        let list: OptionList<'_, ()> = OptionList::new(&options, Some(&stale), |_| ());

        let highlighted = options
            .iter()
            .filter(|o| list.highlight(o.id()) > 0.0)
            .count();
        assert_eq!(highlighted, 0);
    }

    #[test]
    fn duplicate_labels_stay_distinct() {
        let options = vec![OptionItem::new("twin"), OptionItem::new("twin")];
        let list: OptionList<'_, ()> = OptionList::new(&options, Some(&options[0]), |_| ());

        assert_eq!(list.highlight(options[0].id()), 1.0);
        assert_eq!(list.highlight(options[1].id()), 0.0);
    }

    #[test]
    fn builder_chaining_is_order_independent() {
        let options = three_options();

        let x: OptionList<'_, ()> = OptionList::new(&options, None, |_| ())
            .corner_radius(4.0)
            .text_color(Color::BLACK);
        let y: OptionList<'_, ()> = OptionList::new(&options, None, |_| ())
            .text_color(Color::BLACK)
            .corner_radius(4.0);

        assert_eq!(x.corner_radius, y.corner_radius);
        assert_eq!(x.text_color, y.text_color);
    }

    #[test]
    fn overriding_indicator_keeps_color_default() {
        let options = three_options();
        let handle = svg::Handle::from_memory("<svg/>".as_bytes());

        let list: OptionList<'_, ()> =
            OptionList::new(&options, None, |_| ()).indicator(handle);
        assert_eq!(list.indicator_color, Color::WHITE);
    }

    #[test]
    fn empty_list_builds_an_empty_column() {
        let options: Vec<OptionItem> = Vec::new();
        let list: OptionList<'_, ()> = OptionList::new(&options, None, |_| ());

        // Just has to not blow up while producing zero rows
        let _ = list.view();
    }
}
