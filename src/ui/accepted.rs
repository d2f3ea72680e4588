/// The celebration screen
///
/// Terminal stage: nothing left to click, just the answer sinking in
/// while the confetti layer rains over everything.

use iced::widget::text::Shaping;
use iced::widget::{column, container, text};
use iced::{Alignment, Color, Element, Length};

use crate::anim;
use crate::palette;
use crate::Message;

pub fn view(elapsed: f32) -> Element<'static, Message> {
    let badge_scale = anim::pop(elapsed, 0.0, 0.7).max(0.0);
    let heading_alpha = anim::fade_in(elapsed, 0.3, 0.9);
    let sub_alpha = anim::fade_in(elapsed, 0.8, 0.9);

    let badge = container(
        text("🥰")
            .shaping(Shaping::Advanced)
            .size((64.0 * badge_scale).max(1.0)),
    )
    .padding(34)
    .style(|_| container::Style {
        background: Some(palette::with_alpha(palette::ROSE_500, 0.2).into()),
        border: iced::Border {
            color: palette::with_alpha(palette::ROSE_400, 0.3),
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    });

    let content = column![
        badge,
        text("See you soon, my love.")
            .size(46)
            .color(palette::with_alpha(Color::WHITE, heading_alpha)),
        text("Checking flights to Kigali... ✈️")
            .shaping(Shaping::Advanced)
            .size(19)
            .color(palette::with_alpha(palette::ROSE_200, sub_alpha)),
    ]
    .spacing(28)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}
