/// The apology screen
///
/// First thing she sees: a glass card whose pieces fade in one after
/// another, ending with the button that starts the journey.

use iced::widget::text::Shaping;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Color, Element, Length};

use crate::anim;
use crate::palette;
use crate::Message;

pub fn view(elapsed: f32) -> Element<'static, Message> {
    let badge_scale = anim::pop(elapsed, 0.5, 0.6).max(0.0);
    let heading_alpha = anim::fade_in(elapsed, 0.3, 1.0);
    let body_alpha = anim::fade_in(elapsed, 1.0, 1.0);
    let cta_alpha = anim::fade_in(elapsed, 2.5, 0.8);

    let badge = container(
        text("💗")
            .shaping(Shaping::Advanced)
            .size((8.0 + 24.0 * badge_scale).max(1.0)),
    )
    .padding(14)
    .style(|_| container::Style {
        background: Some(palette::with_alpha(Color::WHITE, 0.1).into()),
        border: iced::Border {
            radius: 999.0.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    });

    let card = column![
        badge,
        text("I'm Sorry")
            .size(50)
            .color(palette::with_alpha(palette::ROSE_100, heading_alpha)),
        text(
            "Sometimes words aren't enough to express how much I value what \
             we have. Distance makes things harder, but it also makes every \
             moment matter more."
        )
        .size(18)
        .color(palette::with_alpha(Color::WHITE, 0.85 * body_alpha)),
        text(
            "I messed up, and I want to make it right. Not just because it's \
             Valentine's, but because it's us."
        )
        .size(18)
        .font(palette::ITALIC)
        .color(palette::with_alpha(palette::ROSE_200, 0.9 * body_alpha)),
        button(
            text("Let me show you →")
                .shaping(Shaping::Advanced)
                .size(16)
        )
        .padding([12, 30])
        .style(move |_, status| palette::ghost_pill(status, cta_alpha))
        .on_press_maybe((cta_alpha > 0.4).then_some(Message::Advance)),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .max_width(640);

    container(container(card).padding(46).style(palette::glass_card))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}
