/// The memory lane screen
///
/// One photo at a time in a rounded frame: cover-fit image with a caption
/// band, chevron controls and indicator dots layered on top. A photo that
/// failed to fetch renders an inline guidance panel in its place.

use iced::alignment::{Horizontal, Vertical};
use iced::time::Instant;
use iced::widget::text::Shaping;
use iced::widget::{button, column, container, image, row, stack, text, Space};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Padding};

use crate::anim;
use crate::media::fetch::FetchError;
use crate::palette;
use crate::state::carousel::{Carousel, PhotoState};
use crate::Message;

pub fn view<'a>(carousel: &'a Carousel, now: Instant) -> Element<'a, Message> {
    let (memory, photo) = carousel.current();
    let fade = anim::fade_in(carousel.slide_elapsed(now).min(60.0), 0.0, 0.45);

    let surface: Element<'a, Message> = match photo {
        PhotoState::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(fade)
            .into(),
        PhotoState::Loading => placeholder("💌", "Fetching this memory...", None),
        PhotoState::Failed(error) => placeholder("🖼", "Image could not load.", Some(error)),
    };

    let caption = container(
        text(format!("\u{201c}{}\u{201d}", memory.caption))
            .font(palette::ITALIC)
            .shaping(Shaping::Advanced)
            .size(17)
            .color(palette::with_alpha(Color::WHITE, 0.95 * fade)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([16, 24])
    .style(|_| container::Style {
        background: Some(palette::with_alpha(Color::BLACK, 0.45).into()),
        ..container::Style::default()
    });

    let framed = container(
        stack![
            surface,
            container(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
            container(chevron("‹", Message::PreviousPhoto))
                .height(Length::Fill)
                .align_y(Vertical::Center)
                .padding(12),
            container(chevron("›", Message::NextPhoto))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center)
                .padding(12),
            container(dots(carousel))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .align_y(Vertical::Bottom)
                .padding(Padding {
                    bottom: 64.0,
                    ..Padding::ZERO
                }),
        ]
        .width(Length::Fixed(760.0))
        .height(Length::Fixed(440.0)),
    )
    .padding(8)
    .style(|_| container::Style {
        background: Some(palette::with_alpha(Color::BLACK, 0.4).into()),
        border: Border {
            color: palette::with_alpha(Color::WHITE, 0.1),
            width: 1.0,
            radius: 24.0.into(),
        },
        ..container::Style::default()
    });

    let content = column![
        text("Our Memory Lane")
            .size(36)
            .color(palette::mix(palette::ROSE_200, palette::PURPLE_200, 0.35)),
        framed,
        button(text("One Last Question...").size(16))
            .padding([12, 32])
            .style(|_, status| palette::rose_pill(status, 1.0))
            .on_press(Message::Advance),
    ]
    .spacing(26)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}

fn chevron(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).shaping(Shaping::Advanced).size(22))
        .padding([4, 14])
        .style(|_, status| palette::ghost_pill(status, 0.9))
        .on_press(message)
        .into()
}

/// One dot per memory; the active one stretches into a rose bar
fn dots(carousel: &Carousel) -> Element<'static, Message> {
    (0..carousel.len())
        .fold(row![].spacing(8).align_y(Alignment::Center), |dots, i| {
            let active = i == carousel.current_index();
            let (width, color) = if active {
                (22.0, palette::ROSE_400)
            } else {
                (8.0, palette::with_alpha(Color::WHITE, 0.4))
            };

            dots.push(
                button(Space::new(Length::Fixed(width), Length::Fixed(8.0)))
                    .padding(0)
                    .style(move |_, _| button::Style {
                        background: Some(color.into()),
                        border: Border {
                            radius: 999.0.into(),
                            ..Border::default()
                        },
                        ..button::Style::default()
                    })
                    .on_press(Message::JumpToPhoto(i)),
            )
        })
        .into()
}

fn placeholder<'a>(
    icon: &'a str,
    headline: &'a str,
    error: Option<&'a FetchError>,
) -> Element<'a, Message> {
    let mut content = column![
        text(icon).shaping(Shaping::Advanced).size(42),
        text(headline)
            .size(18)
            .color(palette::with_alpha(Color::WHITE, 0.6)),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .max_width(460);

    if let Some(error) = error {
        content = content
            .push(
                text(
                    "If this is a Google Drive link, make sure it is shared as \
                     \"Anyone with the link\". Otherwise, upload the photo to \
                     Imgur and paste the direct image link.",
                )
                .size(13)
                .color(palette::with_alpha(Color::WHITE, 0.45)),
            )
            .push(
                text(error.to_string())
                    .size(12)
                    .color(palette::with_alpha(palette::ROSE_300, 0.8)),
            );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(30)
        .into()
}
