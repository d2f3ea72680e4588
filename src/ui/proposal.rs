/// The question
///
/// Two buttons walk into a card. "YES!" accepts; "No" flees to a random
/// spot inside the play area whenever the pointer gets close, and again
/// on the off chance it is actually clicked.

use iced::widget::text::Shaping;
use iced::widget::{button, column, container, mouse_area, stack, text};
use iced::{Alignment, Color, Element, Length, Padding};

use crate::anim;
use crate::palette;
use crate::state::proposal::{Proposal, AREA_HEIGHT, AREA_WIDTH};
use crate::Message;

/// Approximate rendered size of the "YES!" button
const YES_WIDTH: f32 = 190.0;
const YES_HEIGHT: f32 = 60.0;

pub fn view(proposal: &Proposal, elapsed: f32) -> Element<'static, Message> {
    let card_alpha = anim::fade_in(elapsed, 0.0, 0.8);
    let (no_x, no_y) = proposal.anchor();

    let yes = button(text("YES! 💖").shaping(Shaping::Advanced).size(22))
        .padding([16, 40])
        .style(|_, status| palette::rose_pill(status, 1.0))
        .on_press(Message::Accept);

    let no = mouse_area(
        button(text("No").size(18))
            .padding([14, 38])
            .style(|_, status| palette::ghost_pill(status, 0.8))
            .on_press(Message::DodgeNo),
    )
    .on_enter(Message::DodgeNo);

    // "YES!" sits left of center, mirroring the No button's start
    let yes_x = (AREA_WIDTH - YES_WIDTH) / 2.0 - 110.0;
    let yes_y = (AREA_HEIGHT - YES_HEIGHT) / 2.0;

    let play_area = stack![
        container(yes).padding(Padding {
            top: yes_y,
            left: yes_x,
            ..Padding::ZERO
        }),
        container(no).padding(Padding {
            top: no_y,
            left: no_x,
            ..Padding::ZERO
        }),
    ]
    .width(Length::Fixed(AREA_WIDTH))
    .height(Length::Fixed(AREA_HEIGHT));

    // Keeps its line height even while empty so the card doesn't jump
    let tease = if proposal.dodges() >= 3 {
        "The other button is getting tired..."
    } else {
        " "
    };

    let card = column![
        text("Will you be my Valentine?")
            .size(44)
            .color(palette::with_alpha(palette::ROSE_100, card_alpha)),
        text("I promise to make up for every mile between us.")
            .size(18)
            .color(palette::with_alpha(Color::WHITE, 0.8 * card_alpha)),
        play_area,
        text(tease)
            .size(13)
            .color(palette::with_alpha(Color::WHITE, 0.5)),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(
        container(card)
            .padding([40, 48])
            .max_width(720)
            .style(palette::glass_card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .padding(24)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_button_fits_the_play_area() {
        let yes_x = (AREA_WIDTH - YES_WIDTH) / 2.0 - 110.0;
        let yes_y = (AREA_HEIGHT - YES_HEIGHT) / 2.0;

        assert!(yes_x >= 0.0 && yes_x + YES_WIDTH <= AREA_WIDTH);
        assert!(yes_y >= 0.0 && yes_y + YES_HEIGHT <= AREA_HEIGHT);
    }

    #[test]
    fn test_buttons_start_apart() {
        let proposal = Proposal::default();
        let (no_x, _) = proposal.anchor();
        let yes_right = (AREA_WIDTH - YES_WIDTH) / 2.0 - 110.0 + YES_WIDTH;

        // The dodger starts clear of the YES! button
        assert!(no_x > yes_right);
    }
}
