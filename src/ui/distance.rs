/// The distance map screen
///
/// A stylized map in a 100x100 logical space: a dashed gradient arc is
/// swept from Lagos to Kigali while a glowing heart rides the curve on a
/// loop. Both city markers pop in on their own schedule.

use iced::alignment::{Horizontal, Vertical};
use iced::mouse::Cursor;
use iced::widget::canvas::{self, gradient, Gradient, LineCap, LineDash, Path, Stroke, Style};
use iced::widget::{button, canvas as canvas_widget, column, container, text};
use iced::{Alignment, Color, Element, Length, Point, Rectangle};

use crate::anim::{self, Ease};
use crate::palette;
use crate::Message;

/// Route endpoints and curve control point, in map coordinates
const LAGOS: (f32, f32) = (20.0, 30.0);
const KIGALI: (f32, f32) = (80.0, 70.0);
const CONTROL: (f32, f32) = (60.0, 20.0);

/// Seconds the path sweep (and one heart lap) takes
const SWEEP_SECONDS: f32 = 3.0;

const DASH: [f32; 2] = [6.0, 4.0];

pub fn view(elapsed: f32) -> Element<'static, Message> {
    let cta_alpha = anim::fade_in(elapsed, 3.5, 0.8);

    let map = container(
        canvas_widget(Map { elapsed })
            .width(Length::Fill)
            .height(Length::Fixed(360.0)),
    )
    .width(Length::Fill)
    .padding(6)
    .style(|_| container::Style {
        background: Some(palette::with_alpha(Color::BLACK, 0.2).into()),
        border: iced::Border {
            color: palette::with_alpha(Color::WHITE, 0.05),
            width: 1.0,
            radius: 18.0.into(),
        },
        ..container::Style::default()
    });

    let card = column![
        text("Miles Apart, Heart Connected")
            .size(34)
            .color(palette::ROSE_100),
        text("From Lagos to Kigali, no distance is too great for the way I feel about you.")
            .size(16)
            .color(palette::with_alpha(Color::WHITE, 0.6)),
        map,
        button(text("Remember Us?").size(16))
            .padding([12, 30])
            .style(move |_, status| palette::ghost_pill(status, cta_alpha))
            .on_press_maybe((cta_alpha > 0.4).then_some(Message::Advance)),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .max_width(820);

    container(container(card).padding(36).style(palette::glass_card))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}

struct Map {
    elapsed: f32,
}

impl Map {
    /// Quadratic Bézier through the control point, in map coordinates
    fn route(t: f32) -> (f32, f32) {
        let u = 1.0 - t;
        let x = u * u * LAGOS.0 + 2.0 * u * t * CONTROL.0 + t * t * KIGALI.0;
        let y = u * u * LAGOS.1 + 2.0 * u * t * CONTROL.1 + t * t * KIGALI.1;
        (x, y)
    }

    /// Map coordinates to pixels, with a fixed inset
    fn place(point: (f32, f32), bounds: &Rectangle) -> Point {
        const INSET: f32 = 36.0;
        Point::new(
            INSET + point.0 / 100.0 * (bounds.width - 2.0 * INSET),
            INSET + point.1 / 100.0 * (bounds.height - 2.0 * INSET),
        )
    }

    fn marker(frame: &mut canvas::Frame, at: Point, color: Color, label: &str, scale: f32) {
        if scale <= 0.0 {
            return;
        }

        frame.fill(
            &Path::circle(at, 9.0 * scale),
            palette::with_alpha(color, 0.25),
        );
        frame.fill(&Path::circle(at, 5.0 * scale), color);

        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position: Point::new(at.x, at.y + 13.0),
            color: palette::with_alpha(color, scale.min(1.0)),
            size: 12.0.into(),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Top,
            ..canvas::Text::default()
        });
    }
}

impl canvas::Program<Message> for Map {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Dotted grid standing in for a map
        let step = 24.0;
        let mut y = step / 2.0;
        while y < bounds.height {
            let mut x = step / 2.0;
            while x < bounds.width {
                frame.fill(
                    &Path::circle(Point::new(x, y), 1.0),
                    palette::with_alpha(Color::WHITE, 0.07),
                );
                x += step;
            }
            y += step;
        }

        let sweep = Ease::InOutCubic.apply(anim::progress(self.elapsed, 0.4, SWEEP_SECONDS));

        // The route, revealed up to the sweep point
        if sweep > 0.0 {
            const SAMPLES: usize = 64;
            let route = Path::new(|builder| {
                builder.move_to(Self::place(Self::route(0.0), &bounds));
                for i in 1..=SAMPLES {
                    let t = sweep * i as f32 / SAMPLES as f32;
                    builder.line_to(Self::place(Self::route(t), &bounds));
                }
            });

            let stroke_gradient = gradient::Linear::new(
                Self::place(LAGOS, &bounds),
                Self::place(KIGALI, &bounds),
            )
            .add_stop(0.0, palette::ROSE_500)
            .add_stop(1.0, palette::PURPLE_600);

            frame.stroke(
                &route,
                Stroke {
                    style: Style::Gradient(Gradient::Linear(stroke_gradient)),
                    width: 2.5,
                    line_cap: LineCap::Round,
                    line_dash: LineDash {
                        segments: &DASH,
                        offset: 0,
                    },
                    ..Stroke::default()
                },
            );

            // The travelling heart loops the revealed part of the route
            let lap = (self.elapsed / SWEEP_SECONDS).fract() * sweep;
            let heart = Self::place(Self::route(lap), &bounds);
            for (radius, alpha) in [(8.0, 0.12), (5.0, 0.3), (2.8, 1.0)] {
                frame.fill(
                    &Path::circle(heart, radius),
                    palette::with_alpha(palette::ROSE_400, alpha),
                );
            }
        }

        Self::marker(
            &mut frame,
            Self::place(LAGOS, &bounds),
            palette::ROSE_400,
            "LAGOS",
            anim::pop(self.elapsed, 0.5, 0.5),
        );
        Self::marker(
            &mut frame,
            Self::place(KIGALI, &bounds),
            palette::PURPLE_400,
            "KIGALI",
            anim::pop(self.elapsed, 2.5, 0.5),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_hits_both_cities() {
        assert_eq!(Map::route(0.0), LAGOS);
        assert_eq!(Map::route(1.0), KIGALI);
    }

    #[test]
    fn test_route_bends_toward_the_control_point() {
        let (_, midpoint_y) = Map::route(0.5);
        let chord_y = (LAGOS.1 + KIGALI.1) / 2.0;
        // The control point sits above the chord, so the curve does too
        assert!(midpoint_y < chord_y);
    }
}
