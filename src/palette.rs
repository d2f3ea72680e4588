/// Color palette and shared widget styles
///
/// Every screen pulls its colors from here so the rose/purple night-sky
/// look stays consistent. Styling helpers return the plain style structs
/// iced expects, so views can tweak them (usually just the alpha) for
/// staged fade-ins.

use iced::font;
use iced::theme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

// ========== Night sky ==========

pub const SLATE_900: Color = rgb(0x0f, 0x17, 0x2a);
pub const INDIGO_900: Color = rgb(0x31, 0x2e, 0x81);
pub const PURPLE_900: Color = rgb(0x58, 0x1c, 0x87);
pub const INDIGO_500: Color = rgb(0x63, 0x66, 0xf1);

// ========== Rose & purple accents ==========

pub const ROSE_100: Color = rgb(0xff, 0xe4, 0xe6);
pub const ROSE_200: Color = rgb(0xfe, 0xcd, 0xd3);
pub const ROSE_300: Color = rgb(0xfd, 0xa4, 0xaf);
pub const ROSE_400: Color = rgb(0xfb, 0x71, 0x85);
pub const ROSE_500: Color = rgb(0xf4, 0x3f, 0x5e);
pub const PINK_600: Color = rgb(0xdb, 0x27, 0x77);
pub const PURPLE_200: Color = rgb(0xe9, 0xd5, 0xff);
pub const PURPLE_400: Color = rgb(0xc0, 0x84, 0xfc);
pub const PURPLE_600: Color = rgb(0x93, 0x33, 0xea);

/// Confetti ribbon colors (the classic celebratory set)
pub const CONFETTI: [Color; 7] = [
    rgb(0x26, 0xcc, 0xff),
    rgb(0xa2, 0x5a, 0xfd),
    rgb(0xff, 0x5e, 0x7e),
    rgb(0x88, 0xff, 0x5a),
    rgb(0xfc, 0xff, 0x42),
    rgb(0xff, 0xa6, 0x2d),
    rgb(0xff, 0x36, 0xff),
];

/// Default font with italic style, used for handwritten-feeling captions
pub const ITALIC: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

/// Replace a color's alpha channel
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Linear blend between two colors (t clamped to 0..=1)
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

/// The application theme: dark slate background with rose accents
pub fn valentine() -> Theme {
    Theme::custom(
        "Valentine".to_string(),
        theme::Palette {
            background: SLATE_900,
            text: Color::WHITE,
            primary: ROSE_400,
            success: PURPLE_400,
            danger: ROSE_500,
        },
    )
}

/// Frosted-glass card used by every screen
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(with_alpha(Color::WHITE, 0.06))),
        border: Border {
            color: with_alpha(Color::WHITE, 0.16),
            width: 1.0,
            radius: 28.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.35),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 40.0,
        },
    }
}

/// Translucent pill button, faded in with `alpha`
pub fn ghost_pill(status: button::Status, alpha: f32) -> button::Style {
    let surface = match status {
        button::Status::Hovered | button::Status::Pressed => 0.20,
        _ => 0.10,
    };

    button::Style {
        background: Some(Background::Color(with_alpha(Color::WHITE, surface * alpha))),
        text_color: with_alpha(Color::WHITE, alpha),
        border: Border {
            color: with_alpha(Color::WHITE, 0.20 * alpha),
            width: 1.0,
            radius: 999.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Glowing rose pill for the calls to action
pub fn rose_pill(status: button::Status, alpha: f32) -> button::Style {
    let base = match status {
        button::Status::Hovered | button::Status::Pressed => ROSE_500,
        _ => mix(ROSE_500, PINK_600, 0.5),
    };

    button::Style {
        background: Some(Background::Color(with_alpha(base, alpha))),
        text_color: with_alpha(Color::WHITE, alpha),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 999.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(ROSE_500, 0.55 * alpha),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 30.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_channels() {
        let faded = with_alpha(ROSE_400, 0.25);
        assert_eq!(faded.r, ROSE_400.r);
        assert_eq!(faded.g, ROSE_400.g);
        assert_eq!(faded.b, ROSE_400.b);
        assert_eq!(faded.a, 0.25);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(ROSE_500, PURPLE_600, 0.0), ROSE_500);
        assert_eq!(mix(ROSE_500, PURPLE_600, 1.0), PURPLE_600);
        // Out-of-range t clamps instead of extrapolating
        assert_eq!(mix(ROSE_500, PURPLE_600, 2.0), PURPLE_600);
    }
}
