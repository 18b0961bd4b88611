// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_split::ui::design_tokens::{palette, sizing, spacing};
    use iced_split::ui::styles::{button, container, text};
    use iced_split::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced::widget::button::Status::Active);
            let _ = button::subtle(&theme, iced::widget::button::Status::Hovered);
            let _ = container::panel(&theme);
            let _ = container::highlighted(&theme);
            let _ = container::avatar_badge(&theme);
            let _ = text::secondary(&theme);
        }
    }

    #[test]
    fn balance_colors_follow_the_scheme() {
        let theme = Theme::Light;
        let scheme = ColorScheme::for_theme(&theme);

        assert_eq!(text::debt(&theme).color, Some(scheme.debt));
        assert_eq!(text::credit(&theme).color, Some(scheme.credit));
        assert_ne!(scheme.debt, scheme.credit);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        assert!(spacing::XS < spacing::MD);
        assert!(sizing::INPUT_WIDTH < sizing::FORM_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);

        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
    }
}
