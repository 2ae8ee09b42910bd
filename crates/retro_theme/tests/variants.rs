use retro_theme::{
    resolve_active_variant, Color, ColorRole, ColorScheme, ThemeBundle, ThemeSelection,
};

#[test]
fn both_variants_answer_every_role() {
    let bundle = ThemeBundle::retro();
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let theme = bundle.for_scheme(scheme);
        assert_eq!(theme.color_scheme(), scheme);
        for role in ColorRole::all() {
            assert_eq!(
                theme.colors().get_path(role.path()),
                Some(theme.color(*role)),
                "scheme={scheme:?} role={role:?}"
            );
        }
    }
}

#[test]
fn dark_variant_keeps_arcade_palette() {
    let dark = ThemeBundle::retro().dark().clone();
    let hex = |role| dark.color(role).to_hex();

    assert_eq!(hex(ColorRole::BackgroundPrimary), "#000000");
    assert_eq!(hex(ColorRole::BackgroundSecondary), "#1a1a1a");
    assert_eq!(hex(ColorRole::BackgroundAccent), "#099faa");
    assert_eq!(hex(ColorRole::TextBrand), "#d4f20d");
    assert_eq!(hex(ColorRole::TintAccent), "#e61920");
    assert_eq!(hex(ColorRole::TextBaseMuted), "#4d4d4d");
}

#[test]
fn light_and_dark_have_distinct_surfaces() {
    let bundle = ThemeBundle::retro();
    for role in [
        ColorRole::BackgroundPrimary,
        ColorRole::TextBase,
        ColorRole::BorderBase,
    ] {
        assert_ne!(
            bundle.light().color(role),
            bundle.dark().color(role),
            "role={role:?}"
        );
    }
}

#[test]
fn resolution_is_total() {
    let bundle = ThemeBundle::retro();
    let selections = [
        ThemeSelection::Light,
        ThemeSelection::Dark,
        ThemeSelection::System,
    ];
    let preferences = [None, Some(ColorScheme::Light), Some(ColorScheme::Dark)];

    for selection in selections {
        for preference in preferences {
            let scheme = resolve_active_variant(selection, preference);
            let expected = selection.scheme().or(preference).unwrap_or(ColorScheme::Light);
            assert_eq!(scheme, expected, "selection={selection:?} pref={preference:?}");
            assert_eq!(bundle.resolve(selection, preference).color_scheme(), scheme);
        }
    }
}

#[test]
fn palette_manipulator_fades_text_for_shadows() {
    let dark = ThemeBundle::retro().dark().clone();
    let shadow = dark
        .colors()
        .change_hex_alpha(dark.color(ColorRole::TextBase), 40.0);

    assert_eq!(shadow.to_hex(), "#ffffff66");
    assert_eq!(shadow.with_alpha(1.0), Color::WHITE);
}
