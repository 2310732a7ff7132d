use super::palette::Palette;
use ratatui::style::Color;

// Warm showroom tones: walnut surfaces, brass accent.
pub const EMBER: Palette = Palette {
    base: Color::Rgb(36, 30, 26),
    mantle: Color::Rgb(46, 38, 33),
    crust: Color::Rgb(28, 23, 20),
    text: Color::Rgb(240, 230, 216),
    subtext: Color::Rgb(201, 187, 170),
    surface0: Color::Rgb(72, 60, 51),
    surface1: Color::Rgb(58, 48, 41),
    surface2: Color::Rgb(94, 79, 67),
    overlay: Color::Rgb(150, 130, 112),
    accent: Color::Rgb(214, 165, 84),
    teal: Color::Rgb(122, 170, 155),
    green: Color::Rgb(152, 187, 108),
    yellow: Color::Rgb(230, 192, 110),
    peach: Color::Rgb(227, 140, 90),
    red: Color::Rgb(204, 86, 72),
    mauve: Color::Rgb(176, 128, 150),
};
