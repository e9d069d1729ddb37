use owo_colors::{OwoColorize, Style};
use rubik_core::{Color, Cube};

fn style(color: Color) -> Style {
    let style = Style::new().black();
    match color {
        Color::White => style.on_white(),
        Color::Blue => style.on_blue(),
        Color::Red => style.on_red(),
        Color::Green => style.on_green(),
        Color::Orange => style.on_truecolor(255, 140, 0),
        Color::Yellow => style.on_yellow(),
    }
}

/// Render the cube's net, painting each facelet when `color` is set.
pub fn net(cube: &Cube, color: bool) -> String {
    if !color {
        return cube.to_string();
    }

    let mut out = String::new();
    for row in cube.net() {
        for cell in row {
            match cell {
                Some(facelet) => {
                    let text = format!(" {facelet} ");
                    out.push_str(&text.style(style(facelet)).to_string());
                }
                None => out.push_str("   "),
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}
