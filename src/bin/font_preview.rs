//! Font specimen sheet (diagnostic binary).
//!
//! Draws every glyph strip, the wrap behavior and the message box onto one
//! frame. With a terminal on stdout it presents the frame and waits for a
//! key; without one it prints the sheet as character art.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use starlance::engine::VideoOut;
use starlance::gfx::{message_box, Font, Surface, CENTERED};
use starlance::term::{downsample_into, CellGrid, TermPresenter};
use starlance::types::{FontColor, LINE_ADVANCE, SCREEN_HEIGHT, SCREEN_WIDTH};

fn specimen(font: &Font) -> Surface {
    let mut sheet = Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    font.draw(
        "Starlance font specimen",
        CENTERED,
        10,
        FontColor::White,
        &mut sheet,
    );

    let mut y = 40;
    for color in [
        FontColor::White,
        FontColor::Red,
        FontColor::Yellow,
        FontColor::Green,
        FontColor::Cyan,
    ] {
        font.draw(
            "The quick brown fox jumps over the lazy dog 0123456789",
            10,
            y,
            color,
            &mut sheet,
        );
        y += LINE_ADVANCE;
    }

    y += LINE_ADVANCE;
    let glyphs: String = (33u8..=126).map(|code| code as char).collect();
    let (head, tail) = glyphs.split_at(glyphs.len() / 2);
    font.draw(head, 10, y, FontColor::White, &mut sheet);
    font.draw(tail, 10, y + LINE_ADVANCE, FontColor::White, &mut sheet);

    y += LINE_ADVANCE * 3;
    font.draw_string(
        "Wrapped: this paragraph is long enough to spill across several lines, \
         showing the space wrap and the forced hyphen break for uninterruptible \
         tokens like Supercalifragilisticexpialidocious.",
        10,
        y,
        FontColor::Green,
        true,
        &mut sheet,
    );

    let panel = message_box(
        None,
        "Message box: wrapped text on a bevelled panel, the way in-mission radio chatter is shown.",
        false,
        font,
    );
    sheet.composite_from(&panel, (SCREEN_WIDTH - panel.width()) / 2, 500);

    sheet
}

fn show(term: &mut TermPresenter, sheet: &Surface) -> Result<()> {
    term.present(sheet)?;
    // Any key closes the preview.
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn print_sheet(sheet: &Surface) {
    let (cols, rows) = (100u16, 37u16);
    let mut grid = CellGrid::new(cols, rows);
    downsample_into(sheet, cols, rows, &mut grid);

    for y in 0..rows {
        let mut line = String::with_capacity(cols as usize);
        for x in 0..cols {
            let lit = grid.get(x, y).is_some_and(|cell| {
                let (t, b) = (cell.top, cell.bottom);
                (t.r | t.g | t.b) != 0 || (b.r | b.g | b.b) != 0
            });
            line.push(if lit { '#' } else { ' ' });
        }
        println!("{}", line.trim_end());
    }
}

fn main() -> Result<()> {
    let font = Font::builtin();
    let sheet = specimen(&font);

    if !TermPresenter::stdout_is_tty() {
        print_sheet(&sheet);
        return Ok(());
    }

    let mut term = TermPresenter::new();
    term.enter()?;
    let result = show(&mut term, &sheet);
    let _ = term.exit();
    result
}
