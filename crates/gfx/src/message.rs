//! In-mission message box construction.

use starlance_types::{FontColor, BLACK, DARK_BLUE};

use crate::font::Font;
use crate::primitives::{alpha_rect, bevel_rect};
use crate::surface::Surface;

pub const MESSAGE_BOX_WIDTH: i32 = 550;
pub const MESSAGE_BOX_HEIGHT: i32 = 60;

/// Build the message box surface: a bevelled panel, the speaker's portrait
/// when there is one, and the wrapped message text.
///
/// With a portrait the panel is dark blue and text starts right of the
/// portrait; without, the panel is black and text hugs the left edge.
/// `transparent` makes the whole box composite at half opacity.
pub fn message_box(
    face: Option<&Surface>,
    message: &str,
    transparent: bool,
    font: &Font,
) -> Surface {
    let mut panel = if transparent {
        alpha_rect(MESSAGE_BOX_WIDTH, MESSAGE_BOX_HEIGHT, BLACK)
    } else {
        Surface::new(MESSAGE_BOX_WIDTH, MESSAGE_BOX_HEIGHT)
    };

    let text_x = match face {
        Some(face) => {
            bevel_rect(
                &mut panel,
                0,
                0,
                MESSAGE_BOX_WIDTH - 1,
                MESSAGE_BOX_HEIGHT - 1,
                DARK_BLUE,
            );
            panel.composite_from(face, 5, 5);
            60
        }
        None => {
            bevel_rect(
                &mut panel,
                0,
                0,
                MESSAGE_BOX_WIDTH - 1,
                MESSAGE_BOX_HEIGHT - 1,
                BLACK,
            );
            10
        }
    };

    font.draw_string(message, text_x, 5, FontColor::White, true, &mut panel);
    panel
}
