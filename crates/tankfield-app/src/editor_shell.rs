//! Line-oriented editor frontend.
//!
//! Drives an `EditorSession` from a text command stream, one action
//! per line:
//!
//! ```text
//! cursor <X> <Y>   move the cursor to pixel center (X, Y)
//! next             cycle to the next palette slot
//! place            place the selected entity at the cursor
//! erase            remove whatever the cursor touches
//! quit             finish the session
//! ```
//!
//! Any other line is a fatal error, as is `place` while the delete
//! slot is selected. The session's placements are returned so the
//! caller can write them back to the level file.

use std::io::{self, BufRead};

use glam::IVec2;
use thiserror::Error;

use tankfield_core::level::Placement;
use tankfield_sim::editor::{EditorError, EditorSession};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown editor action")]
    UnknownAction,
    #[error("failed to read editor input")]
    Io(#[from] io::Error),
}

impl From<EditorError> for ShellError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::UnknownAction => ShellError::UnknownAction,
        }
    }
}

/// Run the editor session to completion over `input`. Ends at `quit`
/// or end of input.
pub fn run<R: BufRead>(
    session: &mut EditorSession,
    input: R,
) -> Result<Vec<Placement>, ShellError> {
    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["cursor", x, y] => {
                let x: i32 = x.parse().map_err(|_| ShellError::UnknownAction)?;
                let y: i32 = y.parse().map_err(|_| ShellError::UnknownAction)?;
                session.set_cursor(IVec2::new(x, y));
            }
            ["next"] => {
                session.next_slot();
                log::info!("selected slot: {:?}", session.slot());
            }
            ["place"] => session.create()?,
            ["erase"] => session.delete(),
            ["quit"] => break,
            _ => return Err(ShellError::UnknownAction),
        }
    }

    Ok(session.placements())
}
