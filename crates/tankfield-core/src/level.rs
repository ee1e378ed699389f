//! Level file parsing and serialization.
//!
//! The on-disk format is one entity per line: `<kind> <x> <y>` where
//! kind is 0 (wall), 1 (player) or 2 (enemy) and x/y are the integer
//! pixel coordinates of the entity's center. At most one player per
//! level. All format violations are fatal configuration errors.

use std::fs;
use std::io;
use std::path::Path;

use glam::IVec2;
use thiserror::Error;

use crate::enums::EntityKind;

/// One entity placement from a level file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: EntityKind,
    /// Pixel center of the entity.
    pub center: IVec2,
}

/// Fatal level-file errors. No recovery is attempted for any of these.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("no such file: {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("wrong file format (line {line})")]
    WrongFormat { line: usize },
    #[error("more than one player")]
    MorePlayers,
}

impl LevelError {
    /// True if the underlying cause is a missing file (the editor
    /// treats that as "new level" instead of aborting).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LevelError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Parse level text into placements. Rejects malformed lines and a
/// second player entry.
pub fn parse_level(text: &str) -> Result<Vec<Placement>, LevelError> {
    let mut placements = Vec::new();
    let mut seen_player = false;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut tokens = line.split_whitespace();

        let (kind, x, y) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(kind), Some(x), Some(y), None) => (kind, x, y),
            _ => return Err(LevelError::WrongFormat { line: line_no }),
        };

        let tag: u8 = kind
            .parse()
            .map_err(|_| LevelError::WrongFormat { line: line_no })?;
        let kind =
            EntityKind::from_tag(tag).ok_or(LevelError::WrongFormat { line: line_no })?;
        let x: i32 = x
            .parse()
            .map_err(|_| LevelError::WrongFormat { line: line_no })?;
        let y: i32 = y
            .parse()
            .map_err(|_| LevelError::WrongFormat { line: line_no })?;

        if kind == EntityKind::Player {
            if seen_player {
                return Err(LevelError::MorePlayers);
            }
            seen_player = true;
        }

        placements.push(Placement {
            kind,
            center: IVec2::new(x, y),
        });
    }

    Ok(placements)
}

/// Load and parse a level file.
pub fn load_level(path: &Path) -> Result<Vec<Placement>, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_level(&text)
}

/// Serialize placements back to the on-disk format, one line each,
/// in the given order.
pub fn serialize_level(placements: &[Placement]) -> String {
    let mut out = String::new();
    for p in placements {
        out.push_str(&format!("{} {} {}\n", p.kind.tag(), p.center.x, p.center.y));
    }
    out
}

/// Write a level file (editor save path).
pub fn write_level(path: &Path, placements: &[Placement]) -> Result<(), LevelError> {
    let text = serialize_level(placements);
    fs::write(path, text).map_err(|source| LevelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("wrote level with {} entities to {}", placements.len(), path.display());
    Ok(())
}
