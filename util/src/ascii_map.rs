use std::{fmt, str::FromStr};

use anyhow::bail;
use fov::GridMap;
use glam::{ivec2, IVec2};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::HashMap;

/// Glyphs that block sight unless told otherwise.
pub const DEFAULT_WALLS: &str = "#+";

/// Glyph for the starting position of the viewer.
pub const START: char = '@';

/// Grid read from a text drawing.
///
/// Every non-whitespace character is a cell, whitespace is outside the map,
/// so maps don't need to be rectangular. Wall glyphs are opaque and
/// everything else can be seen through.
///
/// Serialized as the map text. Custom wall glyphs don't survive the
/// serialization, a deserialized map uses [`DEFAULT_WALLS`].
#[derive(Clone, Debug, Eq, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct AsciiMap {
    cells: HashMap<IVec2, char>,
    walls: Vec<char>,
    size: IVec2,
    start: Option<IVec2>,
}

impl AsciiMap {
    /// Parse a map where the characters in `walls` are opaque.
    pub fn with_walls(text: &str, walls: &str) -> anyhow::Result<Self> {
        let text = text.trim_end();

        // There might be white space messing with the where content starts,
        // so snap the topmost line and leftmost column to zero.
        let y_skip = text
            .lines()
            .take_while(|line| line.trim().is_empty())
            .count();
        let x_skip = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let mut cells = HashMap::default();
        let mut size = IVec2::ZERO;
        let mut start = None;

        for (y, line) in text.lines().skip(y_skip).enumerate() {
            for (x, c) in line.chars().skip(x_skip).enumerate() {
                if c.is_whitespace() {
                    continue;
                }

                let pos = ivec2(x as i32, y as i32);
                if c == START {
                    if let Some(prev) = start {
                        bail!("second start position {pos}, first at {prev}");
                    }
                    start = Some(pos);
                }

                cells.insert(pos, c);
                size = size.max(pos + IVec2::ONE);
            }
        }

        if cells.is_empty() {
            bail!("empty map");
        }

        Ok(AsciiMap {
            cells,
            walls: walls.chars().collect(),
            size,
            start,
        })
    }

    /// Position of the start glyph if the map has one.
    pub fn start(&self) -> Option<IVec2> {
        self.start
    }

    /// Size of the bounding rectangle of the map.
    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn glyph(&self, pos: IVec2) -> Option<char> {
        self.cells.get(&pos).copied()
    }

    /// Iterate the map cells and their glyphs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, char)> + '_ {
        self.cells.iter().map(|(&p, &c)| (p, c))
    }

    /// Draw the map with only the cells that pass `is_visible` shown.
    pub fn render(&self, is_visible: impl Fn(IVec2) -> bool) -> String {
        self.draw(|p| self.glyph(p).filter(|_| is_visible(p)))
    }

    fn draw(&self, glyph: impl Fn(IVec2) -> Option<char>) -> String {
        let mut ret = String::new();
        for y in 0..self.size.y {
            let mut line: String = (0..self.size.x)
                .map(|x| glyph(ivec2(x, y)).unwrap_or(' '))
                .collect();
            line.truncate(line.trim_end().len());
            ret.push_str(&line);
            ret.push('\n');
        }
        ret
    }
}

impl GridMap for AsciiMap {
    fn in_bounds(&self, pos: IVec2) -> bool {
        self.cells.contains_key(&pos)
    }

    fn is_opaque(&self, pos: IVec2) -> bool {
        self.glyph(pos).is_some_and(|c| self.walls.contains(&c))
    }

    /// Row-major index into the bounding rectangle and the rectangle width.
    fn index(&self, pos: IVec2) -> (i32, i32) {
        (pos.y * self.size.x + pos.x, self.size.x)
    }
}

impl FromStr for AsciiMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AsciiMap::with_walls(s, DEFAULT_WALLS)
    }
}

impl fmt::Display for AsciiMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.draw(|p| self.glyph(p)))
    }
}
