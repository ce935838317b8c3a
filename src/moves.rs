use serde::{Deserialize, Serialize};

/// A move from one playable square to another. Positions are (column, row)
/// pairs; a step changes row by ±1, a jump by ±2 over the captured square.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Move {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

impl Move {
    pub fn is_jump(&self) -> bool {
        (self.to.1 - self.from.1).abs() == 2
    }

    /// The square jumped over, i.e. the captured square for a jump.
    pub fn midpoint(&self) -> (i32, i32) {
        ((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }

    /// Convert to text notation, e.g. "b6-a5" for a step, "b6xd4" for a jump.
    /// Columns are files a–h, rows are ranks 1–8.
    pub fn to_notation(&self) -> String {
        let fc = (b'a' + self.from.0 as u8) as char;
        let fr = (b'1' + self.from.1 as u8) as char;
        let tc = (b'a' + self.to.0 as u8) as char;
        let tr = (b'1' + self.to.1 as u8) as char;
        let sep = if self.is_jump() { 'x' } else { '-' };
        format!("{fc}{fr}{sep}{tc}{tr}")
    }

    /// Parse from text notation ("b6-a5" or "b6xd4").
    pub fn from_notation(s: &str) -> Option<Move> {
        let bytes = s.as_bytes();
        if bytes.len() < 5 {
            return None;
        }
        let fc = (bytes[0].wrapping_sub(b'a')) as i32;
        let fr = (bytes[1].wrapping_sub(b'1')) as i32;
        let tc = (bytes[3].wrapping_sub(b'a')) as i32;
        let tr = (bytes[4].wrapping_sub(b'1')) as i32;
        if !(0..8).contains(&fc) || !(0..8).contains(&fr) || !(0..8).contains(&tc) || !(0..8).contains(&tr)
        {
            return None;
        }
        Some(Move {
            from: (fc, fr),
            to: (tc, tr),
        })
    }
}
