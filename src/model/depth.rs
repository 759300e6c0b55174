use serde::{Deserialize, Serialize};

/// Depth chart positions tracked per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// Column holding this position's player name in the depth chart export.
    pub fn column(&self) -> usize {
        match self {
            Position::QB => 1,
            Position::RB => 3,
            Position::WR => 5,
            Position::TE => 7,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

/// Players per position for one team, in depth order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDepth {
    pub qb: Vec<String>,
    pub rb: Vec<String>,
    pub wr: Vec<String>,
    pub te: Vec<String>,
}

impl PositionDepth {
    pub fn get(&self, position: Position) -> &[String] {
        match position {
            Position::QB => &self.qb,
            Position::RB => &self.rb,
            Position::WR => &self.wr,
            Position::TE => &self.te,
        }
    }

    pub fn get_mut(&mut self, position: Position) -> &mut Vec<String> {
        match position {
            Position::QB => &mut self.qb,
            Position::RB => &mut self.rb,
            Position::WR => &mut self.wr,
            Position::TE => &mut self.te,
        }
    }

    /// Every (position, player) pair, positions in QB/RB/WR/TE order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> {
        Position::ALL
            .into_iter()
            .flat_map(move |p| self.get(p).iter().map(move |name| (p, name.as_str())))
    }
}
