//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{
    BLUE_PALACE_MAX_Y, BLUE_PALACE_MIN_Y, BOARD_HEIGHT, BOARD_WIDTH, PALACE_MAX_X, PALACE_MIN_X,
    RED_PALACE_MAX_Y, RED_PALACE_MIN_Y,
};

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// 将/帅
    General,
    /// 士/仕
    Guard,
    /// 象/相
    Elephant,
    /// 马/傌
    Horse,
    /// 车/俥
    Chariot,
    /// 包/炮
    Cannon,
    /// 卒/兵
    Soldier,
}

impl PieceType {
    /// 获取 FEN 字符（红方大写，蓝方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = match self {
            PieceType::General => 'k',
            PieceType::Guard => 'a',
            PieceType::Elephant => 'e',
            PieceType::Horse => 'h',
            PieceType::Chariot => 'r',
            PieceType::Cannon => 'c',
            PieceType::Soldier => 'p',
        };
        match side {
            Side::Red => c.to_ascii_uppercase(),
            Side::Blue => c,
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Blue
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::General,
            'a' => PieceType::Guard,
            'e' => PieceType::Elephant,
            'h' => PieceType::Horse,
            'r' => PieceType::Chariot,
            'c' => PieceType::Cannon,
            'p' => PieceType::Soldier,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（汉，在下方）
    Red,
    /// 蓝方（楚，先手，在上方）
    Blue,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// 前进方向（红方 y 增加，蓝方 y 减少）
    pub fn forward(&self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Side::Red => 'r',
            Side::Blue => 'b',
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Side> {
        match c {
            'r' | 'R' => Some(Side::Red),
            'b' | 'B' => Some(Side::Blue),
            _ => None,
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 获取棋子显示的汉字
    pub fn display_char(&self) -> char {
        match (self.piece_type, self.side) {
            (PieceType::General, Side::Red) => '帥',
            (PieceType::General, Side::Blue) => '將',
            (PieceType::Guard, Side::Red) => '仕',
            (PieceType::Guard, Side::Blue) => '士',
            (PieceType::Elephant, Side::Red) => '相',
            (PieceType::Elephant, Side::Blue) => '象',
            (PieceType::Horse, Side::Red) => '傌',
            (PieceType::Horse, Side::Blue) => '馬',
            (PieceType::Chariot, Side::Red) => '俥',
            (PieceType::Chariot, Side::Blue) => '車',
            (PieceType::Cannon, Side::Red) => '炮',
            (PieceType::Cannon, Side::Blue) => '包',
            (PieceType::Soldier, Side::Red) => '兵',
            (PieceType::Soldier, Side::Blue) => '卒',
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece { piece_type, side })
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-8)
    pub x: u8,
    /// 行 (0-9)，y=0 为红方底线，y=9 为蓝方底线
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_WIDTH && (self.y as usize) < BOARD_HEIGHT
    }

    /// 检查位置是否在指定阵营的九宫内
    pub fn is_in_palace(&self, side: Side) -> bool {
        let in_x = (PALACE_MIN_X..=PALACE_MAX_X).contains(&self.x);
        let in_y = match side {
            Side::Red => (RED_PALACE_MIN_Y..=RED_PALACE_MAX_Y).contains(&self.y),
            Side::Blue => (BLUE_PALACE_MIN_Y..=BLUE_PALACE_MAX_Y).contains(&self.y),
        };
        in_x && in_y
    }

    /// 该位置所属的九宫（不在任何九宫内返回 None）
    pub fn palace_of(&self) -> Option<Side> {
        if self.is_in_palace(Side::Red) {
            Some(Side::Red)
        } else if self.is_in_palace(Side::Blue) {
            Some(Side::Blue)
        } else {
            None
        }
    }

    /// 检查位置是否在九宫斜线交点上（四角和中心）
    pub fn on_palace_diagonal(&self) -> bool {
        let Some(side) = self.palace_of() else {
            return false;
        };
        let base_y = match side {
            Side::Red => RED_PALACE_MIN_Y,
            Side::Blue => BLUE_PALACE_MIN_Y,
        };
        let rel = (self.x - PALACE_MIN_X, self.y - base_y);
        matches!(rel, (0, 0) | (2, 0) | (1, 1) | (0, 2) | (2, 2))
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let new_x = self.x as i8 + dx;
        let new_y = self.y as i8 + dy;
        if new_x >= 0
            && (new_x as usize) < BOARD_WIDTH
            && new_y >= 0
            && (new_y as usize) < BOARD_HEIGHT
        {
            Some(Position {
                x: new_x as u8,
                y: new_y as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.y as usize * BOARD_WIDTH + self.x as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_WIDTH * BOARD_HEIGHT {
            Some(Position {
                x: (index % BOARD_WIDTH) as u8,
                y: (index / BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }

    /// 解析坐标字符串（列 a-i，行 1-10，行 1 为红方底线）
    pub fn from_coord(coord: &str) -> Option<Position> {
        let mut chars = coord.chars();
        let col = chars.next()?;
        if !('a'..='i').contains(&col) {
            return None;
        }
        let x = (col as u8) - b'a';
        let row: u8 = chars.as_str().parse().ok()?;
        if !(1..=10).contains(&row) {
            return None;
        }
        Some(Position { x, y: row - 1 })
    }

    /// 转换为坐标字符串
    pub fn to_coord(&self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_display_char() {
        let red_general = Piece::new(PieceType::General, Side::Red);
        assert_eq!(red_general.display_char(), '帥');

        let blue_general = Piece::new(PieceType::General, Side::Blue);
        assert_eq!(blue_general.display_char(), '將');

        let red_cannon = Piece::new(PieceType::Cannon, Side::Red);
        assert_eq!(red_cannon.display_char(), '炮');

        let blue_soldier = Piece::new(PieceType::Soldier, Side::Blue);
        assert_eq!(blue_soldier.display_char(), '卒');
    }

    #[test]
    fn test_piece_fen_char() {
        let red_general = Piece::new(PieceType::General, Side::Red);
        assert_eq!(red_general.to_fen_char(), 'K');

        let blue_general = Piece::new(PieceType::General, Side::Blue);
        assert_eq!(blue_general.to_fen_char(), 'k');

        assert_eq!(
            Piece::from_fen_char('R'),
            Some(Piece::new(PieceType::Chariot, Side::Red))
        );
        assert_eq!(
            Piece::from_fen_char('h'),
            Some(Piece::new(PieceType::Horse, Side::Blue))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(8, 9).is_some());
        assert!(Position::new(9, 0).is_none());
        assert!(Position::new(0, 10).is_none());
    }

    #[test]
    fn test_position_palace() {
        // 红方九宫
        assert!(Position::new_unchecked(4, 1).is_in_palace(Side::Red));
        assert!(Position::new_unchecked(3, 0).is_in_palace(Side::Red));
        assert!(!Position::new_unchecked(4, 3).is_in_palace(Side::Red));
        assert!(!Position::new_unchecked(2, 1).is_in_palace(Side::Red));

        // 蓝方九宫
        assert!(Position::new_unchecked(4, 8).is_in_palace(Side::Blue));
        assert!(Position::new_unchecked(5, 9).is_in_palace(Side::Blue));
        assert!(!Position::new_unchecked(4, 6).is_in_palace(Side::Blue));
    }

    #[test]
    fn test_palace_diagonal() {
        // 四角和中心在斜线上
        assert!(Position::new_unchecked(3, 0).on_palace_diagonal());
        assert!(Position::new_unchecked(5, 0).on_palace_diagonal());
        assert!(Position::new_unchecked(4, 1).on_palace_diagonal());
        assert!(Position::new_unchecked(3, 2).on_palace_diagonal());
        assert!(Position::new_unchecked(5, 9).on_palace_diagonal());
        assert!(Position::new_unchecked(4, 8).on_palace_diagonal());

        // 边中点不在斜线上
        assert!(!Position::new_unchecked(4, 0).on_palace_diagonal());
        assert!(!Position::new_unchecked(3, 1).on_palace_diagonal());
        assert!(!Position::new_unchecked(4, 9).on_palace_diagonal());

        // 九宫外
        assert!(!Position::new_unchecked(4, 4).on_palace_diagonal());
    }

    #[test]
    fn test_coord_parse() {
        assert_eq!(
            Position::from_coord("a1"),
            Some(Position::new_unchecked(0, 0))
        );
        assert_eq!(
            Position::from_coord("i10"),
            Some(Position::new_unchecked(8, 9))
        );
        assert_eq!(
            Position::from_coord("e2"),
            Some(Position::new_unchecked(4, 1))
        );
        assert_eq!(Position::from_coord("j1"), None);
        assert_eq!(Position::from_coord("a0"), None);
        assert_eq!(Position::from_coord("a11"), None);
        assert_eq!(Position::from_coord(""), None);
        assert_eq!(Position::from_coord("a"), None);
    }

    #[test]
    fn test_coord_roundtrip() {
        for index in 0..90 {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(Position::from_coord(&pos.to_coord()), Some(pos));
        }
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
    }
}
