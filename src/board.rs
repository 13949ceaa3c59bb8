//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::piece::{Piece, PieceType, Position, Side};

/// 棋盘
///
/// 棋子以值类型存放在格子里，不保存反向引用；
/// 「某格棋子的坐标」永远由格子下标推导，不另行缓存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 9x10 棋盘，索引为 y * 9 + x，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();

        // 红方（下方，y=0 开始）
        // 底线：车象马士 空 士象马车
        board.set(Position::new_unchecked(0, 0), Some(Piece::new(PieceType::Chariot, Side::Red)));
        board.set(Position::new_unchecked(1, 0), Some(Piece::new(PieceType::Elephant, Side::Red)));
        board.set(Position::new_unchecked(2, 0), Some(Piece::new(PieceType::Horse, Side::Red)));
        board.set(Position::new_unchecked(3, 0), Some(Piece::new(PieceType::Guard, Side::Red)));
        board.set(Position::new_unchecked(5, 0), Some(Piece::new(PieceType::Guard, Side::Red)));
        board.set(Position::new_unchecked(6, 0), Some(Piece::new(PieceType::Elephant, Side::Red)));
        board.set(Position::new_unchecked(7, 0), Some(Piece::new(PieceType::Horse, Side::Red)));
        board.set(Position::new_unchecked(8, 0), Some(Piece::new(PieceType::Chariot, Side::Red)));

        // 红方帅居九宫中心
        board.set(Position::new_unchecked(4, 1), Some(Piece::new(PieceType::General, Side::Red)));

        // 红方炮
        board.set(Position::new_unchecked(1, 2), Some(Piece::new(PieceType::Cannon, Side::Red)));
        board.set(Position::new_unchecked(7, 2), Some(Piece::new(PieceType::Cannon, Side::Red)));

        // 红方兵
        for x in (0..9).step_by(2) {
            board.set(Position::new_unchecked(x, 3), Some(Piece::new(PieceType::Soldier, Side::Red)));
        }

        // 蓝方（上方，y=9 开始），与红方对称
        board.set(Position::new_unchecked(0, 9), Some(Piece::new(PieceType::Chariot, Side::Blue)));
        board.set(Position::new_unchecked(1, 9), Some(Piece::new(PieceType::Elephant, Side::Blue)));
        board.set(Position::new_unchecked(2, 9), Some(Piece::new(PieceType::Horse, Side::Blue)));
        board.set(Position::new_unchecked(3, 9), Some(Piece::new(PieceType::Guard, Side::Blue)));
        board.set(Position::new_unchecked(5, 9), Some(Piece::new(PieceType::Guard, Side::Blue)));
        board.set(Position::new_unchecked(6, 9), Some(Piece::new(PieceType::Elephant, Side::Blue)));
        board.set(Position::new_unchecked(7, 9), Some(Piece::new(PieceType::Horse, Side::Blue)));
        board.set(Position::new_unchecked(8, 9), Some(Piece::new(PieceType::Chariot, Side::Blue)));

        board.set(Position::new_unchecked(4, 8), Some(Piece::new(PieceType::General, Side::Blue)));

        board.set(Position::new_unchecked(1, 7), Some(Piece::new(PieceType::Cannon, Side::Blue)));
        board.set(Position::new_unchecked(7, 7), Some(Piece::new(PieceType::Cannon, Side::Blue)));

        for x in (0..9).step_by(2) {
            board.set(Position::new_unchecked(x, 6), Some(Piece::new(PieceType::Soldier, Side::Blue)));
        }

        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 移动棋子（不检查规则），返回被吃的棋子
    ///
    /// 起点与终点相同视为停着（pass），棋盘保持不变。
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        if from == to {
            return None;
        }
        let piece = self.get(from);
        let captured = self.get(to);
        self.set(from, None);
        self.set(to, piece);
        captured
    }

    /// 查找指定阵营的将/帅位置
    pub fn find_general(&self, side: Side) -> Option<Position> {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new_unchecked(x as u8, y as u8);
                if let Some(piece) = self.get(pos) {
                    if piece.piece_type == PieceType::General && piece.side == side {
                        return Some(pos);
                    }
                }
            }
        }
        None
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, side: Side) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new_unchecked(x as u8, y as u8);
                if let Some(piece) = self.get(pos) {
                    if piece.side == side {
                        result.push((pos, piece));
                    }
                }
            }
        }
        result
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new_unchecked(x as u8, y as u8);
                if let Some(piece) = self.get(pos) {
                    result.push((pos, piece));
                }
            }
        }
        result
    }

    /// 导出行主序快照（[行][列]，行 0 为红方底线），供渲染层使用
    pub fn snapshot(&self) -> Vec<Vec<Option<Piece>>> {
        (0..BOARD_HEIGHT)
            .map(|y| {
                (0..BOARD_WIDTH)
                    .map(|x| self.get(Position::new_unchecked(x as u8, y as u8)))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 完整的对局局面（棋盘 + 走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl BoardState {
    /// 创建初始状态（蓝方先手）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Side::Blue,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        // 检查红方帅（九宫中心）
        let general = board.get(Position::new_unchecked(4, 1));
        assert_eq!(general, Some(Piece::new(PieceType::General, Side::Red)));

        // 检查蓝方将
        let general = board.get(Position::new_unchecked(4, 8));
        assert_eq!(general, Some(Piece::new(PieceType::General, Side::Blue)));

        // 底线中点为空
        assert!(board.get(Position::new_unchecked(4, 0)).is_none());
        assert!(board.get(Position::new_unchecked(4, 9)).is_none());

        // 检查红方炮
        let cannon = board.get(Position::new_unchecked(1, 2));
        assert_eq!(cannon, Some(Piece::new(PieceType::Cannon, Side::Red)));

        // 检查蓝方卒
        let soldier = board.get(Position::new_unchecked(0, 6));
        assert_eq!(soldier, Some(Piece::new(PieceType::Soldier, Side::Blue)));

        // 双方各 16 子
        assert_eq!(board.pieces(Side::Red).len(), 16);
        assert_eq!(board.pieces(Side::Blue).len(), 16);
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::initial();

        // 移动红方炮
        let from = Position::new_unchecked(1, 2);
        let to = Position::new_unchecked(1, 4);

        let captured = board.move_piece(from, to);
        assert!(captured.is_none());

        assert!(board.get(from).is_none());
        assert_eq!(board.get(to), Some(Piece::new(PieceType::Cannon, Side::Red)));
    }

    #[test]
    fn test_pass_is_identity() {
        let mut board = Board::initial();
        let pos = Position::new_unchecked(1, 2);

        let before = board.clone();
        let captured = board.move_piece(pos, pos);

        assert!(captured.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_undo_roundtrip() {
        // 吃子走法执行后按逆操作恢复，应还原到原局面
        let mut board = Board::empty();
        let from = Position::new_unchecked(0, 0);
        let to = Position::new_unchecked(0, 5);
        board.set(from, Some(Piece::new(PieceType::Chariot, Side::Red)));
        board.set(to, Some(Piece::new(PieceType::Soldier, Side::Blue)));

        let before = board.clone();
        let captured = board.move_piece(from, to);
        assert_eq!(captured, Some(Piece::new(PieceType::Soldier, Side::Blue)));

        // 逆操作：移回并恢复被吃的棋子
        let piece = board.get(to);
        board.set(from, piece);
        board.set(to, captured);

        assert_eq!(board, before);
        assert_eq!(board.find_general(Side::Red), before.find_general(Side::Red));
    }

    #[test]
    fn test_find_general() {
        let board = Board::initial();

        let red = board.find_general(Side::Red);
        assert_eq!(red, Some(Position::new_unchecked(4, 1)));

        let blue = board.find_general(Side::Blue);
        assert_eq!(blue, Some(Position::new_unchecked(4, 8)));
    }

    #[test]
    fn test_snapshot_idempotent() {
        let board = Board::initial();
        assert_eq!(board.snapshot(), board.snapshot());
        assert_eq!(board.snapshot()[1][4], Some(Piece::new(PieceType::General, Side::Red)));
    }
}
