//! 走法生成和验证

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Piece, PieceType, Position, Side};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
    /// 被吃的棋子（如果有）
    pub captured: Option<Piece>,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// 创建带吃子的走法
    pub fn with_capture(from: Position, to: Position, captured: Piece) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// 是否为停着（起点与终点相同）
    pub fn is_pass(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的所有伪合法走法（不考虑将军）
    pub fn generate_pseudo_legal(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for (pos, piece) in board.pieces(side) {
            Self::generate_piece_moves(board, pos, piece, &mut moves);
        }

        moves
    }

    /// 生成指定阵营的所有合法走法（过滤掉会导致被将军的走法）
    ///
    /// 每个候选走法在棋盘副本上模拟，活动棋盘在过滤期间不被改动。
    pub fn generate_legal(board: &Board, side: Side) -> Vec<Move> {
        let pseudo_legal = Self::generate_pseudo_legal(board, side);

        pseudo_legal
            .into_iter()
            .filter(|mv| {
                let mut test_board = board.clone();
                test_board.move_piece(mv.from, mv.to);
                !Self::is_in_check(&test_board, side)
            })
            .collect()
    }

    /// 生成指定棋子的所有伪合法走法
    ///
    /// 每个棋子都附带一个停着；停着是否真正可行由合法性过滤决定
    /// （被将军时停着会因局面不变而被过滤掉）。
    fn generate_piece_moves(board: &Board, pos: Position, piece: Piece, moves: &mut Vec<Move>) {
        moves.push(Move::new(pos, pos));

        match piece.piece_type {
            PieceType::General => Self::generate_general_moves(board, pos, piece.side, moves),
            PieceType::Guard => Self::generate_guard_moves(board, pos, piece.side, moves),
            PieceType::Elephant => Self::generate_elephant_moves(board, pos, piece.side, moves),
            PieceType::Horse => Self::generate_horse_moves(board, pos, piece.side, moves),
            PieceType::Chariot => Self::generate_chariot_moves(board, pos, piece.side, moves),
            PieceType::Cannon => Self::generate_cannon_moves(board, pos, piece.side, moves),
            PieceType::Soldier => Self::generate_soldier_moves(board, pos, piece.side, moves),
        }
    }

    /// 生成将/帅的走法
    ///
    /// 四个正方向各一步，位于斜线交点时可沿九宫斜线走一步，
    /// 全部限制在本方九宫内。
    fn generate_general_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        let directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];

        for (dx, dy) in directions {
            if let Some(to) = pos.offset(dx, dy) {
                // 必须在本方九宫内
                if !to.is_in_palace(side) {
                    continue;
                }

                Self::try_add_move(board, pos, to, side, moves);
            }
        }

        // 九宫斜线
        if pos.on_palace_diagonal() {
            for (dx, dy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                if let Some(to) = pos.offset(dx, dy) {
                    if to.is_in_palace(side) && to.on_palace_diagonal() {
                        Self::try_add_move(board, pos, to, side, moves);
                    }
                }
            }
        }
    }

    /// 生成士/仕的走法（与将/帅的走法规则相同）
    fn generate_guard_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        Self::generate_general_moves(board, pos, side, moves);
    }

    /// 生成象/相的走法
    ///
    /// 一步直行加两步斜行，直行落点和第一个斜行落点都不能有棋子。
    fn generate_elephant_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        let elephant_moves = [
            ((2, 3), (0, 1), (1, 2)),
            ((-2, 3), (0, 1), (-1, 2)),
            ((2, -3), (0, -1), (1, -2)),
            ((-2, -3), (0, -1), (-1, -2)),
            ((3, 2), (1, 0), (2, 1)),
            ((3, -2), (1, 0), (2, -1)),
            ((-3, 2), (-1, 0), (-2, 1)),
            ((-3, -2), (-1, 0), (-2, -1)),
        ];

        for ((dx, dy), (b1x, b1y), (b2x, b2y)) in elephant_moves {
            // 检查两个象眼是否被堵
            match pos.offset(b1x, b1y) {
                Some(block) if board.get(block).is_none() => {}
                _ => continue,
            }
            match pos.offset(b2x, b2y) {
                Some(block) if board.get(block).is_none() => {}
                _ => continue,
            }

            if let Some(to) = pos.offset(dx, dy) {
                Self::try_add_move(board, pos, to, side, moves);
            }
        }
    }

    /// 生成马/傌的走法
    fn generate_horse_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        // 马的8个方向和对应的蹩马腿位置
        let horse_moves = [
            ((1, 2), (0, 1)),
            ((2, 1), (1, 0)),
            ((2, -1), (1, 0)),
            ((1, -2), (0, -1)),
            ((-1, -2), (0, -1)),
            ((-2, -1), (-1, 0)),
            ((-2, 1), (-1, 0)),
            ((-1, 2), (0, 1)),
        ];

        for ((dx, dy), (bx, by)) in horse_moves {
            // 检查马腿是否被堵
            if let Some(block_pos) = pos.offset(bx, by) {
                if board.get(block_pos).is_some() {
                    continue;
                }
            } else {
                continue;
            }

            if let Some(to) = pos.offset(dx, dy) {
                Self::try_add_move(board, pos, to, side, moves);
            }
        }
    }

    /// 生成车/俥的走法
    ///
    /// 四个正方向直线滑行；位于九宫斜线交点时还可沿斜线滑行，
    /// 斜线滑行限制在该九宫内（本方或对方九宫均可）。
    fn generate_chariot_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        let directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];

        for (dx, dy) in directions {
            let mut current = pos;
            while let Some(to) = current.offset(dx, dy) {
                if let Some(target) = board.get(to) {
                    // 遇到棋子
                    if target.side != side {
                        // 可以吃
                        moves.push(Move::with_capture(pos, to, target));
                    }
                    break;
                } else {
                    // 空位，可以走
                    moves.push(Move::new(pos, to));
                }
                current = to;
            }
        }

        // 九宫斜线滑行
        if pos.on_palace_diagonal() {
            for (dx, dy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                let mut current = pos;
                while let Some(to) = current.offset(dx, dy) {
                    if !to.on_palace_diagonal() {
                        break;
                    }
                    if let Some(target) = board.get(to) {
                        if target.side != side {
                            moves.push(Move::with_capture(pos, to, target));
                        }
                        break;
                    } else {
                        moves.push(Move::new(pos, to));
                    }
                    current = to;
                }
            }
        }
    }

    /// 生成包/炮的走法
    ///
    /// 移动和吃子都必须恰好越过一个炮架；炮架不能是包，
    /// 也不能吃对方的包。九宫斜线上同样适用（炮架为九宫中心）。
    fn generate_cannon_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        let directions = [(0, 1), (0, -1), (1, 0), (-1, 0)];

        for (dx, dy) in directions {
            Self::slide_cannon(board, pos, side, (dx, dy), false, moves);
        }

        if pos.on_palace_diagonal() {
            for (dx, dy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                Self::slide_cannon(board, pos, side, (dx, dy), true, moves);
            }
        }
    }

    /// 包沿单一方向的滑行（diagonal 为真时限制在九宫斜线上）
    fn slide_cannon(
        board: &Board,
        pos: Position,
        side: Side,
        (dx, dy): (i8, i8),
        diagonal: bool,
        moves: &mut Vec<Move>,
    ) {
        let mut current = pos;
        let mut jumped = false;

        while let Some(to) = current.offset(dx, dy) {
            if diagonal && !to.on_palace_diagonal() {
                break;
            }

            if let Some(target) = board.get(to) {
                if !jumped {
                    // 炮架不能是包
                    if target.piece_type == PieceType::Cannon {
                        break;
                    }
                    jumped = true;
                } else {
                    // 已经跳过炮架，可以吃（包不能吃包）
                    if target.side != side && target.piece_type != PieceType::Cannon {
                        moves.push(Move::with_capture(pos, to, target));
                    }
                    break;
                }
            } else if jumped {
                // 跳过炮架后才能落到空位
                moves.push(Move::new(pos, to));
            }
            current = to;
        }
    }

    /// 生成卒/兵的走法
    ///
    /// 前进一步或横走一步；位于九宫斜线交点时可沿斜线向前一步。
    fn generate_soldier_moves(board: &Board, pos: Position, side: Side, moves: &mut Vec<Move>) {
        let forward = side.forward();

        // 前进
        if let Some(to) = pos.offset(0, forward) {
            Self::try_add_move(board, pos, to, side, moves);
        }

        // 左右
        for dx in [-1i8, 1i8] {
            if let Some(to) = pos.offset(dx, 0) {
                Self::try_add_move(board, pos, to, side, moves);
            }
        }

        // 九宫斜线向前
        if pos.on_palace_diagonal() {
            for dx in [-1i8, 1i8] {
                if let Some(to) = pos.offset(dx, forward) {
                    if to.on_palace_diagonal() {
                        Self::try_add_move(board, pos, to, side, moves);
                    }
                }
            }
        }
    }

    /// 尝试添加走法（检查目标位置是否可以移动）
    fn try_add_move(board: &Board, from: Position, to: Position, side: Side, moves: &mut Vec<Move>) {
        if let Some(target) = board.get(to) {
            // 目标位置有棋子
            if target.side != side {
                // 可以吃
                moves.push(Move::with_capture(from, to, target));
            }
        } else {
            // 空位
            moves.push(Move::new(from, to));
        }
    }

    /// 检查指定阵营是否被将军
    ///
    /// 直接复用对方的伪合法走法生成：将的位置出现在对方任一非停着
    /// 走法的落点上即为被将军。不为攻击判定单独实现一套走法规则。
    pub fn is_in_check(board: &Board, side: Side) -> bool {
        let general_pos = match board.find_general(side) {
            Some(pos) => pos,
            None => return false, // 没有将，视为不被将军
        };

        let opponent = side.opponent();
        Self::generate_pseudo_legal(board, opponent)
            .iter()
            .any(|mv| !mv.is_pass() && mv.to == general_pos)
    }

    /// 检查指定阵营是否被将死
    pub fn is_checkmate(board: &Board, side: Side) -> bool {
        // 如果没有被将军，不是将死（不被将军时停着总是合法的）
        if !Self::is_in_check(board, side) {
            return false;
        }

        // 如果有合法走法，不是将死
        Self::generate_legal(board, side).is_empty()
    }
}
