//! 对局控制
//!
//! 持有回合顺序和胜负状态，把走法请求接到走法生成/合法性过滤上。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, BoardState};
use crate::error::{JanggiError, Result};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Piece, Position, Side};

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    Unfinished,
    /// 红方胜
    RedWon,
    /// 蓝方胜
    BlueWon,
}

impl GameStatus {
    /// 游戏是否已结束
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Unfinished
    }

    /// 指定阵营获胜对应的状态
    fn won_by(side: Side) -> GameStatus {
        match side {
            Side::Red => GameStatus::RedWon,
            Side::Blue => GameStatus::BlueWon,
        }
    }
}

/// 一局朝鲜象棋
///
/// 单线程同步使用；需要多局并行时各自持有独立的 `Game` 实例即可。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    state: BoardState,
    status: GameStatus,
}

impl Game {
    /// 创建新对局（标准开局，蓝方先手）
    pub fn new() -> Self {
        Self {
            state: BoardState::initial(),
            status: GameStatus::Unfinished,
        }
    }

    /// 从给定局面创建对局
    ///
    /// 当前走子方无合法走法的残局直接进入终局状态。
    pub fn from_state(state: BoardState) -> Self {
        let status = if MoveGenerator::generate_legal(&state.board, state.current_turn).is_empty()
        {
            GameStatus::won_by(state.current_turn.opponent())
        } else {
            GameStatus::Unfinished
        };
        Self { state, status }
    }

    /// 获取当前对局状态
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 获取当前走子方
    pub fn side_to_move(&self) -> Side {
        self.state.current_turn
    }

    /// 获取当前棋盘
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// 获取棋盘快照（[行][列]，行 0 为红方底线），供渲染层使用
    pub fn snapshot(&self) -> Vec<Vec<Option<Piece>>> {
        self.state.board.snapshot()
    }

    /// 检查指定阵营是否被将军
    pub fn is_in_check(&self, side: Side) -> bool {
        MoveGenerator::is_in_check(&self.state.board, side)
    }

    /// 获取指定阵营的所有合法走法
    pub fn legal_moves_for(&self, side: Side) -> Vec<Move> {
        MoveGenerator::generate_legal(&self.state.board, side)
    }

    /// 用坐标字符串请求走子（列 a-i，行 1-10，行 1 为红方底线）
    ///
    /// 起点与终点相同表示停着。
    pub fn make_move(&mut self, orig: &str, dest: &str) -> Result<()> {
        let from = Position::from_coord(orig).ok_or_else(|| JanggiError::InvalidCoordinate {
            coord: orig.to_string(),
        })?;
        let to = Position::from_coord(dest).ok_or_else(|| JanggiError::InvalidCoordinate {
            coord: dest.to_string(),
        })?;
        self.request_move(from, to)
    }

    /// 请求走子
    ///
    /// 任何校验失败都不改变对局状态。
    pub fn request_move(&mut self, from: Position, to: Position) -> Result<()> {
        if self.status.is_over() {
            return Err(JanggiError::GameOver);
        }

        let piece = self
            .state
            .board
            .get(from)
            .ok_or(JanggiError::EmptyOrigin { x: from.x, y: from.y })?;

        let side = self.state.current_turn;
        if piece.side != side {
            return Err(JanggiError::WrongSide);
        }

        let legal_moves = MoveGenerator::generate_legal(&self.state.board, side);
        if !legal_moves.iter().any(|m| m.from == from && m.to == to) {
            return Err(JanggiError::IllegalMove {
                from_x: from.x,
                from_y: from.y,
                to_x: to.x,
                to_y: to.y,
            });
        }

        // 执行走法并换边
        let captured = self.state.board.move_piece(from, to);
        self.state.switch_turn();

        debug!(%from, %to, ?captured, side = ?side, "move accepted");

        // 对方无合法走法即告负（被将死或困毙同样处理）
        let opponent = self.state.current_turn;
        if MoveGenerator::generate_legal(&self.state.board, opponent).is_empty() {
            self.status = GameStatus::won_by(side);
            info!(winner = ?side, "game over");
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
