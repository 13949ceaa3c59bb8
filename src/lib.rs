//! 朝鲜象棋（Janggi）规则引擎
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 走法生成和规则验证（含九宫斜线特例）
//! - 将军检测与合法性过滤
//! - 对局控制（回合顺序、胜负判定）
//! - 棋谱格式 (FEN) 与坐标字符串 (a1-i10)
//!
//! 渲染、输入和网络层不在本库范围内，它们只消费这里暴露的查询接口。

mod board;
mod constants;
mod error;
mod fen;
mod game;
mod moves;
mod piece;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{JanggiError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use game::{Game, GameStatus};
pub use moves::{Move, MoveGenerator};
pub use piece::{Piece, PieceType, Position, Side};
