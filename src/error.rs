//! 错误类型定义

use thiserror::Error;

/// 规则错误
///
/// 所有变体都是局部性、非致命的：`request_move` 返回错误时不改变任何状态。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JanggiError {
    /// 无效的坐标字符串（列 a-i，行 1-10）
    #[error("Invalid coordinate: {coord}")]
    InvalidCoordinate { coord: String },

    /// 起点没有棋子
    #[error("No piece at origin ({x}, {y})")]
    EmptyOrigin { x: u8, y: u8 },

    /// 棋子不属于当前走子方
    #[error("Piece does not belong to the side to move")]
    WrongSide,

    /// 不在合法走法集合中
    #[error("Illegal move: from ({from_x}, {from_y}) to ({to_x}, {to_y})")]
    IllegalMove {
        from_x: u8,
        from_y: u8,
        to_x: u8,
        to_y: u8,
    },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, JanggiError>;
