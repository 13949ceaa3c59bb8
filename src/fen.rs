//! FEN 格式解析和生成
//!
//! 朝鲜象棋 FEN 格式：
//! `<棋盘> <走子方>`
//!
//! 棋子字母：K 将 A 士 E 象 H 马 R 车 C 包 P 卒（红方大写，蓝方小写）。
//! 棋盘从上（y=9，蓝方底线）到下（y=0，红方底线）逐行描述。

use crate::board::{Board, BoardState};
use crate::error::JanggiError;
use crate::piece::{Piece, Position, Side};

/// 初始局面 FEN（蓝方先手）
pub const INITIAL_FEN: &str =
    "reha1aehr/4k4/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/4K4/REHA1AEHR b";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为局面
    pub fn parse(fen: &str) -> Result<BoardState, JanggiError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(JanggiError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        // 解析棋盘
        let board = Self::parse_board(parts[0])?;

        // 解析走子方（默认蓝方，蓝方先手）
        let current_turn = if parts.len() > 1 {
            Side::from_fen_char(parts[1].chars().next().unwrap_or('b')).unwrap_or(Side::Blue)
        } else {
            Side::Blue
        };

        Ok(BoardState {
            board,
            current_turn,
        })
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, JanggiError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != 10 {
            return Err(JanggiError::InvalidFen {
                reason: format!("Expected 10 rows, got {}", rows.len()),
            });
        }

        // FEN 从上到下是 y=9 到 y=0
        for (row_idx, row) in rows.iter().enumerate() {
            let y = 9 - row_idx as u8;
            let mut x = 0u8;

            for c in row.chars() {
                if x >= 9 {
                    return Err(JanggiError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if c.is_ascii_digit() {
                    // 空格数量
                    let empty_count = c.to_digit(10).unwrap() as u8;
                    x += empty_count;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.set(Position::new_unchecked(x, y), Some(piece));
                    x += 1;
                } else {
                    return Err(JanggiError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                }
            }

            if x != 9 {
                return Err(JanggiError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected 9", row_idx, x),
                });
            }
        }

        Ok(board)
    }

    /// 将局面转换为 FEN 字符串
    pub fn to_string(state: &BoardState) -> String {
        format!(
            "{} {}",
            Self::board_to_string(&state.board),
            state.current_turn.to_fen_char()
        )
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(10);

        // 从 y=9 到 y=0
        for y in (0..10).rev() {
            let mut row = String::new();
            let mut empty_count = 0;

            for x in 0..9 {
                if let Some(piece) = board.get(Position::new_unchecked(x, y)) {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }

    /// 解析初始局面
    pub fn initial() -> BoardState {
        Self::parse(INITIAL_FEN).expect("Initial FEN should be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceType;

    #[test]
    fn test_parse_initial_fen() {
        let state = Fen::parse(INITIAL_FEN).unwrap();

        // 蓝方先手
        assert_eq!(state.current_turn, Side::Blue);

        // 与 Board::initial 完全一致
        assert_eq!(state.board, Board::initial());
    }

    #[test]
    fn test_fen_roundtrip() {
        let state = Fen::initial();
        let fen = Fen::to_string(&state);
        let state2 = Fen::parse(&fen).unwrap();

        assert_eq!(state.board, state2.board);
        assert_eq!(state.current_turn, state2.current_turn);
        assert_eq!(fen, INITIAL_FEN);
    }

    #[test]
    fn test_parse_custom_fen() {
        // 只有双方的将
        let fen = "9/4k4/9/9/9/9/9/9/4K4/9 r";
        let state = Fen::parse(fen).unwrap();

        assert_eq!(state.current_turn, Side::Red);

        let red_general = state.board.find_general(Side::Red);
        let blue_general = state.board.find_general(Side::Blue);
        assert_eq!(red_general, Some(Position::new_unchecked(4, 1)));
        assert_eq!(blue_general, Some(Position::new_unchecked(4, 8)));
        assert_eq!(state.board.all_pieces().len(), 2);
    }

    #[test]
    fn test_parse_piece_letters() {
        let fen = "9/9/9/9/9/9/9/9/9/RHECAPK2 b";
        let state = Fen::parse(fen).unwrap();

        let expect = [
            (0, PieceType::Chariot),
            (1, PieceType::Horse),
            (2, PieceType::Elephant),
            (3, PieceType::Cannon),
            (4, PieceType::Guard),
            (5, PieceType::Soldier),
            (6, PieceType::General),
        ];
        for (x, piece_type) in expect {
            assert_eq!(
                state.board.get(Position::new_unchecked(x, 0)),
                Some(Piece::new(piece_type, Side::Red))
            );
        }
    }

    #[test]
    fn test_invalid_fen() {
        // 行数不对
        assert!(Fen::parse("4k4/9/9").is_err());

        // 列数不对
        assert!(Fen::parse("4k44/9/9/9/9/9/9/9/9/4K4 b").is_err());

        // 无效字符
        assert!(Fen::parse("4x4/9/9/9/9/9/9/9/9/4K4 b").is_err());

        // 空串
        assert!(Fen::parse("").is_err());
    }
}
