//! 规则常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 9;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 10;

/// 九宫左边界（列）
pub const PALACE_MIN_X: u8 = 3;

/// 九宫右边界（列）
pub const PALACE_MAX_X: u8 = 5;

/// 红方九宫行范围（y: 0-2，红方在下方）
pub const RED_PALACE_MIN_Y: u8 = 0;
pub const RED_PALACE_MAX_Y: u8 = 2;

/// 蓝方九宫行范围（y: 7-9，蓝方在上方）
pub const BLUE_PALACE_MIN_Y: u8 = 7;
pub const BLUE_PALACE_MAX_Y: u8 = 9;
