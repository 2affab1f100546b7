use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Plain-data copy of a [`crate::GameState`], handed to renderers and loggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub paddle_left_y: f64,
    pub paddle_right_y: f64,
    pub ball_x: f64,
    pub ball_y: f64,
    pub ball_vx: f64,
    pub ball_vy: f64,
    pub score_left: u32,
    pub score_right: u32,
    pub ticks: u64,
    pub ended: bool,
}

impl GameSnapshot {
    /// Board cell under the ball, if the ball is on the board.
    ///
    /// Coordinates truncate toward zero, so `-0.5` still maps to cell 0.
    pub fn ball_cell(&self) -> Option<(u16, u16)> {
        let x = self.ball_x as i64;
        let y = self.ball_y as i64;
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((x as u16, y as u16))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            paddle_left_y: 0.0,
            paddle_right_y: 0.0,
            ball_x: 0.0,
            ball_y: 0.0,
            ball_vx: 1.0,
            ball_vy: 1.0,
            score_left: 0,
            score_right: 0,
            ticks: 0,
            ended: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_cell_truncates_toward_zero() {
        let snap = GameSnapshot {
            ball_x: -0.5,
            ball_y: 3.9,
            ..GameSnapshot::default()
        };
        assert_eq!(snap.ball_cell(), Some((0, 3)));
    }

    #[test]
    fn ball_cell_is_none_off_board() {
        let above = GameSnapshot {
            ball_x: 10.0,
            ball_y: -1.0,
            ..GameSnapshot::default()
        };
        let past_right = GameSnapshot {
            ball_x: 80.0,
            ball_y: 5.0,
            ..GameSnapshot::default()
        };
        assert_eq!(above.ball_cell(), None);
        assert_eq!(past_right.ball_cell(), None);
    }
}
