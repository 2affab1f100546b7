//! Game state module - the authoritative Pong state machine
//!
//! Every change to the game goes through [`GameState::apply`]. Paddle moves
//! are clamped, ticks run the fixed physics/scoring pipeline, and `Quit`
//! ends the session for good.

use crate::ball::{Ball, Heading};
use crate::paddle::Paddle;
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameEvent, Side, PADDLE_WIDTH};

/// Request handed back to the runtime after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver the next `Tick` one interval from now.
    ScheduleTick,
    /// Stop scheduling ticks and leave the event loop.
    Quit,
}

/// A point awarded during the most recent tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointScored {
    /// Side that won the point.
    pub side: Side,
    pub score_left: u32,
    pub score_right: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    paddle_left: Paddle,
    paddle_right: Paddle,
    ball: Ball,
    score_left: u32,
    score_right: u32,
    /// Ticks applied since the session started.
    ticks: u64,
    /// Last point awarded (consumed by observers).
    last_point: Option<PointScored>,
    ended: bool,
}

impl GameState {
    /// Create a fresh session: paddles centered, ball served, scores at zero.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            paddle_left: Paddle::centered(&board),
            paddle_right: Paddle::centered(&board),
            ball: Ball::served(&board),
            score_left: 0,
            score_right: 0,
            ticks: 0,
            last_point: None,
            ended: false,
        }
    }

    /// Replace the ball (scenario setup).
    pub fn with_ball(mut self, ball: Ball) -> Self {
        self.ball = ball;
        self
    }

    /// Place both paddles (scenario setup). Positions are clamped.
    pub fn with_paddles(mut self, left: f64, right: f64) -> Self {
        self.paddle_left = Paddle::new(left, &self.board);
        self.paddle_right = Paddle::new(right, &self.board);
        self
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn paddle_left(&self) -> Paddle {
        self.paddle_left
    }

    pub fn paddle_right(&self) -> Paddle {
        self.paddle_right
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn score_left(&self) -> u32 {
        self.score_left
    }

    pub fn score_right(&self) -> u32 {
        self.score_right
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Take the point awarded by the last tick, if any.
    pub fn take_last_point(&mut self) -> Option<PointScored> {
        self.last_point.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width;
        out.height = self.board.height;
        out.paddle_left_y = self.paddle_left.y();
        out.paddle_right_y = self.paddle_right.y();
        out.ball_x = self.ball.x;
        out.ball_y = self.ball.y;
        (out.ball_vx, out.ball_vy) = self.ball.velocity();
        out.score_left = self.score_left;
        out.score_right = self.score_right;
        out.ticks = self.ticks;
        out.ended = self.ended;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply one event and report what the runtime should do next.
    ///
    /// Once the session has ended every event is ignored.
    pub fn apply(&mut self, event: GameEvent) -> Option<Command> {
        if self.ended {
            return None;
        }

        match event {
            GameEvent::MoveLeftPaddleUp => {
                self.paddle_left.move_up();
                None
            }
            GameEvent::MoveLeftPaddleDown => {
                self.paddle_left.move_down(&self.board);
                None
            }
            GameEvent::MoveRightPaddleUp => {
                self.paddle_right.move_up();
                None
            }
            GameEvent::MoveRightPaddleDown => {
                self.paddle_right.move_down(&self.board);
                None
            }
            GameEvent::Tick => {
                self.tick();
                Some(Command::ScheduleTick)
            }
            GameEvent::Quit => {
                self.ended = true;
                Some(Command::Quit)
            }
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Each stage sees the values left by the stage before it. The ball is
    /// never clamped, so it can sit just outside the board for a frame.
    pub fn tick(&mut self) {
        if self.ended {
            return;
        }
        self.ticks = self.ticks.wrapping_add(1);

        let width = f64::from(self.board.width);
        let height = f64::from(self.board.height);
        let paddle_w = f64::from(PADDLE_WIDTH);

        self.ball.advance();

        // Top and bottom walls.
        if self.ball.y <= 0.0 || self.ball.y >= height - 1.0 {
            self.ball.bounce_y();
        }

        // Paddles.
        if self.ball.x <= paddle_w && self.paddle_left.covers(self.ball.y) {
            self.ball.bounce_x();
        }
        if self.ball.x >= width - paddle_w - 1.0 && self.paddle_right.covers(self.ball.y) {
            self.ball.bounce_x();
        }

        // Goal lines. Both are checked; a reset after the first keeps the
        // second from firing.
        if self.ball.x <= 0.0 {
            self.award(Side::Right);
        }
        if self.ball.x >= width {
            self.award(Side::Left);
        }
    }

    fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.score_left += 1,
            Side::Right => self.score_right += 1,
        }
        self.last_point = Some(PointScored {
            side,
            score_left: self.score_left,
            score_right: self.score_right,
        });
        self.reset_ball();
    }

    fn reset_ball(&mut self) {
        self.ball = Ball::served(&self.board);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f64, y: f64, dx: Heading, dy: Heading) -> Ball {
        Ball::new(x, y, dx, dy)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();

        assert_eq!(state.board(), Board::new(80, 24));
        assert_eq!(state.paddle_left().y(), 10.0);
        assert_eq!(state.paddle_right().y(), 10.0);
        assert_eq!((state.ball.x, state.ball.y), (40.0, 12.0));
        assert_eq!(state.ball.velocity(), (1.0, 1.0));
        assert_eq!(state.score_left, 0);
        assert_eq!(state.score_right, 0);
        assert_eq!(state.ticks, 0);
        assert!(!state.ended);
    }

    #[test]
    fn test_paddle_moves_return_no_command() {
        let mut state = GameState::default();

        assert_eq!(state.apply(GameEvent::MoveLeftPaddleUp), None);
        assert_eq!(state.apply(GameEvent::MoveRightPaddleDown), None);
        assert_eq!(state.paddle_left.y(), 9.0);
        assert_eq!(state.paddle_right.y(), 11.0);
    }

    #[test]
    fn test_paddle_move_at_boundary_is_noop() {
        let mut state = GameState::default().with_paddles(0.0, 20.0);

        state.apply(GameEvent::MoveLeftPaddleUp);
        state.apply(GameEvent::MoveRightPaddleDown);
        assert_eq!(state.paddle_left.y(), 0.0);
        assert_eq!(state.paddle_right.y(), 20.0);
    }

    #[test]
    fn test_tick_schedules_next_tick() {
        let mut state = GameState::default();
        assert_eq!(state.apply(GameEvent::Tick), Some(Command::ScheduleTick));
        assert_eq!(state.ticks, 1);
        assert_eq!((state.ball.x, state.ball.y), (41.0, 13.0));
    }

    #[test]
    fn test_wall_bounce_is_unclamped() {
        let mut state = GameState::default().with_ball(ball(
            40.0,
            0.0,
            Heading::Positive,
            Heading::Negative,
        ));

        state.tick();
        assert_eq!(state.ball.y, -1.0);
        assert_eq!(state.ball.dy, Heading::Positive);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = GameState::default().with_ball(ball(
            40.0,
            22.0,
            Heading::Positive,
            Heading::Positive,
        ));

        state.tick();
        assert_eq!(state.ball.y, 23.0);
        assert_eq!(state.ball.dy, Heading::Negative);
    }

    #[test]
    fn test_left_paddle_reflects_x_only() {
        let mut state = GameState::default()
            .with_paddles(10.0, 10.0)
            .with_ball(ball(2.0, 11.0, Heading::Negative, Heading::Positive));

        state.tick();
        assert_eq!((state.ball.x, state.ball.y), (1.0, 12.0));
        assert_eq!(state.ball.dx, Heading::Positive);
        assert_eq!(state.ball.dy, Heading::Positive);
        assert_eq!((state.score_left, state.score_right), (0, 0));
    }

    #[test]
    fn test_right_paddle_reflects_x_only() {
        let mut state = GameState::default()
            .with_paddles(10.0, 10.0)
            .with_ball(ball(77.0, 13.0, Heading::Positive, Heading::Negative));

        state.tick();
        assert_eq!((state.ball.x, state.ball.y), (78.0, 12.0));
        assert_eq!(state.ball.dx, Heading::Negative);
        assert_eq!(state.ball.dy, Heading::Negative);
    }

    #[test]
    fn test_ball_missing_paddle_keeps_heading() {
        let mut state = GameState::default()
            .with_paddles(0.0, 0.0)
            .with_ball(ball(2.0, 11.0, Heading::Negative, Heading::Positive));

        state.tick();
        assert_eq!(state.ball.dx, Heading::Negative);
    }

    #[test]
    fn test_left_miss_scores_for_right() {
        let mut state = GameState::default()
            .with_paddles(10.0, 10.0)
            .with_ball(ball(1.0, 3.0, Heading::Negative, Heading::Negative));

        state.tick();
        assert_eq!((state.score_left, state.score_right), (0, 1));
        assert_eq!(state.ball, Ball::served(&state.board));
        assert_eq!(
            state.take_last_point(),
            Some(PointScored {
                side: Side::Right,
                score_left: 0,
                score_right: 1
            })
        );
        assert_eq!(state.take_last_point(), None);
    }

    #[test]
    fn test_right_miss_scores_for_left() {
        let mut state = GameState::default()
            .with_paddles(0.0, 0.0)
            .with_ball(ball(79.0, 15.0, Heading::Positive, Heading::Negative));

        state.tick();
        assert_eq!((state.score_left, state.score_right), (1, 0));
        assert_eq!((state.ball.x, state.ball.y), (40.0, 12.0));
        assert_eq!(state.ball.velocity(), (1.0, 1.0));
    }

    #[test]
    fn test_paddle_hit_on_goal_line_still_scores() {
        // x lands on 0 inside the paddle: dx flips but the goal check wins.
        let mut state = GameState::default()
            .with_paddles(10.0, 10.0)
            .with_ball(ball(1.0, 11.0, Heading::Negative, Heading::Positive));

        state.tick();
        assert_eq!(state.score_right, 1);
        assert_eq!(state.ball, Ball::served(&state.board));
    }

    #[test]
    fn test_paddle_hit_on_right_goal_line_still_scores() {
        let mut state = GameState::default()
            .with_paddles(10.0, 10.0)
            .with_ball(ball(79.0, 11.0, Heading::Positive, Heading::Positive));

        state.tick();
        assert_eq!(state.score_left, 1);
        assert_eq!(state.score_right, 0);
        assert_eq!(state.ball, Ball::served(&state.board));
        assert_eq!(
            state.take_last_point().map(|p| p.side),
            Some(Side::Left)
        );
    }

    #[test]
    fn test_quit_ends_session() {
        let mut state = GameState::default();
        assert_eq!(state.apply(GameEvent::Quit), Some(Command::Quit));
        assert!(state.ended);

        let before = state.clone();
        assert_eq!(state.apply(GameEvent::Tick), None);
        assert_eq!(state.apply(GameEvent::MoveLeftPaddleDown), None);
        assert_eq!(state.apply(GameEvent::Quit), None);
        state.tick();
        assert_eq!(state, before);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::default();
        state.apply(GameEvent::MoveRightPaddleUp);
        state.apply(GameEvent::Tick);

        let snap = state.snapshot();
        assert_eq!((snap.width, snap.height), (80, 24));
        assert_eq!(snap.paddle_left_y, 10.0);
        assert_eq!(snap.paddle_right_y, 9.0);
        assert_eq!((snap.ball_x, snap.ball_y), (41.0, 13.0));
        assert_eq!((snap.ball_vx, snap.ball_vy), (1.0, 1.0));
        assert_eq!(snap.ticks, 1);
        assert!(!snap.ended);
    }
}
