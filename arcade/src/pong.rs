//! Pong court simulation: a ball, the player's paddle on the left, and a
//! ball-tracking paddle on the right. One [`PongGame::step`] call is one
//! frame of simulation; frame pacing is the front end's business.

use log::debug;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 80.0;
pub const PADDLE_INSET: f32 = 10.0;
pub const BALL_RADIUS: f32 = 8.0;
/// Speed of a fresh serve along each axis.
pub const SERVE_SPEED: f32 = 0.67;
/// How strongly the contact offset on a paddle bends the ball's course.
pub const DEFLECT_FACTOR: f32 = 0.35;
/// Cells the right paddle moves per frame while tracking the ball.
pub const AI_SPEED: f32 = 1.0;
/// The right paddle ignores the ball within this distance of its center.
pub const AI_DEADZONE: f32 = 10.0;
/// How far one player input moves the left paddle.
pub const PLAYER_STEP: f32 = 20.0;

pub const DEFAULT_WIDTH: f32 = 600.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    None,
    PlayerScored,
    AiScored,
}

#[derive(Debug, Clone)]
pub struct PongGame {
    width: f32,
    height: f32,
    player_y: f32,
    ai_y: f32,
    ball_x: f32,
    ball_y: f32,
    ball_dx: f32,
    ball_dy: f32,
    player_score: u32,
    ai_score: u32,
}

impl Default for PongGame {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl PongGame {
    pub fn new(width: f32, height: f32) -> PongGame {
        PongGame {
            width,
            height,
            player_y: (height - PADDLE_HEIGHT) / 2.0,
            ai_y: (height - PADDLE_HEIGHT) / 2.0,
            ball_x: width / 2.0,
            ball_y: height / 2.0,
            ball_dx: SERVE_SPEED,
            ball_dy: SERVE_SPEED,
            player_score: 0,
            ai_score: 0,
        }
    }

    /// Moves the player's paddle one step, clamped to the court.
    pub fn move_player(&mut self, direction: PlayerMove) {
        match direction {
            PlayerMove::Up => {
                self.player_y = (self.player_y - PLAYER_STEP).max(0.0);
            }
            PlayerMove::Down => {
                self.player_y = (self.player_y + PLAYER_STEP).min(self.height - PADDLE_HEIGHT);
            }
        }
    }

    /// Advances one frame: ball flight, wall bounce, goal detection, paddle
    /// deflection, then the tracking paddle's move.
    pub fn step(&mut self) -> StepEvent {
        self.ball_x += self.ball_dx;
        self.ball_y += self.ball_dy;

        if self.ball_y - BALL_RADIUS < 0.0 || self.ball_y + BALL_RADIUS > self.height {
            self.ball_dy = -self.ball_dy;
        }

        if self.ball_x - BALL_RADIUS < 0.0 {
            self.ai_score += 1;
            debug!("goal against the player, {}:{}", self.player_score, self.ai_score);
            self.reset_ball();
            self.move_ai();
            return StepEvent::AiScored;
        }
        if self.ball_x + BALL_RADIUS > self.width {
            self.player_score += 1;
            debug!("goal for the player, {}:{}", self.player_score, self.ai_score);
            self.reset_ball();
            self.move_ai();
            return StepEvent::PlayerScored;
        }

        let player_x = PADDLE_INSET;
        if self.ball_x - BALL_RADIUS < player_x + PADDLE_WIDTH
            && self.ball_y > self.player_y
            && self.ball_y < self.player_y + PADDLE_HEIGHT
        {
            self.ball_dx = -self.ball_dx;
            let offset = self.ball_y - (self.player_y + PADDLE_HEIGHT / 2.0);
            self.ball_dy = offset * DEFLECT_FACTOR;
        }

        let ai_x = self.width - PADDLE_WIDTH - PADDLE_INSET;
        if self.ball_x + BALL_RADIUS > ai_x
            && self.ball_y > self.ai_y
            && self.ball_y < self.ai_y + PADDLE_HEIGHT
        {
            self.ball_dx = -self.ball_dx;
            let offset = self.ball_y - (self.ai_y + PADDLE_HEIGHT / 2.0);
            self.ball_dy = offset * DEFLECT_FACTOR;
        }

        self.move_ai();
        StepEvent::None
    }

    /// The tracking paddle drifts toward the ball, one speed unit per frame,
    /// with a small deadzone so it does not jitter.
    fn move_ai(&mut self) {
        let center = self.ai_y + PADDLE_HEIGHT / 2.0;
        if center < self.ball_y - AI_DEADZONE {
            self.ai_y += AI_SPEED;
        } else if center > self.ball_y + AI_DEADZONE {
            self.ai_y -= AI_SPEED;
        }
    }

    /// Puts the ball back on the center spot, serving toward the side that
    /// just conceded.
    fn reset_ball(&mut self) {
        self.ball_x = self.width / 2.0;
        self.ball_y = self.height / 2.0;
        self.ball_dx = if self.ball_dx > 0.0 { SERVE_SPEED } else { -SERVE_SPEED };
        self.ball_dy = SERVE_SPEED;
    }

    pub fn ball(&self) -> (f32, f32) {
        (self.ball_x, self.ball_y)
    }

    pub fn player_paddle_y(&self) -> f32 {
        self.player_y
    }

    pub fn ai_paddle_y(&self) -> f32 {
        self.ai_y
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.ai_score)
    }
}
