use crossterm::event::KeyCode;

/// Everything a held key can do in Pong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PongControl {
    PlayerUp,
    PlayerDown,
    OpponentUp,
    OpponentDown,
    PaddleSlower,
    PaddleFaster,
    BallSlower,
    BallFaster,
}

impl PongControl {
    pub const ALL: [PongControl; 8] = [
        PongControl::PlayerUp,
        PongControl::PlayerDown,
        PongControl::OpponentUp,
        PongControl::OpponentDown,
        PongControl::PaddleSlower,
        PongControl::PaddleFaster,
        PongControl::BallSlower,
        PongControl::BallFaster,
    ];

    /// W/S for the left paddle, arrows for the right one, 1-4 for speeds.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(PongControl::PlayerUp),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(PongControl::PlayerDown),
            KeyCode::Up => Some(PongControl::OpponentUp),
            KeyCode::Down => Some(PongControl::OpponentDown),
            KeyCode::Char('1') => Some(PongControl::PaddleSlower),
            KeyCode::Char('2') => Some(PongControl::PaddleFaster),
            KeyCode::Char('3') => Some(PongControl::BallSlower),
            KeyCode::Char('4') => Some(PongControl::BallFaster),
            _ => None,
        }
    }
}

/// Restart only applies while a match is over
pub fn is_restart(code: KeyCode) -> bool {
    code == KeyCode::Char(' ')
}
