use rand::Rng;

/// Axis-aligned rectangle in play-field pixels, origin top-left, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    pub score: u32,
    /// Vertical pixels per move; kept within the configured speed bounds by the caller
    pub speed: u32,
    field_height: f32,
}

impl Paddle {
    pub fn new(rect: Rect, speed: u32, field_height: f32) -> Self {
        Self { rect, score: 0, speed, field_height }
    }

    /// Move one full step. A step that would leave the field is not taken.
    pub fn shift(&mut self, direction: Direction) {
        let step = self.speed as f32;
        match direction {
            Direction::Up if self.rect.top() - step >= 0.0 => self.rect.y -= step,
            Direction::Down if self.rect.bottom() + step <= self.field_height => self.rect.y += step,
            _ => {}
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub speed_x: f32,
    pub speed_y: f32,
    field_width: f32,
    field_height: f32,
}

impl Ball {
    /// Build a ball already served from the centre of the field.
    pub fn new<R: Rng + ?Sized>(size: f32, field_width: f32, field_height: f32, speed: u32, rng: &mut R) -> Self {
        let mut ball = Self {
            rect: Rect::new(0.0, 0.0, size, size),
            speed_x: 0.0,
            speed_y: 0.0,
            field_width,
            field_height,
        };
        ball.reset(speed, rng);
        ball
    }

    /// Re-serve from the centre with each axis at `speed` and an independent random sign.
    pub fn reset<R: Rng + ?Sized>(&mut self, speed: u32, rng: &mut R) {
        self.rect.x = (self.field_width - self.rect.width) / 2.0;
        self.rect.y = (self.field_height - self.rect.height) / 2.0;
        let speed = speed as f32;
        self.speed_x = if rng.random_bool(0.5) { speed } else { -speed };
        self.speed_y = if rng.random_bool(0.5) { speed } else { -speed };
    }

    /// Apply one tick of velocity and bounce off the top and bottom walls.
    ///
    /// Horizontal position is never clamped here: leaving through the left or
    /// right edge is how a point is detected.
    pub fn advance(&mut self) {
        self.rect.x += self.speed_x;
        self.rect.y += self.speed_y;

        if self.rect.top() <= 0.0 || self.rect.bottom() >= self.field_height {
            self.speed_y = -self.speed_y;
        }
    }

    /// Overwrite both speed magnitudes while keeping the current direction on each axis.
    pub fn set_speed(&mut self, speed: u32) {
        let speed = speed as f32;
        self.speed_x = if self.speed_x > 0.0 { speed } else { -speed };
        self.speed_y = if self.speed_y > 0.0 { speed } else { -speed };
    }

    pub fn center(&self) -> (f32, f32) {
        (self.rect.x + self.rect.width / 2.0, self.rect.y + self.rect.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ball_at(x: f32, y: f32, speed_x: f32, speed_y: f32) -> Ball {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ball = Ball::new(15.0, 800.0, 600.0, 7, &mut rng);
        ball.rect.x = x;
        ball.rect.y = y;
        ball.speed_x = speed_x;
        ball.speed_y = speed_y;
        ball
    }

    #[test]
    fn rects_sharing_an_edge_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn paddle_moves_by_its_speed() {
        let mut paddle = Paddle::new(Rect::new(50.0, 255.0, 15.0, 90.0), 7, 600.0);
        paddle.shift(Direction::Up);
        assert_eq!(paddle.rect.y, 248.0);
        paddle.shift(Direction::Down);
        paddle.shift(Direction::Down);
        assert_eq!(paddle.rect.y, 262.0);
    }

    #[test]
    fn paddle_at_top_edge_does_not_move_up() {
        let mut paddle = Paddle::new(Rect::new(50.0, 0.0, 15.0, 90.0), 7, 600.0);
        paddle.shift(Direction::Up);
        assert_eq!(paddle.rect.y, 0.0);
    }

    #[test]
    fn paddle_skips_a_step_that_would_leave_the_field() {
        let mut paddle = Paddle::new(Rect::new(50.0, 3.0, 15.0, 90.0), 7, 600.0);
        paddle.shift(Direction::Up);
        assert_eq!(paddle.rect.y, 3.0);

        paddle.rect.y = 505.0;
        paddle.shift(Direction::Down);
        assert_eq!(paddle.rect.y, 505.0);

        paddle.rect.y = 503.0;
        paddle.shift(Direction::Down);
        assert_eq!(paddle.rect.bottom(), 600.0);
    }

    #[test]
    fn paddle_stops_short_of_the_top_when_steps_do_not_divide_evenly() {
        let mut paddle = Paddle::new(Rect::new(50.0, 255.0, 15.0, 90.0), 7, 600.0);
        for _ in 0..40 {
            paddle.shift(Direction::Up);
        }
        assert_eq!(paddle.rect.y, 3.0);
    }

    #[test]
    fn reset_serves_from_the_centre_at_the_configured_speed() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ball = ball_at(3.0, 4.0, 20.0, -20.0);
        ball.reset(9, &mut rng);
        assert_eq!(ball.center(), (400.0, 300.0));
        assert_eq!(ball.speed_x.abs(), 9.0);
        assert_eq!(ball.speed_y.abs(), 9.0);
    }

    #[test]
    fn reset_produces_every_sign_combination() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ball = ball_at(0.0, 0.0, 7.0, 7.0);
        let mut seen = [false; 4];
        for _ in 0..200 {
            ball.reset(7, &mut rng);
            let idx = (ball.speed_x > 0.0) as usize * 2 + (ball.speed_y > 0.0) as usize;
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn advance_applies_velocity_without_wall_contact() {
        let mut ball = ball_at(400.0, 300.0, 7.0, 7.0);
        ball.advance();
        assert_eq!((ball.rect.x, ball.rect.y), (407.0, 307.0));
        assert_eq!((ball.speed_x, ball.speed_y), (7.0, 7.0));
    }

    #[test]
    fn advance_bounces_off_top_and_bottom() {
        let mut ball = ball_at(400.0, 5.0, 7.0, -7.0);
        ball.advance();
        assert_eq!(ball.speed_y, 7.0);

        let mut ball = ball_at(400.0, 580.0, -7.0, 7.0);
        ball.advance();
        assert_eq!(ball.speed_y, -7.0);
        assert_eq!(ball.speed_x, -7.0);
    }

    #[test]
    fn advance_inverts_on_any_wall_overlap() {
        // Still inside the top wall but already heading back into the field
        let mut ball = ball_at(400.0, -14.0, 7.0, 13.0);
        ball.advance();
        assert_eq!(ball.rect.y, -1.0);
        assert_eq!(ball.speed_y, -13.0);
    }

    #[test]
    fn advance_does_not_clamp_horizontally() {
        let mut ball = ball_at(3.0, 300.0, -7.0, 7.0);
        ball.advance();
        assert_eq!(ball.rect.x, -4.0);
    }

    #[test]
    fn set_speed_keeps_direction() {
        let mut ball = ball_at(400.0, 300.0, -9.317, 7.0);
        ball.set_speed(4);
        assert_eq!((ball.speed_x, ball.speed_y), (-4.0, 4.0));
    }
}
