#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Order used whenever a direction is drawn uniformly at random.
    pub const CARDINALS: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Unit `(dx, dy)` in grid space; `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Start screen, before the first run.
    Idle,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Monster {
    pub pos: Pos,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Pos),
    Blocked,
    /// The game was not running, so the move was not attempted.
    Ignored,
}

/// Run-level events. Individual steps are traced, not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted { cols: usize, rows: usize },
    MonsterSpawned { at: Pos },
    PlayerHit { hp: i32 },
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_applies_screen_space_deltas() {
        let origin = Pos { y: 4, x: 4 };
        assert_eq!(origin.step(Direction::Up), Pos { y: 3, x: 4 });
        assert_eq!(origin.step(Direction::Down), Pos { y: 5, x: 4 });
        assert_eq!(origin.step(Direction::Left), Pos { y: 4, x: 3 });
        assert_eq!(origin.step(Direction::Right), Pos { y: 4, x: 5 });
    }

    #[test]
    fn cardinal_deltas_are_unit_steps() {
        for direction in Direction::CARDINALS {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{direction:?} must move exactly one cell");
        }
    }
}
