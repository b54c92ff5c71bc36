use rand::Rng;
use std::fmt;

/// The closed set of movement commands the controller app understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
}

use Command::*;

impl Command {
    pub const ALL: [Command; 6] = [Up, Down, Left, Right, Forward, Backward];

    /// Picks one command uniformly at random.
    pub fn pick(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn token(self) -> &'static str {
        match self {
            Up => "UP",
            Down => "DOWN",
            Left => "LEFT",
            Right => "RIGHT",
            Forward => "FORWARD",
            Backward => "BACKWARD",
        }
    }

    /// The newline-terminated wire form, one command per line.
    pub fn line(self) -> String {
        let mut line = String::with_capacity(self.token().len() + 1);
        line.push_str(self.token());
        line.push('\n');
        line
    }

    pub fn from_token(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lines_are_single_token_newline_terminated() {
        for cmd in Command::ALL {
            let line = cmd.line();
            assert!(line.ends_with('\n'));
            let token = line.trim_end_matches('\n');
            assert_eq!(token, cmd.token());
            assert!(!token.contains('\n'), "token must be a single line");
        }
    }

    #[test]
    fn tokens_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_token(cmd.token()), Some(cmd));
        }
        assert_eq!(Command::from_token("HOVER"), None);
        assert_eq!(Command::from_token(""), None);
    }

    #[test]
    fn pick_covers_all_commands_roughly_uniformly() {
        let mut rng = rand::rng();
        let mut counts: HashMap<Command, usize> = HashMap::new();
        let samples = 12_000;
        for _ in 0..samples {
            *counts.entry(Command::pick(&mut rng)).or_default() += 1;
        }
        let expected = samples / Command::ALL.len();
        for cmd in Command::ALL {
            let count = counts.get(&cmd).copied().unwrap_or(0);
            assert!(
                count > expected / 2 && count < expected * 2,
                "{cmd} picked {count} times, expected around {expected}"
            );
        }
    }
}
