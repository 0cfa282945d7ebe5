use crate::core::operations::operation::Operation;

/// The verbs of the command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    White,
    Green,
    Update,
    BgRect,
    Figure,
    Move,
    Reset,
}

impl Command {
    pub const ALL: &'static [Self] = &[
        Self::White,
        Self::Green,
        Self::Update,
        Self::BgRect,
        Self::Figure,
        Self::Move,
        Self::Reset,
    ];

    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Green => "green",
            Self::Update => "update",
            Self::BgRect => "bgrect",
            Self::Figure => "figure",
            Self::Move => "move",
            Self::Reset => "reset",
        }
    }

    /// Exact number of numeric arguments the verb takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::White | Self::Green | Self::Update | Self::Reset => 0,
            Self::Figure | Self::Move => 2,
            Self::BgRect => 4,
        }
    }

    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|command| command.verb() == verb)
    }

    /// Builds the operation for this verb. `args` must hold exactly `arity()` values.
    pub(crate) fn operation(self, args: &[f64]) -> Operation {
        match (self, args) {
            (Self::White, []) => Operation::white_fill(),
            (Self::Green, []) => Operation::green_fill(),
            (Self::Update, []) => Operation::Update,
            (Self::Reset, []) => Operation::reset(),
            (Self::BgRect, &[x1, y1, x2, y2]) => Operation::background_rect(x1, y1, x2, y2),
            (Self::Figure, &[x, y]) => Operation::figure(x, y),
            (Self::Move, &[x, y]) => Operation::move_to(x, y),
            _ => unreachable!("arity of `{}` is checked before building", self.verb()),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}
