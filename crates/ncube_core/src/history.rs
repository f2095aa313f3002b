use ncube_notation::Move;

/// Append-only list of recorded moves with a replay cursor.
///
/// The cursor counts how many recorded moves are currently applied: 0 is the
/// initial state and `len()` is the tip. Moves after the cursor can be
/// redone. Recording never discards them; the cube replays forward to the tip
/// before appending.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
    index: usize,
}

impl History {
    /// Constructs an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a history with the cursor at the initial state.
    pub(crate) fn unapplied(moves: Vec<Move>) -> Self {
        Self { moves, index: 0 }
    }

    /// Returns every recorded move, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
    /// Returns the number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    /// Returns whether no moves have been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Returns the cursor: the number of recorded moves currently applied.
    pub fn index(&self) -> usize {
        self.index
    }
    /// Returns whether every recorded move is applied.
    pub fn is_at_tip(&self) -> bool {
        self.index == self.moves.len()
    }
    /// Returns whether there is a move to undo.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }
    /// Returns whether there is a move to redo.
    pub fn can_redo(&self) -> bool {
        !self.is_at_tip()
    }

    /// Appends a move at the tip.
    pub(crate) fn push(&mut self, m: Move) {
        debug_assert!(self.is_at_tip(), "history must be at tip before recording");
        self.moves.push(m);
        self.index = self.moves.len();
    }

    /// Moves the cursor back and returns the move to undo.
    pub(crate) fn step_back(&mut self) -> Option<Move> {
        let m = *self.moves.get(self.index.checked_sub(1)?)?;
        self.index -= 1;
        Some(m)
    }
    /// Moves the cursor forward and returns the move to redo.
    pub(crate) fn step_forward(&mut self) -> Option<Move> {
        let m = *self.moves.get(self.index)?;
        self.index += 1;
        Some(m)
    }
}
