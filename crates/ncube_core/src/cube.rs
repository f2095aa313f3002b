use cgmath::Vector3;
use ncube_notation::{Axis, Face, Move};

use crate::animation::{AnimationScheduler, Frame, PieceView, Renderer, TurnAnimation};
use crate::grid::all_positions;
use crate::turn::{self, QuarterTurn, quarter_turns};
use crate::{ColorScheme, CubeParams, Facelet, Grid, History, Piece, PieceId, PieceKind, Pos};

/// NxNxN cube: pieces, the grid of slots holding them, and the move history.
#[derive(Debug)]
pub struct Cube {
    params: CubeParams,
    scheme: ColorScheme,

    /// Every piece, indexed by [`PieceId`]. Pieces are never added or removed
    /// after construction.
    pieces: Vec<Piece>,
    /// Current slot of every piece.
    grid: Grid,
    /// Slot of every piece at construction.
    initial: Grid,

    history: History,
    animator: Option<AnimationScheduler>,
}

impl Cube {
    /// Constructs a solved cube with no renderer attached.
    ///
    /// Invalid parameters are replaced as described in
    /// [`CubeParams::sanitized()`].
    pub fn new(params: CubeParams, scheme: ColorScheme) -> Self {
        let params = params.sanitized();
        let layers = params.layers;

        let mut grid = Grid::new(layers);
        let mut pieces = vec![];
        for pos in all_positions(layers) {
            if let Some(kind) = initial_piece_kind(pos, layers, &scheme) {
                let id = PieceId(pieces.len() as u32);
                pieces.push(Piece::new(kind, slot_center(pos, &params)));
                grid.set(pos, Some(id));
            }
        }

        log::debug!(
            "constructed {layers}x{layers}x{layers} cube with {} pieces",
            pieces.len(),
        );

        Self {
            params,
            scheme,
            pieces,
            initial: grid.clone(),
            grid,
            history: History::new(),
            animator: None,
        }
    }

    /// Constructs a solved cube that plays animated turns on `renderer`.
    pub fn with_renderer(params: CubeParams, scheme: ColorScheme, renderer: impl Renderer) -> Self {
        let mut ret = Self::new(params, scheme);
        ret.attach_renderer(renderer);
        ret
    }

    /// Attaches a renderer, replacing any existing one after its queued
    /// animations finish.
    pub fn attach_renderer(&mut self, renderer: impl Renderer) {
        self.finish_animations();
        self.animator = Some(AnimationScheduler::spawn(
            renderer,
            self.params.turn_duration(),
        ));
    }

    /// Waits for every queued animation to finish and detaches the renderer.
    pub fn finish_animations(&mut self) {
        if let Some(animator) = self.animator.take() {
            animator.finish();
        }
    }

    /// Returns whether a turn animation is currently playing.
    pub fn is_moving(&self) -> bool {
        self.animator.as_ref().is_some_and(|a| a.is_moving())
    }

    /// Returns the parameters of the cube.
    pub fn params(&self) -> &CubeParams {
        &self.params
    }
    /// Returns the number of layers along each axis.
    pub fn layers(&self) -> usize {
        self.params.layers
    }
    /// Returns the color scheme of the cube.
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }
    /// Returns the grid of slots.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Returns every piece, indexed by ID.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns a piece by ID.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }
    /// Returns the piece in a slot.
    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.piece(self.grid.get(pos)?)
    }

    /// Returns whether every piece is in its original slot with its original
    /// orientation.
    pub fn is_solved(&self) -> bool {
        self.grid == self.initial && self.pieces.iter().all(|p| p.is_oriented())
    }

    /// Returns a snapshot of every piece's rendered state.
    pub fn frame(&self) -> Frame {
        let pieces = self
            .pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| PieceView::new(PieceId(i as u32), piece))
            .collect();
        Frame { pieces }
    }

    /// Applies a move.
    ///
    /// If `record` is true, the cube first replays forward to the tip of the
    /// history and then appends the move. If `animate` is true, each quarter
    /// turn is rendered (and sent to the renderer, if there is one);
    /// otherwise its rotation is accumulated until [`Self::flush_pending()`].
    pub fn apply(&mut self, m: Move, record: bool, animate: bool) {
        if record {
            self.catch_up_history();
        }
        let layers = self.layers();
        for q in quarter_turns(m, layers) {
            self.quarter_turn(q, animate);
            if record {
                let recorded = q.canonical_move(layers);
                log::debug!("recorded {recorded} for {m}");
                self.history.push(recorded);
            }
        }
    }

    /// Applies a move, records it, and animates it.
    pub fn do_move(&mut self, m: Move) {
        self.apply(m, true, true);
    }

    /// Parses and applies a whitespace-separated sequence of moves.
    ///
    /// Tokens are case-insensitive. Invalid tokens are skipped. Returns the
    /// moves that were applied.
    pub fn evaluate(&mut self, sequence: &str) -> Vec<Move> {
        let moves: Vec<Move> = ncube_notation::parse_moves(sequence)
            .filter_map(|result| {
                result
                    .map_err(|e| log::debug!("skipping invalid move in {sequence:?}: {e}"))
                    .ok()
            })
            .collect();
        for &m in &moves {
            self.do_move(m);
        }
        moves
    }

    /// Undoes the move before the history cursor. Returns `false` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back() {
            Some(m) => {
                self.apply(m.inv(), false, true);
                true
            }
            None => false,
        }
    }

    /// Redoes the move after the history cursor. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(m) => {
                self.apply(m, false, true);
                true
            }
            None => false,
        }
    }

    /// Replays every move after the history cursor.
    fn catch_up_history(&mut self) {
        while let Some(m) = self.history.step_forward() {
            self.apply(m, false, true);
        }
    }

    /// Applies every piece's accumulated rotation to its rendered pose.
    pub fn flush_pending(&mut self) {
        for piece in &mut self.pieces {
            piece.flush_pending();
        }
    }

    fn quarter_turn(&mut self, q: QuarterTurn, animate: bool) {
        let before = match (&self.animator, animate) {
            (Some(_), true) => Some(self.frame()),
            _ => None,
        };

        let moving = turn::apply(&mut self.grid, &mut self.pieces, q);

        let rot = q.rotation(1.0);
        for &id in &moving {
            let piece = &mut self.pieces[id.index()];
            if animate {
                piece.rotate(rot);
            } else {
                piece.defer_rotation(rot);
            }
        }

        if let (Some(animator), Some(before)) = (&self.animator, before) {
            animator.submit(TurnAnimation {
                turn: q,
                steps: self.params.turn_steps(),
                moving,
                before,
            });
        }
    }
}

impl Drop for Cube {
    fn drop(&mut self) {
        self.finish_animations();
    }
}

/// Returns the center of a slot, with the origin at the center of the cube.
pub fn slot_center(pos: Pos, params: &CubeParams) -> Vector3<f32> {
    let c = (params.layers as f64 - 1.0) / 2.0;
    let w = params.piece_width();
    let coord = |i: usize| ((i as f64 - c) * w) as f32;
    Vector3::new(coord(pos.x), coord(pos.y), coord(pos.z))
}

/// Returns the piece that starts in a slot, or `None` for interior slots.
fn initial_piece_kind(pos: Pos, layers: usize, scheme: &ColorScheme) -> Option<PieceKind> {
    let last = layers - 1;
    let outer_face = |axis: Axis| match pos.get(axis) {
        0 => Some(axis.low_face()),
        c if c == last => Some(axis.high_face()),
        _ => None,
    };
    let facelet = |face: Face| Facelet {
        color: scheme.get(face),
        normal: face_normal(face),
    };

    match (outer_face(Axis::X), outer_face(Axis::Y), outer_face(Axis::Z)) {
        (Some(x), Some(y), Some(z)) => {
            // U/D color first; the other two swap with the corner's parity.
            let high_count = [x, y, z].iter().filter(|f| !f.is_low()).count();
            let order = if high_count % 2 == 0 { [y, z, x] } else { [y, x, z] };
            Some(PieceKind::Corner {
                facelets: order.map(facelet),
                orient: 0,
            })
        }
        (None, Some(y), Some(z)) => Some(PieceKind::Edge {
            facelets: [y, z].map(facelet),
            orient: 0,
        }),
        (Some(x), None, Some(z)) => Some(PieceKind::Edge {
            facelets: [x, z].map(facelet),
            orient: 2,
        }),
        (Some(x), Some(y), None) => Some(PieceKind::Edge {
            facelets: [y, x].map(facelet),
            orient: 0,
        }),
        (Some(f), None, None) | (None, Some(f), None) | (None, None, Some(f)) => {
            Some(PieceKind::Center([facelet(f)]))
        }
        (None, None, None) => None,
    }
}

/// Returns the outward unit normal of a face.
pub fn face_normal(face: Face) -> Vector3<f32> {
    let sign = if face.is_low() { -1.0 } else { 1.0 };
    match face.axis() {
        Axis::X => Vector3::new(sign, 0.0, 0.0),
        Axis::Y => Vector3::new(0.0, sign, 0.0),
        Axis::Z => Vector3::new(0.0, 0.0, sign),
    }
}
