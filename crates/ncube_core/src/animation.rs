//! Playback of turn animations on a dedicated worker thread.
//!
//! The cube applies each turn to its logical state immediately and submits a
//! [`TurnAnimation`] holding an owned snapshot of the pieces. The worker plays
//! animations one at a time, in submission order, so turns never overlap
//! visually no matter how fast they are issued.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::JoinHandle;
use std::time::Duration;

use cgmath::{Matrix3, Vector3};
use smallvec::SmallVec;

use crate::{Facelet, Piece, PieceId, QuarterTurn};

/// Consumer of animation frames.
pub trait Renderer: Send + 'static {
    /// Draws a frame. Called on the animation worker thread.
    fn draw(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame) + Send + 'static> Renderer for F {
    fn draw(&mut self, frame: &Frame) {
        self(frame);
    }
}

/// Visual state of a single piece.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceView {
    /// Piece ID.
    pub id: PieceId,
    /// Colored faces in the piece's home frame.
    pub facelets: SmallVec<[Facelet; 3]>,
    /// Position of the piece's center when the cube is solved.
    pub home: Vector3<f32>,
    /// Accumulated rotation of the piece.
    pub rotation: Matrix3<f32>,
}

impl PieceView {
    pub(crate) fn new(id: PieceId, piece: &Piece) -> Self {
        Self {
            id,
            facelets: piece.facelets().iter().copied().collect(),
            home: piece.home(),
            rotation: piece.pose(),
        }
    }

    /// Returns the position of the piece's center.
    pub fn position(&self) -> Vector3<f32> {
        self.rotation * self.home
    }
}

/// Snapshot of every piece of a cube.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Frame {
    /// Pieces, in ID order.
    pub pieces: Vec<PieceView>,
}

/// Animation of a single quarter turn.
#[derive(Debug, Clone)]
pub struct TurnAnimation {
    /// Turn being animated.
    pub turn: QuarterTurn,
    /// Number of frames in the animation.
    pub steps: u32,
    /// Pieces rotated by the turn.
    pub moving: Vec<PieceId>,
    /// State of every piece before the turn.
    pub before: Frame,
}

impl TurnAnimation {
    /// Returns the frame after `step` of [`Self::steps`] steps.
    pub fn frame_at(&self, step: u32) -> Frame {
        let fraction = step as f32 / self.steps.max(1) as f32;
        let rot = self.turn.rotation(fraction);
        let mut frame = self.before.clone();
        for &id in &self.moving {
            if let Some(view) = frame.pieces.get_mut(id.index()) {
                view.rotation = rot * view.rotation;
            }
        }
        frame
    }
}

#[derive(Debug, Default)]
struct WorkerState {
    /// Whether an animation is currently playing.
    moving: AtomicBool,
    /// Number of animations submitted but not yet finished.
    unfinished: AtomicUsize,
}

/// Single worker thread that plays turn animations in order.
///
/// Dropping the scheduler waits for every queued animation to finish.
#[derive(Debug)]
pub struct AnimationScheduler {
    queue: Option<mpsc::Sender<TurnAnimation>>,
    worker: Option<JoinHandle<()>>,
    state: Arc<WorkerState>,
}

impl AnimationScheduler {
    /// Spawns the worker thread.
    ///
    /// `turn_duration` is the time taken by one whole animation.
    pub fn spawn(mut renderer: impl Renderer, turn_duration: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<TurnAnimation>();
        let state = Arc::new(WorkerState::default());
        let worker_state = Arc::clone(&state);
        let worker = std::thread::spawn(move || {
            for anim in rx {
                worker_state.moving.store(true, Ordering::SeqCst);
                let steps = anim.steps.max(1);
                for step in 1..=steps {
                    renderer.draw(&anim.frame_at(step));
                    if !turn_duration.is_zero() {
                        std::thread::sleep(turn_duration / steps);
                    }
                }
                worker_state.moving.store(false, Ordering::SeqCst);
                worker_state.unfinished.fetch_sub(1, Ordering::SeqCst);
            }
        });

        Self {
            queue: Some(tx),
            worker: Some(worker),
            state,
        }
    }

    /// Queues an animation. Never blocks.
    pub fn submit(&self, anim: TurnAnimation) {
        let Some(queue) = &self.queue else { return };
        self.state.unfinished.fetch_add(1, Ordering::SeqCst);
        if queue.send(anim).is_err() {
            self.state.unfinished.fetch_sub(1, Ordering::SeqCst);
            log::error!("animation worker stopped; dropping turn animation");
        }
    }

    /// Returns whether an animation is currently playing.
    pub fn is_moving(&self) -> bool {
        self.state.moving.load(Ordering::SeqCst)
    }

    /// Returns whether every submitted animation has finished.
    pub fn is_idle(&self) -> bool {
        self.state.unfinished.load(Ordering::SeqCst) == 0
    }

    /// Waits for every queued animation to finish, then stops the worker.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Closing the channel ends the worker loop once the queue is drained.
        drop(self.queue.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("animation worker panicked");
            }
        }
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
