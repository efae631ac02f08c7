//! Undo/redo history of committed drawables.

use super::drawable::{DrawStyle, Drawable, Point};
use log::{debug, warn};

/// Two-stack drawing history plus the gesture currently in progress.
///
/// `done` holds committed drawables in draw order (first = bottom layer).
/// `undone` is the redo stack; its last element is the most recently undone.
/// `active` is the drawable of the open gesture, if any. A drawable lives in
/// exactly one of these places and is moved, never copied, between them.
#[derive(Debug, Default)]
pub struct History {
    done: Vec<Drawable>,
    undone: Vec<Drawable>,
    active: Option<Drawable>,
    /// Maximum committed drawables kept (0 = unlimited)
    max_strokes: usize,
}

impl History {
    /// Creates an empty, unlimited history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that keeps at most `max_strokes` committed
    /// drawables, evicting the oldest when exceeded. `0` means unlimited.
    pub fn with_limit(max_strokes: usize) -> Self {
        Self {
            max_strokes,
            ..Self::default()
        }
    }

    /// Starts a new gesture at `(x, y)`.
    ///
    /// A stale active drawable is discarded, never committed. Starting new
    /// content also drops the redo stack for good.
    pub fn begin(&mut self, style: DrawStyle, x: f64, y: f64) {
        if self.active.take().is_some() {
            debug!("Discarding unreleased drawable before new gesture");
        }
        if !self.undone.is_empty() {
            debug!("New gesture discards {} redo entries", self.undone.len());
            self.undone.clear();
        }
        self.active = Some(Drawable::new(style, Point::new(x, y)));
    }

    /// Extends the active drawable. Returns `false` when nothing is active.
    pub fn extend(&mut self, x: f64, y: f64) -> bool {
        match self.active.as_mut() {
            Some(drawable) => {
                drawable.extend(x, y);
                true
            }
            None => false,
        }
    }

    /// Moves the active drawable onto the top of `done`.
    ///
    /// Returns `false` (and does nothing) when no gesture is open.
    pub fn commit(&mut self) -> bool {
        let Some(drawable) = self.active.take() else {
            return false;
        };

        self.done.push(drawable);
        if self.max_strokes > 0 && self.done.len() > self.max_strokes {
            let excess = self.done.len() - self.max_strokes;
            self.done.drain(..excess);
            warn!(
                "History limit ({}) reached; dropped {} oldest drawable(s)",
                self.max_strokes, excess
            );
        }
        debug!("Committed drawable ({} in history)", self.done.len());
        true
    }

    /// Discards the active drawable without committing it.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Moves the most recent committed drawable onto the redo stack.
    pub fn undo(&mut self) -> bool {
        match self.done.pop() {
            Some(drawable) => {
                self.undone.push(drawable);
                debug!(
                    "Undo ({} done, {} undone)",
                    self.done.len(),
                    self.undone.len()
                );
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone drawable back onto `done`.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                self.done.push(drawable);
                debug!(
                    "Redo ({} done, {} undone)",
                    self.done.len(),
                    self.undone.len()
                );
                true
            }
            None => false,
        }
    }

    /// Empties both stacks and cancels any open gesture.
    ///
    /// Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.done.is_empty() || !self.undone.is_empty() || self.active.is_some();
        self.done.clear();
        self.undone.clear();
        self.active = None;
        changed
    }

    /// Committed drawables in draw order.
    pub fn done(&self) -> &[Drawable] {
        &self.done
    }

    /// Redo stack; the last element is the next one `redo` restores.
    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    pub fn active(&self) -> Option<&Drawable> {
        self.active.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(thickness: f64) -> DrawStyle {
        DrawStyle::Stroke { thickness }
    }

    fn star() -> DrawStyle {
        DrawStyle::Sticker {
            glyph: "★".to_string(),
            size: 32.0,
        }
    }

    fn points_of(drawable: &Drawable) -> Vec<Point> {
        drawable
            .as_stroke()
            .expect("expected a stroke")
            .points()
            .to_vec()
    }

    #[test]
    fn test_stroke_records_every_extended_point() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        let moves = [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)];
        for (x, y) in moves {
            assert!(history.extend(x, y));
        }
        assert!(history.commit());

        let expected: Vec<Point> = std::iter::once(Point::new(0.0, 0.0))
            .chain(moves.iter().map(|&(x, y)| Point::new(x, y)))
            .collect();
        assert_eq!(points_of(history.done().last().unwrap()), expected);
    }

    #[test]
    fn test_scenario_single_segment_stroke() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.extend(10.0, 0.0);
        history.commit();

        assert_eq!(history.done().len(), 1);
        assert_eq!(
            points_of(&history.done()[0]),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
        );
        assert!(!history.is_drawing());
    }

    #[test]
    fn test_scenario_undo_single_point_stroke() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        history.undo();

        assert!(history.done().is_empty());
        assert_eq!(history.undone().len(), 1);
        assert_eq!(points_of(&history.undone()[0]), vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn test_scenario_sticker_follows_pointer() {
        let mut history = History::new();
        history.begin(star(), 5.0, 5.0);
        history.extend(6.0, 6.0);
        history.commit();

        assert_eq!(history.done().len(), 1);
        let sticker = history.done()[0].as_sticker().unwrap();
        assert_eq!(sticker.anchor(), Point::new(6.0, 6.0));
        assert_eq!(sticker.glyph(), "★");
    }

    #[test]
    fn test_scenario_second_commit_is_noop() {
        let mut history = History::new();
        history.begin(pen(1.0), 1.0, 1.0);
        assert!(history.commit());
        assert!(!history.commit());
        assert_eq!(history.done().len(), 1);
    }

    #[test]
    fn test_extend_without_active_is_noop() {
        let mut history = History::new();
        assert!(!history.extend(3.0, 3.0));
        assert!(history.done().is_empty());
        assert!(history.active().is_none());
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_are_noops() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.done().is_empty());
        assert!(history.undone().is_empty());

        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        assert!(history.can_undo());
        assert!(!history.redo());
        assert_eq!(history.done().len(), 1);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_commit_undo_redo_round_trip() {
        let mut history = History::new();
        history.begin(pen(2.0), 0.0, 0.0);
        history.extend(4.0, 4.0);
        history.commit();
        history.begin(star(), 9.0, 9.0);
        history.commit();
        let snapshot = history.done().to_vec();

        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history.done(), snapshot.as_slice());
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_undo_order_is_most_recent_first() {
        let mut history = History::new();
        for i in 0..3 {
            history.begin(pen(1.0), i as f64, 0.0);
            history.commit();
        }
        history.undo();
        history.undo();

        assert_eq!(history.done().len(), 1);
        assert_eq!(points_of(&history.undone()[1]), vec![Point::new(1.0, 0.0)]);

        history.redo();
        assert_eq!(
            points_of(history.done().last().unwrap()),
            vec![Point::new(1.0, 0.0)]
        );
    }

    #[test]
    fn test_new_gesture_discards_redo_branch() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        history.undo();
        assert!(history.can_redo());

        history.begin(pen(1.0), 5.0, 5.0);
        assert!(history.undone().is_empty());
        history.commit();

        assert!(history.undone().is_empty());
        assert!(!history.redo());
        assert_eq!(history.done().len(), 1);
        assert_eq!(points_of(&history.done()[0]), vec![Point::new(5.0, 5.0)]);
    }

    #[test]
    fn test_commit_alone_keeps_redo_branch() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        history.undo();

        // No gesture open: commit must not touch the redo stack
        assert!(!history.commit());
        assert_eq!(history.undone().len(), 1);
    }

    #[test]
    fn test_begin_while_active_discards_stale_drawable() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.extend(1.0, 1.0);
        history.begin(pen(3.0), 8.0, 8.0);
        history.commit();

        assert_eq!(history.done().len(), 1);
        assert_eq!(points_of(&history.done()[0]), vec![Point::new(8.0, 8.0)]);
    }

    #[test]
    fn test_cancel_discards_active_only() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        history.begin(pen(1.0), 2.0, 2.0);

        assert!(history.cancel());
        assert!(!history.cancel());
        assert!(!history.is_drawing());
        assert_eq!(history.done().len(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut history = History::new();
        history.begin(pen(1.0), 0.0, 0.0);
        history.commit();
        history.begin(pen(1.0), 1.0, 1.0);
        history.commit();
        history.undo();
        history.begin(star(), 3.0, 3.0);

        assert!(history.clear());
        assert!(history.done().is_empty());
        assert!(history.undone().is_empty());
        assert!(history.active().is_none());
        assert!(!history.clear());
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::with_limit(2);
        for i in 0..3 {
            history.begin(pen(1.0), i as f64, 0.0);
            history.commit();
        }

        assert_eq!(history.done().len(), 2);
        assert_eq!(points_of(&history.done()[0]), vec![Point::new(1.0, 0.0)]);
        assert_eq!(points_of(&history.done()[1]), vec![Point::new(2.0, 0.0)]);
    }
}
