use lasso_types::SelectionRect;

/// Selections with either side below this many logical pixels are ignored.
pub const DEFAULT_MIN_SELECTION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    /// Overlay shown, crosshair cursor, waiting for pointer-down.
    Armed,
    /// Pointer is down and the rectangle is growing.
    Selecting,
}

/// Drag-selection state machine for the capture overlay.
///
/// The windowing layer feeds pointer events in logical screen coordinates;
/// `pointer_up` yields at most one [`SelectionRect`] per arm/drag cycle.
/// Inverted drags (up or left) are normalised.
#[derive(Debug)]
pub struct SelectionOverlay {
    phase: OverlayPhase,
    origin: (i32, i32),
    current: (i32, i32),
    min_size: u32,
}

impl SelectionOverlay {
    pub fn new(min_size: u32) -> Self {
        Self {
            phase: OverlayPhase::Hidden,
            origin: (0, 0),
            current: (0, 0),
            min_size,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Show the overlay. Resets any transient state from a previous cycle.
    pub fn arm(&mut self) {
        self.phase = OverlayPhase::Armed;
        self.origin = (0, 0);
        self.current = (0, 0);
    }

    /// Hide the overlay without emitting anything (Escape, focus loss).
    pub fn cancel(&mut self) {
        self.phase = OverlayPhase::Hidden;
    }

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if self.phase != OverlayPhase::Armed {
            return;
        }
        self.origin = (x, y);
        self.current = (x, y);
        self.phase = OverlayPhase::Selecting;
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if self.phase == OverlayPhase::Selecting {
            self.current = (x, y);
        }
    }

    /// Finish the drag. Returns the selection iff both sides meet the
    /// minimum size; the overlay hides either way.
    pub fn pointer_up(&mut self, x: i32, y: i32) -> Option<SelectionRect> {
        if self.phase != OverlayPhase::Selecting {
            return None;
        }
        self.current = (x, y);
        self.phase = OverlayPhase::Hidden;

        let rect = self.rect_in_progress();
        if rect.width < self.min_size || rect.height < self.min_size {
            return None;
        }
        Some(rect)
    }

    /// Rectangle between origin and the current pointer, normalised.
    /// Used by the windowing layer to paint the rubber band.
    pub fn rect_in_progress(&self) -> SelectionRect {
        let (x0, y0) = self.origin;
        let (x1, y1) = self.current;
        SelectionRect {
            x: x0.min(x1),
            y: y0.min(y1),
            width: x0.abs_diff(x1),
            height: y0.abs_diff(y1),
        }
    }
}

impl Default for SelectionOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SELECTION)
    }
}
