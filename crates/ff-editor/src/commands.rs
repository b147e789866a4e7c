//! Undo/redo history.
//!
//! The surface's object list already is the undo stack: undo is
//! `remove_last`. This module keeps the redo side, holding objects that
//! undo took off so they can be put back in order.

use ff_core::model::DesignObject;
use ff_core::surface::CanvasOps;

pub struct History {
    redo_stack: Vec<DesignObject>,
    /// Maximum redo depth.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(200)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Remove the topmost user object. Returns its kind name.
    pub fn undo<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) -> Option<&'static str> {
        let removed = canvas.remove_last()?;
        let name = removed.kind_name();
        self.redo_stack.push(removed);
        if self.redo_stack.len() > self.max_depth {
            self.redo_stack.remove(0);
        }
        Some(name)
    }

    /// Put back the most recently undone object.
    pub fn redo<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) -> Option<&'static str> {
        let object = self.redo_stack.pop()?;
        let name = object.kind_name();
        canvas.restore(object);
        Some(name)
    }

    /// A new object invalidates anything that could be redone.
    pub fn record_addition(&mut self) {
        self.redo_stack.clear();
    }

    /// Clear the canvas; not undoable.
    pub fn clear<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear_all_except_outline();
        self.redo_stack.clear();
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
