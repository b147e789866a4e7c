//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s so the browser
//! host and native tests share one table.

use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Tool(ToolKind),
    /// Swap between the current and previous tool.
    ToggleLastTool,
    Undo,
    Redo,
    ClearCanvas,
    /// Close the text form / file prompt and go back to select.
    Cancel,
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a `KeyboardEvent.key` value plus modifiers.
    ///
    /// `ctrl` and `meta` are treated alike so ⌘ and Ctrl share bindings.
    pub fn resolve(key: &str, ctrl: bool, shift: bool, meta: bool) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;
        let lower = key.to_ascii_lowercase();

        if cmd {
            return match (lower.as_str(), shift) {
                ("z", false) => Some(ShortcutAction::Undo),
                ("z", true) | ("y", false) => Some(ShortcutAction::Redo),
                ("backspace" | "delete", _) => Some(ShortcutAction::ClearCanvas),
                _ => None,
            };
        }

        match lower.as_str() {
            "v" => Some(ShortcutAction::Tool(ToolKind::Select)),
            "b" => Some(ShortcutAction::Tool(ToolKind::Brush)),
            "t" => Some(ShortcutAction::Tool(ToolKind::Text)),
            "i" => Some(ShortcutAction::Tool(ToolKind::Image)),
            "c" => Some(ShortcutAction::Tool(ToolKind::Color)),
            "tab" => Some(ShortcutAction::ToggleLastTool),
            "escape" => Some(ShortcutAction::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_keys() {
        assert_eq!(
            ShortcutMap::resolve("b", false, false, false),
            Some(ShortcutAction::Tool(ToolKind::Brush))
        );
        assert_eq!(
            ShortcutMap::resolve("T", false, true, false),
            Some(ShortcutAction::Tool(ToolKind::Text))
        );
        assert_eq!(ShortcutMap::resolve("q", false, false, false), None);
    }

    #[test]
    fn undo_redo_accept_ctrl_or_meta() {
        assert_eq!(ShortcutMap::resolve("z", true, false, false), Some(ShortcutAction::Undo));
        assert_eq!(ShortcutMap::resolve("z", false, false, true), Some(ShortcutAction::Undo));
        assert_eq!(ShortcutMap::resolve("Z", false, true, true), Some(ShortcutAction::Redo));
        assert_eq!(ShortcutMap::resolve("y", true, false, false), Some(ShortcutAction::Redo));
    }

    #[test]
    fn cmd_delete_clears() {
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, true),
            Some(ShortcutAction::ClearCanvas)
        );
        // Plain Delete without a modifier does nothing.
        assert_eq!(ShortcutMap::resolve("Delete", false, false, false), None);
    }
}
