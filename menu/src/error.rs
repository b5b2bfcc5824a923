//! Typed errors surfaced by the menu library.

use thiserror::Error;

use crate::core::types::ItemId;

#[derive(Debug, Error)]
pub enum MenuError {
    /// No stored menu carries the requested name.
    #[error("menu '{name}' not found")]
    UnknownMenu { name: String },

    /// Two items in one menu share an id, so the parent links cannot form a forest.
    #[error("malformed menu: item id {id} appears more than once")]
    DuplicateItemId { id: ItemId },

    #[error("render menu: {0}")]
    Render(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = MenuError::UnknownMenu {
            name: "main_menu".to_string(),
        };
        assert_eq!(err.to_string(), "menu 'main_menu' not found");

        let err = MenuError::DuplicateItemId { id: ItemId(7) };
        assert_eq!(
            err.to_string(),
            "malformed menu: item id 7 appears more than once"
        );
    }
}
