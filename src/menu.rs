//! The fixed six-entry interaction menu.

/// One entry of the menu, in the order the menu shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

/// Menu entries in display order: key character and label.
pub const MENU_ENTRIES: &[(char, &str)] = &[
    ('l', "Load inventory from file"),
    ('a', "Add a CD"),
    ('i', "Display the current inventory"),
    ('d', "Delete a CD from the inventory"),
    ('s', "Save the inventory to file"),
    ('x', "Exit"),
];

impl MenuChoice {
    /// Parses a menu line: exactly one of the six command characters,
    /// case insensitive, surrounding whitespace ignored. Anything else,
    /// spelled-out words included, is rejected and the caller re-prompts.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let mut chars = input.trim().chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first.to_ascii_lowercase() {
            'l' => Some(MenuChoice::Load),
            'a' => Some(MenuChoice::Add),
            'i' => Some(MenuChoice::Display),
            'd' => Some(MenuChoice::Delete),
            's' => Some(MenuChoice::Save),
            'x' => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
