// Internal code generators shared by the user-facing macros

pub mod symbol;
