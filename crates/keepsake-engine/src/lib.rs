pub mod editing;
pub mod markdown;
pub mod models;
pub mod render;
pub mod store;
pub mod surface;

// Re-export key types for easier usage
pub use editing::{
    Cmd, Document, EditError, EditSnapshot, EditorCommand, EditorSession, Line, Patch, Pos, Run,
    Selection, SessionState,
};
pub use store::{FieldStore, MemoryStore, StoreError};
pub use surface::{Surface, SurfaceBlock, SurfaceNode};
