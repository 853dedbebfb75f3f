// cardform/src/controller/mod.rs
//! Session orchestration: events in, state and views out.

pub mod event;
pub mod handle;
pub mod view;

pub use event::FormEvent;
pub use handle::FormController;
pub use view::FormView;
