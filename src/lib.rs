//! Headless modal-dialog toolkit
//!
//! `modali` provides preconfigured dialog variants (message, single- and
//! multi-choice, one-shot item picker, date/time pickers, progress) on top
//! of a shared session core. The toolkit validates parameters at build
//! time, routes the user's decision to either a listener-capable host
//! screen or a pub/sub result channel, keeps selection state alive across
//! host recreation, and feeds long-running progress dialogs from an
//! asynchronous update channel. It never draws anything itself; the
//! consuming environment implements [`Surface`] per open dialog.
//!
//! Typical flow:
//!
//! ```
//! use modali::{ButtonCode, DialogSession, MessageDialogBuilder, ResultBus};
//! # use modali::{ButtonLabels, ProgressView, SelectorItem, Surface};
//! # struct NoopSurface;
//! # impl Surface for NoopSurface {
//! #     fn render_list(&mut self, _: &[SelectorItem], _: u16) -> anyhow::Result<()> { Ok(()) }
//! #     fn render_buttons(&mut self, _: &ButtonLabels) -> anyhow::Result<()> { Ok(()) }
//! #     fn render_progress(&mut self, _: ProgressView, _: Option<&str>) -> anyhow::Result<()> { Ok(()) }
//! #     fn dismiss(&mut self) -> anyhow::Result<()> { Ok(()) }
//! # }
//!
//! let config = MessageDialogBuilder::new()
//!     .title("Unsaved changes")
//!     .text("Save before closing?")
//!     .positive_label("Save")
//!     .negative_label("Discard")
//!     .request_key("save_prompt")
//!     .build()
//!     .expect("parameters are complete");
//!
//! let bus = ResultBus::new();
//! let mut answers = bus.subscribe("save_prompt");
//! let mut session = DialogSession::show_via_channel(config.into(), &bus);
//!
//! // The surface reports the user's button press back into the session.
//! let mut surface = NoopSurface;
//! session.press_button(ButtonCode::Positive, &mut surface).unwrap();
//! assert_eq!(answers.try_recv().unwrap().result_code, -1);
//! ```

pub mod bus;
pub mod dialogs;
pub mod error;
pub mod item;
pub mod progress;
pub mod result;
pub mod routing;
pub mod selection;
pub mod session;
pub mod surface;

pub use bus::ResultBus;
pub use dialogs::{
    CommonConfig, DateSelectConfig, DateSelectDialogBuilder, DialogConfig, DialogKind,
    ItemSelectConfig, ItemSelectDialogBuilder, MessageConfig, MessageDialogBuilder,
    MultiChoiceConfig, MultiChoiceDialogBuilder, ProgressConfig, ProgressDialogBuilder,
    SingleChoiceConfig, SingleChoiceDialogBuilder, TimeSelectConfig, TimeSelectDialogBuilder,
};
pub use error::BuildError;
pub use item::{IconHandle, SelectorItem};
pub use progress::{ProgressHandle, ProgressMsg, ProgressSession};
pub use result::{ButtonCode, DialogResult, Payload, SELECTION_RESULT_CODE};
pub use routing::{DialogListener, Host, Route};
pub use selection::{Activation, SelectionEngine, SelectionMode};
pub use session::{DialogSession, SavedState, SessionState};
pub use surface::{ButtonLabels, ProgressView, Surface};
