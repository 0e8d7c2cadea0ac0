mod catalog;
mod form;
mod functionality;
mod multi_choice;
mod notification;
pub mod prompt;
mod session;
mod tab;

pub use catalog::{FormCatalog, functionality_options};
pub use form::{FormField, FormState};
pub use functionality::{ChoiceField, FunctionalityField, FunctionalityState, MultiField};
pub use multi_choice::MultiChoice;
pub use notification::{Notification, NotificationKind};
pub use session::{Event, Session};
pub use tab::Tab;
