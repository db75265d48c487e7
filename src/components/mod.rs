//! Built-in components: Button, Form, NavBar, Accordion.

pub mod accordion;
pub mod button;
pub mod form;
pub mod navbar;

pub use accordion::{Accordion, AccordionItem};
pub use button::{Button, ButtonKind};
pub use form::{Form, FormField, FormSection, InputKind, SectionLayout};
pub use navbar::{NavBar, NavMenuItem};
