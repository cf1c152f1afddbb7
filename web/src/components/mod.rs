pub mod footer;
pub mod header;
pub mod lead_form;
pub mod showcase;
pub mod typeahead;

// Re-export commonly used types
pub use footer::Footer;
pub use header::Header;
pub use lead_form::{use_lead_form, LeadForm};
pub use showcase::ShowcaseGrid;
pub use typeahead::{Typeahead, TypeaheadConfig};
