pub mod footer;
pub mod form_fields;
pub mod form_section;
pub mod header;
pub mod registration_page;
pub mod styling;
