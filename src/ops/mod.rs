pub mod category_ops;
pub mod entry_form;
pub mod filter;
pub mod store;
