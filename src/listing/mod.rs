pub(crate) mod card;
pub(crate) mod filter;
pub(crate) mod panel;
pub(crate) mod text;
