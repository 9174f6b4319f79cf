pub(crate) mod cache;
pub(crate) mod inspect;
pub(crate) mod store;
