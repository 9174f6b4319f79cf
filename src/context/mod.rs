pub(crate) mod precompute;
