pub(crate) mod braille;
pub(crate) mod model;
pub(crate) mod state;
