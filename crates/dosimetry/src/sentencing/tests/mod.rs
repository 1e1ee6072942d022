mod common;
mod regime;
mod substitution;
