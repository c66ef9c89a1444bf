pub(crate) mod reorder;
pub(crate) mod text;
