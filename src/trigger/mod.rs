pub(crate) mod coordinator;
pub(crate) mod gate;
