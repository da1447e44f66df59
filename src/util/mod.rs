pub(crate) mod vec_help;
