pub(crate) mod alphas;
